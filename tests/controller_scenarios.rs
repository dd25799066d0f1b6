use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smart_traffic_controller::intersection::ControlPhase;
use smart_traffic_controller::{Direction, LightState, TimingConfig, TrafficLightController};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn controller() -> TrafficLightController {
    TrafficLightController::new(TimingConfig::default()).expect("default config is valid")
}

#[test]
fn full_cycle_replans_from_current_sensors() {
    let controller = controller();
    let t0 = Instant::now();

    let start = controller.tick(t0).expect("first tick starts a cycle");
    assert_eq!(start.to, ControlPhase::NsGreen);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.green_duration(Direction::North), Some(secs(30)));
    assert_eq!(snapshot.light(Direction::South), LightState::Green);

    assert!(controller.tick(t0 + secs(15)).is_none());
    let yellow = controller.tick(t0 + secs(30)).expect("green expired");
    assert_eq!(yellow.to, ControlPhase::NsYellow);

    // Traffic builds up on the waiting axis during yellow.
    controller.report_presence(Direction::East, true, t0 + secs(31));
    controller.report_presence(Direction::West, true, t0 + secs(32));

    assert!(controller.tick(t0 + secs(34)).is_none());
    let green = controller.tick(t0 + secs(35)).expect("yellow expired");
    assert_eq!(green.from, ControlPhase::NsYellow);
    assert_eq!(green.to, ControlPhase::EwGreen);
    let plan = green.plan.expect("cycle start re-plans");
    assert_eq!(plan.east, secs(45));
    assert_eq!(plan.north, secs(20));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.light(Direction::East), LightState::Green);
    assert_eq!(snapshot.light(Direction::North), LightState::Red);
    assert_eq!(snapshot.last_phase_change_at(), Some(t0 + secs(35)));

    // E/W now holds for its planned 45s.
    assert!(controller.tick(t0 + secs(79)).is_none());
    assert_eq!(
        controller.tick(t0 + secs(80)).map(|t| t.to),
        Some(ControlPhase::EwYellow)
    );
}

#[test]
fn emergency_preempts_mid_cycle_and_resumes_north_south() {
    let controller = controller();
    let t0 = Instant::now();
    controller.tick(t0);
    controller.tick(t0 + secs(30));
    controller.tick(t0 + secs(35));
    assert_eq!(controller.snapshot().phase(), ControlPhase::EwGreen);

    // E/W green has expired, but the emergency wins over the pending yellow.
    controller.set_emergency(true);
    let entry = controller.tick(t0 + secs(70)).expect("emergency entry");
    assert_eq!(entry.from, ControlPhase::EwGreen);
    assert_eq!(entry.to, ControlPhase::Emergency);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.light(Direction::North), LightState::Green);
    assert_eq!(snapshot.light(Direction::South), LightState::Green);
    assert_eq!(snapshot.light(Direction::East), LightState::Red);
    assert_eq!(snapshot.light(Direction::West), LightState::Red);

    assert!(controller.tick(t0 + secs(200)).is_none());

    controller.report_presence(Direction::North, true, t0 + secs(200));
    controller.report_presence(Direction::South, true, t0 + secs(200));
    controller.set_emergency(false);
    let exit = controller.tick(t0 + secs(201)).expect("emergency exit");
    assert_eq!(exit.to, ControlPhase::NsGreen);
    assert_eq!(exit.plan.map(|p| p.north), Some(secs(45)));

    // The phase clock restarted at exit.
    assert!(controller.tick(t0 + secs(245)).is_none());
    assert_eq!(
        controller.tick(t0 + secs(246)).map(|t| t.to),
        Some(ControlPhase::NsYellow)
    );
}

#[test]
fn repeated_emergency_requests_match_a_single_one() {
    let once = controller();
    let twice = controller();
    let t0 = Instant::now();
    for c in [&once, &twice] {
        c.tick(t0);
    }
    once.set_emergency(true);
    twice.set_emergency(true);
    twice.set_emergency(true);
    for c in [&once, &twice] {
        c.tick(t0 + secs(1));
    }
    assert_eq!(once.snapshot().status_record().phase, ControlPhase::Emergency);
    assert_eq!(
        once.snapshot().last_phase_change_at(),
        twice.snapshot().last_phase_change_at()
    );
    assert_eq!(twice.snapshot().phase(), ControlPhase::Emergency);
}

#[test]
fn invariants_hold_over_random_inputs() {
    let controller = controller();
    let mut rng = SmallRng::seed_from_u64(42);
    let t0 = Instant::now();
    let mut now = t0;
    let config = TimingConfig::default();

    for _ in 0..5_000 {
        match rng.random_range(0..10) {
            0 => {
                controller.set_emergency(rng.random_bool(0.5));
            }
            1..=3 => {
                let direction = Direction::ALL[rng.random_range(0..4)];
                controller.report_presence(direction, rng.random_bool(0.5), now);
            }
            _ => {
                now += Duration::from_millis(rng.random_range(0..8_000));
                controller.tick(now);
            }
        }
        let snapshot = controller.snapshot();
        assert!(snapshot.invariants_hold(), "{:?}", snapshot);
        for direction in Direction::ALL {
            if let Some(green) = snapshot.green_duration(direction) {
                assert!(green >= config.min_green && green <= config.max_green);
            }
        }
    }
}

#[test]
fn concurrent_feeds_keep_committed_state_consistent() {
    let controller = controller();
    let stop = Arc::new(AtomicBool::new(false));
    let t0 = Instant::now();

    let writers: Vec<_> = Direction::ALL
        .into_iter()
        .enumerate()
        .map(|(i, direction)| {
            let feed = controller.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut rng = SmallRng::seed_from_u64(i as u64);
                while !stop.load(Ordering::Relaxed) {
                    feed.report_presence(direction, rng.random_bool(0.5), Instant::now());
                }
            })
        })
        .collect();

    let emergency = {
        let trigger = controller.clone();
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut active = false;
            while !stop.load(Ordering::Relaxed) {
                active = !active;
                trigger.set_emergency(active);
                thread::sleep(Duration::from_micros(200));
            }
        })
    };

    // Sensor and emergency writers race with every tick. Each tick must leave a
    // safe light state, keep its phase clock monotonic, and commit durations
    // that only the next re-plan may change.
    let mut last_change = None;
    let mut committed = None;
    for step in 0..3_000u64 {
        let transition = controller.tick(t0 + secs(step * 3));
        if let Some(plan) = transition.and_then(|t| t.plan) {
            committed = Some(plan);
        }
        let snapshot = controller.snapshot();
        assert!(snapshot.invariants_hold(), "{:?}", snapshot);
        if let Some(plan) = committed {
            for direction in Direction::ALL {
                assert_eq!(
                    snapshot.green_duration(direction),
                    Some(plan.for_direction(direction))
                );
            }
        }
        let change = snapshot.last_phase_change_at();
        assert!(change >= last_change);
        last_change = change;
    }

    stop.store(true, Ordering::Relaxed);
    for writer in writers {
        writer.join().expect("sensor writer panicked");
    }
    emergency.join().expect("emergency trigger panicked");
}
