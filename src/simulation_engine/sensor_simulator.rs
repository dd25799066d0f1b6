//! Stand-ins for the physical detectors: random vehicle presence and the
//! occasional emergency vehicle. They only use the controller's public interface.

use crate::control_system::traffic_light_controller::TrafficLightController;
use crate::intersection::Direction;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tokio::time::{sleep, Duration};

fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.random_range(0.0..1.0) < probability
}

/// Reports a fresh presence reading for every approach. Returns the approaches reported present.
pub fn sample_sensors<R: Rng>(
    controller: &TrafficLightController,
    rng: &mut R,
    detection_probability: f64,
    now: Instant,
) -> Vec<Direction> {
    let mut detected = Vec::new();
    for direction in Direction::ALL {
        let present = chance(rng, detection_probability);
        controller.report_presence(direction, present, now);
        if present {
            detected.push(direction);
        }
    }
    detected
}

/// Samples the sensors every `sample_interval` forever.
pub async fn run_sensor_feed(
    controller: TrafficLightController,
    sample_interval: Duration,
    detection_probability: f64,
) {
    let mut rng = SmallRng::from_os_rng();
    loop {
        let detected = sample_sensors(&controller, &mut rng, detection_probability, Instant::now());
        log::debug!("Sensor sample: vehicles at {:?}", detected);
        sleep(sample_interval).await;
    }
}

/// Each `check_interval`, rolls for an emergency vehicle; when one appears,
/// holds preemption for `hold` and then releases it.
pub async fn run_emergency_trigger(
    controller: TrafficLightController,
    check_interval: Duration,
    emergency_probability: f64,
    hold: Duration,
) {
    let mut rng = SmallRng::from_os_rng();
    loop {
        if chance(&mut rng, emergency_probability) {
            println!("\n!!! EMERGENCY VEHICLE DETECTED !!!");
            controller.set_emergency(true);
            sleep(hold).await;
            controller.set_emergency(false);
        }
        sleep(check_interval).await;
    }
}
