use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::time::{interval, MissedTickBehavior};

use crate::control_system::phase_machine;
use crate::error::ControllerError;
use crate::intersection::{Direction, IntersectionState, TimingConfig};
use crate::shared_data::{IntersectionSnapshot, PhaseTransition};

/// Shared handle to one intersection.
///
/// Clones share the same state. Every operation takes the single state lock
/// for its whole duration, so a tick, a presence report, an emergency toggle
/// and a snapshot never interleave.
#[derive(Debug, Clone)]
pub struct TrafficLightController {
    state: Arc<Mutex<IntersectionState>>,
}

impl TrafficLightController {
    /// Validates the timing config and builds an all-red, idle intersection.
    pub fn new(config: TimingConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        log::info!(
            "Traffic controller initialized: base {}s, yellow {}s, green range [{}s, {}s]",
            config.base_green.as_secs(),
            config.yellow_duration.as_secs(),
            config.min_green.as_secs(),
            config.max_green.as_secs()
        );
        Ok(Self {
            state: Arc::new(Mutex::new(IntersectionState::new(config))),
        })
    }

    // Transitions are applied whole before the guard drops, so a poisoned lock still holds a consistent state.
    fn lock_state(&self) -> MutexGuard<'_, IntersectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances the phase machine by one control tick. `now` must come from a monotonic clock.
    pub fn tick(&self, now: Instant) -> Option<PhaseTransition> {
        let mut state = self.lock_state();
        phase_machine::advance(&mut state, now)
    }

    /// Overwrites the presence reading for one approach.
    pub fn report_presence(&self, direction: Direction, present: bool, at_time: Instant) {
        let mut state = self.lock_state();
        let reading = &mut state.sensors[direction];
        reading.present = present;
        if present {
            reading.last_detected_at = Some(at_time);
        }
    }

    /// Same as [`report_presence`](Self::report_presence) for an approach named at runtime.
    /// Unknown names are rejected without touching the state.
    pub fn report_presence_by_name(
        &self,
        direction: &str,
        present: bool,
        at_time: Instant,
    ) -> Result<(), ControllerError> {
        let direction: Direction = direction.parse()?;
        self.report_presence(direction, present, at_time);
        Ok(())
    }

    /// Requests or releases emergency preemption. Takes effect on the next tick.
    /// Returns whether the stored flag changed.
    pub fn set_emergency(&self, active: bool) -> bool {
        let mut state = self.lock_state();
        if state.emergency_active == active {
            return false;
        }
        state.emergency_active = active;
        if active {
            log::warn!("Emergency preemption requested");
        } else {
            log::info!("Emergency preemption released");
        }
        true
    }

    pub fn snapshot(&self) -> IntersectionSnapshot {
        IntersectionSnapshot::capture(&self.lock_state())
    }

    /// Ticks the controller on a fixed cadence forever, handing each
    /// post-tick snapshot to `observer`. Intended to be spawned as an async task.
    pub async fn run_update_loop<F>(self, tick_interval: Duration, mut observer: F)
    where
        F: FnMut(Option<PhaseTransition>, IntersectionSnapshot),
    {
        let mut ticker = interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let now = ticker.tick().await.into_std();
            let transition = self.tick(now);
            observer(transition, self.snapshot());
        }
    }
}
