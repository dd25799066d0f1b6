// src/shared_data.rs

use crate::flow_analyzer::GreenPlan;
use crate::intersection::{
    ControlPhase, Direction, IntersectionState, LightState, SensorReading, TimingConfig,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Seconds since the unix epoch, for telemetry rows only. Control decisions use `Instant`.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A phase change made by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: ControlPhase,
    pub to: ControlPhase,
    pub at: Instant,
    /// Present when the transition started a new cycle and re-planned green time.
    pub plan: Option<GreenPlan>,
}

/// A consistent, read-only copy of the intersection taken under the state lock.
#[derive(Debug, Clone)]
pub struct IntersectionSnapshot {
    state: IntersectionState,
}

impl IntersectionSnapshot {
    pub(crate) fn capture(state: &IntersectionState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.state.phase
    }

    pub fn light(&self, direction: Direction) -> LightState {
        self.state.light(direction)
    }

    pub fn green_duration(&self, direction: Direction) -> Option<Duration> {
        self.state.lights[direction].green_duration
    }

    pub fn sensor(&self, direction: Direction) -> SensorReading {
        self.state.sensors[direction]
    }

    pub fn emergency_active(&self) -> bool {
        self.state.emergency_active
    }

    pub fn last_phase_change_at(&self) -> Option<Instant> {
        self.state.last_phase_change_at
    }

    pub fn config(&self) -> &TimingConfig {
        &self.state.config
    }

    pub fn invariants_hold(&self) -> bool {
        self.state.invariants_hold()
    }

    /// Flattens the snapshot into a row for display and CSV telemetry.
    pub fn status_record(&self) -> StatusRecord {
        let secs = |d: Direction| self.green_duration(d).map(|g| g.as_secs());
        StatusRecord {
            timestamp: current_timestamp(),
            phase: self.phase(),
            north: self.light(Direction::North),
            south: self.light(Direction::South),
            east: self.light(Direction::East),
            west: self.light(Direction::West),
            ns_green_secs: secs(Direction::North),
            ew_green_secs: secs(Direction::East),
            north_present: self.sensor(Direction::North).present,
            south_present: self.sensor(Direction::South).present,
            east_present: self.sensor(Direction::East).present,
            west_present: self.sensor(Direction::West).present,
            emergency: self.emergency_active(),
        }
    }
}

/// One status row, as rendered to the console and appended to telemetry CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub timestamp: u64,
    pub phase: ControlPhase,
    pub north: LightState,
    pub south: LightState,
    pub east: LightState,
    pub west: LightState,
    pub ns_green_secs: Option<u64>,
    pub ew_green_secs: Option<u64>,
    pub north_present: bool,
    pub south_present: bool,
    pub east_present: bool,
    pub west_present: bool,
    pub emergency: bool,
}
