use super::{Axis, Direction, DirectionMap, LightState, TimingConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// The signal head for one approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachLight {
    pub state: LightState,
    /// Unset until the timing planner first assigns it.
    pub green_duration: Option<Duration>,
}

impl Default for ApproachLight {
    fn default() -> Self {
        Self {
            state: LightState::Red,
            green_duration: None,
        }
    }
}

/// Latest presence report for one approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorReading {
    pub present: bool,
    pub last_detected_at: Option<Instant>,
}

/// Controller phase. The four light states are a projection of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlPhase {
    /// Freshly constructed, no axis has been given green yet.
    Idle,
    NsGreen,
    NsYellow,
    EwGreen,
    EwYellow,
    Emergency,
}

impl ControlPhase {
    /// The axis holding right of way, if any.
    pub fn active_axis(self) -> Option<Axis> {
        match self {
            ControlPhase::NsGreen | ControlPhase::NsYellow | ControlPhase::Emergency => {
                Some(Axis::NorthSouth)
            }
            ControlPhase::EwGreen | ControlPhase::EwYellow => Some(Axis::EastWest),
            ControlPhase::Idle => None,
        }
    }

    pub fn green_for(axis: Axis) -> ControlPhase {
        match axis {
            Axis::NorthSouth => ControlPhase::NsGreen,
            Axis::EastWest => ControlPhase::EwGreen,
        }
    }

    pub fn yellow_for(axis: Axis) -> ControlPhase {
        match axis {
            Axis::NorthSouth => ControlPhase::NsYellow,
            Axis::EastWest => ControlPhase::EwYellow,
        }
    }

    /// Light shown to the approaches of `axis` while in this phase.
    pub fn light_for(self, axis: Axis) -> LightState {
        match (self, axis) {
            (ControlPhase::NsGreen | ControlPhase::Emergency, Axis::NorthSouth) => {
                LightState::Green
            }
            (ControlPhase::NsYellow, Axis::NorthSouth) => LightState::Yellow,
            (ControlPhase::EwGreen, Axis::EastWest) => LightState::Green,
            (ControlPhase::EwYellow, Axis::EastWest) => LightState::Yellow,
            _ => LightState::Red,
        }
    }
}

impl fmt::Display for ControlPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ControlPhase::Idle => "IDLE",
            ControlPhase::NsGreen => "NS_GREEN",
            ControlPhase::NsYellow => "NS_YELLOW",
            ControlPhase::EwGreen => "EW_GREEN",
            ControlPhase::EwYellow => "EW_YELLOW",
            ControlPhase::Emergency => "EMERGENCY",
        };
        write!(f, "{}", name)
    }
}

/// The authoritative record of one intersection.
///
/// Light state, green durations, the phase and `last_phase_change_at` are only
/// written by the phase machine; sensor readings only by the presence feed;
/// `emergency_active` only by the emergency interface.
#[derive(Debug, Clone)]
pub struct IntersectionState {
    pub lights: DirectionMap<ApproachLight>,
    pub sensors: DirectionMap<SensorReading>,
    pub config: TimingConfig,
    pub emergency_active: bool,
    pub phase: ControlPhase,
    pub last_phase_change_at: Option<Instant>,
}

impl IntersectionState {
    /// All lights red, durations unset, no vehicles, emergency off.
    /// The config is expected to have been validated already.
    pub fn new(config: TimingConfig) -> Self {
        Self {
            lights: DirectionMap::default(),
            sensors: DirectionMap::default(),
            config,
            emergency_active: false,
            phase: ControlPhase::Idle,
            last_phase_change_at: None,
        }
    }

    pub fn light(&self, direction: Direction) -> LightState {
        self.lights[direction].state
    }

    /// Writes all four lights from `phase` in one step.
    pub(crate) fn apply_phase(&mut self, phase: ControlPhase) {
        for direction in Direction::ALL {
            self.lights[direction].state = phase.light_for(direction.axis());
        }
        self.phase = phase;
    }

    /// Checks mutual exclusion, pairing and duration bounds.
    pub fn invariants_hold(&self) -> bool {
        let paired = Direction::ALL
            .iter()
            .all(|&d| self.light(d) == self.light(d.partner()));
        let ns_open = self.light(Direction::North) != LightState::Red;
        let ew_open = self.light(Direction::East) != LightState::Red;
        let exclusive = !(ns_open && ew_open);
        let bounded = self.lights.iter().all(|(_, light)| {
            light.green_duration.map_or(true, |d| {
                d >= self.config.min_green && d <= self.config.max_green
            })
        });
        let emergency_pattern = self.phase != ControlPhase::Emergency
            || (self.light(Direction::North) == LightState::Green && !ew_open);
        paired && exclusive && bounded && emergency_pattern
    }
}
