// timing_planner.rs

use super::density::DensityScores;
use crate::global_variables::{
    DENSITY_BIAS_THRESHOLD, DISFAVORED_AXIS_PENALTY_SECS, FAVORED_AXIS_BONUS_SECS,
};
use crate::intersection::{Axis, Direction, TimingConfig};
use std::time::Duration;

/// Green time assigned to each approach for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenPlan {
    pub north: Duration,
    pub south: Duration,
    pub east: Duration,
    pub west: Duration,
}

impl GreenPlan {
    fn by_axis(north_south: Duration, east_west: Duration) -> Self {
        Self {
            north: north_south,
            south: north_south,
            east: east_west,
            west: east_west,
        }
    }

    pub fn for_direction(&self, direction: Direction) -> Duration {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn for_axis(&self, axis: Axis) -> Duration {
        self.for_direction(axis.directions()[0])
    }
}

/// Splits green time between the two axes based on their density scores.
///
/// An axis that outscores the other by more than the bias threshold gets a
/// bonus and the other axis a penalty; otherwise both get `base`. Every result
/// is clamped into `[min, max]`.
pub fn plan(
    ns_score: u32,
    ew_score: u32,
    base: Duration,
    min: Duration,
    max: Duration,
) -> GreenPlan {
    let favored = base.saturating_add(Duration::from_secs(FAVORED_AXIS_BONUS_SECS));
    let disfavored = base.saturating_sub(Duration::from_secs(DISFAVORED_AXIS_PENALTY_SECS));

    let (north_south, east_west) = if ns_score.saturating_sub(ew_score) > DENSITY_BIAS_THRESHOLD {
        (favored, disfavored)
    } else if ew_score.saturating_sub(ns_score) > DENSITY_BIAS_THRESHOLD {
        (disfavored, favored)
    } else {
        (base, base)
    };

    // Ensure within min/max limits; max wins if the bounds are inverted
    let bound = |d: Duration| d.max(min).min(max);
    GreenPlan::by_axis(bound(north_south), bound(east_west))
}

pub fn plan_for(scores: DensityScores, config: &TimingConfig) -> GreenPlan {
    plan(
        scores.north_south,
        scores.east_west,
        config.base_green,
        config.min_green,
        config.max_green,
    )
}
