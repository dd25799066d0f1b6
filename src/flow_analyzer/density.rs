// density.rs

use crate::global_variables::DENSITY_WEIGHT_PER_APPROACH;
use crate::intersection::{Axis, Direction, DirectionMap, SensorReading};

/// Congestion score for each axis, taken from one consistent sensor read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityScores {
    pub north_south: u32,
    pub east_west: u32,
}

/// Scores two approaches: a fixed weight for each one currently reporting a vehicle.
/// Always one of 0, 3 or 6.
pub fn score(
    sensors: &DirectionMap<SensorReading>,
    primary: Direction,
    secondary: Direction,
) -> u32 {
    [primary, secondary]
        .iter()
        .filter(|&&d| sensors[d].present)
        .count() as u32
        * DENSITY_WEIGHT_PER_APPROACH
}

pub fn axis_score(sensors: &DirectionMap<SensorReading>, axis: Axis) -> u32 {
    let [primary, secondary] = axis.directions();
    score(sensors, primary, secondary)
}

pub fn estimate(sensors: &DirectionMap<SensorReading>) -> DensityScores {
    DensityScores {
        north_south: axis_score(sensors, Axis::NorthSouth),
        east_west: axis_score(sensors, Axis::EastWest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensors_with(present: &[Direction]) -> DirectionMap<SensorReading> {
        DirectionMap::from_fn(|d| SensorReading {
            present: present.contains(&d),
            last_detected_at: None,
        })
    }

    #[test]
    fn test_score_counts_present_approaches() {
        let sensors = sensors_with(&[]);
        assert_eq!(score(&sensors, Direction::North, Direction::South), 0);

        let sensors = sensors_with(&[Direction::South]);
        assert_eq!(score(&sensors, Direction::North, Direction::South), 3);

        let sensors = sensors_with(&[Direction::North, Direction::South]);
        assert_eq!(score(&sensors, Direction::North, Direction::South), 6);
    }

    #[test]
    fn test_estimate_splits_by_axis() {
        let sensors = sensors_with(&[Direction::East, Direction::West, Direction::North]);
        assert_eq!(
            estimate(&sensors),
            DensityScores {
                north_south: 3,
                east_west: 6,
            }
        );
    }
}
