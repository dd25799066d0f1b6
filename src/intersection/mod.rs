// intersection/mod.rs
pub mod state;
pub mod timing;

pub use state::{ApproachLight, ControlPhase, IntersectionState, SensorReading};
pub use timing::TimingConfig;

use crate::error::ControllerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the four approaches into the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The axis this approach belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::NorthSouth,
            Direction::East | Direction::West => Axis::EastWest,
        }
    }

    /// The other approach on the same axis.
    pub fn partner(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::South => write!(f, "South"),
            Direction::East => write!(f, "East"),
            Direction::West => write!(f, "West"),
        }
    }
}

impl FromStr for Direction {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(ControllerError::InvalidDirection { raw: s.to_string() }),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ControllerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::South),
            2 => Ok(Direction::East),
            3 => Ok(Direction::West),
            other => Err(ControllerError::InvalidDirection {
                raw: other.to_string(),
            }),
        }
    }
}

/// A pair of opposing approaches that always share a light state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    NorthSouth,
    EastWest,
}

impl Axis {
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::NorthSouth => [Direction::North, Direction::South],
            Axis::EastWest => [Direction::East, Direction::West],
        }
    }

    pub fn opposite(self) -> Axis {
        match self {
            Axis::NorthSouth => Axis::EastWest,
            Axis::EastWest => Axis::NorthSouth,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::NorthSouth => write!(f, "N/S"),
            Axis::EastWest => write!(f, "E/W"),
        }
    }
}

/// The possible states for a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LightState::Red => write!(f, "RED"),
            LightState::Green => write!(f, "GREEN"),
            LightState::Yellow => write!(f, "YELLOW"),
        }
    }
}

/// Fixed per-direction storage, one slot for each approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionMap<T> {
    slots: [T; 4],
}

impl<T> DirectionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            slots: Direction::ALL.map(&mut f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().map(move |d| (d, &self[d]))
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self.slots[direction.slot()]
    }
}

impl<T> IndexMut<Direction> for DirectionMap<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.slots[direction.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_pairs() {
        for direction in Direction::ALL {
            assert_eq!(direction.axis(), direction.partner().axis());
            assert_ne!(direction, direction.partner());
            assert!(direction.axis().directions().contains(&direction));
        }
        assert_eq!(Axis::NorthSouth.opposite(), Axis::EastWest);
        assert_eq!(Axis::EastWest.opposite(), Axis::NorthSouth);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" West ".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("E".parse::<Direction>().unwrap(), Direction::East);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(ControllerError::InvalidDirection { raw }) if raw == "up"
        ));
    }

    #[test]
    fn test_direction_from_index() {
        assert_eq!(Direction::try_from(1u8).unwrap(), Direction::South);
        assert!(Direction::try_from(4u8).is_err());
    }

    #[test]
    fn test_direction_map_slots_are_independent() {
        let mut map = DirectionMap::from_fn(|_| 0u32);
        map[Direction::East] = 7;
        assert_eq!(map[Direction::East], 7);
        assert_eq!(map[Direction::West], 0);
        let collected: Vec<_> = map.iter().map(|(d, v)| (d, *v)).collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[2], (Direction::East, 7));
    }
}
