//! Static tabletop geometry: compass directions and the valid coordinate range.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// The closed interval of valid values for each coordinate axis (a 5×5 grid).
pub const COORDINATE_RANGE: RangeInclusive<i32> = 0..=4;

/// The four compass directions, in turn order.
///
/// The order is load-bearing: a left turn advances one step through this
/// sequence and a right turn retreats one step, wrapping modulo 4.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

/// A compass direction on the tabletop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    /// This direction's position within [`DIRECTIONS`].
    pub fn index(self) -> usize {
        match self {
            Self::East => 0,
            Self::North => 1,
            Self::West => 2,
            Self::South => 3,
        }
    }

    /// The unit displacement one MOVE produces while facing this direction,
    /// positionally aligned with [`DIRECTIONS`].
    pub fn increment(self) -> IVec2 {
        match self {
            Self::East => IVec2::new(1, 0),
            Self::North => IVec2::new(0, 1),
            Self::West => IVec2::new(-1, 0),
            Self::South => IVec2::new(0, -1),
        }
    }
}

/// Returns true when both coordinates of `position` lie on the tabletop.
pub fn on_table(position: IVec2) -> bool {
    COORDINATE_RANGE.contains(&position.x) && COORDINATE_RANGE.contains(&position.y)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "EAST",
            Self::North => "NORTH",
            Self::West => "WEST",
            Self::South => "SOUTH",
        };
        f.write_str(name)
    }
}

/// A direction word that does not name one of the four compass directions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown compass direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Matches case-insensitively; the canonical enum value is stored, so
    /// `"west"`, `"West"` and `"WEST"` are all the same direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}
