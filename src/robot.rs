//! Robot state and the atomic operations it understands.

use crate::error::UnknownDirection;
use crate::model::Coordinate;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass direction the robot is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Counter-clockwise quarter turn.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Clockwise quarter turn.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// One grid step in this heading. North is `+Y`.
    pub fn unit_vector(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::South => I64Vec2::NEG_Y,
            Self::East => I64Vec2::X,
            Self::West => I64Vec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic instruction for the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step one cell along the heading.
    Forward,
    /// Step one cell against the heading. Heading is unchanged.
    Backward,
    /// Rotate counter-clockwise in place.
    Left,
    /// Rotate clockwise in place.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Forward, Self::Backward, Self::Left, Self::Right];

    /// The name recorded in a response path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The robot's pose while a simulation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobotState {
    pub location: Coordinate,
    pub heading: Heading,
}

impl RobotState {
    pub fn new(location: Coordinate, heading: Heading) -> Self {
        Self { location, heading }
    }

    pub fn rotate_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    pub fn rotate_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Where a move would land, without committing it.
    ///
    /// Returns `None` for rotations and for steps that overflow the coordinate range.
    pub fn candidate(&self, direction: Direction) -> Option<Coordinate> {
        let step = self.heading.unit_vector();
        match direction {
            Direction::Forward => self.location.offset(step),
            Direction::Backward => self.location.offset(-step),
            Direction::Left | Direction::Right => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_cycle_order() {
        let mut h = Heading::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            h = h.turn_left();
            seen.push(h);
        }
        assert_eq!(
            seen,
            vec![Heading::West, Heading::South, Heading::East, Heading::North]
        );
    }

    #[test]
    fn right_undoes_left() {
        for h in Heading::ALL {
            assert_eq!(h.turn_left().turn_right(), h);
        }
    }

    #[test]
    fn unit_vectors() {
        assert_eq!(Heading::North.unit_vector(), I64Vec2::new(0, 1));
        assert_eq!(Heading::South.unit_vector(), I64Vec2::new(0, -1));
        assert_eq!(Heading::East.unit_vector(), I64Vec2::new(1, 0));
        assert_eq!(Heading::West.unit_vector(), I64Vec2::new(-1, 0));
    }

    #[test]
    fn direction_names_parse_exactly() {
        for d in Direction::ALL {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
        assert!("Forward".parse::<Direction>().is_err());
        assert!(" left".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn backward_keeps_heading() {
        let state = RobotState::new(Coordinate::new(1, 1), Heading::East);
        assert_eq!(
            state.candidate(Direction::Backward),
            Some(Coordinate::new(0, 1))
        );
        assert_eq!(state.candidate(Direction::Left), None);
    }

    #[test]
    fn heading_wire_names() {
        let json = serde_json::to_string(&Heading::West).unwrap();
        assert_eq!(json, "\"west\"");
        assert!(serde_json::from_str::<Heading>("\"up\"").is_err());
    }
}
