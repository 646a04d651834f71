//! Request and response types, plus the arena geometry they carry.
//!
//! Field names here are the JSON wire names, so renaming a field is a
//! breaking change for callers.

use crate::robot::Heading;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer grid position inside (or outside) the arena.
///
/// Coordinates are plain values: every move produces a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by `delta`, or `None` if either axis overflows.
    pub fn offset(self, delta: I64Vec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The arena as supplied by the caller: two opposite corners, in any order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub corner1: Coordinate,
    pub corner2: Coordinate,
}

impl Arena {
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds::from_corners(self.corner1, self.corner2)
    }
}

/// Closed, axis-aligned bounds derived from an [`Arena`].
///
/// Always satisfies `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl ArenaBounds {
    /// Normalizes two corners into per-axis min/max.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
        }
    }

    /// True if `c` lies on or inside the rectangle's edges.
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.min_x..=self.max_x).contains(&c.x) && (self.min_y..=self.max_y).contains(&c.y)
    }
}

/// A single simulation request.
///
/// Field names match the JSON wire shape exactly. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub arena: Arena,

    /// Starting position. Not checked against the arena; only moves are.
    pub location: Coordinate,

    /// Starting heading.
    pub heading: Heading,

    /// Raw direction tokens, e.g. `"left"` or `"forward(3)"`.
    pub directions: Vec<String>,
}

/// How a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every token ran to completion.
    Ok,
    /// A token could not be parsed into a direction.
    Error,
    /// A move would have left the arena.
    Crash,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Crash => "crash",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of a simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,

    /// Final location. On `crash` this is the last in-bounds location.
    pub location: Coordinate,

    /// Final heading.
    pub heading: Heading,

    /// Expanded atomic directions attempted, in order.
    /// An invalid token, if any, is the last entry and kept verbatim.
    pub path: Vec<String>,
}
