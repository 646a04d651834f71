//! Parsing of raw direction tokens such as `left` or `forward(3)`.

use crate::error::UnknownDirection;
use crate::robot::Direction;
use once_cell::sync::Lazy;
use regex::Regex;

/// `name(count)` with nothing before or after.
static REPEATED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\(([0-9]+)\)$").expect("repetition pattern is a valid regex")
});

/// A validated direction together with how many times to run it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub repetition: u64,
}

impl Command {
    pub fn once(direction: Direction) -> Self {
        Self {
            direction,
            repetition: 1,
        }
    }

    /// Parses a single token.
    ///
    /// A bare name runs once. `name(n)` runs `n` times, where `n` may be zero.
    /// The name is always re-validated against [`Direction`], so `spin(2)` is
    /// rejected just like `spin`. A count too large for `u64` is rejected as well.
    /// The error carries the token exactly as given.
    pub fn parse(token: &str) -> Result<Self, UnknownDirection> {
        if let Ok(direction) = token.parse::<Direction>() {
            return Ok(Self::once(direction));
        }

        let invalid = || UnknownDirection(token.to_owned());
        let caps = REPEATED.captures(token).ok_or_else(invalid)?;
        let repetition = caps[2].parse::<u64>().map_err(|_| invalid())?;
        let direction = caps[1].parse::<Direction>().map_err(|_| invalid())?;

        Ok(Self {
            direction,
            repetition,
        })
    }
}
