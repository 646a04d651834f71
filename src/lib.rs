//! # arena-robot
//!
//! A deterministic interpreter that drives a robot around a rectangular arena.
//!
//! Given an arena (two opposite corners), a starting pose and a list of direction
//! tokens such as `"left"` or `"forward(3)"`, [`simulate`] produces the final pose,
//! the expanded path, and whether the run finished (`ok`), hit an invalid token
//! (`error`) or tried to leave the arena (`crash`).
//!
//! The engine is pure: no I/O, no shared state. The [`io`] module wraps it in the
//! JSON request/response shell used by the `arena-robot` binary.

pub mod command;
pub mod error;
pub mod interpreter;
pub mod io;
pub mod model;
pub mod robot;

pub use command::*;
pub use error::*;
pub use interpreter::*;
pub use model::*;
pub use robot::*;
