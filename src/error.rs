//! Error types for parsing directions and reading requests.
//!
//! The simulation itself never fails: invalid tokens and crashes are reported
//! through [`Status`](crate::model::Status). These types cover the edges.

use thiserror::Error;

/// A string that is not one of the four direction names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0:?}")]
pub struct UnknownDirection(pub String);

/// Failure to turn raw input into a [`Request`](crate::model::Request).
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a well-formed request document.
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}
