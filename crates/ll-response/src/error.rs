//! Error types for response computation.

use ll_core::CoreError;
use ll_models::ModelError;
use thiserror::Error;

/// Result type for response operations.
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Errors that can occur while deriving or simulating a loop response.
///
/// The engine's plot methods swallow these into `None` after logging;
/// the structured variants exist for callers composing loops directly.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A component failed validation when its transfer function was
    /// requested.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Loop algebra degenerated (zero denominator after combination).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Numerator degree exceeds denominator degree; no state-space
    /// realization exists for time simulation.
    #[error("improper transfer function (numerator degree {num} > denominator degree {den})")]
    Improper { num: usize, den: usize },

    /// The time grid is unusable (empty or non-positive step).
    #[error("invalid time grid: {what}")]
    InvalidGrid { what: &'static str },
}
