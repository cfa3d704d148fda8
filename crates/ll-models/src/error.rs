//! Error types for model configuration and validation.

use ll_core::CoreError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while configuring or validating a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// A physical range constraint was violated. The message carries the
    /// full human-readable text shown to the user; plant validation stops
    /// at the first violation.
    #[error("{message}")]
    Constraint { message: String },

    /// Input-signal validation report: every violation found, one per line.
    #[error("{report}")]
    InvalidInput { report: String },

    /// Unrecognized plant catalog key.
    #[error("Unknown plant type: {name}")]
    UnknownPlantType { name: String },

    /// A parameter name not defined for this model.
    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    /// A parameter was supplied with the wrong value shape.
    #[error("Parameter {name} expects {expected}")]
    WrongParameterKind {
        name: String,
        expected: &'static str,
    },

    /// A symbolic coefficient token reached the numeric simulation path.
    #[error("Coefficient '{token}' is not numeric")]
    SymbolicCoefficient { token: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
