//! Error types for project persistence.

use thiserror::Error;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(Debug, Error)]
pub enum ProjectError {
    /// A labeled line the format requires was not found.
    #[error("Missing section: {label}")]
    MissingSection { label: &'static str },

    /// A parameter dict did not parse.
    #[error("Malformed {section} parameters: {message}")]
    MalformedDict {
        section: &'static str,
        message: String,
    },

    /// Reconstructed models failed re-validation.
    #[error(transparent)]
    Model(#[from] ll_models::ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
