//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Topic must be at least {min} characters ({got} given)")]
    InvalidTopic { min: usize, got: usize },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template is missing the {{topic}} placeholder")]
    MissingPlaceholder,
}
