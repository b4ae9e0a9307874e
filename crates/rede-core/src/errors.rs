//! Cross-cutting error types for RedePro.
//!
//! Report-specific and export-specific errors live in their own crates; this
//! module holds the errors any crate can raise.

use thiserror::Error;

/// Errors that can be raised by any RedePro crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (missing reference, bad input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for the common lookup-miss case.
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
