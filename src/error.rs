//! Error handling for the AgroGestor core engine
//!
//! Provides consistent error messages in Portuguese and English. Only the
//! calculators fail; the aggregators degrade per-field and never return
//! errors (see the `aggregation` module).

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// A required calculator input is missing or out of range
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_pt: String,
    },
}

impl AppError {
    /// Build a validation error for a single field
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        message_pt: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
            message_pt: message_pt.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            AppError::Validation { field, .. } => field,
        }
    }
}

/// Result type alias for the core engine
pub type AppResult<T> = Result<T, AppError>;
