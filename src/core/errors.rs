//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The translation capability could not be loaded
    #[error("translation backend unavailable: {cause}")]
    BackendUnavailable {
        /// Cause text captured at the original load attempt
        cause: String,
    },

    /// The backend was reachable but a specific inference call failed
    #[error("translation failed: {message}")]
    TranslationFailed {
        /// Underlying error message
        message: String,
    },
}

impl TranslationError {
    /// Build a `TranslationFailed` from any displayable cause
    pub fn failed(message: impl ToString) -> Self {
        TranslationError::TranslationFailed {
            message: message.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
