use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GisError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{kind} not found: {id}")]
    NotFoundError { kind: &'static str, id: Uuid },
}

impl GisError {
    pub fn validation(message: impl Into<String>) -> Self {
        GisError::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        GisError::ConfigError {
            message: message.into(),
        }
    }

    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        GisError::NotFoundError { kind, id }
    }

    /// Whether the error maps to a client-side problem (bad request or
    /// unknown id) rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GisError::ValidationError { .. } | GisError::NotFoundError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GisError>;
