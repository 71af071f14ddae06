use thiserror::Error;

#[derive(Debug, Error)]
pub enum LendbookError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LendbookError {
    fn from(e: serde_json::Error) -> Self {
        LendbookError::SerializationError(e.to_string())
    }
}
