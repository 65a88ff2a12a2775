//! Error Types

use thiserror::Error;

/// Result type alias for chat store operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Chat store error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Backing key/value store failed (quota, unavailable storage, IO)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No chat with the given ID
    #[error("Chat not found: {0}")]
    ChatNotFound(String),
}

impl CoreError {
    /// Check if retrying the same operation could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "Your chats could not be saved on this device.".into(),
            Self::Json(_) => "Saved chat history is unreadable and was not loaded.".into(),
            Self::ChatNotFound(_) => "That chat no longer exists.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_is_retryable() {
        assert!(CoreError::Storage("quota".into()).is_retryable());
        assert!(!CoreError::ChatNotFound("x".into()).is_retryable());
    }

    #[test]
    fn test_json_error_converts() {
        let err: CoreError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, CoreError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
