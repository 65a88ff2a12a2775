//! Account Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, AccountError>;

/// Account-related errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// No stored user matches the email/password pair
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// Registration with an email that is already on file
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Storage or stored-JSON failure
    #[error(transparent)]
    Core(#[from] legal_core::CoreError),
}

impl AccountError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_retryable())
    }

    /// Get the inline message shown in the auth form
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidCredentials(_) => "Invalid email or password",
            Self::EmailTaken(_) => "User with this email already exists",
            Self::Core(_) => "An error occurred. Please try again.",
        }
    }
}
