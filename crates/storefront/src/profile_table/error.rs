//! Error types for the profiles table.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid profile: {0}")]
    Invalid(String),

    #[error("Profile store error: {0}")]
    Store(String),
}

impl From<String> for ProfileError {
    fn from(msg: String) -> Self {
        ProfileError::Store(msg)
    }
}
