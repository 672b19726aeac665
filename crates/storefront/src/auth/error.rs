//! Error types for authentication.

use crate::role_table::RoleError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("Session expired or unknown")]
    UnknownSession,

    #[error("Not allowed")]
    Forbidden,

    #[error(transparent)]
    Roles(#[from] RoleError),
}
