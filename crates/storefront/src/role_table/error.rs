//! Error types for the user_roles table.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Role store error: {0}")]
    Store(String),
}

impl From<String> for RoleError {
    fn from(msg: String) -> Self {
        RoleError::Store(msg)
    }
}
