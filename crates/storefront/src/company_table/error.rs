//! Error types for the companies table.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompanyError {
    #[error("Company not found: {0}")]
    NotFound(String),

    /// Short names must match `^[a-z0-9-]+$` and be 1 to 50 characters long.
    #[error("Invalid short name: {0}")]
    InvalidShortName(String),

    #[error("Short name already in use: {0}")]
    ShortNameTaken(String),

    #[error("Company name is required")]
    MissingName,

    #[error("Malformed companies row: {0}")]
    MalformedRow(String),

    #[error("Company store error: {0}")]
    Store(String),
}

impl From<String> for CompanyError {
    fn from(msg: String) -> Self {
        CompanyError::Store(msg)
    }
}
