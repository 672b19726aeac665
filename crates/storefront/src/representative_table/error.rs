//! Error types for the representatives table.

use crate::company_table::CompanyError;
use crate::model::UserId;
use crate::profile_table::ProfileError;
use crate::role_table::RoleError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepresentativeError {
    #[error("Representative not found: {0}")]
    NotFound(String),

    #[error("No profile for user {0}")]
    UnknownProfile(UserId),

    #[error("User {0} is already a representative")]
    AlreadyRepresentative(UserId),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Identifier already in use: {0}")]
    IdentifierTaken(String),

    #[error(transparent)]
    Profiles(#[from] ProfileError),

    #[error(transparent)]
    Roles(#[from] RoleError),

    #[error(transparent)]
    Companies(#[from] CompanyError),

    #[error("Representative store error: {0}")]
    Store(String),
}

impl From<String> for RepresentativeError {
    fn from(msg: String) -> Self {
        RepresentativeError::Store(msg)
    }
}
