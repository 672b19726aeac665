//! Error types for the products table.

use crate::model::CompanyId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A catalog form rule was violated.
    #[error("Invalid product: {0}")]
    Invalid(String),

    #[error("Unknown company: {0}")]
    UnknownCompany(CompanyId),

    #[error("Malformed products row: {0}")]
    MalformedRow(String),

    #[error("Product store error: {0}")]
    Store(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::Store(msg)
    }
}
