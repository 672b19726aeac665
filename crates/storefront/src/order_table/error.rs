//! Error types for the orders table.

use crate::model::{CompanyId, Money};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order has no items")]
    NoItems,

    #[error("Order total {actual} does not match the sum of subtotals {expected}")]
    TotalMismatch { expected: Money, actual: Money },

    #[error("Subtotal {actual} for {reference} size {size} should be {expected}")]
    SubtotalMismatch {
        reference: String,
        size: String,
        expected: Money,
        actual: Money,
    },

    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    #[error("Unknown company: {0}")]
    UnknownCompany(CompanyId),

    #[error("Malformed orders row: {0}")]
    MalformedRow(String),

    #[error("Order store error: {0}")]
    Store(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Store(msg)
    }
}
