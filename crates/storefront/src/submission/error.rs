//! Error types for order submission.

use thiserror::Error;

/// Why a submission attempt ended without an order.
///
/// Everything except [`SubmissionError::PersistenceFailure`] is a validation outcome: the
/// order store was never called.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionError {
    #[error("No company is selected for this order")]
    MissingCompany,

    #[error("Contact field is required: {0}")]
    MissingContact(&'static str),

    #[error("Select at least one product")]
    EmptySelection,

    /// The selections do not make a valid order, e.g. a total past the supported range.
    #[error("The order cannot be built: {0}")]
    InvalidOrder(String),

    #[error("Could not save the order: {0}")]
    PersistenceFailure(String),

    #[error("A submission is already in progress")]
    InFlight,
}

impl From<String> for SubmissionError {
    fn from(msg: String) -> Self {
        SubmissionError::PersistenceFailure(msg)
    }
}
