//! # Store Errors
//!
//! Errors raised by the table engine itself. Row-level failures from hooks are boxed into
//! [`StoreError::RowError`] so each table keeps its own error type.

/// Errors that can occur within a table actor or its client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Table actor closed")]
    ActorClosed,
    #[error("Table actor dropped response channel")]
    ActorDropped,
    #[error("Row not found in {table}: {id}")]
    NotFound { table: &'static str, id: String },
    #[error("Unique constraint violated in {table}: {id}")]
    Conflict { table: &'static str, id: String },
    #[error("Row error: {0}")]
    RowError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recover the table's own error from a `RowError`.
    ///
    /// Returns `Err(self)` for engine errors and for row errors of another type.
    pub fn into_row_error<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::RowError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(StoreError::RowError),
            other => Err(other),
        }
    }
}
