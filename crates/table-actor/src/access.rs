//! # TableAccess Trait
//!
//! Common interface for table-specific clients: default `get`, `select` and `delete`
//! built on a generic [`TableClient`], with errors mapped into the table's own type.
use crate::{StoreError, TableClient, TableRow};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit the standard read and delete operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct CompanyClient { inner: TableClient<CompanyRow> }
///
/// #[async_trait]
/// impl TableAccess<CompanyRow> for CompanyClient {
///     type Error = CompanyError;
///     fn inner(&self) -> &TableClient<CompanyRow> { &self.inner }
///     fn map_error(e: StoreError) -> CompanyError { CompanyError::Store(e.to_string()) }
/// }
///
/// // get(), select() and delete() are now available on CompanyClient.
/// ```
#[async_trait]
pub trait TableAccess<T: TableRow>: Send + Sync {
    /// The table-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &TableClient<T>;

    /// Map engine errors to the table error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a row by key.
    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every row matching `filter`, in insertion order.
    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn select(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().select(filter).await.map_err(Self::map_error)
    }

    /// Delete a row by key.
    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
