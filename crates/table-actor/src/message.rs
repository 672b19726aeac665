//! # Table Messages
//!
//! Request types exchanged between a [`TableClient`](crate::TableClient) and its
//! [`TableActor`](crate::TableActor).

use crate::error::StoreError;
use crate::row::TableRow;
use tokio::sync::oneshot;

/// One-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message sent to a table actor.
///
/// The variants mirror the backend data-store contract: `insert(record) -> record`,
/// `select(filter) -> rows`, `update(key, patch) -> record`, `delete(key)`, plus a
/// primary-key `get`.
#[derive(Debug)]
pub enum TableRequest<T: TableRow> {
    Insert {
        params: T::Insert,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Select {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
