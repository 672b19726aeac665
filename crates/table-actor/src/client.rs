//! # Table Client
//!
//! The generic, cloneable handle used to talk to a [`TableActor`](crate::TableActor).

use crate::error::StoreError;
use crate::message::TableRequest;
use crate::row::TableRow;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `TableActor`.
///
/// Holds only the sender half of the mailbox, so cloning is cheap and clones can be
/// shared across tasks. Each call sends one request and awaits its oneshot reply.
pub struct TableClient<T: TableRow> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: TableRow> Clone for TableClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: TableRow> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, params: T::Insert) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Insert { params, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn select(&self, filter: T::Filter) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Select { filter, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Update {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
