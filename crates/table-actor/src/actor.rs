//! # Table Actor
//!
//! This module defines the `TableActor`, the server half of a table. It owns the rows,
//! processes requests sequentially and is the only place rows are mutated.

use crate::client::TableClient;
use crate::error::StoreError;
use crate::message::TableRequest;
use crate::row::TableRow;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The generic actor that manages the rows of one table.
///
/// # Architecture Note
/// Each table runs in its own Tokio task and handles one request at a time, so the
/// `rows` map needs no `Mutex`. Unique constraints declared by
/// [`TableRow::conflicts_with`] are therefore checked and applied atomically.
///
/// # Usage Pattern
///
/// 1.  **Create**: `TableActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = TableActor::<CompanyRow>::new(32);
/// tokio::spawn(actor.run(()));
/// let row = client.insert(CompanyInsert { .. }).await?;
/// ```
///
/// # Implementation Details
///
/// Rows live in a `HashMap` keyed by [`TableRow::id`], each tagged with an insertion
/// sequence number.
///
/// * **Insert**: generates a v4 UUID, builds the row via `from_insert`, awaits `on_insert`,
///   rejects duplicate keys and unique-constraint conflicts, stores the row and returns it.
/// * **Get**: clone of the row, or `None`.
/// * **Select**: every row for which `matches(filter)` holds, in insertion order.
/// * **Update**: applies `on_update` to a copy, re-checks unique constraints, then
///   replaces the stored row and returns it.
/// * **Delete**: awaits `on_delete`, then removes the row.
pub struct TableActor<T: TableRow> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    rows: HashMap<T::Id, (u64, T)>,
    next_seq: u64,
}

impl<T: TableRow> TableActor<T> {
    /// Creates a new `TableActor` and its associated `TableClient`.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: HashMap::new(),
            next_seq: 1,
        };
        (actor, TableClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// The `context` is handed to every row hook.
    pub async fn run(mut self, context: T::Context) {
        let table = T::TABLE;
        info!(table, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::Insert { params, respond_to } => {
                    debug!(table, ?params, "Insert");
                    let result = self.insert(params, &context).await;
                    let _ = respond_to.send(result);
                }
                TableRequest::Get { id, respond_to } => {
                    let row = self.rows.get(&id).map(|(_, row)| row.clone());
                    debug!(table, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::Select { filter, respond_to } => {
                    let mut hits: Vec<&(u64, T)> = self
                        .rows
                        .values()
                        .filter(|(_, row)| row.matches(&filter))
                        .collect();
                    hits.sort_by_key(|(seq, _)| *seq);
                    let rows: Vec<T> = hits.into_iter().map(|(_, row)| row.clone()).collect();
                    debug!(table, ?filter, count = rows.len(), "Select");
                    let _ = respond_to.send(Ok(rows));
                }
                TableRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(table, %id, ?patch, "Update");
                    let result = self.update(id, patch, &context).await;
                    let _ = respond_to.send(result);
                }
                TableRequest::Delete { id, respond_to } => {
                    debug!(table, %id, "Delete");
                    let result = self.delete(id, &context).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(table, size = self.rows.len(), "Shutdown");
    }

    async fn insert(&mut self, params: T::Insert, context: &T::Context) -> Result<T, StoreError> {
        let table = T::TABLE;
        let mut row = T::from_insert(T::Id::from(Uuid::new_v4()), params).map_err(|e| {
            warn!(table, error = %e, "Insert failed");
            StoreError::RowError(Box::new(e))
        })?;

        if let Err(e) = row.on_insert(context).await {
            warn!(table, error = %e, "on_insert failed");
            return Err(StoreError::RowError(Box::new(e)));
        }

        let id = row.id().clone();
        if self.rows.contains_key(&id) || self.violates_unique(&row, None) {
            warn!(table, %id, "Conflict");
            return Err(StoreError::Conflict {
                table,
                id: id.to_string(),
            });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(id.clone(), (seq, row.clone()));
        info!(table, %id, size = self.rows.len(), "Inserted");
        Ok(row)
    }

    async fn update(
        &mut self,
        id: T::Id,
        patch: T::Patch,
        context: &T::Context,
    ) -> Result<T, StoreError> {
        let table = T::TABLE;
        let Some((_, current)) = self.rows.get(&id) else {
            warn!(table, %id, "Not found");
            return Err(StoreError::NotFound {
                table,
                id: id.to_string(),
            });
        };

        let mut next = current.clone();
        if let Err(e) = next.on_update(patch, context).await {
            warn!(table, %id, error = %e, "Update failed");
            return Err(StoreError::RowError(Box::new(e)));
        }
        if self.violates_unique(&next, Some(&id)) {
            warn!(table, %id, "Conflict");
            return Err(StoreError::Conflict {
                table,
                id: id.to_string(),
            });
        }

        if let Some((_, slot)) = self.rows.get_mut(&id) {
            *slot = next.clone();
        }
        info!(table, %id, "Updated");
        Ok(next)
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<(), StoreError> {
        let table = T::TABLE;
        let Some((_, row)) = self.rows.get(&id) else {
            warn!(table, %id, "Not found");
            return Err(StoreError::NotFound {
                table,
                id: id.to_string(),
            });
        };

        if let Err(e) = row.on_delete(context).await {
            warn!(table, %id, error = %e, "on_delete failed");
            return Err(StoreError::RowError(Box::new(e)));
        }
        self.rows.remove(&id);
        info!(table, %id, size = self.rows.len(), "Deleted");
        Ok(())
    }

    fn violates_unique(&self, candidate: &T, skip: Option<&T::Id>) -> bool {
        self.rows
            .iter()
            .filter(|(key, _)| Some(*key) != skip)
            .any(|(_, (_, row))| candidate.conflicts_with(row))
    }
}
