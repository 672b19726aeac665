//! # TableRow Trait
//!
//! The `TableRow` trait is the contract every stored record (company, product, order, …) must
//! satisfy to live inside a [`TableActor`](crate::TableActor). It names the table, the key type,
//! the insert/patch/filter payloads, the injected context and the row's error type, and provides
//! the lifecycle hooks the actor awaits while processing a request.
//!
//! # Architecture Note
//! The actor loop is written once against this trait and reused for every table.
//! Associated types keep payloads apart: a `ProductInsert` can never be sent to the
//! `orders` table, the compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`TableRow::on_insert`]
//! - [`TableRow::on_delete`]
//! - [`TableRow::conflicts_with`]
//!
//! The defaults accept everything (`Ok(())` / `false`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// Trait that any stored record must implement to be managed by a `TableActor`.
///
/// # Async & Context
/// Hooks are async so a row can consult other tables (e.g. an order checking that its
/// company exists). The `Context` is injected by [`TableActor::run`](crate::TableActor::run),
/// which lets tables depend on each other without construction-order cycles.
#[async_trait]
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Backend table name, used in logs and errors.
    const TABLE: &'static str;

    /// Primary key. Generated keys are random v4 UUIDs.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<Uuid>;

    /// Payload for a new row.
    type Insert: Send + Sync + Debug;

    /// Partial update applied by [`TableRow::on_update`].
    type Patch: Send + Sync + Debug;

    /// Query predicate evaluated by [`TableRow::matches`].
    type Filter: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// One error type per table.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key the row is stored under.
    ///
    /// Usually the generated id passed to [`TableRow::from_insert`], but a row may carry a
    /// caller-chosen key instead (profiles are keyed by their auth user id).
    fn id(&self) -> &Self::Id;

    /// Build the row from a freshly generated id and the insert payload.
    fn from_insert(id: Self::Id, params: Self::Insert) -> Result<Self, Self::Error>;

    /// Whether this row is part of the result set for `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Unique constraint check against every other stored row.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after `from_insert`, before the row is stored.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a patch. Runs against a copy; the stored row is only replaced on success.
    async fn on_update(&mut self, patch: Self::Patch, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called immediately before the row is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
