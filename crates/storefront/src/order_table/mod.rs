//! # Orders Table
//!
//! Submitted orders. Each row is one atomic record holding its grouped line items; there is
//! no edit path.
//!
//! ## Structure
//!
//! - [`row`] - [`OrderRow`] wire shape, [`OrderInsert`] and the adapter to
//!   [`Order`](crate::model::Order)
//! - [`entity`] - [`TableRow`](table_actor::TableRow) implementation
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::OrderClient;
use table_actor::TableActor;

/// Creates the orders actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<OrderRow>, OrderClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, OrderClient::new(inner))
}
