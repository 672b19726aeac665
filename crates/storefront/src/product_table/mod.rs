//! # Products Table
//!
//! A company's catalog: sizes with unit prices, bulk quantity tiers and visibility flags.
//!
//! ## Structure
//!
//! - [`row`] - [`ProductRow`] backend shape, payloads and the adapter to
//!   [`Product`](crate::model::Product)
//! - [`entity`] - [`TableRow`](table_actor::TableRow) implementation
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with a [`CompanyClient`](crate::clients::CompanyClient) as context:
//!
//! ```rust,ignore
//! let (actor, products) = product_table::new(32);
//! tokio::spawn(actor.run(companies.clone()));
//! ```

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::ProductClient;
use table_actor::TableActor;

/// Creates the products actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<ProductRow>, ProductClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, ProductClient::new(inner))
}
