//! # Companies Table
//!
//! Tenants and their storefront settings.
//!
//! ## Structure
//!
//! - [`row`] - [`CompanyRow`] backend shape, insert/patch/filter payloads and the adapter to
//!   [`Company`](crate::model::Company)
//! - [`entity`] - [`TableRow`](table_actor::TableRow) implementation (short-name uniqueness)
//! - [`error`] - [`CompanyError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, companies) = company_table::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let company = companies.register(NewCompany { name: "Acme".into(), .. }).await?;
//! assert_eq!(company.short_name, "acme");
//! ```

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::CompanyClient;
use table_actor::TableActor;

/// Creates the companies actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<CompanyRow>, CompanyClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, CompanyClient::new(inner))
}
