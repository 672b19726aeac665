//! # Table Actor
//!
//! An in-memory, actor-backed table engine. Each table (companies, products, orders, …) is
//! owned by one Tokio task that answers `insert`, `get`, `select`, `update` and `delete`
//! requests sent through a cloneable client. This is the data-store collaborator the
//! storefront talks to.
//!
//! ## Why one actor per table?
//!
//! - **Isolated state**: a table's rows are owned by a single task, no locks.
//! - **Sequential processing**: requests to one table never interleave, so unique
//!   constraints (short names, representative identifiers) hold without transactions.
//! - **Context injection**: a table can hold clients of other tables and consult them from
//!   its hooks, e.g. an order row rejecting an unknown company.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Row Layer** ([`TableRow`]) - the stored record, its payload types and hooks
//! 2. **Runtime Layer** ([`TableActor`]) - request processing and storage
//! 3. **Interface Layer** ([`TableClient`], [`TableAccess`]) - type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the actor starts, not when it is constructed:
//!
//! ```rust,ignore
//! let (company_actor, companies) = TableActor::<CompanyRow>::new(32);
//! let (order_actor, orders) = TableActor::<OrderRow>::new(32);
//!
//! tokio::spawn(company_actor.run(()));
//! // Orders validate their company on insert.
//! tokio::spawn(order_actor.run(CompanyClient::new(companies.clone())));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockTable`] answers a real [`TableClient`] from scripted expectations. See the
//! [`mock`] module for usage.

pub mod access;
pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod row;

pub use access::TableAccess;
pub use actor::TableActor;
pub use client::TableClient;
pub use error::StoreError;
pub use message::{Response, TableRequest};
pub use row::TableRow;
