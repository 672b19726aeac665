//! # Backend Lifecycle
//!
//! Starting, wiring and stopping the table actors, plus logging setup.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without their dependencies and receive them in `run(context)`:
//!
//! - `companies`, `profiles`, `user_roles`: no dependencies (`Context = ()`)
//! - `products`, `orders`: a [`CompanyClient`](crate::clients::CompanyClient), to reject
//!   rows for unknown companies
//! - `representatives`: a [`ProfileClient`](crate::clients::ProfileClient), to reject
//!   unknown profiles
//!
//! ## Shutdown
//!
//! An actor stops once every clone of its client is gone. [`Backend::shutdown`] drops the
//! clients it owns and awaits the tasks, so anything else holding a client (a
//! [`Storefront`](crate::storefront::Storefront), an [`InMemoryAuth`](crate::auth::InMemoryAuth))
//! must be dropped first.

mod backend;
mod tracing;

pub use self::tracing::setup_tracing;
pub use backend::Backend;
