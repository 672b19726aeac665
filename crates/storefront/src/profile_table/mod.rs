//! # Profiles Table
//!
//! One row per registered user, keyed by the auth user id.

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::ProfileClient;
use table_actor::TableActor;

/// Creates the profiles actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<ProfileRow>, ProfileClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, ProfileClient::new(inner))
}
