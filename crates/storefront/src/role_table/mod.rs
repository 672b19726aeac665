//! # User Roles Table
//!
//! Role claims (`superuser`, `owner`, `representative`) read by the auth service at login.

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::RoleClient;
use table_actor::TableActor;

/// Creates the user_roles actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<UserRoleRow>, RoleClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, RoleClient::new(inner))
}
