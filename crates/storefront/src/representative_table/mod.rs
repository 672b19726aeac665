//! # Representatives Table
//!
//! Referral partners. Companies and profiles point at a representative through
//! `representative_id`; the public identifier is the slug used in referral links.

pub mod entity;
pub mod error;
pub mod row;

pub use error::*;
pub use row::*;

use crate::clients::RepresentativeClient;
use table_actor::TableActor;

/// Creates the representatives actor and its client.
pub fn new(buffer_size: usize) -> (TableActor<RepresentativeRow>, RepresentativeClient) {
    let (actor, inner) = TableActor::new(buffer_size);
    (actor, RepresentativeClient::new(inner))
}
