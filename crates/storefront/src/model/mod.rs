//! Domain types.
//!
//! These never carry backend row shapes; each table module converts its rows into these
//! through its adapter.

mod company;
mod ids;
mod order;
mod product;
mod user;

pub use company::*;
pub use ids::*;
pub use order::*;
pub use product::*;
pub use user::*;

/// Fixed-point amount in the store currency.
pub type Money = rust_decimal::Decimal;
