//! # Order Composition
//!
//! The in-progress order: which (product, size) pairs are selected, in what quantity and at
//! what unit price, and how those selections aggregate into [`LineItem`]s and a total.
//!
//! ## Structure
//!
//! - [`selection`] - [`SelectionStore`], keyed by `(product_id, size_label)`
//! - [`grouping`] - [`to_line_items`] and [`recompute`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut store = SelectionStore::new();
//! store.set_quantity(shirt.id, "M", 6, dec!(5.00));
//! store.set_quantity(shirt.id, "G", 12, dec!(6.00));
//!
//! let Recomputed { total, line_items } = recompute(&store, &catalog);
//! assert_eq!(total, dec!(102.00));
//! ```
//!
//! Nothing here caches: the caller recomputes after each mutation and decides what to keep.
//!
//! [`LineItem`]: crate::model::LineItem

pub mod grouping;
pub mod selection;

pub use grouping::{recompute, to_line_items, Recomputed};
pub use selection::{Selection, SelectionKey, SelectionStore};
