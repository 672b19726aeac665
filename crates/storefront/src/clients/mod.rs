//! # Table Clients
//!
//! One client per table. Each wraps a [`TableClient`](table_actor::TableClient), implements
//! [`TableAccess`](table_actor::TableAccess) for the shared `get`/`select`/`delete` calls and
//! adds the domain operations for its table, converting rows through the table's adapter.

mod company_client;
mod order_client;
mod product_client;
mod profile_client;
mod representative_client;
mod role_client;

pub use company_client::CompanyClient;
pub use order_client::{OrderClient, OrderSort, OrderSortColumn};
pub use product_client::{ProductClient, ProductQuery, ProductSortField, CATALOG_PAGE_SIZE};
pub use profile_client::ProfileClient;
pub use representative_client::{ReferredCompany, RepresentativeClient};
pub use role_client::RoleClient;

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.index.saturating_mul(self.size))
            .take(self.size)
            .collect()
    }
}
