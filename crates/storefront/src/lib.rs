//! # Storefront
//!
//! A multi-tenant storefront for wholesale orders. Company owners publish a catalog of
//! products, each sold in declared sizes and bulk quantity tiers; customers open the public
//! link, pick quantities, fill a contact form and submit one order.
//!
//! ## Module Tour
//!
//! ### 1. The Tables ([`company_table`], [`product_table`], [`order_table`], [`profile_table`], [`representative_table`], [`role_table`])
//! Each table runs as a [`table_actor::TableActor`]. A table module holds the backend row
//! shape, its insert/patch/filter payloads, the adapter to the domain type and the row hooks.
//!
//! ### 2. The Interface ([`clients`])
//! One client per table with the domain operations: short-name registration, catalog
//! listing, order listing, representative enrollment, role grants.
//!
//! ### 3. The Engine ([`composition`], [`submission`], [`render`])
//! - [`composition`]: selections keyed by `(product, size)`, aggregated into line items and
//!   a total
//! - [`submission`]: validation, one insert, clear on success
//! - [`render`]: the stored order laid out again for the detail and print views
//!
//! ### 4. The Surfaces ([`storefront`], [`auth`], [`storage`])
//! The customer session, login with explicit sessions, and image uploads.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`Backend`](lifecycle::Backend) spawns and wires every table actor;
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## Money
//!
//! Amounts are [`Money`](model::Money), a fixed-point decimal. Subtotals and totals are
//! exact; rounding only happens when an amount is formatted for display.

pub mod auth;
pub mod clients;
pub mod company_table;
pub mod composition;
pub mod config;
pub mod format;
pub mod lifecycle;
pub mod model;
pub mod order_table;
pub mod product_table;
pub mod profile_table;
pub mod render;
pub mod representative_table;
pub mod role_table;
pub mod slug;
pub mod storage;
pub mod storefront;
pub mod submission;
