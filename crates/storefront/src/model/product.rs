//! Catalog types.
//!
//! A [`Product`] is read-only from the ordering side: the storefront loads it once per session
//! and the selection store copies each size's price at selection time.

use super::{CompanyId, Money, ProductId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Highest unit price a catalog size may carry.
pub const MAX_UNIT_PRICE: Money = Money::from_parts(1_000_000, 0, 0, false, 0);

/// Largest bulk quantity a product may be sold in.
pub const MAX_QUANTITY_TIER: u32 = 100_000;

/// One orderable size and its unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOption {
    pub label: String,
    pub unit_price: Money,
}

impl SizeOption {
    pub fn new(label: impl Into<String>, unit_price: Money) -> Self {
        Self {
            label: label.into(),
            unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub company_id: CompanyId,
    pub reference: String,
    pub name: String,
    pub image_url: Option<String>,
    /// Declared size order; line items follow it.
    pub sizes: Vec<SizeOption>,
    /// Bulk quantities shared by every size.
    pub quantity_tiers: Vec<u32>,
    pub active: bool,
    pub is_new: bool,
    pub out_of_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Active and in stock.
    pub fn is_orderable(&self) -> bool {
        self.active && !self.out_of_stock
    }

    pub fn size(&self, label: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.label == label)
    }

    pub fn size_position(&self, label: &str) -> Option<usize> {
        self.sizes.iter().position(|s| s.label == label)
    }

    pub fn offers_quantity(&self, quantity: u32) -> bool {
        self.quantity_tiers.contains(&quantity)
    }
}

/// Payload for registering a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub company_id: CompanyId,
    pub reference: String,
    pub name: String,
    pub image_url: Option<String>,
    pub sizes: Vec<SizeOption>,
    pub quantity_tiers: Vec<u32>,
    pub active: bool,
    pub is_new: bool,
    pub out_of_stock: bool,
}

/// Partial update for a product. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub reference: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<Option<String>>,
    pub sizes: Option<Vec<SizeOption>>,
    pub quantity_tiers: Option<Vec<u32>>,
    pub active: Option<bool>,
    pub is_new: Option<bool>,
    pub out_of_stock: Option<bool>,
}

/// Catalog form rules. Returns the first violation found.
pub fn validate_catalog_fields(
    reference: &str,
    name: &str,
    sizes: &[SizeOption],
    quantity_tiers: &[u32],
) -> Result<(), String> {
    if reference.trim().is_empty() {
        return Err("reference is required".into());
    }
    if name.trim().chars().count() < 3 {
        return Err("name must be at least 3 characters".into());
    }
    validate_sizes(sizes)?;
    validate_quantity_tiers(quantity_tiers)
}

pub fn validate_sizes(sizes: &[SizeOption]) -> Result<(), String> {
    if sizes.is_empty() {
        return Err("at least one size is required".into());
    }
    let mut seen = HashSet::new();
    for size in sizes {
        if size.label.trim().is_empty() {
            return Err("size label is required".into());
        }
        if size.unit_price <= Money::ZERO {
            return Err(format!("price for size {} must be greater than 0", size.label));
        }
        if size.unit_price > MAX_UNIT_PRICE {
            return Err(format!(
                "price for size {} must be at most {MAX_UNIT_PRICE}",
                size.label
            ));
        }
        if !seen.insert(size.label.as_str()) {
            return Err(format!("duplicate size {}", size.label));
        }
    }
    Ok(())
}

pub fn validate_quantity_tiers(tiers: &[u32]) -> Result<(), String> {
    if tiers.is_empty() {
        return Err("at least one quantity is required".into());
    }
    if tiers.contains(&0) {
        return Err("quantities must be greater than 0".into());
    }
    if tiers.iter().any(|&tier| tier > MAX_QUANTITY_TIER) {
        return Err(format!("quantities must be at most {MAX_QUANTITY_TIER}"));
    }
    Ok(())
}
