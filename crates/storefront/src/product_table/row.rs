//! Backend row shape for `products` and its adapter to [`Product`].
//!
//! On the wire a size is `{ "size": "M", "value": 5.5 }`, tiers are a plain integer array
//! named `quantities`, and visibility is stored inverted as `disabled`.

use super::ProductError;
use crate::model::{
    validate_catalog_fields, validate_quantity_tiers, validate_sizes, CompanyId, Money,
    NewProduct, Product, ProductChanges, ProductId, SizeOption,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub size: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub company_id: CompanyId,
    pub reference: String,
    pub name: String,
    pub image_url: Option<String>,
    pub sizes: Vec<SizeEntry>,
    pub quantities: Vec<i32>,
    pub disabled: bool,
    pub is_new: bool,
    pub out_of_stock: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductInsert {
    pub company_id: CompanyId,
    pub reference: String,
    pub name: String,
    pub image_url: Option<String>,
    pub sizes: Vec<SizeEntry>,
    pub quantities: Vec<i32>,
    pub disabled: bool,
    pub is_new: bool,
    pub out_of_stock: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub reference: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<Option<String>>,
    pub sizes: Option<Vec<SizeEntry>>,
    pub quantities: Option<Vec<i32>>,
    pub disabled: Option<bool>,
    pub is_new: Option<bool>,
    pub out_of_stock: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum ProductFilter {
    All,
    Company(CompanyId),
    /// The public catalog: enabled products only.
    ActiveForCompany(CompanyId),
}

fn size_entries(sizes: &[SizeOption]) -> Vec<SizeEntry> {
    sizes
        .iter()
        .map(|s| SizeEntry {
            size: s.label.clone(),
            value: s.unit_price,
        })
        .collect()
}

fn tier_entries(tiers: &[u32]) -> Result<Vec<i32>, ProductError> {
    tiers
        .iter()
        .map(|&q| i32::try_from(q).map_err(|_| ProductError::Invalid(format!("quantity {q} too large"))))
        .collect()
}

fn sizes_from_entries(entries: Vec<SizeEntry>) -> Vec<SizeOption> {
    entries
        .into_iter()
        .map(|e| SizeOption::new(e.size, e.value))
        .collect()
}

fn tiers_from_entries(entries: &[i32]) -> Result<Vec<u32>, String> {
    entries
        .iter()
        .map(|&q| u32::try_from(q).map_err(|_| format!("negative quantity {q}")))
        .collect()
}

impl TryFrom<NewProduct> for ProductInsert {
    type Error = ProductError;

    fn try_from(product: NewProduct) -> Result<Self, Self::Error> {
        validate_catalog_fields(
            &product.reference,
            &product.name,
            &product.sizes,
            &product.quantity_tiers,
        )
        .map_err(ProductError::Invalid)?;

        Ok(Self {
            company_id: product.company_id,
            reference: product.reference.trim().to_string(),
            name: product.name.trim().to_string(),
            image_url: product.image_url,
            sizes: size_entries(&product.sizes),
            quantities: tier_entries(&product.quantity_tiers)?,
            disabled: !product.active,
            is_new: product.is_new,
            out_of_stock: product.out_of_stock,
        })
    }
}

impl TryFrom<ProductChanges> for ProductPatch {
    type Error = ProductError;

    fn try_from(changes: ProductChanges) -> Result<Self, Self::Error> {
        if let Some(sizes) = &changes.sizes {
            validate_sizes(sizes).map_err(ProductError::Invalid)?;
        }
        if let Some(tiers) = &changes.quantity_tiers {
            validate_quantity_tiers(tiers).map_err(ProductError::Invalid)?;
        }
        Ok(Self {
            reference: changes.reference,
            name: changes.name,
            image_url: changes.image_url,
            sizes: changes.sizes.as_deref().map(size_entries),
            quantities: changes
                .quantity_tiers
                .as_deref()
                .map(tier_entries)
                .transpose()?,
            disabled: changes.active.map(|active| !active),
            is_new: changes.is_new,
            out_of_stock: changes.out_of_stock,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let quantity_tiers = tiers_from_entries(&row.quantities)
            .map_err(|e| ProductError::MalformedRow(format!("{}: {e}", row.id)))?;

        Ok(Product {
            id: row.id,
            company_id: row.company_id,
            reference: row.reference,
            name: row.name,
            image_url: row.image_url,
            sizes: sizes_from_entries(row.sizes),
            quantity_tiers,
            active: !row.disabled,
            is_new: row.is_new,
            out_of_stock: row.out_of_stock,
            created_at: row.created_at,
        })
    }
}
