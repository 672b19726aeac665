//! # Storefront Session
//!
//! One customer's visit to `/{short_name}`: the company and its catalog, loaded once, the
//! selections made so far, the contact form and the submission.
//!
//! The catalog is the source of truth for what may be chosen. [`Storefront::choose`] only
//! stores a selection for an orderable product, a declared size and one of the product's
//! quantity tiers, always at the catalog's unit price.

use crate::clients::CATALOG_PAGE_SIZE;
use crate::company_table::CompanyError;
use crate::composition::{recompute, SelectionStore};
use crate::lifecycle::Backend;
use crate::model::{Company, ContactDetails, LineItem, Money, OrderId, Product, ProductId};
use crate::product_table::ProductError;
use crate::render::{ItemView, OrderRenderer};
use crate::submission::{OrderSubmitter, SubmissionError, SubmissionState};
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Store not found: {0}")]
    NotFound(String),

    #[error("Product not in this catalog: {0}")]
    UnknownProduct(ProductId),

    #[error("Product {0} is not available")]
    Unavailable(String),

    #[error("Product {reference} has no size {size}")]
    UnknownSize { reference: String, size: String },

    #[error("Product {reference} is not sold in quantities of {quantity}")]
    InvalidQuantity { reference: String, quantity: u32 },

    #[error("Selecting {quantity} of {reference} takes the order total out of range")]
    AmountTooLarge { reference: String, quantity: u32 },

    #[error(transparent)]
    Company(#[from] CompanyError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

/// What the order summary dialog shows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub total: Money,
    pub formatted_total: String,
    pub line_items: Vec<LineItem>,
    pub items: Vec<ItemView>,
}

pub struct Storefront {
    company: Company,
    submitter: OrderSubmitter,
    selections: SelectionStore,
    contact: Option<ContactDetails>,
    renderer: OrderRenderer,
}

impl Storefront {
    /// Resolves an active company by short name and loads its catalog.
    #[instrument(skip(backend))]
    pub async fn open(short_name: &str, backend: &Backend) -> Result<Self, StorefrontError> {
        let company = backend
            .companies
            .by_short_name(short_name)
            .await?
            .ok_or_else(|| StorefrontError::NotFound(short_name.to_string()))?;
        let catalog = backend.products.catalog(company.id).await?;
        info!(company_id = %company.id, products = catalog.len(), "Storefront opened");

        let submitter = OrderSubmitter::new(
            Some(company.id),
            catalog,
            backend.orders.clone(),
            backend.offset,
        );
        Ok(Self::with_submitter(company, submitter, backend.renderer.clone()))
    }

    /// Builds a session around an existing submitter, e.g. one with a fixed clock.
    pub fn with_submitter(
        company: Company,
        submitter: OrderSubmitter,
        renderer: OrderRenderer,
    ) -> Self {
        Self {
            company,
            submitter,
            selections: SelectionStore::new(),
            contact: None,
            renderer,
        }
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn catalog(&self) -> &[Product] {
        self.submitter.catalog()
    }

    /// Zero-based page of [`CATALOG_PAGE_SIZE`] products.
    pub fn catalog_page(&self, index: usize) -> &[Product] {
        let catalog = self.catalog();
        let start = index.saturating_mul(CATALOG_PAGE_SIZE).min(catalog.len());
        let end = (start + CATALOG_PAGE_SIZE).min(catalog.len());
        &catalog[start..end]
    }

    pub fn page_count(&self) -> usize {
        self.catalog().len().div_ceil(CATALOG_PAGE_SIZE)
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    /// Selects `quantity` of a size at its catalog price. 0 deselects.
    pub fn choose(
        &mut self,
        product_id: ProductId,
        size_label: &str,
        quantity: u32,
    ) -> Result<(), StorefrontError> {
        let product = self
            .catalog()
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        let size = product
            .size(size_label)
            .ok_or_else(|| StorefrontError::UnknownSize {
                reference: product.reference.clone(),
                size: size_label.to_string(),
            })?;
        if quantity > 0 {
            if !product.is_orderable() {
                return Err(StorefrontError::Unavailable(product.reference.clone()));
            }
            if !product.offers_quantity(quantity) {
                return Err(StorefrontError::InvalidQuantity {
                    reference: product.reference.clone(),
                    quantity,
                });
            }
        }

        let mut next = self.selections.clone();
        next.set_quantity(product_id, size_label, quantity, size.unit_price);
        if next.checked_total().is_none() {
            return Err(StorefrontError::AmountTooLarge {
                reference: product.reference.clone(),
                quantity,
            });
        }
        debug!(%product_id, size = size_label, quantity, "Selection changed");
        self.selections = next;
        Ok(())
    }

    pub fn remove(&mut self, product_id: ProductId, size_label: &str) {
        self.selections.remove_selection(product_id, size_label);
    }

    pub fn summary(&self) -> OrderSummary {
        let recomputed = recompute(&self.selections, self.catalog());
        OrderSummary {
            total: recomputed.total,
            formatted_total: self.renderer.money(recomputed.total),
            items: self.renderer.items(&recomputed.line_items),
            line_items: recomputed.line_items,
        }
    }

    pub fn set_contact(&mut self, contact: ContactDetails) {
        self.contact = Some(contact);
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    /// Submits the current selections. Contact details are kept either way; selections are
    /// cleared only when the order was stored.
    pub async fn submit(&mut self, notes: Option<String>) -> Result<OrderId, SubmissionError> {
        self.submitter
            .submit(self.contact.as_ref(), &mut self.selections, notes)
            .await
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submitter.state()
    }

    pub fn storefront_path(&self) -> String {
        format!("/{}", self.company.short_name)
    }

    /// Where the customer lands after a successful submission.
    pub fn success_path(&self) -> String {
        format!("/{}/success", self.company.short_name)
    }
}
