//! # Product Client
//!
//! Catalog management for owners and the public catalog read by the storefront.
use super::{Page, SortDirection};
use crate::model::{CompanyId, NewProduct, Product, ProductChanges, ProductId};
use crate::product_table::{ProductError, ProductFilter, ProductInsert, ProductPatch, ProductRow};
use async_trait::async_trait;
use std::cmp::Ordering;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{debug, info, instrument};

/// Products per storefront page.
pub const CATALOG_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSortField {
    #[default]
    Name,
    CreatedAt,
}

/// Admin listing options.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive match on reference or name.
    pub search: Option<String>,
    pub active_only: bool,
    pub sort: ProductSortField,
    pub direction: SortDirection,
    pub page: Option<Page>,
}

#[derive(Clone)]
pub struct ProductClient {
    inner: TableClient<ProductRow>,
}

#[async_trait]
impl TableAccess<ProductRow> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &TableClient<ProductRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProductError {
        match e {
            StoreError::NotFound { id, .. } => ProductError::NotFound(id),
            other => other
                .into_row_error()
                .unwrap_or_else(|e| ProductError::Store(e.to_string())),
        }
    }
}

fn to_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, ProductError> {
    rows.into_iter().map(Product::try_from).collect()
}

impl ProductClient {
    pub fn new(inner: TableClient<ProductRow>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let insert = ProductInsert::try_from(product)?;
        let row = self.inner.insert(insert).await.map_err(Self::map_error)?;
        info!(product_id = %row.id, reference = %row.reference, "Product created");
        Product::try_from(row)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product, ProductError> {
        let patch = ProductPatch::try_from(changes)?;
        let row = self.inner.update(id, patch).await.map_err(Self::map_error)?;
        Product::try_from(row)
    }

    pub async fn find(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await?.map(Product::try_from).transpose()
    }

    /// Admin listing: filter, sort, then slice the requested page.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        company: CompanyId,
        query: ProductQuery,
    ) -> Result<Vec<Product>, ProductError> {
        let filter = if query.active_only {
            ProductFilter::ActiveForCompany(company)
        } else {
            ProductFilter::Company(company)
        };
        let mut products = to_products(self.select(filter).await?)?;

        if let Some(term) = query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            products.retain(|p| {
                p.reference.to_lowercase().contains(&term) || p.name.to_lowercase().contains(&term)
            });
        }

        products.sort_by(|a, b| {
            let ordering = match query.sort {
                ProductSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            query.direction.apply(ordering)
        });

        debug!(count = products.len(), "Listed products");
        Ok(match query.page {
            Some(page) => page.slice(products),
            None => products,
        })
    }

    /// The public catalog: active products, new ones first, then newest first.
    #[instrument(skip(self))]
    pub async fn catalog(&self, company: CompanyId) -> Result<Vec<Product>, ProductError> {
        let mut products = to_products(
            self.select(ProductFilter::ActiveForCompany(company))
                .await?,
        )?;
        products.sort_by(|a, b| match b.is_new.cmp(&a.is_new) {
            Ordering::Equal => b.created_at.cmp(&a.created_at),
            other => other,
        });
        Ok(products)
    }

    /// One page of [`ProductClient::catalog`], [`CATALOG_PAGE_SIZE`] products long.
    pub async fn catalog_page(
        &self,
        company: CompanyId,
        index: usize,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.catalog(company).await?;
        Ok(Page {
            index,
            size: CATALOG_PAGE_SIZE,
        }
        .slice(products))
    }
}
