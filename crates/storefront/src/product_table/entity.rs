//! [`TableRow`] implementation for [`ProductRow`].
//!
//! Products hold a [`CompanyClient`] as context: an insert for a company that does not
//! exist is rejected, as a foreign key would.

use super::row::{ProductFilter, ProductInsert, ProductPatch, ProductRow};
use super::ProductError;
use crate::clients::CompanyClient;
use crate::model::ProductId;
use async_trait::async_trait;
use chrono::Utc;
use table_actor::{TableAccess, TableRow};

#[async_trait]
impl TableRow for ProductRow {
    const TABLE: &'static str = "products";
    type Id = ProductId;
    type Insert = ProductInsert;
    type Patch = ProductPatch;
    type Filter = ProductFilter;
    type Context = CompanyClient;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_insert(id: ProductId, params: ProductInsert) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            company_id: params.company_id,
            reference: params.reference,
            name: params.name,
            image_url: params.image_url,
            sizes: params.sizes,
            quantities: params.quantities,
            disabled: params.disabled,
            is_new: params.is_new,
            out_of_stock: params.out_of_stock,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::All => true,
            ProductFilter::Company(company) => &self.company_id == company,
            ProductFilter::ActiveForCompany(company) => {
                !self.disabled && &self.company_id == company
            }
        }
    }

    async fn on_insert(&mut self, companies: &CompanyClient) -> Result<(), ProductError> {
        match companies.get(self.company_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ProductError::UnknownCompany(self.company_id)),
            Err(e) => Err(ProductError::Store(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        patch: ProductPatch,
        _companies: &CompanyClient,
    ) -> Result<(), ProductError> {
        if let Some(reference) = patch.reference {
            if reference.trim().is_empty() {
                return Err(ProductError::Invalid("reference is required".into()));
            }
            self.reference = reference.trim().to_string();
        }
        if let Some(name) = patch.name {
            if name.trim().chars().count() < 3 {
                return Err(ProductError::Invalid(
                    "name must be at least 3 characters".into(),
                ));
            }
            self.name = name.trim().to_string();
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(quantities) = patch.quantities {
            self.quantities = quantities;
        }
        if let Some(disabled) = patch.disabled {
            self.disabled = disabled;
        }
        if let Some(is_new) = patch.is_new {
            self.is_new = is_new;
        }
        if let Some(out_of_stock) = patch.out_of_stock {
            self.out_of_stock = out_of_stock;
        }
        Ok(())
    }
}
