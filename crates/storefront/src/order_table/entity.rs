//! [`TableRow`] implementation for [`OrderRow`].
//!
//! Orders are written once. The table refuses a payload whose `total` differs from the
//! sum of its subtotals and any order for an unknown company.

use super::row::{OrderFilter, OrderInsert, OrderPatch, OrderRow};
use super::OrderError;
use crate::clients::CompanyClient;
use crate::model::OrderId;
use async_trait::async_trait;
use chrono::Utc;
use table_actor::{TableAccess, TableRow};

#[async_trait]
impl TableRow for OrderRow {
    const TABLE: &'static str = "orders";
    type Id = OrderId;
    type Insert = OrderInsert;
    type Patch = OrderPatch;
    type Filter = OrderFilter;
    type Context = CompanyClient;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_insert(id: OrderId, params: OrderInsert) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        let expected = params
            .items_total()
            .ok_or_else(|| OrderError::AmountOverflow("order total".into()))?;
        if params.total != expected {
            return Err(OrderError::TotalMismatch {
                expected,
                actual: params.total,
            });
        }
        Ok(Self {
            id,
            company_id: params.company_id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            customer_city: params.customer_city,
            customer_zip_code: params.customer_zip_code,
            items: params.items,
            total: params.total,
            notes: params.notes,
            date: params.date,
            time: params.time,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::Company(company) => &self.company_id == company,
        }
    }

    async fn on_insert(&mut self, companies: &CompanyClient) -> Result<(), OrderError> {
        match companies.get(self.company_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OrderError::UnknownCompany(self.company_id)),
            Err(e) => Err(OrderError::Store(e.to_string())),
        }
    }

    async fn on_update(&mut self, patch: OrderPatch, _ctx: &CompanyClient) -> Result<(), OrderError> {
        match patch {}
    }
}
