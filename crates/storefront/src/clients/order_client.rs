//! # Order Client
//!
//! Writes submitted orders and reads them back for the admin order views.
use super::SortDirection;
use crate::model::{CompanyId, NewOrder, Order, OrderId};
use crate::order_table::{OrderError, OrderFilter, OrderInsert, OrderRow};
use async_trait::async_trait;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderSortColumn {
    CustomerName,
    #[default]
    Date,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSort {
    pub column: OrderSortColumn,
    pub direction: SortDirection,
}

impl Default for OrderSort {
    /// Newest first.
    fn default() -> Self {
        Self {
            column: OrderSortColumn::Date,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Clone)]
pub struct OrderClient {
    inner: TableClient<OrderRow>,
}

#[async_trait]
impl TableAccess<OrderRow> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &TableClient<OrderRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        match e {
            StoreError::NotFound { id, .. } => OrderError::NotFound(id),
            other => other
                .into_row_error()
                .unwrap_or_else(|e| OrderError::Store(e.to_string())),
        }
    }
}

impl OrderClient {
    pub fn new(inner: TableClient<OrderRow>) -> Self {
        Self { inner }
    }

    /// Writes the order as a single record.
    #[instrument(skip(self, order), fields(company_id = %order.company_id, total = %order.total))]
    pub async fn insert_order(&self, order: &NewOrder) -> Result<OrderId, OrderError> {
        let insert = OrderInsert::from(order);
        debug!(?insert, "Sending order");
        let row = self.inner.insert(insert).await.map_err(Self::map_error)?;
        info!(order_id = %row.id, "Order stored");
        Ok(row.id)
    }

    pub async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await?.map(Order::try_from).transpose()
    }

    #[instrument(skip(self))]
    pub async fn list_for_company(
        &self,
        company: CompanyId,
        sort: OrderSort,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self
            .select(OrderFilter::Company(company))
            .await?
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        orders.sort_by(|a, b| {
            let ordering = match sort.column {
                OrderSortColumn::CustomerName => a
                    .contact
                    .name
                    .to_lowercase()
                    .cmp(&b.contact.name.to_lowercase()),
                OrderSortColumn::Date => (a.date, a.time).cmp(&(b.date, b.time)),
                OrderSortColumn::Total => a.total.cmp(&b.total),
            };
            sort.direction.apply(ordering)
        });
        Ok(orders)
    }
}
