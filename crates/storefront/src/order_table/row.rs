//! Backend row shape for `orders` and its adapter to [`Order`].
//!
//! ```text
//! {
//!   company_id, customer_name, customer_phone (digits only), customer_city,
//!   customer_zip_code,
//!   items: [ { productId, reference, name, sizes: [ { size, price, quantity, subtotal } ] } ],
//!   total: number, notes: string | null, date: "YYYY-MM-DD", time: "HH:mm:ss"
//! }
//! ```

use super::OrderError;
use crate::format::normalize_phone;
use crate::model::{
    checked_sum, CompanyId, ContactDetails, LineItem, Money, NewOrder, Order, OrderId, ProductId,
    SizeLine,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSizeEntry {
    pub size: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Money,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemEntry {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub reference: String,
    pub name: String,
    pub sizes: Vec<OrderSizeEntry>,
}

impl OrderItemEntry {
    fn checked_subtotal(&self) -> Option<Money> {
        checked_sum(self.sizes.iter().map(|s| s.subtotal))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub company_id: CompanyId,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_city: String,
    pub customer_zip_code: String,
    pub items: Vec<OrderItemEntry>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Money,
    pub notes: Option<String>,
    pub date: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderInsert {
    pub company_id: CompanyId,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_city: String,
    pub customer_zip_code: String,
    pub items: Vec<OrderItemEntry>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Money,
    pub notes: Option<String>,
    pub date: String,
    pub time: String,
}

impl OrderInsert {
    /// Sum of every size subtotal in the payload, `None` past [`Money::MAX`].
    pub fn items_total(&self) -> Option<Money> {
        self.items
            .iter()
            .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.checked_subtotal()?))
    }
}

/// Orders are immutable once written; no patch can be constructed.
#[derive(Debug, Clone)]
pub enum OrderPatch {}

#[derive(Debug, Clone)]
pub enum OrderFilter {
    All,
    Company(CompanyId),
}

impl From<&LineItem> for OrderItemEntry {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id,
            reference: item.reference.clone(),
            name: item.name.clone(),
            sizes: item
                .size_breakdown
                .iter()
                .map(|line| OrderSizeEntry {
                    size: line.size_label.clone(),
                    price: line.unit_price,
                    quantity: line.quantity,
                    subtotal: line.subtotal,
                })
                .collect(),
        }
    }
}

impl From<OrderItemEntry> for LineItem {
    fn from(entry: OrderItemEntry) -> Self {
        Self {
            product_id: entry.product_id,
            reference: entry.reference,
            name: entry.name,
            size_breakdown: entry
                .sizes
                .into_iter()
                .map(|s| SizeLine {
                    size_label: s.size,
                    unit_price: s.price,
                    quantity: s.quantity,
                    subtotal: s.subtotal,
                })
                .collect(),
        }
    }
}

impl From<&NewOrder> for OrderInsert {
    fn from(order: &NewOrder) -> Self {
        Self {
            company_id: order.company_id,
            customer_name: order.contact.name.trim().to_string(),
            customer_phone: normalize_phone(&order.contact.phone),
            customer_city: order.contact.city.trim().to_string(),
            customer_zip_code: order.contact.zip_code.trim().to_string(),
            items: order.items.iter().map(OrderItemEntry::from).collect(),
            total: order.total,
            notes: order.notes.clone(),
            date: order.date.format(DATE_FORMAT).to_string(),
            time: order.time.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Accepts `HH:mm:ss` and the shorter `HH:mm`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| OrderError::MalformedRow(format!("{}: date {}: {e}", row.id, row.date)))?;
        let time = parse_time(&row.time)
            .ok_or_else(|| OrderError::MalformedRow(format!("{}: time {}", row.id, row.time)))?;

        Ok(Order {
            id: row.id,
            company_id: row.company_id,
            contact: ContactDetails {
                name: row.customer_name,
                phone: row.customer_phone,
                city: row.customer_city,
                zip_code: row.customer_zip_code,
            },
            items: row.items.into_iter().map(LineItem::from).collect(),
            total: row.total,
            notes: row.notes,
            date,
            time,
            created_at: row.created_at,
        })
    }
}
