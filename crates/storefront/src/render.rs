//! # Order Rendering
//!
//! The read side of composition: a stored [`Order`] already carries its grouped
//! [`LineItem`]s, so rendering only lays them out. The same [`ItemView`] rows back the
//! storefront summary dialog, the admin order detail and the printable order.
//!
//! The stored `total` is what gets shown. When it disagrees with the line items the view is
//! flagged instead of silently corrected.

use crate::format::{
    format_date, format_money, format_phone, format_time, format_zip_code, CURRENCY_SYMBOL,
};
use crate::model::{items_total, LineItem, Money, Order, OrderId};
use crate::order_table::{DATE_FORMAT, TIME_FORMAT};
use std::fmt::Write;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct SizeRow {
    pub size: String,
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    /// `REF - Name`
    pub heading: String,
    pub sizes: Vec<SizeRow>,
    pub quantity: u32,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerView {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub id: OrderId,
    pub customer: CustomerView,
    pub date: String,
    pub time: String,
    pub items: Vec<ItemView>,
    pub total: String,
    pub notes: Option<String>,
    /// False when the stored total is not the sum of the item subtotals.
    pub consistent: bool,
}

/// One row of the admin order list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummaryRow {
    pub id: OrderId,
    pub customer: String,
    pub city: String,
    pub date: String,
    pub time: String,
    pub items: usize,
    pub total: String,
}

#[derive(Debug, Clone)]
pub struct OrderRenderer {
    currency_symbol: String,
}

impl Default for OrderRenderer {
    fn default() -> Self {
        Self::new(CURRENCY_SYMBOL)
    }
}

impl OrderRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        format_money(amount, &self.currency_symbol)
    }

    pub fn items(&self, items: &[LineItem]) -> Vec<ItemView> {
        items.iter().map(|item| self.item(item)).collect()
    }

    fn item(&self, item: &LineItem) -> ItemView {
        ItemView {
            heading: format!("{} - {}", item.reference, item.name),
            sizes: item
                .size_breakdown
                .iter()
                .map(|line| SizeRow {
                    size: line.size_label.clone(),
                    unit_price: self.money(line.unit_price),
                    quantity: line.quantity,
                    subtotal: self.money(line.subtotal),
                })
                .collect(),
            quantity: item.quantity(),
            subtotal: self.money(item.subtotal()),
        }
    }

    pub fn detail(&self, order: &Order) -> OrderView {
        let computed = items_total(&order.items);
        let consistent = computed == order.total;
        if !consistent {
            warn!(order_id = %order.id, stored = %order.total, %computed, "Order total does not match its items");
        }

        OrderView {
            id: order.id,
            customer: CustomerView {
                name: order.contact.name.clone(),
                phone: format_phone(&order.contact.phone),
                city: order.contact.city.clone(),
                zip_code: format_zip_code(&order.contact.zip_code),
            },
            date: format_date(&order.date.format(DATE_FORMAT).to_string()),
            time: format_time(&order.time.format(TIME_FORMAT).to_string()),
            items: self.items(&order.items),
            total: self.money(order.total),
            notes: order.notes.clone(),
            consistent,
        }
    }

    pub fn summary_row(&self, order: &Order) -> OrderSummaryRow {
        OrderSummaryRow {
            id: order.id,
            customer: order.contact.name.clone(),
            city: order.contact.city.clone(),
            date: format_date(&order.date.format(DATE_FORMAT).to_string()),
            time: format_time(&order.time.format(TIME_FORMAT).to_string()),
            items: order.items.len(),
            total: self.money(order.total),
        }
    }

    /// Plain-text layout for printing.
    pub fn print(&self, order: &Order, company_name: &str) -> String {
        let view = self.detail(order);
        let mut out = String::new();

        let _ = writeln!(out, "{company_name}");
        let _ = writeln!(out, "Pedido {}", view.id);
        let _ = writeln!(out, "Data: {} {}", view.date, view.time);
        let _ = writeln!(out);
        let _ = writeln!(out, "Cliente: {}", view.customer.name);
        let _ = writeln!(out, "Telefone: {}", view.customer.phone);
        let _ = writeln!(out, "Cidade: {}", view.customer.city);
        let _ = writeln!(out, "CEP: {}", view.customer.zip_code);

        for item in &view.items {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", item.heading);
            for row in &item.sizes {
                let _ = writeln!(
                    out,
                    "  {:<6} {:>4} x {:>12} = {:>12}",
                    row.size, row.quantity, row.unit_price, row.subtotal
                );
            }
            let _ = writeln!(out, "  Subtotal ({} pç): {}", item.quantity, item.subtotal);
        }

        if let Some(notes) = &view.notes {
            let _ = writeln!(out);
            let _ = writeln!(out, "Observações: {notes}");
        }
        let _ = writeln!(out);
        let _ = write!(out, "Total: {}", view.total);
        out
    }
}
