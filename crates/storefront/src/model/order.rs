//! Order types.
//!
//! An [`Order`] is written once at submission and never edited. Its `total` is checked
//! against the line items when the [`NewOrder`] is built; readers trust the stored value.

use super::{CompanyId, Money, OrderId, ProductId};
use crate::order_table::OrderError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One selected size within a line item.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLine {
    pub size_label: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

/// `unit_price * quantity`, or `None` past [`Money::MAX`].
pub fn checked_line_amount(unit_price: Money, quantity: u32) -> Option<Money> {
    unit_price.checked_mul(Money::from(quantity))
}

/// Sum of `amounts`, or `None` past [`Money::MAX`].
pub fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
    amounts
        .into_iter()
        .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
}

impl SizeLine {
    /// The subtotal saturates at [`Money::MAX`]; [`NewOrder::new`] rejects such a line.
    pub fn new(size_label: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            size_label: size_label.into(),
            unit_price,
            quantity,
            subtotal: checked_line_amount(unit_price, quantity).unwrap_or(Money::MAX),
        }
    }
}

/// All selected sizes of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub reference: String,
    pub name: String,
    pub size_breakdown: Vec<SizeLine>,
}

impl LineItem {
    /// Saturates at [`Money::MAX`].
    pub fn subtotal(&self) -> Money {
        self.checked_subtotal().unwrap_or(Money::MAX)
    }

    pub fn checked_subtotal(&self) -> Option<Money> {
        checked_sum(self.size_breakdown.iter().map(|s| s.subtotal))
    }

    pub fn quantity(&self) -> u32 {
        self.size_breakdown
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.quantity))
    }
}

/// Sum of every subtotal across `items`, saturating at [`Money::MAX`].
pub fn items_total(items: &[LineItem]) -> Money {
    checked_items_total(items).unwrap_or(Money::MAX)
}

pub fn checked_items_total(items: &[LineItem]) -> Option<Money> {
    items
        .iter()
        .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.checked_subtotal()?))
}

/// Customer contact captured by the storefront form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    /// Digits only.
    pub phone: String,
    pub city: String,
    pub zip_code: String,
}

impl ContactDetails {
    /// First blank required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.phone.chars().filter(char::is_ascii_digit).count() == 0 {
            Some("phone")
        } else if self.city.trim().is_empty() {
            Some("city")
        } else if self.zip_code.trim().is_empty() {
            Some("zip_code")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub company_id: CompanyId,
    pub contact: ContactDetails,
    pub items: Vec<LineItem>,
    pub total: Money,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// A validated order ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub company_id: CompanyId,
    pub contact: ContactDetails,
    pub items: Vec<LineItem>,
    pub total: Money,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl NewOrder {
    /// Builds the record, rejecting any line whose subtotal is not `unit_price * quantity`
    /// and a `total` that differs from the sum of subtotals.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_id: CompanyId,
        contact: ContactDetails,
        items: Vec<LineItem>,
        total: Money,
        notes: Option<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }
        for item in &items {
            for line in &item.size_breakdown {
                let expected = checked_line_amount(line.unit_price, line.quantity)
                    .ok_or_else(|| {
                        OrderError::AmountOverflow(format!(
                            "{} size {}",
                            item.reference, line.size_label
                        ))
                    })?;
                if line.subtotal != expected {
                    return Err(OrderError::SubtotalMismatch {
                        reference: item.reference.clone(),
                        size: line.size_label.clone(),
                        expected,
                        actual: line.subtotal,
                    });
                }
            }
        }
        let expected = checked_items_total(&items)
            .ok_or_else(|| OrderError::AmountOverflow("order total".into()))?;
        if total != expected {
            return Err(OrderError::TotalMismatch {
                expected,
                actual: total,
            });
        }

        let notes = notes.filter(|n| !n.trim().is_empty());
        Ok(Self {
            company_id,
            contact,
            items,
            total,
            notes,
            date,
            time,
        })
    }
}
