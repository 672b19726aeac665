//! Selection state for a single in-progress order.

use crate::model::{checked_line_amount, Money, Product, ProductId};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub product_id: ProductId,
    pub size_label: String,
}

/// A chosen quantity of one size. The unit price is copied from the catalog when chosen
/// and never re-read.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product_id: ProductId,
    pub size_label: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl Selection {
    /// Saturates at [`Money::MAX`].
    pub fn subtotal(&self) -> Money {
        self.checked_subtotal().unwrap_or(Money::MAX)
    }

    pub fn checked_subtotal(&self) -> Option<Money> {
        checked_line_amount(self.unit_price, self.quantity)
    }
}

/// Plain storage: products and sizes are not validated here.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selections: HashMap<SelectionKey, Selection>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the selection for `(product_id, size_label)`. A quantity of 0
    /// removes it instead. `unit_price` must not be negative.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        size_label: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) {
        debug_assert!(unit_price >= Money::ZERO);
        let key = SelectionKey {
            product_id,
            size_label: size_label.into(),
        };
        if quantity == 0 {
            self.selections.remove(&key);
            return;
        }
        let selection = Selection {
            product_id,
            size_label: key.size_label.clone(),
            quantity,
            unit_price,
        };
        self.selections.insert(key, selection);
    }

    /// No-op when nothing is selected for the key.
    pub fn remove_selection(&mut self, product_id: ProductId, size_label: &str) {
        self.selections.remove(&SelectionKey {
            product_id,
            size_label: size_label.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn get(&self, product_id: ProductId, size_label: &str) -> Option<&Selection> {
        self.selections.get(&SelectionKey {
            product_id,
            size_label: size_label.to_string(),
        })
    }

    /// Selected quantity for the key, 0 when unselected.
    pub fn quantity_of(&self, product_id: ProductId, size_label: &str) -> u32 {
        self.get(product_id, size_label)
            .map_or(0, |selection| selection.quantity)
    }

    /// Sum of `quantity * unit_price`, recomputed from every selection on each call.
    /// Saturates at [`Money::MAX`]; see [`SelectionStore::checked_total`].
    pub fn total(&self) -> Money {
        self.checked_total().unwrap_or(Money::MAX)
    }

    /// `None` when the total does not fit in [`Money`].
    pub fn checked_total(&self) -> Option<Money> {
        self.selections
            .values()
            .map(Selection::checked_subtotal)
            .try_fold(Money::ZERO, |acc, subtotal| acc.checked_add(subtotal?))
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Unordered.
    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.values()
    }

    /// Drops selections whose product is not in `catalog` and returns how many were dropped.
    pub fn retain_catalog(&mut self, catalog: &[Product]) -> usize {
        let known: HashSet<ProductId> = catalog.iter().map(|p| p.id).collect();
        let before = self.selections.len();
        self.selections
            .retain(|key, _| known.contains(&key.product_id));
        before - self.selections.len()
    }
}
