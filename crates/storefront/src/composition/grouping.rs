//! Aggregation of selections into line items.

use super::{Selection, SelectionStore};
use crate::model::{items_total, LineItem, Money, Product, ProductId, SizeLine};
use std::collections::HashMap;
use tracing::warn;

/// Output of [`recompute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recomputed {
    pub total: Money,
    pub line_items: Vec<LineItem>,
}

impl Recomputed {
    /// Total of what the line items actually show. Differs from `total` only while the store
    /// holds selections for products missing from the catalog.
    pub fn items_total(&self) -> Money {
        items_total(&self.line_items)
    }
}

/// Recomputes the total and the line items from scratch.
pub fn recompute(selections: &SelectionStore, catalog: &[Product]) -> Recomputed {
    Recomputed {
        total: selections.total(),
        line_items: to_line_items(selections, catalog),
    }
}

/// One [`LineItem`] per selected product, in catalog order. Sizes follow the product's
/// declared order; sizes the product does not declare go last, by label. Selections for
/// products absent from `catalog` are skipped.
pub fn to_line_items(selections: &SelectionStore, catalog: &[Product]) -> Vec<LineItem> {
    let mut by_product: HashMap<ProductId, Vec<&Selection>> = HashMap::new();
    for selection in selections.iter() {
        by_product
            .entry(selection.product_id)
            .or_default()
            .push(selection);
    }

    let mut line_items = Vec::with_capacity(by_product.len());
    for product in catalog {
        let Some(mut chosen) = by_product.remove(&product.id) else {
            continue;
        };
        chosen.sort_by(|a, b| {
            let rank = |s: &Selection| product.size_position(&s.size_label).unwrap_or(usize::MAX);
            rank(a)
                .cmp(&rank(b))
                .then_with(|| a.size_label.cmp(&b.size_label))
        });

        line_items.push(LineItem {
            product_id: product.id,
            reference: product.reference.clone(),
            name: product.name.clone(),
            size_breakdown: chosen
                .into_iter()
                .map(|s| SizeLine::new(s.size_label.clone(), s.unit_price, s.quantity))
                .collect(),
        });
    }

    for (product_id, dropped) in by_product {
        warn!(%product_id, selections = dropped.len(), "Skipping selections for a product not in the catalog");
    }
    line_items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanyId, SizeOption};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn product(reference: &str, sizes: &[(&str, Money)]) -> Product {
        Product {
            id: ProductId::new(),
            company_id: CompanyId::new(),
            reference: reference.into(),
            name: format!("Produto {reference}"),
            image_url: None,
            sizes: sizes
                .iter()
                .map(|(label, price)| SizeOption::new(*label, *price))
                .collect(),
            quantity_tiers: vec![6, 12, 24],
            active: true,
            is_new: false,
            out_of_stock: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn two_sizes_of_one_product() {
        let p1 = product("P1", &[("M", dec!(5.00)), ("G", dec!(6.00))]);
        let catalog = vec![p1.clone()];
        let mut store = SelectionStore::new();
        store.set_quantity(p1.id, "M", 6, dec!(5.00));
        store.set_quantity(p1.id, "G", 12, dec!(6.00));

        let result = recompute(&store, &catalog);
        assert_eq!(result.total, dec!(102.00));
        assert_eq!(result.line_items.len(), 1);
        assert_eq!(
            result.line_items[0].size_breakdown,
            vec![
                SizeLine::new("M", dec!(5.00), 6),
                SizeLine::new("G", dec!(6.00), 12),
            ]
        );
        assert_eq!(result.line_items[0].size_breakdown[0].subtotal, dec!(30.00));
        assert_eq!(result.line_items[0].size_breakdown[1].subtotal, dec!(72.00));

        store.set_quantity(p1.id, "M", 0, dec!(5.00));
        let result = recompute(&store, &catalog);
        assert_eq!(result.total, dec!(72.00));
        assert_eq!(
            result.line_items[0].size_breakdown,
            vec![SizeLine::new("G", dec!(6.00), 12)]
        );
    }

    #[test]
    fn sizes_follow_declared_order_not_selection_order() {
        let p = product(
            "R",
            &[("P", dec!(1)), ("M", dec!(2)), ("G", dec!(3)), ("GG", dec!(4))],
        );
        let catalog = vec![p.clone()];
        let mut store = SelectionStore::new();
        store.set_quantity(p.id, "GG", 6, dec!(4));
        store.set_quantity(p.id, "XG", 6, dec!(5));
        store.set_quantity(p.id, "P", 6, dec!(1));
        store.set_quantity(p.id, "G", 6, dec!(3));

        let first = to_line_items(&store, &catalog);
        let second = to_line_items(&store, &catalog);
        assert_eq!(first, second);

        let labels: Vec<&str> = first[0]
            .size_breakdown
            .iter()
            .map(|s| s.size_label.as_str())
            .collect();
        assert_eq!(labels, vec!["P", "G", "GG", "XG"]);
    }

    #[test]
    fn line_items_follow_catalog_order() {
        let a = product("A", &[("U", dec!(1))]);
        let b = product("B", &[("U", dec!(2))]);
        let catalog = vec![b.clone(), a.clone()];
        let mut store = SelectionStore::new();
        store.set_quantity(a.id, "U", 6, dec!(1));
        store.set_quantity(b.id, "U", 6, dec!(2));

        let references: Vec<String> = to_line_items(&store, &catalog)
            .into_iter()
            .map(|item| item.reference)
            .collect();
        assert_eq!(references, vec!["B", "A"]);
    }

    #[test]
    fn unknown_products_are_skipped() {
        let known = product("K", &[("M", dec!(5.00))]);
        let mut store = SelectionStore::new();
        store.set_quantity(known.id, "M", 6, dec!(5.00));
        store.set_quantity(ProductId::new(), "M", 12, dec!(9.99));

        let result = recompute(&store, &[known.clone()]);
        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.line_items[0].product_id, known.id);
        assert_eq!(result.items_total(), dec!(30.00));

        assert!(to_line_items(&store, &[]).is_empty());

        assert_eq!(store.retain_catalog(&[known]), 1);
        assert_eq!(store.total(), dec!(30.00));
    }

    #[test]
    fn empty_store_has_nothing_to_show() {
        let result = recompute(&SelectionStore::new(), &[product("X", &[("U", dec!(1))])]);
        assert_eq!(result.total, Money::ZERO);
        assert!(result.line_items.is_empty());
    }
}
