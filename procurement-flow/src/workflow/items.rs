//! Line-item accumulator for the current creation session.

use console_core::error::FlowError;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::LineItem;

/// Ordered collection of the items selected so far.
///
/// Duplicates by product+variant stay separate lines; the accumulator
/// never merges by key.
#[derive(Debug, Default, Clone)]
pub struct ItemAccumulator {
    items: Vec<LineItem>,
}

impl ItemAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Fails when no variant was selected upstream or
    /// the quantity is zero.
    pub fn add(&mut self, item: LineItem) -> Result<(), FlowError> {
        if item.variant_id.is_empty() {
            return Err(FlowError::validation("variant", "select a variant first"));
        }
        if item.quantity == 0 {
            return Err(FlowError::validation(
                "quantity",
                "quantity must be at least 1",
            ));
        }
        if item.unit_price.is_sign_negative() {
            return Err(FlowError::validation(
                "unitPrice",
                "unit price cannot be negative",
            ));
        }

        debug!(
            product_id = %item.product_id,
            variant_id = %item.variant_id,
            quantity = item.quantity,
            "line item added"
        );
        self.items.push(item);
        Ok(())
    }

    /// Remove the item at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, FlowError> {
        if index >= self.items.len() {
            return Err(FlowError::validation(
                "index",
                format!("no line item at index {index}"),
            ));
        }
        let removed = self.items.remove(index);
        debug!(index, product_id = %removed.product_id, "line item removed");
        Ok(removed)
    }

    /// Running subtotal, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::amount).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(variant_id: &str, quantity: u32, unit_price: Decimal) -> LineItem {
        LineItem {
            product_id: "prod-1".to_string(),
            product_name: "Cotton Shirt".to_string(),
            variant_id: variant_id.to_string(),
            variant_name: "Blue / M".to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn total_tracks_adds_and_removes() {
        let mut acc = ItemAccumulator::new();
        assert_eq!(acc.total(), Decimal::ZERO);

        acc.add(item("var-1", 2, dec!(100.00))).unwrap();
        acc.add(item("var-2", 1, dec!(50.00))).unwrap();
        assert_eq!(acc.total(), dec!(250.00));

        acc.remove(0).unwrap();
        assert_eq!(acc.total(), dec!(50.00));

        acc.remove(0).unwrap();
        assert_eq!(acc.total(), Decimal::ZERO);
    }

    #[test]
    fn duplicate_product_variant_stays_separate_lines() {
        let mut acc = ItemAccumulator::new();
        acc.add(item("var-1", 1, dec!(10))).unwrap();
        acc.add(item("var-1", 1, dec!(10))).unwrap();
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.total(), dec!(20));
    }

    #[test]
    fn add_rejects_missing_variant_and_zero_quantity() {
        let mut acc = ItemAccumulator::new();

        let err = acc.add(item("", 1, dec!(10))).unwrap_err();
        assert_eq!(err.field(), Some("variant"));

        let err = acc.add(item("var-1", 0, dec!(10))).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        assert!(acc.is_empty());
    }

    #[test]
    fn remove_out_of_range_leaves_items_intact() {
        let mut acc = ItemAccumulator::new();
        acc.add(item("var-1", 1, dec!(10))).unwrap();

        let err = acc.remove(5).unwrap_err();
        assert_eq!(err.field(), Some("index"));
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut acc = ItemAccumulator::new();
        acc.add(item("var-1", 1, dec!(1))).unwrap();
        acc.add(item("var-2", 1, dec!(2))).unwrap();
        acc.add(item("var-3", 1, dec!(3))).unwrap();

        acc.remove(1).unwrap();
        let variants: Vec<_> = acc.items().iter().map(|i| i.variant_id.as_str()).collect();
        assert_eq!(variants, vec!["var-1", "var-3"]);
    }
}
