//! Line item accumulated during procurement creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selected (product, variant, quantity, unit price) tuple.
///
/// Owned by the accumulator for the lifetime of a single creation
/// session; discarded on submit or cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub variant_id: String,
    pub variant_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// Line amount: `quantity × unit_price`.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
