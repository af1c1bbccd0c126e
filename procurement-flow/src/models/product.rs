//! Product catalog models returned by the remote search endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A concrete purchasable SKU of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub color: String,
    pub size: String,
    pub mrp: Decimal,
}

impl Variant {
    /// Display label used wherever a variant is shown next to its product.
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.color, self.size)
    }
}

/// Search hit from `GET /products/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Full record from `GET /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductDetail {
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}
