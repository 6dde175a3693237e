use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Denormalized snapshot of a catalog product, captured when an item is
/// added to a guest cart. The catalog remains the source of truth for
/// current prices; this snapshot only has to be good enough to reprice the
/// cart without a network round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrp: Option<Decimal>,
    #[serde(default)]
    pub sizes: Vec<ProductSize>,
}

/// A packaging/price variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSize {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrp: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
