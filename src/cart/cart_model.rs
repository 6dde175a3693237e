use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::delivery::DeliveryOption;
use crate::products::ProductSnapshot;

use super::cart_errors::{CartError, Result};

/// Domain model for one line of the cart.
///
/// `id` is server-assigned for authenticated carts and generated locally for
/// guest carts. `unit_price`/`original_unit_price` are display snapshots;
/// the catalog stays the source of truth for current prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<String>,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_unit_price: Option<Decimal>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Guest items keep the snapshot they were added with so totals can be
    /// re-resolved after any mutation; absent on server-owned items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSnapshot>,
}

impl CartItem {
    /// Validates the item before it is allowed to enter a cart
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CartError::InvalidItem("item id cannot be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CartError::InvalidItem(
                "item name cannot be empty".to_string(),
            ));
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(CartError::InvalidItem(
                "item price must be greater than zero".to_string(),
            ));
        }
        if self.quantity <= 0 {
            return Err(CartError::InvalidItem(
                "item quantity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this item is the cart line for the given product+size pair.
    /// Two absent size ids count as a match.
    pub fn matches_identity(&self, product_id: &str, size_id: Option<&str>) -> bool {
        self.product_id == product_id && self.size_id.as_deref() == size_id
    }
}

/// Linear search by item id; ids are unique within a cart by construction.
pub fn find_item<'a>(items: &'a [CartItem], item_id: &str) -> Option<&'a CartItem> {
    items.iter().find(|item| item.id == item_id)
}

/// Input model for adding a product to the cart.
///
/// `product` carries the catalog snapshot a guest cart needs to price a new
/// line; the authenticated path resolves the catalog server-side and ignores
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSnapshot>,
}

impl NewCartItem {
    pub fn validate(&self) -> Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(CartError::InvalidItem(
                "product id cannot be empty".to_string(),
            ));
        }
        if self.quantity <= 0 {
            return Err(CartError::InvalidItem(
                "quantity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// The cart as the rest of the app sees it, whichever repository produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub delivery_option: DeliveryOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

/// Guest cart record as persisted on device.
///
/// `total_items` and `sub_total` are recomputed on every mutation and stored
/// with the items so reads never have to re-derive them. Field names are the
/// store's contract; do not rename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestCartRecord {
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub sub_total: Decimal,
}

impl GuestCartRecord {
    pub fn into_cart(self) -> Cart {
        Cart {
            items: self.items,
            ..Cart::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, product_id: &str, size_id: Option<&str>) -> CartItem {
        CartItem {
            id: id.to_string(),
            product_id: product_id.to_string(),
            size_id: size_id.map(str::to_string),
            name: "Full Cream Milk 1L".to_string(),
            quantity: 1,
            unit_price: dec!(66),
            original_unit_price: None,
            is_favorite: false,
            product: None,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_item() {
        assert!(item("i1", "p1", None).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut bad = item("", "p1", None);
        assert!(bad.validate().is_err());

        bad = item("i1", "p1", None);
        bad.name = "  ".to_string();
        assert!(bad.validate().is_err());

        bad = item("i1", "p1", None);
        bad.unit_price = Decimal::ZERO;
        assert!(bad.validate().is_err());

        bad = item("i1", "p1", None);
        bad.quantity = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_identity_matching_treats_missing_sizes_as_equal() {
        let no_size = item("i1", "p1", None);
        assert!(no_size.matches_identity("p1", None));
        assert!(!no_size.matches_identity("p1", Some("s1")));
        assert!(!no_size.matches_identity("p2", None));

        let sized = item("i2", "p1", Some("s1"));
        assert!(sized.matches_identity("p1", Some("s1")));
        assert!(!sized.matches_identity("p1", Some("s2")));
        assert!(!sized.matches_identity("p1", None));
    }

    #[test]
    fn test_find_item_by_id() {
        let items = vec![item("i1", "p1", None), item("i2", "p2", None)];
        assert_eq!(find_item(&items, "i2").map(|i| i.product_id.as_str()), Some("p2"));
        assert!(find_item(&items, "i3").is_none());
    }

    #[test]
    fn test_guest_record_serializes_with_contract_keys() {
        let record = GuestCartRecord {
            items: vec![],
            total_items: 3,
            sub_total: dec!(120),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("items").is_some());
        assert!(json.get("total_items").is_some());
        assert!(json.get("sub_total").is_some());
    }
}
