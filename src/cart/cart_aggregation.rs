use rust_decimal::Decimal;

use crate::delivery::DeliveryOption;

use super::cart_model::CartItem;

/// Sum of `unit_price * quantity` over all items; 0 for an empty cart.
pub fn total_price(items: &[CartItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc + item.unit_price * Decimal::from(item.quantity)
    })
}

/// Sum of item quantities; 0 for an empty cart.
pub fn total_quantity(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of `(original - current) * quantity`, counted only for items whose
/// original price is above the current one.
pub fn total_savings(items: &[CartItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        match item.original_unit_price {
            Some(original) if original > item.unit_price => {
                acc + (original - item.unit_price) * Decimal::from(item.quantity)
            }
            _ => acc,
        }
    })
}

/// Flat delivery fee for an order subtotal: free for pickup, free at or
/// above `free_threshold`, `fee` otherwise.
pub fn delivery_fee(
    total_amount: Decimal,
    delivery_option: DeliveryOption,
    free_threshold: Decimal,
    fee: Decimal,
) -> Decimal {
    if delivery_option == DeliveryOption::Pickup {
        return Decimal::ZERO;
    }
    if total_amount >= free_threshold {
        return Decimal::ZERO;
    }
    fee
}

/// [`delivery_fee`] with the storefront's standard threshold and fee, used
/// when the server-side configuration is not in play.
pub fn default_delivery_fee(total_amount: Decimal, delivery_option: DeliveryOption) -> Decimal {
    delivery_fee(
        total_amount,
        delivery_option,
        crate::constants::FREE_DELIVERY_THRESHOLD,
        crate::constants::DEFAULT_DELIVERY_FEE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(price: Decimal, original: Option<Decimal>, quantity: i64) -> CartItem {
        CartItem {
            id: "i1".to_string(),
            product_id: "p1".to_string(),
            size_id: None,
            name: "Paneer 200g".to_string(),
            quantity,
            unit_price: price,
            original_unit_price: original,
            is_favorite: false,
            product: None,
        }
    }

    #[test]
    fn test_totals_on_empty_cart_are_zero() {
        assert_eq!(total_price(&[]), Decimal::ZERO);
        assert_eq!(total_quantity(&[]), 0);
        assert_eq!(total_savings(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_price_and_quantity() {
        let items = vec![item(dec!(100), None, 2), item(dec!(45.50), None, 3)];
        assert_eq!(total_price(&items), dec!(336.50));
        assert_eq!(total_quantity(&items), 5);
    }

    #[test]
    fn test_total_savings_counts_only_discounted_items() {
        let items = vec![
            // (150 - 100) * 2 = 100
            item(dec!(100), Some(dec!(150)), 2),
            // original below current price contributes nothing
            item(dec!(100), Some(dec!(90)), 1),
            // no original price contributes nothing
            item(dec!(100), None, 4),
        ];
        assert_eq!(total_savings(&items), dec!(100));
    }

    #[test]
    fn test_delivery_fee_threshold() {
        let threshold = dec!(1000);
        let fee = dec!(200);
        assert_eq!(
            delivery_fee(dec!(999), DeliveryOption::Delivery, threshold, fee),
            dec!(200)
        );
        assert_eq!(
            delivery_fee(dec!(1000), DeliveryOption::Delivery, threshold, fee),
            Decimal::ZERO
        );
        assert_eq!(
            delivery_fee(dec!(1), DeliveryOption::Pickup, threshold, fee),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_default_delivery_fee_uses_standard_rule() {
        assert_eq!(
            default_delivery_fee(dec!(999), DeliveryOption::Delivery),
            dec!(200)
        );
        assert_eq!(
            default_delivery_fee(dec!(1000), DeliveryOption::Delivery),
            Decimal::ZERO
        );
    }
}
