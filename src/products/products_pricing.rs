use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::products_model::{ProductSize, ProductSnapshot};

/// Percentage discount of `sale_price` off `mrp`, rounded to the nearest
/// whole percent (half away from zero). Returns 0 unless
/// `mrp > sale_price > 0`.
pub fn calculate_discount(mrp: Decimal, sale_price: Decimal) -> i32 {
    if mrp <= Decimal::ZERO || sale_price <= Decimal::ZERO || mrp <= sale_price {
        return 0;
    }
    let percent = (mrp - sale_price) / mrp * dec!(100);
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

/// Best discount across a product's size variants; 0 when there are none.
pub fn best_discount(sizes: &[ProductSize]) -> i32 {
    sizes
        .iter()
        .map(|size| {
            calculate_discount(
                size.mrp.unwrap_or_default(),
                size.sale_price.unwrap_or_default(),
            )
        })
        .max()
        .unwrap_or(0)
}

/// The size shown by default: lowest `sort_order` wins, missing values sort
/// as 0, and the first listed variant wins ties.
pub fn primary_size(sizes: &[ProductSize]) -> Option<&ProductSize> {
    sizes.iter().min_by_key(|size| size.sort_order.unwrap_or(0))
}

/// Resolves the unit price (and MRP) for a cart item from its stored product
/// snapshot.
///
/// Resolution order: the matching size's sale price when `size_id` names a
/// size the snapshot knows, otherwise the snapshot's top-level sale price.
/// A missing price resolves to 0 rather than an error so that repricing the
/// cart can never fail.
pub fn resolve_unit_price(
    snapshot: &ProductSnapshot,
    size_id: Option<&str>,
) -> (Decimal, Option<Decimal>) {
    if let Some(size_id) = size_id {
        if let Some(size) = snapshot.sizes.iter().find(|s| s.id == size_id) {
            return (size.sale_price.unwrap_or(Decimal::ZERO), size.mrp);
        }
    }
    (snapshot.sale_price.unwrap_or(Decimal::ZERO), snapshot.mrp)
}
