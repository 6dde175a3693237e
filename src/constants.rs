use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Order subtotal at or above which delivery is free
pub const FREE_DELIVERY_THRESHOLD: Decimal = dec!(1000);

/// Flat delivery fee charged below the free-delivery threshold
pub const DEFAULT_DELIVERY_FEE: Decimal = dec!(200);
