use rust_decimal::Decimal;

use crate::products::resolve_unit_price;

use super::cart_aggregation::{total_price, total_quantity};
use super::cart_model::{CartItem, GuestCartRecord};

/// Cart state as a plain value: items plus the derived totals that are
/// persisted alongside them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub sub_total: Decimal,
}

/// The four mutations a cart supports. Everything else is derived.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge-add: an existing `(product_id, size_id)` line gains quantity,
    /// otherwise the item is appended.
    Add(CartItem),
    /// Set an item's quantity to an exact value; zero or below removes it.
    SetQuantity { item_id: String, quantity: i64 },
    Remove { item_id: String },
    Clear,
}

/// Pure reducer over cart state.
///
/// All quantity policy lives here: add merges by `(product_id, size_id)`
/// identity, a set to zero or below removes the line, and every transition
/// reprices items from their stored snapshots before the totals are
/// recomputed. Both cart repositories route their mutations through this
/// function so the two modes cannot drift apart.
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    let mut items = state.items;

    match action {
        CartAction::Add(item) => {
            let existing = items
                .iter_mut()
                .find(|i| i.matches_identity(&item.product_id, item.size_id.as_deref()));
            match existing {
                Some(line) => line.quantity += item.quantity,
                None => items.push(item),
            }
        }
        CartAction::SetQuantity { item_id, quantity } => {
            if quantity <= 0 {
                items.retain(|i| i.id != item_id);
            } else if let Some(line) = items.iter_mut().find(|i| i.id == item_id) {
                line.quantity = quantity;
            }
        }
        CartAction::Remove { item_id } => {
            items.retain(|i| i.id != item_id);
        }
        CartAction::Clear => items.clear(),
    }

    rebuild(items)
}

/// Reprices items from their snapshots and recomputes the derived totals.
fn rebuild(mut items: Vec<CartItem>) -> CartState {
    for item in &mut items {
        if let Some(snapshot) = &item.product {
            let (unit_price, mrp) = resolve_unit_price(snapshot, item.size_id.as_deref());
            item.unit_price = unit_price;
            item.original_unit_price = mrp;
        }
    }

    let total_items = total_quantity(&items);
    let sub_total = total_price(&items);

    CartState {
        items,
        total_items,
        sub_total,
    }
}

impl From<GuestCartRecord> for CartState {
    fn from(record: GuestCartRecord) -> Self {
        Self {
            items: record.items,
            total_items: record.total_items,
            sub_total: record.sub_total,
        }
    }
}

impl From<CartState> for GuestCartRecord {
    fn from(state: CartState) -> Self {
        Self {
            items: state.items,
            total_items: state.total_items,
            sub_total: state.sub_total,
        }
    }
}
