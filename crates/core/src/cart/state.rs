//! Cart state and its reducer.

use serde::{Deserialize, Serialize};

use super::{CartItem, LineKey, OrderLine};
use crate::types::{Price, Product};

/// An intent to change the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit, merging into an existing line with the same key.
    AddItem {
        product: Product,
        size: String,
        color: Option<String>,
    },
    /// Drop the line with this key, if any.
    RemoveItem { key: LineKey },
    /// Set the line's quantity. Zero or negative removes the line.
    UpdateQuantity { key: LineKey, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::Clear => "clear",
        }
    }
}

/// The cart's line items and their derived total.
///
/// Fields are private so that the only way to change a state is through
/// [`CartState::apply`]. Deserializing goes through [`CartState::from_items`]
/// and ignores any stored total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct CartState {
    items: Vec<CartItem>,
    total: Price,
}

/// Persisted form of a cart. `total` is accepted and discarded.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        Self::from_items(snapshot.items)
    }
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO,
        }
    }

    /// Rebuild a cart from persisted items.
    ///
    /// Lines with the same key are merged by summing their quantities, in
    /// order of first appearance. Zero-quantity lines are dropped.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut merged: Vec<CartItem> = Vec::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            let key = item.key();
            if let Some(existing) = merged.iter_mut().find(|line| line.matches(&key)) {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            } else {
                merged.push(item);
            }
        }

        let mut state = Self {
            items: merged,
            total: Price::ZERO,
        };
        state.recompute_total();
        state
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of price × quantity over all items.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units, as shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Look up the line with identity `key`.
    #[must_use]
    pub fn find(&self, key: &LineKey) -> Option<&CartItem> {
        self.items.iter().find(|item| item.matches(key))
    }

    /// Order submission lines, in cart order.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items.iter().map(OrderLine::from).collect()
    }

    /// Apply `action` in place. Returns whether anything changed.
    pub fn apply(&mut self, action: CartAction) -> bool {
        let changed = match action {
            CartAction::AddItem {
                product,
                size,
                color,
            } => self.add(product, size, color),
            CartAction::RemoveItem { key } => self.remove(&key),
            CartAction::UpdateQuantity { key, quantity } => self.update_quantity(&key, quantity),
            CartAction::Clear => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
        };

        self.recompute_total();
        changed
    }

    fn add(&mut self, product: Product, size: String, color: Option<String>) -> bool {
        let existing = self.items.iter_mut().find(|item| {
            item.product.id == product.id && item.size == size && item.color == color
        });

        match existing {
            Some(item) if item.quantity == u32::MAX => false,
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => {
                self.items.push(CartItem::new(product, size, color));
                true
            }
        }
    }

    fn remove(&mut self, key: &LineKey) -> bool {
        let Some(index) = self.items.iter().position(|item| item.matches(key)) else {
            return false;
        };
        self.items.remove(index);
        true
    }

    fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(key);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.matches(key)) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

/// Pure reducer: the state that results from applying `action` to `state`.
#[must_use]
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let mut next = state.clone();
    next.apply(action);
    next
}
