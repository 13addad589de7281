//! Session cart store with change notification.

use core::fmt;

use tracing::instrument;

use super::{CartAction, CartState, LineKey};
use crate::types::{Product, ProductId};

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartState)>;

/// The authoritative cart for one shopper session.
///
/// Construct one per session and pass it to whatever reads or mutates the
/// cart. All operations are synchronous; listeners run on the caller's
/// thread, after the state has been replaced, and only when it changed.
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_state(CartState::new())
    }

    /// Create a store from a rehydrated cart.
    #[must_use]
    pub const fn with_state(state: CartState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart snapshot.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply `action` and notify listeners if the cart changed.
    ///
    /// Returns whether the cart changed.
    #[instrument(skip_all, fields(action = action.name()))]
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let changed = self.state.apply(action);

        tracing::debug!(
            changed,
            lines = self.state.items().len(),
            total = %self.state.total(),
            "Cart action applied"
        );

        if changed {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        changed
    }

    /// Add one unit of `product` in `size`/`color`.
    ///
    /// The store does not check `size` against `product.sizes`; callers only
    /// offer sizes the product has.
    pub fn add_item(&mut self, product: Product, size: &str, color: Option<&str>) {
        self.dispatch(CartAction::AddItem {
            product,
            size: size.to_owned(),
            color: color.map(str::to_owned),
        });
    }

    /// Remove the line with this exact key. Missing lines are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str, color: Option<&str>) {
        self.dispatch(CartAction::RemoveItem {
            key: LineKey::new(product_id.clone(), size, color),
        });
    }

    /// Set a line's quantity. Zero or negative removes it.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: Option<&str>,
        quantity: i64,
    ) {
        self.dispatch(CartAction::UpdateQuantity {
            key: LineKey::new(product_id.clone(), size, color),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Register `listener` to run after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Consume the store, returning the final cart.
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.state
    }
}
