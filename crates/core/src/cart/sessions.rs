//! Per-session cart registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::{CartState, CartStore};
use crate::types::SessionId;

/// Errors from looking up a cart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The session never opened a cart, or it was already closed.
    #[error("no cart is open for session {0}")]
    NoSession(SessionId),
}

/// Cart stores keyed by shopper session.
///
/// Carts exist from [`open`](Self::open) until [`close`](Self::close).
/// Reading or writing a cart for a session that is not open is a usage
/// error, not an empty cart.
#[derive(Debug, Default)]
pub struct CartSessions {
    carts: HashMap<SessionId, CartStore>,
}

impl CartSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a cart for `session`, or return the one already open.
    pub fn open(&mut self, session: SessionId) -> &mut CartStore {
        self.carts.entry(session).or_insert_with(|| {
            tracing::debug!("Opened cart");
            CartStore::new()
        })
    }

    /// Open `session` with a rehydrated cart, replacing any open one.
    pub fn restore(&mut self, session: SessionId, state: CartState) -> &mut CartStore {
        let store = CartStore::with_state(state);
        match self.carts.entry(session) {
            Entry::Occupied(mut entry) => {
                entry.insert(store);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(store),
        }
    }

    /// Borrow the cart for `session`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoSession` if the session has no open cart.
    pub fn get(&self, session: &SessionId) -> Result<&CartStore, CartError> {
        self.carts
            .get(session)
            .ok_or_else(|| CartError::NoSession(session.clone()))
    }

    /// Mutably borrow the cart for `session`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoSession` if the session has no open cart.
    pub fn get_mut(&mut self, session: &SessionId) -> Result<&mut CartStore, CartError> {
        self.carts
            .get_mut(session)
            .ok_or_else(|| CartError::NoSession(session.clone()))
    }

    /// End `session`, returning its final cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoSession` if the session has no open cart.
    pub fn close(&mut self, session: &SessionId) -> Result<CartState, CartError> {
        self.carts
            .remove(session)
            .map(CartStore::into_state)
            .ok_or_else(|| CartError::NoSession(session.clone()))
    }

    /// Number of open carts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
