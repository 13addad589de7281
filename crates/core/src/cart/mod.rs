//! Session-scoped shopping cart.
//!
//! The cart is a small reducer: [`CartState`] changes only through the four
//! [`CartAction`]s, and every action recomputes the total from the full item
//! list. [`CartStore`] wraps a state with change notification, and
//! [`CartSessions`] maps session IDs to stores for hosts that serve more than
//! one shopper.
//!
//! Invariants that hold after every action:
//! - `total == Σ price × quantity` over all items
//! - no two items share a [`LineKey`]
//! - every item has `quantity >= 1`

mod item;
mod order;
mod sessions;
mod state;
mod store;

pub use item::{CartItem, LineKey};
pub use order::OrderLine;
pub use sessions::{CartError, CartSessions};
pub use state::{CartAction, CartState, reduce};
pub use store::{CartStore, SubscriptionId};
