//! Integration tests for multi-step cart sessions.
//!
//! These tests drive the cart through the session registry and store the way
//! a storefront host would, and check the snapshot checkout would read.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use fashion_store_core::cart::{CartError, CartSessions, CartState, CartStore, LineKey};
use fashion_store_core::{Price, ProductId, SessionId};
use fashion_store_integration_tests::{jacket, shirt};

// =============================================================================
// Store Scenarios
// =============================================================================

#[test]
fn test_end_to_end_session() {
    let mut store = CartStore::new();
    let shirt_id = ProductId::new("shirt");
    let jacket_id = ProductId::new("jacket");

    store.add_item(shirt(), "M", None);
    store.add_item(shirt(), "M", None);
    store.add_item(jacket(), "L", Some("blue"));
    store.update_quantity(&shirt_id, "M", None, 5);
    store.remove_item(&jacket_id, "L", Some("blue"));

    let state = store.state();
    assert_eq!(state.items().len(), 1);
    let line = &state.items()[0];
    assert_eq!(line.product.id, shirt_id);
    assert_eq!(line.size, "M");
    assert_eq!(line.color, None);
    assert_eq!(line.quantity, 5);
    assert_eq!(state.total(), shirt().price.times(5));
}

#[test]
fn test_colorless_adds_merge() {
    let mut store = CartStore::new();
    store.add_item(shirt(), "M", None);
    store.add_item(shirt(), "M", None);

    assert_eq!(store.state().items().len(), 1);
    assert_eq!(store.state().items()[0].quantity, 2);
}

#[test]
fn test_same_product_different_colors_are_separate_lines() {
    let mut store = CartStore::new();
    store.add_item(jacket(), "M", Some("blue"));
    store.add_item(jacket(), "M", Some("olive"));
    store.add_item(jacket(), "M", None);

    assert_eq!(store.state().items().len(), 3);
    assert_eq!(store.state().total(), Price::from_cents(54000));
}

#[test]
fn test_checkout_snapshot_is_consistent() {
    let mut store = CartStore::new();
    store.add_item(jacket(), "L", Some("olive"));
    store.add_item(shirt(), "S", None);
    store.update_quantity(&ProductId::new("shirt"), "S", None, 3);

    let state = store.state();
    let lines = state.order_lines();
    let json = serde_json::to_value(&lines).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "product_id": "jacket", "quantity": 1, "size": "L", "color": "olive" },
            { "product_id": "shirt", "quantity": 3, "size": "S" }
        ])
    );
    assert_eq!(state.item_count(), 4);
    assert_eq!(state.total(), Price::from_cents(18000 + 3 * 4500));
}

#[test]
fn test_subscribers_track_badge_count() {
    let badge = Rc::new(RefCell::new(0_u64));
    let mut store = CartStore::new();
    let sink = Rc::clone(&badge);
    store.subscribe(move |state| *sink.borrow_mut() = state.item_count());

    store.add_item(shirt(), "M", None);
    store.add_item(jacket(), "M", Some("blue"));
    store.update_quantity(&ProductId::new("shirt"), "M", None, 4);
    assert_eq!(*badge.borrow(), 5);

    store.clear();
    assert_eq!(*badge.borrow(), 0);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_persisted_cart_rehydrates_with_invariants() {
    let mut store = CartStore::new();
    store.add_item(shirt(), "M", None);
    store.add_item(jacket(), "L", Some("blue"));
    let saved = serde_json::to_string(store.state()).unwrap();

    let restored: CartState = serde_json::from_str(&saved).unwrap();
    assert_eq!(&restored, store.state());

    let mut resumed = CartStore::with_state(restored);
    resumed.add_item(shirt(), "M", None);
    assert_eq!(
        resumed
            .state()
            .find(&LineKey::new("shirt", "M", None))
            .unwrap()
            .quantity,
        2
    );
}

#[test]
fn test_tampered_persisted_cart_is_repaired() {
    let line = serde_json::to_value(shirt()).unwrap();
    let tampered = serde_json::json!({
        "items": [
            { "product": line, "size": "M", "quantity": 1 },
            { "product": line, "size": "M", "quantity": 2 },
            { "product": line, "size": "L", "quantity": 0 }
        ],
        "total": "0.01"
    });

    let state: CartState = serde_json::from_value(tampered).unwrap();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].quantity, 3);
    assert_eq!(state.total(), Price::from_cents(13500));
}

// =============================================================================
// Session Registry
// =============================================================================

#[test]
fn test_cart_outside_session_is_a_usage_error() {
    let mut sessions = CartSessions::new();
    let session = SessionId::new("anon-1");

    assert!(matches!(
        sessions.get_mut(&session),
        Err(CartError::NoSession(_))
    ));

    sessions.open(session.clone()).add_item(shirt(), "L", None);
    let closed = sessions.close(&session).unwrap();
    assert_eq!(closed.total(), Price::from_cents(4500));
    assert!(sessions.get(&session).is_err());
}
