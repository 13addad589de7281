//! Fashion Store Core - cart and catalog logic for the storefront.
//!
//! This crate holds the two stateful pieces of the storefront that are more
//! than CRUD glue:
//! - the cart store, a reducer over line items keyed by product, size and color
//! - the catalog filter engine, a pure filter/sort pipeline over a fetched
//!   product snapshot
//!
//! # Architecture
//!
//! Like the types it builds on, the core contains no I/O, no HTTP clients and
//! no global state. Hosts construct a [`cart::CartStore`] or
//! [`catalog::CatalogSession`] per user session and pass it explicitly to
//! whatever needs it.
//!
//! # Modules
//!
//! - [`types`] - Product snapshot, newtype IDs and decimal prices
//! - [`api`] - Catalog API wire shapes and their conversion into [`Product`]
//! - [`cart`] - Line items, the cart reducer, the session store and order lines
//! - [`catalog`] - Filter state, sort presets, the filter engine and facets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod types;

pub use types::*;
