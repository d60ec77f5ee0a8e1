//! Greengrocer Store - product catalog and durable per-user item lists.
//!
//! This crate holds the state layer of the Greengrocer demo shop: a typed,
//! read-only product [`catalog`], and two file-persisted per-user item
//! stores — the [`cart`] (product quantities) and the [`wishlist`] (a set
//! of products). Request handlers resolve the caller through [`session`],
//! then drive the stores with explicit identities.
//!
//! Everything above this layer — routing, templating, authentication,
//! sessions — belongs to the enclosing web application and is not part of
//! this crate.
//!
//! # Modules
//!
//! - [`catalog`] - Product records, demo data set, filtering and sorting
//! - [`itemlist`] - Generic file-backed per-user item list store
//! - [`cart`] - Cart list semantics (quantities)
//! - [`wishlist`] - Wishlist list semantics (set)
//! - [`session`] - Caller identity seam
//! - [`config`] - Environment-driven store configuration
//! - [`error`] - Error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod itemlist;
pub mod session;
pub mod wishlist;

pub use cart::{Cart, CartStore};
pub use catalog::{Catalog, Category, Product, SortKey};
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use itemlist::{AddOutcome, ItemList, ItemListStore, RemoveOutcome, StoreDocument};
pub use session::require_identity;
pub use wishlist::{Wishlist, WishlistStore};
