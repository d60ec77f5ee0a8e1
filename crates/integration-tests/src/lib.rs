//! Integration tests for Greengrocer.
//!
//! Every test in this crate works against real store files in a throwaway
//! temporary directory; nothing is mocked. The scenarios mirror how the
//! enclosing application drives the stores: resolve an identity, ensure
//! entries at signup, then add/remove/view per request.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart semantics end to end, including the on-disk format
//! - `wishlist_flow` - Wishlist set semantics end to end
//! - `ensure_user` - Signup-time seeding and its idempotence
//! - `concurrency` - Serialization of overlapping writers, atomic replace
//! - `config_env` - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Once;

use tempfile::TempDir;

use greengrocer_core::Username;
use greengrocer_store::{Catalog, CartStore, WishlistStore};

/// A demo catalog plus cart and wishlist stores over a temporary directory.
///
/// The directory is removed when the context is dropped.
pub struct TestStores {
    pub catalog: Catalog,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    dir: TempDir,
}

impl TestStores {
    /// Create a fresh context: empty directory, no store files yet.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        let dir = tempfile::tempdir().expect("create temp dir");
        let cart = CartStore::new(dir.path().join("cart.json"));
        let wishlist = WishlistStore::new(dir.path().join("wishlist.json"));
        Self {
            catalog: Catalog::demo(),
            cart,
            wishlist,
            dir,
        }
    }

    /// The temporary directory holding the store files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Parse a store file as raw JSON for format assertions.
    #[must_use]
    pub fn read_json(&self, file_name: &str) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.dir.path().join(file_name))
            .expect("read store file");
        serde_json::from_str(&raw).expect("store file is valid JSON")
    }
}

impl Default for TestStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a username, panicking on invalid test input.
#[must_use]
pub fn user(name: &str) -> Username {
    Username::parse(name).expect("valid test username")
}

/// Install a fmt subscriber once so `RUST_LOG` surfaces store diagnostics
/// during test runs.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
