//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GREENGROCER_DATA_DIR` - Directory holding the store files (default: current directory)
//! - `GREENGROCER_CART_FILE` - Cart file name (default: `cart.json`)
//! - `GREENGROCER_WISHLIST_FILE` - Wishlist file name (default: `wishlist.json`)
//!
//! File names are bare names resolved against the data directory; values
//! containing path separators are rejected.

use std::path::PathBuf;

use thiserror::Error;

use crate::cart::CartStore;
use crate::wishlist::WishlistStore;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store layer configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory both store files live in.
    pub data_dir: PathBuf,
    /// Cart file name within the data directory.
    pub cart_file: String,
    /// Wishlist file name within the data directory.
    pub wishlist_file: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a configured file name is empty or contains
    /// path separators.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("GREENGROCER_DATA_DIR", "."));
        let cart_file = get_file_name("GREENGROCER_CART_FILE", "cart.json")?;
        let wishlist_file = get_file_name("GREENGROCER_WISHLIST_FILE", "wishlist.json")?;

        Ok(Self {
            data_dir,
            cart_file,
            wishlist_file,
        })
    }

    /// Full path of the cart file.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join(&self.cart_file)
    }

    /// Full path of the wishlist file.
    #[must_use]
    pub fn wishlist_path(&self) -> PathBuf {
        self.data_dir.join(&self.wishlist_file)
    }

    /// A cart store handle over the configured path.
    #[must_use]
    pub fn cart_store(&self) -> CartStore {
        CartStore::new(self.cart_path())
    }

    /// A wishlist store handle over the configured path.
    #[must_use]
    pub fn wishlist_store(&self) -> WishlistStore {
        WishlistStore::new(self.wishlist_path())
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a file-name environment variable, validated to be a bare name.
fn get_file_name(key: &str, default: &str) -> Result<String, ConfigError> {
    let name = get_env_or_default(key, default);
    if name.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "file name cannot be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "file name cannot contain path separators".to_string(),
        ));
    }
    Ok(name)
}
