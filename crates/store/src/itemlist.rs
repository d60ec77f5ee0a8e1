//! Generic file-backed per-user item list store.
//!
//! One JSON document per store holds every user's list, keyed by username:
//!
//! ```json
//! {"alice": {"products": {"1": 2}}, "bob": {"products": {}}}
//! ```
//!
//! Every logical operation reads the full document; every mutation rewrites
//! it in full. The backing file is created lazily on first access, seeded
//! with an empty entry for the requesting user.
//!
//! # Concurrency
//!
//! A per-store mutex serializes each read-modify-write cycle, so overlapping
//! operations through one [`ItemListStore`] handle cannot lose updates.
//! Writes land in a uniquely named sibling file and are moved into place
//! with an atomic rename, so an operation aborted mid-write never leaves a
//! truncated document at the store path.
//!
//! Neither guard extends across processes: two processes sharing one store
//! file still interleave as last-writer-wins, with no isolation. That
//! matches the historical behavior of these files and is a documented
//! limitation, not a detected condition.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use greengrocer_core::{ProductId, Username};

use crate::catalog::Catalog;
use crate::error::StoreError;

/// The full on-disk document: every user's list in one mapping.
pub type StoreDocument<L> = BTreeMap<Username, L>;

/// Outcome of an add operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was recorded: inserted, or its quantity incremented.
    Added,
    /// The list holds at most one of each product and already has this one.
    /// Nothing was changed.
    AlreadyPresent,
    /// The product is unknown to the catalog. Nothing was changed.
    NotFound,
}

/// Outcome of a remove operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The product's entry was deleted from the list.
    Removed,
    /// The list had no entry for the product. Nothing was changed.
    NotFound,
}

/// Per-user list semantics plugged into [`ItemListStore`].
///
/// Implementations decide what "adding twice" means: the cart increments a
/// quantity, the wishlist refuses the duplicate. Catalog membership is
/// checked by the store before [`ItemList::add`] is ever called, so
/// implementations only report [`AddOutcome::Added`] or
/// [`AddOutcome::AlreadyPresent`].
pub trait ItemList: Default + Clone + Serialize + DeserializeOwned {
    /// Record one unit of `product` in the list.
    fn add(&mut self, product: ProductId) -> AddOutcome;

    /// Drop `product`'s entry from the list entirely.
    fn remove(&mut self, product: &ProductId) -> RemoveOutcome;

    /// Whether the list has an entry for `product`.
    fn contains(&self, product: &ProductId) -> bool;

    /// Whether the list has no entries.
    fn is_empty(&self) -> bool;
}

/// A durable mapping from username to a per-user item list, backed by a
/// single JSON file.
///
/// The store is generic over the list semantics `L`; see
/// [`CartStore`](crate::cart::CartStore) and
/// [`WishlistStore`](crate::wishlist::WishlistStore) for the two concrete
/// shapes.
#[derive(Debug)]
pub struct ItemListStore<L> {
    path: PathBuf,
    lock: Mutex<()>,
    _list: PhantomData<fn() -> L>,
}

impl<L: ItemList> ItemListStore<L> {
    /// Create a store handle over `path`.
    ///
    /// No I/O happens here; the file is created on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _list: PhantomData,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full store document.
    ///
    /// If the backing file does not exist yet it is created containing an
    /// empty entry for `user`, and that initial document is returned.
    ///
    /// # Errors
    ///
    /// [`StoreError::Corrupt`] if the file exists but does not parse;
    /// [`StoreError::Io`] if it cannot be read or initially written.
    pub fn load_or_init(&self, user: &Username) -> Result<StoreDocument<L>, StoreError> {
        let _guard = self.guard();
        self.load_or_init_locked(user)
    }

    /// The item list for `user`, or `None` if the user has no entry.
    ///
    /// # Errors
    ///
    /// Fails as [`load_or_init`](Self::load_or_init).
    pub fn view(&self, user: &Username) -> Result<Option<L>, StoreError> {
        let _guard = self.guard();
        let document = self.load_or_init_locked(user)?;
        Ok(document.get(user).cloned())
    }

    /// Insert an empty list for `user` if absent.
    ///
    /// Called once at account creation. Idempotent: when the user already
    /// has an entry nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Fails as [`load_or_init`](Self::load_or_init).
    pub fn ensure_user(&self, user: &Username) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut document = self.load_or_init_locked(user)?;
        if document.contains_key(user) {
            return Ok(());
        }
        document.insert(user.clone(), L::default());
        self.write_document(&document)
    }

    /// Record one unit of `product` in `user`'s list.
    ///
    /// The product must exist in `catalog`; an unknown product yields
    /// [`AddOutcome::NotFound`] without touching the store. A user with no
    /// entry yet gets one created on first access. The document is only
    /// rewritten when something changed.
    ///
    /// # Errors
    ///
    /// Fails as [`load_or_init`](Self::load_or_init), plus
    /// [`StoreError::Io`] if the rewrite fails.
    pub fn add_item(
        &self,
        catalog: &Catalog,
        user: &Username,
        product: &ProductId,
    ) -> Result<AddOutcome, StoreError> {
        let _guard = self.guard();
        let mut document = self.load_or_init_locked(user)?;

        if !catalog.contains(product) {
            tracing::debug!(%user, %product, "add rejected: product not in catalog");
            return Ok(AddOutcome::NotFound);
        }

        let list = document.entry(user.clone()).or_default();
        let outcome = list.add(product.clone());
        if outcome == AddOutcome::Added {
            self.write_document(&document)?;
        }
        Ok(outcome)
    }

    /// Delete `product`'s entry from `user`'s list.
    ///
    /// A product not present in the list yields [`RemoveOutcome::NotFound`]
    /// without touching the store.
    ///
    /// # Errors
    ///
    /// Fails as [`add_item`](Self::add_item).
    pub fn remove_item(
        &self,
        user: &Username,
        product: &ProductId,
    ) -> Result<RemoveOutcome, StoreError> {
        let _guard = self.guard();
        let mut document = self.load_or_init_locked(user)?;

        let Some(list) = document.get_mut(user) else {
            return Ok(RemoveOutcome::NotFound);
        };
        match list.remove(product) {
            RemoveOutcome::Removed => {
                self.write_document(&document)?;
                Ok(RemoveOutcome::Removed)
            }
            RemoveOutcome::NotFound => Ok(RemoveOutcome::NotFound),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the document on disk is still the last fully written one.
        self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn load_or_init_locked(&self, user: &Username) -> Result<StoreDocument<L>, StoreError> {
        if let Some(document) = self.read_document()? {
            return Ok(document);
        }

        let mut document = StoreDocument::new();
        document.insert(user.clone(), L::default());
        self.write_document(&document)?;
        tracing::info!(path = %self.path.display(), %user, "created item list store");
        Ok(document)
    }

    fn read_document(&self) -> Result<Option<StoreDocument<L>>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(Some(document)),
            Err(source) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %source,
                    "store file does not match the expected schema"
                );
                Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    fn write_document(&self, document: &StoreDocument<L>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_vec(document).map_err(io::Error::from)?;

        // Unique sibling name, then atomic rename into place.
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&temp_path, payload)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Io(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            users = document.len(),
            "persisted item list store"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    fn alice() -> Username {
        Username::parse("alice").unwrap()
    }

    #[test]
    fn test_new_performs_no_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let _store: ItemListStore<Cart> = ItemListStore::new(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_or_init_seeds_requesting_user() {
        let dir = tempfile::tempdir().unwrap();
        let store: ItemListStore<Cart> = ItemListStore::new(dir.path().join("cart.json"));

        let document = store.load_or_init(&alice()).unwrap();
        assert_eq!(document.len(), 1);
        assert!(document.get(&alice()).unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_or_init_reads_existing_file_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, r#"{"bob": {"products": {"1": 3}}}"#).unwrap();

        let store: ItemListStore<Cart> = ItemListStore::new(&path);
        let document = store.load_or_init(&alice()).unwrap();

        // An existing file is never re-seeded for a new caller.
        assert_eq!(document.len(), 1);
        assert!(!document.contains_key(&alice()));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "not json at all").unwrap();

        let store: ItemListStore<Cart> = ItemListStore::new(&path);
        let err = store.load_or_init(&alice()).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_wrong_shape_is_corrupt_not_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        // Valid JSON, wrong schema: quantities must be integers.
        fs::write(&path, r#"{"alice": {"products": {"1": "three"}}}"#).unwrap();

        let store: ItemListStore<Cart> = ItemListStore::new(&path);
        assert!(matches!(
            store.view(&alice()),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store: ItemListStore<Cart> = ItemListStore::new(dir.path().join("cart.json"));
        store.ensure_user(&alice()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("cart.json")]);
    }
}
