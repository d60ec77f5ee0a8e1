//! Wishlist list semantics: a per-user set of products.
//!
//! On disk a user's wishlist is the object `{"products": ["<product_id>", ...]}`.
//! Insertion order is preserved in the file but carries no meaning. Unlike
//! the cart there are no quantities: adding a product a second time is
//! refused rather than counted.

use serde::{Deserialize, Serialize};

use greengrocer_core::ProductId;

use crate::itemlist::{AddOutcome, ItemList, ItemListStore, RemoveOutcome};

/// A file-backed store of per-user wishlists.
pub type WishlistStore = ItemListStore<Wishlist>;

/// One user's wishlist: a duplicate-free list of product identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    products: Vec<ProductId>,
}

impl Wishlist {
    /// The wishlisted product identifiers, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Number of products in the wishlist.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the wishlist holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ItemList for Wishlist {
    fn add(&mut self, product: ProductId) -> AddOutcome {
        if self.products.contains(&product) {
            return AddOutcome::AlreadyPresent;
        }
        self.products.push(product);
        AddOutcome::Added
    }

    fn remove(&mut self, product: &ProductId) -> RemoveOutcome {
        match self.products.iter().position(|p| p == product) {
            Some(index) => {
                self.products.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    fn contains(&self, product: &ProductId) -> bool {
        self.products.contains(product)
    }

    fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_add_is_set_like() {
        let mut wishlist = Wishlist::default();
        assert_eq!(wishlist.add(id("1")), AddOutcome::Added);
        assert_eq!(wishlist.add(id("1")), AddOutcome::AlreadyPresent);
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::default();
        wishlist.add(id("3"));
        wishlist.add(id("1"));
        wishlist.add(id("2"));
        assert_eq!(wishlist.products(), [id("3"), id("1"), id("2")]);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::default();
        wishlist.add(id("1"));
        wishlist.add(id("2"));
        assert_eq!(wishlist.remove(&id("1")), RemoveOutcome::Removed);
        assert_eq!(wishlist.remove(&id("1")), RemoveOutcome::NotFound);
        assert_eq!(wishlist.products(), [id("2")]);
    }

    #[test]
    fn test_serde_shape() {
        let mut wishlist = Wishlist::default();
        wishlist.add(id("2"));
        wishlist.add(id("1"));

        let json = serde_json::to_string(&wishlist).unwrap();
        assert_eq!(json, r#"{"products":["2","1"]}"#);

        let parsed: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, wishlist);
    }
}
