//! Cart list semantics: a per-user multiset of products with quantities.
//!
//! On disk a user's cart is the object `{"products": {"<product_id>": <quantity>}}`;
//! quantities are always at least 1. Adding a product that is already in
//! the cart increments its quantity; removing a product deletes its entry
//! outright rather than decrementing.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use greengrocer_core::ProductId;

use crate::itemlist::{AddOutcome, ItemList, ItemListStore, RemoveOutcome};

/// A file-backed store of per-user carts.
pub type CartStore = ItemListStore<Cart>;

/// One user's cart: product quantities, keyed by product identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(deserialize_with = "positive_quantities")]
    products: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Quantity of `product` in the cart, if present.
    #[must_use]
    pub fn quantity(&self, product: &ProductId) -> Option<u32> {
        self.products.get(product).copied()
    }

    /// The product-to-quantity mapping.
    #[must_use]
    pub const fn products(&self) -> &BTreeMap<ProductId, u32> {
        &self.products
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cart holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total number of units across all products (for badge counts).
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.products.values().map(|qty| u64::from(*qty)).sum()
    }
}

impl ItemList for Cart {
    fn add(&mut self, product: ProductId) -> AddOutcome {
        let quantity = self.products.entry(product).or_insert(0);
        *quantity = quantity.saturating_add(1);
        AddOutcome::Added
    }

    fn remove(&mut self, product: &ProductId) -> RemoveOutcome {
        if self.products.remove(product).is_some() {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    fn contains(&self, product: &ProductId) -> bool {
        self.products.contains_key(product)
    }

    fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Reject carts whose stored quantities violate the at-least-1 invariant.
fn positive_quantities<'de, D>(deserializer: D) -> Result<BTreeMap<ProductId, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let products = BTreeMap::<ProductId, u32>::deserialize(deserializer)?;
    if let Some((id, _)) = products.iter().find(|&(_, quantity)| *quantity == 0) {
        return Err(serde::de::Error::custom(format!(
            "quantity for product {id} must be at least 1"
        )));
    }
    Ok(products)
}
