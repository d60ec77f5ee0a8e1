//! Product catalog: typed records, demo data, filtering and sorting.
//!
//! The catalog is read-only reference data held in memory. The item list
//! stores consult it for existence checks when a product is added; the
//! presentation layer uses [`Catalog::filter`] for category pages and
//! sorted listings.
//!
//! Catalog membership is only ever checked at add time. A product that
//! later disappears from the catalog may remain referenced by carts and
//! wishlists; nothing here re-validates stored references.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greengrocer_core::{CurrencyCode, Price, ProductId};

/// A catalog product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Category the product is filed under.
    pub category: Category,
    /// Base price, before any discount.
    pub price: Price,
    /// Percentage discount currently applied, if any (1-100).
    pub discount_percent: Option<u8>,
    /// Mean review rating, one decimal place.
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Units sold to date.
    pub sold_count: u32,
    /// Stock on hand, in kilograms.
    pub stock_weight_kg: u32,
    /// Path of the product image, relative to the static root.
    pub image_path: String,
    /// Slug of the product's detail page.
    pub page_slug: String,
}

impl Product {
    /// The effective price: base price with the discount applied, or the
    /// base price unchanged when there is no discount.
    #[must_use]
    pub fn discounted_price(&self) -> Price {
        match self.discount_percent {
            Some(percent) => self.price.with_discount(percent),
            None => self.price,
        }
    }
}

/// Product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Fruits,
    Juices,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Juices => "juices",
        };
        write!(f, "{name}")
    }
}

/// Error returned when a category string is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category {0:?}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vegetables" => Ok(Self::Vegetables),
            "fruits" => Ok(Self::Fruits),
            "juices" => Ok(Self::Juices),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// Keys a product listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    DiscountedPrice,
    Rating,
    ReviewCount,
    SoldCount,
    StockWeight,
}

impl SortKey {
    /// Compare two products by this key, ascending.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Price => a.price.amount.cmp(&b.price.amount),
            Self::DiscountedPrice => a
                .discounted_price()
                .amount
                .cmp(&b.discounted_price().amount),
            Self::Rating => a.rating.cmp(&b.rating),
            Self::ReviewCount => a.review_count.cmp(&b.review_count),
            Self::SoldCount => a.sold_count.cmp(&b.sold_count),
            Self::StockWeight => a.stock_weight_kg.cmp(&b.stock_weight_kg),
        }
    }
}

/// Error returned when a sort key string is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort key {0:?}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "discounted_price" => Ok(Self::DiscountedPrice),
            "rating" => Ok(Self::Rating),
            "review_count" => Ok(Self::ReviewCount),
            "sold_count" => Ok(Self::SoldCount),
            "stock_weight" => Ok(Self::StockWeight),
            _ => Err(ParseSortKeyError(s.to_owned())),
        }
    }
}

/// The read-only product reference data, keyed by product identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from product records, keyed by their ids.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        }
    }

    /// Get a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Whether the catalog has a product with this id.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    /// All products, in id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `category` (all products when `None`), optionally
    /// sorted by `sort`.
    ///
    /// The sort is stable and ascending; `descending` flips the comparison
    /// while keeping equal-keyed products in their original relative order.
    #[must_use]
    pub fn filter(
        &self,
        category: Option<Category>,
        sort: Option<SortKey>,
        descending: bool,
    ) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .products
            .values()
            .filter(|product| category.is_none_or(|c| product.category == c))
            .collect();

        if let Some(key) = sort {
            result.sort_by(|a, b| {
                let ordering = key.compare(a, b);
                if descending { ordering.reverse() } else { ordering }
            });
        }

        result
    }

    /// The seeded demo data set: twelve grocery products.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn demo() -> Self {
        fn usd(cents: i64) -> Price {
            Price::new(Decimal::new(cents, 2), CurrencyCode::USD)
        }

        fn stars(tenths: i64) -> Decimal {
            Decimal::new(tenths, 1)
        }

        Self::new([
            Product {
                id: ProductId::new("1"),
                name: "Bell Pepper".to_owned(),
                description: "Juicy and vibrant, it brings color and flavor to your dishes."
                    .to_owned(),
                category: Category::Vegetables,
                price: usd(300_00),
                discount_percent: Some(30),
                rating: stars(49),
                review_count: 250,
                sold_count: 600,
                stock_weight_kg: 500,
                image_path: "store/images/product-1.jpg".to_owned(),
                page_slug: "bell_pepper".to_owned(),
            },
            Product {
                id: ProductId::new("2"),
                name: "Strawberry".to_owned(),
                description: "Sweet, fragrant strawberries full of vitamins to brighten your day."
                    .to_owned(),
                category: Category::Fruits,
                price: usd(500_00),
                discount_percent: None,
                rating: stars(50),
                review_count: 200,
                sold_count: 700,
                stock_weight_kg: 400,
                image_path: "store/images/product-2.jpg".to_owned(),
                page_slug: "strawberry".to_owned(),
            },
            Product {
                id: ProductId::new("3"),
                name: "Green Beans".to_owned(),
                description: "Green goodness and plenty of protein for a healthy diet.".to_owned(),
                category: Category::Vegetables,
                price: usd(250_00),
                discount_percent: None,
                rating: stars(50),
                review_count: 100,
                sold_count: 500,
                stock_weight_kg: 600,
                image_path: "store/images/product-3.jpg".to_owned(),
                page_slug: "green_beans".to_owned(),
            },
            Product {
                id: ProductId::new("4"),
                name: "Red Cabbage".to_owned(),
                description: "Surprise your guests with exotic flavor and color on their plates."
                    .to_owned(),
                category: Category::Vegetables,
                price: usd(90_00),
                discount_percent: None,
                rating: stars(47),
                review_count: 30,
                sold_count: 50,
                stock_weight_kg: 300,
                image_path: "store/images/product-4.jpg".to_owned(),
                page_slug: "purple_cabbage".to_owned(),
            },
            Product {
                id: ProductId::new("5"),
                name: "Tomatoes".to_owned(),
                description: "Fresh, juicy tomatoes for perfect salads and sauces.".to_owned(),
                category: Category::Vegetables,
                price: usd(240_00),
                discount_percent: Some(25),
                rating: stars(49),
                review_count: 350,
                sold_count: 700,
                stock_weight_kg: 300,
                image_path: "store/images/product-5.jpg".to_owned(),
                page_slug: "tomatoes".to_owned(),
            },
            Product {
                id: ProductId::new("6"),
                name: "Broccoli".to_owned(),
                description: "Health in every bite to strengthen your immune system.".to_owned(),
                category: Category::Vegetables,
                price: usd(320_00),
                discount_percent: None,
                rating: stars(49),
                review_count: 150,
                sold_count: 250,
                stock_weight_kg: 300,
                image_path: "store/images/product-6.jpg".to_owned(),
                page_slug: "broccoli".to_owned(),
            },
            Product {
                id: ProductId::new("7"),
                name: "Carrots".to_owned(),
                description: "Beauty and health for your eyes and skin in every carrot.".to_owned(),
                category: Category::Vegetables,
                price: usd(50_00),
                discount_percent: None,
                rating: stars(48),
                review_count: 220,
                sold_count: 800,
                stock_weight_kg: 900,
                image_path: "store/images/product-7.jpg".to_owned(),
                page_slug: "carrots".to_owned(),
            },
            Product {
                id: ProductId::new("8"),
                name: "Fruit Juice".to_owned(),
                description: "Natural freshness and energy in every sip.".to_owned(),
                category: Category::Juices,
                price: usd(120_00),
                discount_percent: None,
                rating: stars(49),
                review_count: 300,
                sold_count: 800,
                stock_weight_kg: 1200,
                image_path: "store/images/product-8.jpg".to_owned(),
                page_slug: "fruit_juice".to_owned(),
            },
            Product {
                id: ProductId::new("9"),
                name: "Onion".to_owned(),
                description: "Give your dishes a distinctive aroma with our fresh onions."
                    .to_owned(),
                category: Category::Vegetables,
                price: usd(40_00),
                discount_percent: Some(20),
                rating: stars(46),
                review_count: 80,
                sold_count: 170,
                stock_weight_kg: 350,
                image_path: "store/images/product-9.jpg".to_owned(),
                page_slug: "onion".to_owned(),
            },
            Product {
                id: ProductId::new("10"),
                name: "Apples".to_owned(),
                description: "Juicy, sweet apples - the perfect healthy snack.".to_owned(),
                category: Category::Fruits,
                price: usd(130_00),
                discount_percent: None,
                rating: stars(47),
                review_count: 30,
                sold_count: 70,
                stock_weight_kg: 200,
                image_path: "store/images/product-10.jpg".to_owned(),
                page_slug: "apple".to_owned(),
            },
            Product {
                id: ProductId::new("11"),
                name: "Garlic".to_owned(),
                description: "The secret to delicious dishes and a healthy heart.".to_owned(),
                category: Category::Vegetables,
                price: usd(150_00),
                discount_percent: None,
                rating: stars(49),
                review_count: 150,
                sold_count: 400,
                stock_weight_kg: 1000,
                image_path: "store/images/product-11.jpg".to_owned(),
                page_slug: "garlic".to_owned(),
            },
            Product {
                id: ProductId::new("12"),
                name: "Chili Pepper".to_owned(),
                description: "Fiery passion for those seeking adventure on their plate.".to_owned(),
                category: Category::Vegetables,
                price: usd(400_00),
                discount_percent: None,
                rating: stars(50),
                review_count: 40,
                sold_count: 300,
                stock_weight_kg: 50,
                image_path: "store/images/product-12.jpg".to_owned(),
                page_slug: "chilli".to_owned(),
            },
        ])
    }
}
