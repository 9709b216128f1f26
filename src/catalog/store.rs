//! Catalog Store
//!
//! Read-only access to the seeded catalog. All lookups are pure functions
//! over immutable data; unknown ids and categories degrade to empty results
//! rather than errors, since "nothing here" is a displayable state.

use super::data;
use super::models::{Category, Product, Review, CATEGORY_ALL};

/// The immutable storefront catalog
pub struct CatalogStore {
    products: Vec<Product>,
    reviews: Vec<Review>,
    categories: Vec<Category>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates a store holding the shipped seed data.
    pub fn new() -> Self {
        Self::with_data(
            data::seed_products(),
            data::seed_reviews(),
            data::seed_categories(),
        )
    }

    /// Creates a store over explicit data. Used by tests.
    pub fn with_data(products: Vec<Product>, reviews: Vec<Review>, categories: Vec<Category>) -> Self {
        Self {
            products,
            reviews,
            categories,
        }
    }

    /// Full product list in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category table in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Point lookup by product id.
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category matches `category`, preserving catalog order.
    ///
    /// The sentinel `"all"` selects the whole catalog; an unknown category
    /// yields an empty list.
    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        if category == CATEGORY_ALL {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Reviews for a product in catalog order; empty when none match.
    pub fn reviews_for_product(&self, product_id: u64) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }
}
