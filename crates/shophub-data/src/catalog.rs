//! Catalog sources behind one trait, so views do not care whether products
//! come from the API or the built-in featured list.

use async_trait::async_trait;
use shophub_commerce::catalog::{categories_of, featured_products, Product};
use shophub_commerce::ProductId;

use crate::client::{CatalogClient, FetchError};

/// Read-only product source.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All products.
    async fn products(&self) -> Result<Vec<Product>, FetchError>;

    /// All category labels.
    async fn categories(&self) -> Result<Vec<String>, FetchError>;

    /// A single product.
    async fn product(&self, id: &ProductId) -> Result<Product, FetchError>;
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.fetch_products().await
    }

    async fn categories(&self) -> Result<Vec<String>, FetchError> {
        self.fetch_categories().await
    }

    async fn product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.fetch_product(id).await
    }
}

/// In-memory catalog, used for offline mode and tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog made of the featured-products list.
    pub fn featured() -> Self {
        Self::new(featured_products())
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }

    async fn categories(&self) -> Result<Vec<String>, FetchError> {
        Ok(categories_of(&self.products))
    }

    // Numeric text ids match numeric product ids, as in a URL path.
    async fn product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| &p.id == id || (id.as_number().is_some() && p.id.as_number() == id.as_number()))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))
    }
}
