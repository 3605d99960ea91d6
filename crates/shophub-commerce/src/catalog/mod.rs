//! Product catalog module.
//!
//! Contains the product types served by the catalog API, listing filters,
//! and the featured-products list.

mod featured;
mod filter;
mod product;

pub use featured::{featured_by_category, featured_by_id, featured_products};
pub use filter::{categories_of, ProductFilter, ALL_CATEGORIES};
pub use product::{Product, Rating};
