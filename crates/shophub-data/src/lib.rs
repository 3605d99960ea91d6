//! Catalog API access for ShopHub.
//!
//! This crate provides:
//! - `Catalog` - Read-only product source trait
//! - `CatalogClient` - HTTP client for the public catalog API
//! - `StaticCatalog` - Built-in featured products, for offline use
//! - `TimeoutConfig` - Connect and total timeouts

mod catalog;
mod client;
mod timeout;

pub use catalog::*;
pub use client::*;
pub use timeout::*;
