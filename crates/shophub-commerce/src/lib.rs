//! Storefront domain types and cart state for ShopHub.
//!
//! - **Catalog**: products as served by the catalog API, listing filters,
//!   the featured-products list
//! - **Cart**: line items, derived totals, the persisted [`CartStore`],
//!   order summary
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_commerce::prelude::*;
//! use shophub_cache::MemoryStore;
//!
//! let mut store = CartStore::open(MemoryStore::new());
//! store.add(Product::new(1, "Backpack", "109.95".parse()?));
//! store.add(Product::new(1, "Backpack", "109.95".parse()?));
//!
//! let totals = store.totals();
//! println!("{} items, {}", totals.total_quantity, totals.total_price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

pub use cart::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Product, ProductFilter, Rating};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartStatus, CartStore, CartTotals, LineItem, OrderSummary,
        SubscriptionId,
    };
}
