//! Durable key-value slots for ShopHub.
//!
//! Provides a small storage abstraction with automatic JSON serialization,
//! used for the persisted cart snapshot and the display preference.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_cache::{Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::open("/tmp/shophub")?);
//!
//! // Store a value
//! cache.set("shopping-cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("shopping-cart")?;
//! ```

mod error;
mod kv;
mod preference;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use preference::{ParseThemeError, Theme, ThemePreference, THEME_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore, Theme};
}
