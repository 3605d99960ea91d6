//! Shopping cart module.
//!
//! Contains the cart state, the persisted cart store, change notifications,
//! and the order summary.

mod cart;
mod events;
mod pricing;
mod store;

pub use cart::{Cart, CartStatus, CartTotals, LineItem};
pub use events::{CartEvent, SubscriptionId};
pub use pricing::{default_tax_rate, OrderSummary};
pub use store::{CartStore, CART_STORAGE_KEY};
