//! The cart store: the single writer of cart state.
//!
//! Owns the [`Cart`], writes a full snapshot to a key-value slot after every
//! mutation, and notifies subscribers. Nothing here returns an error: a bad
//! snapshot falls back to an empty cart and a failed write is logged while the
//! in-memory cart stays authoritative.

use shophub_cache::{Cache, KeyValueStore};
use tracing::{debug, info, warn};

use crate::cart::events::Subscribers;
use crate::cart::{Cart, CartEvent, CartTotals, LineItem, SubscriptionId};
use crate::catalog::Product;
use crate::ids::ProductId;

/// Fixed key holding the cart snapshot.
pub const CART_STORAGE_KEY: &str = "shopping-cart";

/// Cart state bound to a durable slot.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::open(FileStore::open(data_dir)?);
/// store.subscribe(|_, cart| println!("{} items", cart.total_quantity()));
/// store.add(product);
/// ```
pub struct CartStore<S: KeyValueStore> {
    cart: Cart,
    cache: Cache<S>,
    key: String,
    subscribers: Subscribers,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store, restoring the snapshot under [`CART_STORAGE_KEY`].
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, CART_STORAGE_KEY)
    }

    /// Open the store against a custom slot key.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cache = Cache::new(store);
        let cart = restore(&cache, &key);
        Self {
            cart,
            cache,
            key,
            subscribers: Subscribers::default(),
        }
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: Product) -> i64 {
        let id = product.id.clone();
        let quantity = self.cart.add(product);
        self.commit(CartEvent::Added { id, quantity });
        quantity
    }

    /// Remove a product. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove(id);
        self.commit(CartEvent::Removed { id: id.clone() });
        removed
    }

    /// Set a product's quantity; zero or less removes it. Returns whether the
    /// product was in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let found = self.cart.set_quantity(id, quantity);
        let event = if quantity <= 0 {
            CartEvent::Removed { id: id.clone() }
        } else {
            CartEvent::QuantitySet {
                id: id.clone(),
                quantity,
            }
        };
        self.commit(event);
        found
    }

    /// Empty the cart. Also the final step of checkout.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit(CartEvent::Cleared);
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Register an observer called after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Slot key the snapshot is written to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing store.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }

    fn commit(&mut self, event: CartEvent) {
        let totals = self.cart.totals();
        debug!(
            event = event.name(),
            total_quantity = totals.total_quantity,
            total_price = %totals.total_price,
            "cart updated"
        );

        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            warn!(key = %self.key, error = %e, "failed to persist cart snapshot");
        }

        self.subscribers.notify(&event, &self.cart);
    }
}

fn restore<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> Cart {
    match cache.get::<Cart>(key) {
        Ok(Some(cart)) => {
            info!(
                key,
                items = cart.len(),
                total_quantity = cart.total_quantity(),
                "restored cart snapshot"
            );
            cart
        }
        Ok(None) => Cart::new(),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable cart snapshot");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use shophub_cache::{CacheError, MemoryStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents))
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }
    }

    #[test]
    fn test_starts_empty_without_snapshot() {
        let store = CartStore::open(MemoryStore::new());
        assert!(store.cart().is_empty());
        assert_eq!(store.key(), CART_STORAGE_KEY);
    }

    #[test]
    fn test_every_mutation_writes_snapshot() {
        let backing = MemoryStore::new();
        let mut store = CartStore::open(&backing);

        store.add(product(1, 1000));
        let saved: Cart = Cache::new(&backing).get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(&saved, store.cart());

        store.clear();
        let saved: Cart = Cache::new(&backing).get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_unparsable_snapshot_starts_empty() {
        let backing = MemoryStore::new();
        backing.set(CART_STORAGE_KEY, b"{\"items\": [oops").unwrap();

        let store = CartStore::open(&backing);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_wrong_shape_snapshot_starts_empty() {
        let backing = MemoryStore::new();
        backing.set(CART_STORAGE_KEY, b"[1, 2, 3]").unwrap();

        let store = CartStore::open(&backing);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = CartStore::open(ReadOnlyStore);
        store.add(product(1, 1000));
        store.add(product(1, 1000));

        assert_eq!(store.totals().total_quantity, 2);
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::open(MemoryStore::new());

        let log = Rc::clone(&seen);
        store.subscribe(move |event, cart| {
            log.borrow_mut().push((event.name(), cart.total_quantity()));
        });

        store.add(product(1, 1000));
        store.add(product(1, 1000));
        store.set_quantity(&ProductId::from(1), 5);
        store.remove(&ProductId::from(1));
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![
                ("added", 1),
                ("added", 2),
                ("quantity_set", 5),
                ("removed", 0),
                ("cleared", 0),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = CartStore::open(MemoryStore::new());

        let c = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *c.borrow_mut() += 1);
        store.add(product(1, 100));
        assert!(store.unsubscribe(id));
        store.add(product(1, 100));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_set_quantity_zero_reports_removal() {
        let seen = Rc::new(RefCell::new(None));
        let mut store = CartStore::open(MemoryStore::new());
        store.add(product(1, 100));

        let last = Rc::clone(&seen);
        store.subscribe(move |event, _| *last.borrow_mut() = Some(event.clone()));
        store.set_quantity(&ProductId::from(1), 0);

        assert_eq!(
            *seen.borrow(),
            Some(CartEvent::Removed {
                id: ProductId::from(1)
            })
        );
    }

    #[test]
    fn test_custom_key() {
        let backing = MemoryStore::new();
        let mut store = CartStore::open_with_key(&backing, "cart:guest");
        store.add(product(1, 100));

        assert!(backing.exists("cart:guest").unwrap());
        assert!(!backing.exists(CART_STORAGE_KEY).unwrap());
    }
}
