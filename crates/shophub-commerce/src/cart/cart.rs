//! Cart state and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The cart: line items in insertion order plus their derived totals.
///
/// Totals are private and only ever produced by `recalculate`, which runs
/// after every mutation and when a snapshot is decoded. Stored totals in a
/// snapshot are ignored in favour of the recomputed ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "CartSnapshot")]
pub struct Cart {
    items: Vec<LineItem>,
    total_quantity: i64,
    total_price: Money,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_quantity: 0,
            total_price: Money::ZERO,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line item for the same id gains exactly one unit; otherwise
    /// a new line item with quantity 1 is appended. Returns the line item's
    /// new quantity.
    pub fn add(&mut self, product: Product) -> i64 {
        let quantity = match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.quantity
            }
            None => {
                self.items.push(LineItem::new(product, 1));
                1
            }
        };
        self.recalculate();
        quantity
    }

    /// Remove the line item for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        self.recalculate();
        self.items.len() < len_before
    }

    /// Set a line item's quantity exactly.
    ///
    /// A quantity of zero or less removes the item. Unknown ids are ignored.
    /// Returns whether a line item with this id was present, even when it
    /// already had `quantity`.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let found = match self.items.iter_mut().find(|i| &i.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        };
        self.recalculate();
        found
    }

    /// Reset to the empty cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Current totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_quantity: self.total_quantity,
            total_price: self.total_price,
        }
    }

    /// Sum of all line item quantities.
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Sum of price times quantity, rounded to cents.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.item(id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> CartStatus {
        if self.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::Populated
        }
    }

    fn recalculate(&mut self) {
        self.total_quantity = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity));
        self.total_price = self
            .items
            .iter()
            .map(|i| i.product.price * i.quantity)
            .sum::<Money>()
            .round_cents();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a persisted cart. Only the items are trusted.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<LineItem>,
}

impl From<CartSnapshot> for Cart {
    fn from(snapshot: CartSnapshot) -> Self {
        let mut cart = Cart {
            items: snapshot.items,
            ..Cart::new()
        };
        cart.recalculate();
        cart
    }
}

/// A product in the cart with its quantity.
///
/// Serialized flat: the product's fields followed by `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity, rounded to cents.
    pub fn subtotal(&self) -> Money {
        (self.product.price * self.quantity).round_cents()
    }
}

/// Derived cart aggregates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_quantity: i64,
    pub total_price: Money,
}

/// The two externally meaningful cart states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    Empty,
    Populated,
}
