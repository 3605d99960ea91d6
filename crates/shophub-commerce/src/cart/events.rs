//! Change notifications emitted by the cart store.

use crate::cart::Cart;
use crate::ids::ProductId;

/// What a mutation did. Subscribers receive it alongside the new cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// One unit of a product was added; `quantity` is the new line quantity.
    Added { id: ProductId, quantity: i64 },
    /// A line item was removed (or was already absent).
    Removed { id: ProductId },
    /// A line item's quantity was set (or the id was absent).
    QuantitySet { id: ProductId, quantity: i64 },
    /// The cart was emptied.
    Cleared,
}

impl CartEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CartEvent::Added { .. } => "added",
            CartEvent::Removed { .. } => "removed",
            CartEvent::QuantitySet { .. } => "quantity_set",
            CartEvent::Cleared => "cleared",
        }
    }
}

/// Handle returned by `CartStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(sub, _)| *sub != id);
        self.entries.len() < len_before
    }

    pub(crate) fn notify(&mut self, event: &CartEvent, cart: &Cart) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event, cart);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::default();

        let a = Rc::clone(&seen);
        subs.add(Box::new(move |_, _| a.borrow_mut().push("a")));
        let b = Rc::clone(&seen);
        subs.add(Box::new(move |_, _| b.borrow_mut().push("b")));

        subs.notify(&CartEvent::Cleared, &Cart::new());
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove() {
        let mut subs = Subscribers::default();
        let id = subs.add(Box::new(|_, _| {}));
        assert!(subs.remove(id));
        assert!(!subs.remove(id));
        assert_eq!(subs.len(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subs = Subscribers::default();
        let first = subs.add(Box::new(|_, _| {}));
        subs.remove(first);
        let second = subs.add(Box::new(|_, _| {}));
        assert_ne!(first, second);
    }
}
