//! Order summary shown before checkout.

use crate::cart::Cart;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estimated tax rate applied to the subtotal (10%).
pub fn default_tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Number of units in the cart.
    pub item_count: i64,
    /// Cart total price.
    pub subtotal: Money,
    /// Shipping cost. Shipping is always free.
    pub shipping: Money,
    /// Estimated tax on the subtotal.
    pub estimated_tax: Money,
    /// Final total (subtotal + shipping + tax).
    pub total: Money,
}

impl OrderSummary {
    /// Build the summary for a cart at the given tax rate.
    pub fn from_cart(cart: &Cart, tax_rate: Decimal) -> Self {
        let subtotal = cart.total_price();
        let shipping = Money::ZERO;
        let estimated_tax = subtotal.multiply_rate(tax_rate);
        Self {
            item_count: cart.total_quantity(),
            subtotal,
            shipping,
            estimated_tax,
            total: (subtotal + shipping + estimated_tax).round_cents(),
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
