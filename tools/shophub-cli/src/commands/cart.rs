//! Cart commands.

use anyhow::{bail, Result};
use shophub_cache::KeyValueStore;
use shophub_commerce::cart::{Cart, CartEvent};
use shophub_commerce::catalog::Product;
use shophub_commerce::{CartStore, ProductId};
use tracing::debug;

use super::catalog::load_failed;
use super::{CartArgs, CartCommand, MAX_ADD_QUANTITY};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    store.subscribe(|event: &CartEvent, cart: &Cart| {
        debug!(
            event = event.name(),
            total_quantity = cart.total_quantity(),
            "cart changed"
        );
    });

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            let id: ProductId = id.parse()?;
            let product = ctx.catalog()?.product(&id).await.map_err(load_failed)?;
            let title = product.title.clone();
            let quantity = add_units(&mut store, product, quantity.into())?;
            ctx.output.success(&format!("Added {} (quantity {})", title, quantity));
        }
        CartCommand::Remove { id } => {
            let id: ProductId = id.parse()?;
            if !store.remove(&id) {
                bail!("Product {} is not in the cart", id);
            }
            ctx.output.success(&format!("Removed {}", id));
        }
        CartCommand::Set { id, quantity } => {
            let id: ProductId = id.parse()?;
            set(&mut store, &id, quantity)?;
            if quantity > 0 {
                ctx.output.success(&format!("Set {} to {}", id, quantity));
            } else {
                ctx.output.success(&format!("Removed {}", id));
            }
        }
        CartCommand::Inc { id } => {
            let id: ProductId = id.parse()?;
            let quantity = step(store.cart(), &id, 1)?;
            set(&mut store, &id, quantity)?;
            ctx.output.success(&format!("{} quantity {}", id, quantity));
        }
        CartCommand::Dec { id } => {
            let id: ProductId = id.parse()?;
            let quantity = step(store.cart(), &id, -1)?;
            set(&mut store, &id, quantity)?;
            ctx.output.success(&format!("{} quantity {}", id, quantity));
        }
        CartCommand::Clear => {
            store.clear();
            ctx.output.success("Cart cleared");
        }
    }

    show(store.cart(), ctx);
    Ok(())
}

fn set<S: KeyValueStore>(store: &mut CartStore<S>, id: &ProductId, quantity: i64) -> Result<()> {
    if !store.set_quantity(id, quantity) {
        bail!("Product {} is not in the cart", id);
    }
    Ok(())
}

/// Add `units` of one product, one unit at a time. Returns the final quantity.
fn add_units<S: KeyValueStore>(store: &mut CartStore<S>, product: Product, units: i64) -> Result<i64> {
    if !(1..=MAX_ADD_QUANTITY).contains(&units) {
        bail!("Quantity must be between 1 and {}", MAX_ADD_QUANTITY);
    }
    let mut quantity = 0;
    for _ in 0..units {
        quantity = store.add(product.clone());
    }
    Ok(quantity)
}

/// Quantity after stepping by `delta`. Stepping never removes an item.
fn step(cart: &Cart, id: &ProductId, delta: i64) -> Result<i64> {
    let Some(item) = cart.item(id) else {
        bail!("Product {} is not in the cart", id);
    };
    let quantity = item.quantity.saturating_add(delta);
    if quantity < 1 {
        bail!(
            "Quantity of {} is already {}. Use `shophub cart remove {}` to remove it.",
            id,
            item.quantity,
            id
        );
    }
    Ok(quantity)
}

/// Print the cart with per-line subtotals.
fn show(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return;
    }

    ctx.output.header("Shopping Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    ctx.output.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &[4, 40, 10, 5, 10]);
    for item in cart.items() {
        ctx.output.table_row(
            &[
                &item.id().to_string(),
                &item.product.title,
                &item.product.price.display(),
                &item.quantity.to_string(),
                &item.subtotal().display(),
            ],
            &[4, 40, 10, 5, 10],
        );
    }

    let totals = cart.totals();
    ctx.output.kv("items", &totals.total_quantity.to_string());
    ctx.output.kv("total", &totals.total_price.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use shophub_cache::MemoryStore;
    use shophub_commerce::Money;

    #[derive(Parser)]
    struct CartCli {
        #[command(subcommand)]
        command: CartCommand,
    }

    fn ring() -> Product {
        Product::new(1, "Ring", Money::from_cents(999))
    }

    fn store_with_one() -> CartStore<MemoryStore> {
        let mut store = CartStore::open(MemoryStore::new());
        store.add(ring());
        store
    }

    #[test]
    fn test_step_up_and_down() {
        let mut store = store_with_one();
        let id = ProductId::from(1);

        let up = step(store.cart(), &id, 1).unwrap();
        assert_eq!(up, 2);
        set(&mut store, &id, up).unwrap();

        let down = step(store.cart(), &id, -1).unwrap();
        assert_eq!(down, 1);
    }

    #[test]
    fn test_dec_at_one_is_refused() {
        let store = store_with_one();
        let id = ProductId::from(1);

        let err = step(store.cart(), &id, -1).unwrap_err();
        assert!(err.to_string().contains("cart remove 1"));
        assert_eq!(store.cart().item(&id).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_set_to_current_quantity_succeeds() {
        let mut store = store_with_one();
        let id = ProductId::from(1);

        set(&mut store, &id, 1).unwrap();
        assert_eq!(store.totals().total_quantity, 1);
    }

    #[test]
    fn test_inc_at_max_quantity_succeeds() {
        let mut store = store_with_one();
        let id = ProductId::from(1);
        set(&mut store, &id, i64::MAX).unwrap();

        let up = step(store.cart(), &id, 1).unwrap();
        assert_eq!(up, i64::MAX);
        set(&mut store, &id, up).unwrap();
    }

    #[test]
    fn test_unknown_id_is_reported() {
        let mut store = store_with_one();
        let missing = ProductId::from(7);

        assert!(step(store.cart(), &missing, 1).is_err());
        assert!(set(&mut store, &missing, 3).is_err());
        assert_eq!(store.totals().total_quantity, 1);
    }

    #[test]
    fn test_add_units() {
        let mut store = store_with_one();

        assert_eq!(add_units(&mut store, ring(), 3).unwrap(), 4);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.totals().total_price.display_amount(), "39.96");

        assert!(add_units(&mut store, ring(), 0).is_err());
        assert!(add_units(&mut store, ring(), 11).is_err());
        assert_eq!(store.totals().total_quantity, 4);
    }

    #[test]
    fn test_add_quantity_flag_range() {
        let parsed = CartCli::try_parse_from(["cart", "add", "3", "--quantity", "10"]).unwrap();
        assert!(matches!(parsed.command, CartCommand::Add { quantity: 10, .. }));

        let default = CartCli::try_parse_from(["cart", "add", "3"]).unwrap();
        assert!(matches!(default.command, CartCommand::Add { quantity: 1, .. }));

        assert!(CartCli::try_parse_from(["cart", "add", "3", "-q", "0"]).is_err());
        assert!(CartCli::try_parse_from(["cart", "add", "3", "-q", "11"]).is_err());
    }
}
