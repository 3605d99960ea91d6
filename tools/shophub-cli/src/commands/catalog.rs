//! Catalog browsing commands.

use anyhow::{anyhow, Result};
use serde_json::json;
use shophub_commerce::cart::Cart;
use shophub_commerce::catalog::{featured_products, Product, ProductFilter};
use shophub_commerce::ProductId;
use shophub_data::FetchError;
use tracing::warn;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{in_cart_label, rating_stars};

/// Run the products command.
pub async fn run_products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.products().await.map_err(load_failed)?;

    let mut filter = ProductFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(query) = args.search {
        filter = filter.query(query);
    }
    let shown = filter.apply(&products);

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    let cart = ctx.cart_store()?;
    ctx.output.header(&format!("Products ({} of {})", shown.len(), products.len()));
    if shown.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }
    for product in shown {
        ctx.output.product_row(product, cart.cart().contains(&product.id));
    }

    Ok(())
}

/// Run the product command.
pub async fn run_product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id: ProductId = args.id.parse()?;
    let product = ctx.catalog()?.product(&id).await.map_err(load_failed)?;
    let cart = ctx.cart_store()?;
    let held = quantity_in_cart(cart.cart(), &product.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "in_cart": held > 0,
            "quantity_in_cart": held,
        }));
        return Ok(());
    }

    show_product(&product, held, ctx);
    Ok(())
}

/// Run the categories command.
pub async fn run_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog()?.categories().await.map_err(load_failed)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "categories": categories }));
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }

    Ok(())
}

/// Run the featured command. Never touches the network.
pub async fn run_featured(ctx: &Context) -> Result<()> {
    let products = featured_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let cart = ctx.cart_store()?;
    ctx.output.header("Featured Products");
    for product in &products {
        ctx.output.product_row(product, cart.cart().contains(&product.id));
    }

    Ok(())
}

/// Units of `id` already in the cart, zero when absent.
fn quantity_in_cart(cart: &Cart, id: &ProductId) -> i64 {
    cart.item(id).map_or(0, |item| item.quantity)
}

fn show_product(product: &Product, held: i64, ctx: &Context) {
    ctx.output.header(&product.title);
    if held > 0 {
        ctx.output.kv(&in_cart_label(true), &format!("quantity {}", held));
    }
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", &product.category);
    if let Some(rating) = &product.rating {
        ctx.output.kv("rating", &format!("{} {:.1}", rating_stars(Some(rating)), rating.rate));
    }
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }
    if let Some(description) = &product.description {
        ctx.output.kv("description", description);
    }
}

/// Log the failure detail and surface the generic message.
pub(crate) fn load_failed(err: FetchError) -> anyhow::Error {
    warn!(error = %err, "catalog request failed");
    anyhow!(err.user_message())
}
