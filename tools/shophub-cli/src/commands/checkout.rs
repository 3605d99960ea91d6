//! Checkout command.

use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::Confirm;
use serde_json::json;
use shophub_commerce::cart::OrderSummary;
use tracing::info;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::price_label;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;
    if store.cart().is_empty() {
        bail!("Your cart is empty. Add some products before checking out.");
    }

    let summary = OrderSummary::from_cart(store.cart(), ctx.config.checkout.tax_rate()?);
    show_summary(&summary, ctx);

    if !args.yes {
        if ctx.output.is_json() {
            bail!("Pass --yes to check out with --json");
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.total.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing order...");
    tokio::time::sleep(Duration::from_millis(ctx.config.checkout.delay_ms)).await;
    spinner.finish_and_clear();

    store.clear();
    let placed_at = Utc::now();
    info!(total = %summary.total, items = summary.item_count, "order placed");

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "status": "placed",
            "placed_at": placed_at.to_rfc3339(),
            "summary": summary,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Order placed at {}. Thank you for your purchase!",
        placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    Ok(())
}

fn show_summary(summary: &OrderSummary, ctx: &Context) {
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &summary.subtotal.display(),
    );
    ctx.output.kv("Shipping", &price_label(summary.shipping, true));
    ctx.output.kv("Estimated tax", &summary.estimated_tax.display());
    ctx.output.kv("Total", &summary.total.display());
}
