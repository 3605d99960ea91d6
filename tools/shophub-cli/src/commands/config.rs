//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, path } => init_config(&ctx.cwd.join(path), force, ctx),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_ms", &ctx.config.api.timeout_ms.to_string());
    ctx.output.kv(
        "connect_timeout_ms",
        &ctx.config.api.connect_timeout_ms.to_string(),
    );

    ctx.output.info("[storage]");
    ctx.output.kv("data_dir", &ctx.data_dir().display().to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("delay_ms", &ctx.config.checkout.delay_ms.to_string());
    ctx.output.kv("tax_rate", &ctx.config.checkout.tax_rate()?.to_string());

    Ok(())
}

fn init_config(path: &Path, force: bool, ctx: &Context) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        ShopConfig::default().save(path)?;
    } else {
        fs::write(path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", path.display()));

    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());
    let data_dir = ctx.data_dir().display().to_string();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "config": config, "data_dir": data_dir }));
        return Ok(());
    }

    ctx.output.kv("config", config.as_deref().unwrap_or("(defaults)"));
    ctx.output.kv("data_dir", &data_dir);

    Ok(())
}
