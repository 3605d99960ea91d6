//! ShopHub CLI - Terminal storefront.
//!
//! Commands:
//! - `shophub products` - List catalog products, optionally filtered
//! - `shophub product` - Show one product
//! - `shophub categories` - List catalog categories
//! - `shophub featured` - List the featured products
//! - `shophub cart` - Show and change the saved cart
//! - `shophub checkout` - Place an order for the cart contents
//! - `shophub theme` - Show or change the saved theme
//! - `shophub config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ConfigArgs, ProductArgs, ProductsArgs, ThemeArgs};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SHOPHUB_LOG";

/// ShopHub CLI - Browse products and manage your cart
#[derive(Parser)]
#[command(name = "shophub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Use the built-in featured products instead of the catalog API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show product details
    Product(ProductArgs),

    /// List categories
    Categories,

    /// List featured products
    Featured,

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Light or dark theme preference
    Theme(ThemeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);
    init_logging(output.is_verbose());

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output, cli.offline)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::run_products(args, &ctx).await,
        Commands::Product(args) => commands::catalog::run_product(args, &ctx).await,
        Commands::Categories => commands::catalog::run_categories(&ctx).await,
        Commands::Featured => commands::catalog::run_featured(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Theme(args) => commands::theme::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `SHOPHUB_LOG` overrides the level picked from `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "debug,hyper=warn,hyper_util=warn,rustls=warn"
        } else {
            "warn"
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
