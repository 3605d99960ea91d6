//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod theme;

use clap::{Args, Subcommand};

/// Most units `cart add` accepts in one call.
pub const MAX_ADD_QUANTITY: i64 = 10;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category ("all" shows everything).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive search over title and category.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals.
    Show,
    /// Add a product, one unit by default.
    Add {
        /// Product ID.
        id: String,

        /// Units to add (1-10).
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=MAX_ADD_QUANTITY))]
        quantity: u8,
    },
    /// Remove a product entirely.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set the quantity of a product already in the cart (0 removes it).
    Set {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Increase the quantity of a product in the cart by one.
    Inc {
        /// Product ID.
        id: String,
    },
    /// Decrease the quantity of a product in the cart by one (not below 1).
    Dec {
        /// Product ID.
        id: String,
    },
    /// Remove everything from the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Show the saved theme.
    Show,
    /// Save a theme.
    Set {
        /// "light" or "dark".
        theme: String,
    },
    /// Switch between light and dark.
    Toggle,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to create (a .json name writes JSON).
        #[arg(long, default_value = "shophub.toml")]
        path: String,
    },
    /// Print the config file and data directory in use.
    Path,
}
