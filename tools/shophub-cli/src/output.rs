//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use shophub_commerce::catalog::{Product, Rating};
use shophub_commerce::Money;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print one product as a catalog row.
    pub fn product_row(&self, product: &Product, in_cart: bool) {
        self.table_row(
            &[
                &product.id.to_string(),
                &truncate(&product.title, 40),
                &product.price.display(),
                &product.category,
                &rating_stars(product.rating.as_ref()),
                &in_cart_label(in_cart),
            ],
            &[4, 40, 10, 20, 16, 7],
        );
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Five-star rendering of a review summary, e.g. `★★★★☆ (120)`.
pub fn rating_stars(rating: Option<&Rating>) -> String {
    match rating {
        Some(rating) => {
            let filled = rating.filled_stars() as usize;
            format!(
                "{}{} ({})",
                "★".repeat(filled),
                "☆".repeat(5 - filled),
                rating.count
            )
        }
        None => String::new(),
    }
}

/// Marker for products already in the cart; empty otherwise.
pub fn in_cart_label(in_cart: bool) -> String {
    if in_cart {
        style("in cart").green().to_string()
    } else {
        String::new()
    }
}

/// Colored amount for summaries. Zero shipping reads as "Free".
pub fn price_label(amount: Money, free_when_zero: bool) -> String {
    if free_when_zero && amount.is_zero() {
        style("Free").green().to_string()
    } else {
        amount.display()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars() {
        let rating = Rating {
            rate: 3.9,
            count: 120,
        };
        let stars = rating_stars(Some(&rating));
        assert!(stars.ends_with("(120)"));
        assert_eq!(stars.chars().filter(|c| *c == '★').count(), rating.filled_stars() as usize);
        assert_eq!(stars.chars().filter(|c| *c == '★' || *c == '☆').count(), 5);
        assert_eq!(rating_stars(None), "");
    }

    #[test]
    fn test_in_cart_label() {
        console::set_colors_enabled(false);
        assert_eq!(in_cart_label(true), "in cart");
        assert_eq!(in_cart_label(false), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(Money::from_cents(1999), true), "$19.99");
        assert_eq!(price_label(Money::ZERO, false), "$0.00");
    }
}
