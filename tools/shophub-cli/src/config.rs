//! CLI configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shophub_data::{TimeoutConfig, DEFAULT_BASE_URL};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shophub.toml", ".shophub.toml", "shophub.json"];

/// Environment variable overriding `storage.data_dir`.
pub const DATA_DIR_ENV: &str = "SHOPHUB_DATA_DIR";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout configuration.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl ApiConfig {
    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_millis(self.connect_timeout_ms, self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart snapshot and preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl StorageConfig {
    /// Resolve the data directory.
    ///
    /// `SHOPHUB_DATA_DIR` wins over the config file, which wins over
    /// `~/.local/share/shophub`. A leading `~/` expands to `$HOME`.
    pub fn resolve(&self, env_override: Option<String>, home: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
            return expand_home(&dir, home.as_deref());
        }
        if let Some(dir) = &self.data_dir {
            return expand_home(dir, home.as_deref());
        }
        match home {
            Some(home) => home.join(".local").join("share").join("shophub"),
            None => std::env::temp_dir().join("shophub"),
        }
    }
}

fn expand_home(dir: &str, home: Option<&Path>) -> PathBuf {
    match (dir.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(dir),
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated order processing delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Estimated tax rate as a decimal string.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: String,
}

fn default_delay_ms() -> u64 {
    2_000
}

fn default_tax_rate() -> String {
    shophub_commerce::cart::default_tax_rate().to_string()
}

impl CheckoutConfig {
    /// Parsed tax rate.
    pub fn tax_rate(&self) -> Result<Decimal> {
        let rate = Decimal::from_str(self.tax_rate.trim())
            .with_context(|| format!("Invalid checkout.tax_rate: {:?}", self.tax_rate))?;
        anyhow::ensure!(
            !rate.is_sign_negative(),
            "checkout.tax_rate must not be negative"
        );
        Ok(rate)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Generate a default shophub.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# ShopHub configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
connect_timeout_ms = {connect_timeout_ms}

[storage]
# Overridden by the {env} environment variable.
# data_dir = "~/.local/share/shophub"

[checkout]
delay_ms = {delay_ms}
tax_rate = "{tax_rate}"
"#,
        base_url = DEFAULT_BASE_URL,
        timeout_ms = default_timeout_ms(),
        connect_timeout_ms = default_connect_timeout_ms(),
        env = DATA_DIR_ENV,
        delay_ms = default_delay_ms(),
        tax_rate = default_tax_rate(),
    )
}
