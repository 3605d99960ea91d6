//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shophub_cache::{FileStore, ThemePreference};
use shophub_commerce::CartStore;
use shophub_data::{Catalog, CatalogClient, StaticCatalog};
use tracing::debug;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES, DATA_DIR_ENV};
use crate::output::Output;

/// Storage shared by the cart and the theme preference.
pub type SharedStore = Arc<FileStore>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Use the built-in featured list instead of the catalog API.
    pub offline: bool,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, offline: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (ShopConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            offline,
        })
    }

    /// Directory holding the cart snapshot and preferences.
    pub fn data_dir(&self) -> PathBuf {
        self.config.storage.resolve(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    /// Open the durable store.
    pub fn open_store(&self) -> Result<SharedStore> {
        let dir = self.data_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        Ok(Arc::new(store))
    }

    /// Open the cart, restoring the saved snapshot.
    pub fn cart_store(&self) -> Result<CartStore<SharedStore>> {
        Ok(CartStore::open(self.open_store()?))
    }

    /// Open the theme preference.
    pub fn theme(&self) -> Result<ThemePreference<SharedStore>> {
        Ok(ThemePreference::new(self.open_store()?))
    }

    /// The product source: the API, or the featured list when offline.
    pub fn catalog(&self) -> Result<Box<dyn Catalog>> {
        if self.offline {
            debug!("using offline catalog");
            return Ok(Box::new(StaticCatalog::featured()));
        }

        let client = CatalogClient::new(&self.config.api.base_url, self.config.api.timeouts())
            .context("Failed to create catalog client")?;
        Ok(Box::new(client))
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(ShopConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = ShopConfig::load(&config_path) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
