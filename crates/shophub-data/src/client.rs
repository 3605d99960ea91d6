//! HTTP client for the public catalog API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use shophub_commerce::catalog::Product;
use shophub_commerce::ProductId;
use tracing::{debug, info};

use crate::timeout::TimeoutConfig;

/// Public catalog API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Message shown to users for any catalog failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Product not found: {0}")]
    NotFound(String),
}

impl FetchError {
    /// The generic message surfaced to users; details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound(_) => "Product not found.",
            _ => LOAD_FAILED_MESSAGE,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
            || matches!(self, FetchError::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Read-only client for the catalog API.
///
/// No retries and no caching: each call is one GET.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for `base_url` with the given timeouts.
    pub fn new(base_url: impl Into<String>, timeout: TimeoutConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the public API with default timeouts.
    pub fn public() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, TimeoutConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products`
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.url("products");
        let products: Vec<Product> = self.get_json(&url).await?;
        info!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// `GET /products/categories`
    pub async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        let url = self.url("products/categories");
        let categories: Vec<String> = self.get_json(&url).await?;
        info!(count = categories.len(), "fetched categories");
        Ok(categories)
    }

    /// `GET /products/{id}`
    pub async fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        let url = self.url(&format!("products/{}", id.to_path_segment()));
        let body = self.get_bytes(&url).await?;
        decode_product(&url, &body)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "GET");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

/// The API answers unknown ids with `200` and an empty (or `null`) body.
fn decode_product(url: &str, body: &[u8]) -> Result<Product, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::NotFound(url.to_string()));
    }
    let product: Option<Product> =
        serde_json::from_slice(body).map_err(|e| FetchError::Deserialization(e.to_string()))?;
    product.ok_or_else(|| FetchError::NotFound(url.to_string()))
}
