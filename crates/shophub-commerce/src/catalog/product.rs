//! Catalog product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as served by the catalog API.
///
/// Only `id` is required when decoding; catalog data is taken as given and
/// never validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: Money,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Review summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product with the required display fields.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: None,
            category: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Some(Rating { rate, count });
        self
    }
}

/// Average review score and number of reviews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score, 0 to 5.
    #[serde(default)]
    pub rate: f64,
    /// Number of reviews.
    #[serde(default)]
    pub count: u64,
}

impl Rating {
    /// Whole stars to fill when rendering, rounded down and capped at five.
    pub fn filled_stars(&self) -> u8 {
        self.rate.clamp(0.0, 5.0).floor() as u8
    }
}
