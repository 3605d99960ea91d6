//! Product identifiers.
//!
//! The catalog API hands out numeric ids, but snapshots written by other
//! clients may carry string ids. Both are accepted and kept distinct: `1` and
//! `"1"` are different products.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A unique product identifier, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Numeric value, if this id is numeric or a numeric string.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ProductId::Number(n) => Some(*n),
            ProductId::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Form used in catalog URLs.
    pub fn to_path_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// Parses command-line input: integers become numeric ids, anything else text.
impl FromStr for ProductId {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CommerceError::InvalidProductId(s.to_string()));
        }
        Ok(trimmed
            .parse::<i64>()
            .map(ProductId::Number)
            .unwrap_or_else(|_| ProductId::Text(trimmed.to_string())))
    }
}
