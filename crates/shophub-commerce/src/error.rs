//! Commerce error types.
//!
//! Cart operations never fail; these errors only come from parsing
//! user-supplied values.

use thiserror::Error;

/// Errors that can occur when parsing commerce values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product identifier was empty.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Amount could not be parsed as a decimal.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}
