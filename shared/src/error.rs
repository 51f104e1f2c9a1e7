//! Error types for the shared crate
//!
//! Validation failures raised before any request leaves the client.

use thiserror::Error;

use crate::types::RecordId;

/// Input rejected by a local guard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Required field left blank
    #[error("Please fill all required fields: {0} is missing")]
    MissingField(&'static str),

    /// Text over its length limit
    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Numeric form field holding text that is not a number
    #[error("{field} must be a number (got {text:?})")]
    NotANumber { field: &'static str, text: String },

    /// Price negative or not finite
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Sale quantity not a positive integer
    #[error("Enter a valid quantity (got {0:?})")]
    InvalidQuantity(String),

    /// Stock level that is negative on a create/update payload
    #[error("Quantity must not be negative (got {0})")]
    NegativeQuantity(i64),

    /// Stock adjustment zero or not an integer
    #[error("Enter a valid quantity (positive or negative), got {0:?}")]
    InvalidAdjustment(String),

    /// Sale larger than stock on hand
    #[error("Not enough stock: {available} available, {requested} requested")]
    InsufficientStock { available: i64, requested: i64 },

    /// Adjustment would drive stock below zero
    #[error("Stock cannot go below zero ({current} {delta:+})")]
    NegativeStock { current: i64, delta: i64 },

    /// Product not present in the local copy
    #[error("Unknown product: {0}")]
    UnknownProduct(RecordId),
}

/// Result type for local validation
pub type ValidationResult<T> = Result<T, ValidationError>;
