//! Input validation helpers
//!
//! Every guard here runs before a request is sent. Limits:
//! - names and descriptions sized for the product table
//! - image references may be inline `data:` URIs, hence the large cap

use crate::error::{ValidationError, ValidationResult};
use crate::models::{Product, ProductInput};

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Category labels
pub const MAX_CATEGORY_LEN: usize = 100;

/// Product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Image URL or inline data URI
pub const MAX_IMAGE_REF_LEN: usize = 2 * 1024 * 1024;

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &'static str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    validate_len(value, field, max)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &'static str,
    max: usize,
) -> ValidationResult<()> {
    if let Some(v) = value {
        validate_len(v, field, max)?;
    }
    Ok(())
}

fn validate_len(value: &str, field: &'static str, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

// ── Product / stock / sale guards ───────────────────────────────────

/// Product form: name, category, price and quantity are required.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.category, "category", MAX_CATEGORY_LEN)?;
    validate_optional_text(&input.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&input.image_url, "imageUrl", MAX_IMAGE_REF_LEN)?;
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(ValidationError::InvalidPrice(input.price));
    }
    if input.quantity < 0 {
        return Err(ValidationError::NegativeQuantity(input.quantity));
    }
    Ok(())
}

/// Sale guard: positive quantity, no more than is in stock.
pub fn validate_sale(product: &Product, quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity(quantity.to_string()));
    }
    if product.quantity < quantity {
        return Err(ValidationError::InsufficientStock {
            available: product.quantity,
            requested: quantity,
        });
    }
    Ok(())
}

/// Stock adjustment guard. Returns the new quantity.
pub fn validate_adjustment(product: &Product, delta: i64) -> ValidationResult<i64> {
    if delta == 0 {
        return Err(ValidationError::InvalidAdjustment(delta.to_string()));
    }
    match product.quantity.checked_add(delta) {
        Some(next) if next >= 0 => Ok(next),
        _ => Err(ValidationError::NegativeStock {
            current: product.quantity,
            delta,
        }),
    }
}

/// Image reference guard (URL or data URI)
pub fn validate_image_ref(image: &str) -> ValidationResult<()> {
    validate_required_text(image, "imageUrl", MAX_IMAGE_REF_LEN)
}
