//! Category Model
//!
//! Categories are plain strings on the product. The form offers a fixed
//! list but the store accepts anything.

/// Options offered by the product form
pub const KNOWN_CATEGORIES: [&str; 3] = ["Food", "Beverages", "Desserts"];

/// Report bucket for products with no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Case-insensitive category comparison
pub fn category_matches(category: &str, wanted: &str) -> bool {
    category.trim().eq_ignore_ascii_case(wanted.trim())
}

/// Spelling to store for a typed category: a known option when one matches
/// case-insensitively, otherwise the trimmed text as entered
pub fn canonical_category(input: &str) -> String {
    KNOWN_CATEGORIES
        .iter()
        .find(|known| category_matches(input, known))
        .map_or_else(|| input.trim().to_string(), |known| (*known).to_string())
}

/// Report label for a product's category
pub fn category_label(category: &str) -> &str {
    if category.trim().is_empty() {
        UNCATEGORIZED
    } else {
        category
    }
}
