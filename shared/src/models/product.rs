//! Product Model

use serde::{Deserialize, Serialize};

use crate::numeric::{f64_lenient, i64_lenient, string_or_default};
use crate::types::RecordId;

/// At or below this quantity a product shows as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    /// Open set; see [`super::category::KNOWN_CATEGORIES`]
    #[serde(default, deserialize_with = "string_or_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(deserialize_with = "i64_lenient")]
    pub quantity: i64,
    /// URL or `data:` URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create / update product payload (no id; full record on update)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(deserialize_with = "i64_lenient")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Stock level shown next to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Available,
    LowStock,
    SoldOut,
}

impl StockStatus {
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity > LOW_STOCK_THRESHOLD {
            Self::Available
        } else if quantity > 0 {
            Self::LowStock
        } else {
            Self::SoldOut
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::LowStock => "Low Stock",
            Self::SoldOut => "Sold Out",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Product {
    /// Full record for a PUT: the input plus the existing id
    pub fn with_input(id: RecordId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            image_url: input.image_url,
        }
    }

    /// Copy with a different quantity, everything else unchanged
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Binary flag used by the stock table
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }

    /// Pre-fill for the edit form
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_form_backed_json() {
        let json = r#"{
            "id": 3,
            "name": "Latte",
            "category": "Beverages",
            "description": "",
            "price": "25",
            "quantity": "12"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, RecordId::from(3));
        assert_eq!(product.price, 25.0);
        assert_eq!(product.quantity, 12);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_product_null_category_is_blank() {
        let json = r#"{"id": "p7", "name": "Pie", "category": null, "price": 9, "quantity": 2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, "");
        assert_eq!(
            crate::models::category_label(&product.category),
            crate::models::UNCATEGORIZED
        );
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: "p1".into(),
            name: "Scone".into(),
            category: "Desserts".into(),
            description: None,
            price: 12.0,
            quantity: 4,
            image_url: Some("https://img/scone.png".into()),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["imageUrl"], "https://img/scone.png");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_quantity(6), StockStatus::Available);
        assert_eq!(StockStatus::from_quantity(5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(0), StockStatus::SoldOut);
        assert_eq!(StockStatus::from_quantity(-1), StockStatus::SoldOut);
    }

    #[test]
    fn test_with_quantity_keeps_other_fields() {
        let product = Product {
            id: "p1".into(),
            name: "Scone".into(),
            category: "Desserts".into(),
            description: Some("Fresh".into()),
            price: 12.0,
            quantity: 4,
            image_url: None,
        };
        let updated = product.with_quantity(9);
        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.description, product.description);
    }
}
