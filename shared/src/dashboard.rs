//! Dashboard shelves
//!
//! Products laid out under the fixed menu sections with their stock status.

use serde::Serialize;

use crate::models::{Product, StockStatus, category_matches};

/// Menu sections in display order
pub const SHELF_ORDER: [&str; 3] = ["Food", "Desserts", "Beverages"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItem {
    pub product: Product,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub title: &'static str,
    pub items: Vec<ShelfItem>,
}

impl Shelf {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One shelf per menu section. Products in other categories are not shown.
pub fn dashboard_shelves(products: &[Product]) -> Vec<Shelf> {
    SHELF_ORDER
        .iter()
        .map(|&title| Shelf {
            title,
            items: products
                .iter()
                .filter(|p| category_matches(&p.category, title))
                .map(|p| ShelfItem {
                    product: p.clone(),
                    status: p.status(),
                })
                .collect(),
        })
        .collect()
}
