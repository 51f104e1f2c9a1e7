//! Sale Model

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::numeric::{f64_lenient, i64_lenient, string_or_default};
use crate::types::{RecordId, Timestamp};

/// Sale entity, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Absent on rows written by stores that do not echo ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub product_id: RecordId,
    /// Name at time of sale
    #[serde(default, deserialize_with = "string_or_default")]
    pub product_name: String,
    #[serde(deserialize_with = "i64_lenient")]
    pub quantity: i64,
    /// Unit price at time of sale
    #[serde(deserialize_with = "f64_lenient")]
    pub price: f64,
    /// quantity × price, fixed at creation
    #[serde(deserialize_with = "f64_lenient")]
    pub total: f64,
    pub date: Timestamp,
}

/// Create sale payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
    pub date: Timestamp,
}

impl NewSale {
    /// Snapshot name and price from the product and compute the total once
    pub fn for_product(product: &Product, quantity: i64, date: Timestamp) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price: product.price,
            total: product.price * quantity as f64,
            date,
        }
    }
}

impl Sale {
    /// Row key for listings: the id, or `productId-date` when there is none
    pub fn row_key(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("{}-{}", self.product_id, self.date.to_rfc3339()),
        }
    }
}
