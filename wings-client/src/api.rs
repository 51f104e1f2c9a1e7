//! Resource client for the `products` and `sales` collections
//!
//! One call is one round trip. Nothing is retried, batched or cached, and no
//! call spans more than one request.

use serde::de::DeserializeOwned;
use shared::{NewSale, Product, ProductInput, RecordId, Sale};

use crate::http::HttpClient;
use crate::ClientResult;

const PRODUCTS: &str = "products";
const SALES: &str = "sales";

#[derive(Debug, Clone)]
pub struct CafeApi<H> {
    http: H,
}

impl<H: HttpClient> CafeApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    // ========== Products ==========

    /// GET /products; unreadable records are skipped
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.list(PRODUCTS).await
    }

    /// POST /products; the store assigns the id
    pub async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        let created: Product = self.http.post(PRODUCTS, input).await?;
        tracing::info!(id = %created.id, name = %created.name, "Product created");
        Ok(created)
    }

    /// PUT /products/{id} with the complete record
    pub async fn update_product(&self, product: &Product) -> ClientResult<Product> {
        let updated: Product = self.http.put(&product_path(&product.id), product).await?;
        tracing::info!(id = %updated.id, quantity = updated.quantity, "Product updated");
        Ok(updated)
    }

    /// DELETE /products/{id}
    pub async fn delete_product(&self, id: &RecordId) -> ClientResult<()> {
        self.http.delete(&product_path(id)).await?;
        tracing::info!(%id, "Product deleted");
        Ok(())
    }

    // ========== Sales ==========

    /// GET /sales; unreadable records are skipped
    pub async fn list_sales(&self) -> ClientResult<Vec<Sale>> {
        self.list(SALES).await
    }

    /// POST /sales; the store assigns the id
    pub async fn create_sale(&self, sale: &NewSale) -> ClientResult<Sale> {
        let saved: Sale = self.http.post(SALES, sale).await?;
        tracing::info!(
            product_id = %saved.product_id,
            quantity = saved.quantity,
            total = saved.total,
            "Sale recorded"
        );
        Ok(saved)
    }

    /// Fetch a collection and decode it record by record, so one bad row
    /// does not hide the rest
    async fn list<T: DeserializeOwned>(&self, collection: &'static str) -> ClientResult<Vec<T>> {
        let raw: Vec<serde_json::Value> = self.http.get(collection).await?;
        Ok(decode_records(collection, raw))
    }
}

fn decode_records<T: DeserializeOwned>(collection: &str, raw: Vec<serde_json::Value>) -> Vec<T> {
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection, index, error = %e, "Skipping unreadable record");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(collection, skipped = total - records.len(), total, "Collection loaded with skipped records");
    }
    records
}

fn product_path(id: &RecordId) -> String {
    format!("{PRODUCTS}/{id}")
}
