//! User actions over the remote store
//!
//! Each action validates against the local copy, issues its request(s) and
//! merges the result into the [`InventoryStore`]. Validation errors come
//! back before anything is sent. Network errors are returned to the caller
//! as-is; nothing is retried and local state is never rolled back.

use shared::dashboard::Shelf;
use shared::validation::{validate_adjustment, validate_image_ref, validate_product_input, validate_sale};
use shared::{NewSale, Product, ProductInput, RecordId, Sale, SalesReport, ValidationError};

use crate::api::CafeApi;
use crate::http::HttpClient;
use crate::store::InventoryStore;
use crate::{ClientError, ClientResult};

/// What a refresh managed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub products_loaded: bool,
    pub sales_loaded: bool,
}

impl RefreshSummary {
    pub fn is_complete(&self) -> bool {
        self.products_loaded && self.sales_loaded
    }
}

pub struct CafeService<H> {
    api: CafeApi<H>,
    store: InventoryStore,
    /// Whether the latest products fetch succeeded
    products_loaded: bool,
}

impl<H: HttpClient> CafeService<H> {
    pub fn new(http: H) -> Self {
        Self {
            api: CafeApi::new(http),
            store: InventoryStore::new(),
            products_loaded: false,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn report(&self) -> SalesReport {
        self.store.report()
    }

    pub fn shelves(&self) -> Vec<Shelf> {
        self.store.shelves()
    }

    // ========== Loading ==========

    /// Load products, then sales.
    ///
    /// Failures are logged and swallowed. A failed products fetch keeps the
    /// previous copy; a failed sales fetch leaves the sales list empty.
    pub async fn refresh(&mut self) -> RefreshSummary {
        let products_loaded = match self.api.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.store.replace_products(products);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                false
            }
        };

        let sales_loaded = match self.api.list_sales().await {
            Ok(sales) => {
                tracing::debug!(count = sales.len(), "Sales loaded");
                self.store.replace_sales(sales);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching sales");
                self.store.replace_sales(Vec::new());
                false
            }
        };

        self.products_loaded = products_loaded;
        RefreshSummary {
            products_loaded,
            sales_loaded,
        }
    }

    // ========== Products ==========

    pub async fn create_product(&mut self, input: ProductInput) -> ClientResult<Product> {
        validate_product_input(&input)?;
        let created = self.api.create_product(&input).await?;
        self.store.upsert_product(created.clone());
        Ok(created)
    }

    /// Replace every field of an existing product
    pub async fn update_product(&mut self, id: &RecordId, input: ProductInput) -> ClientResult<Product> {
        validate_product_input(&input)?;
        let record = Product::with_input(id.clone(), input);
        let updated = self.api.update_product(&record).await?;
        self.store.upsert_product(updated.clone());
        Ok(updated)
    }

    pub async fn delete_product(&mut self, id: &RecordId) -> ClientResult<()> {
        self.api.delete_product(id).await?;
        self.store.remove_product(id);
        Ok(())
    }

    /// Attach an image reference (URL or data URI) to a product
    pub async fn set_product_image(&mut self, id: &RecordId, image: String) -> ClientResult<Product> {
        validate_image_ref(&image)?;
        let mut record = self.product(id)?.clone();
        record.image_url = Some(image);
        let updated = self.api.update_product(&record).await?;
        self.store.upsert_product(updated.clone());
        Ok(updated)
    }

    // ========== Stock ==========

    /// Add (positive) or remove (negative) stock.
    ///
    /// The locally computed record is merged on success, not the response.
    pub async fn adjust_stock(&mut self, id: &RecordId, delta: i64) -> ClientResult<Product> {
        let product = self.product(id)?;
        let quantity = validate_adjustment(product, delta)?;
        let record = product.with_quantity(quantity);

        self.api.update_product(&record).await?;
        tracing::info!(%id, delta, quantity, "Stock adjusted");
        self.store.upsert_product(record.clone());
        Ok(record)
    }

    // ========== Sales ==========

    /// Record a sale and take the quantity out of stock.
    ///
    /// Two independent requests: the sale is POSTed first, then the product
    /// is PUT with the lower quantity. If the second request fails the sale
    /// stays recorded (locally and remotely) and
    /// [`ClientError::StockNotUpdated`] is returned.
    pub async fn record_sale(&mut self, id: &RecordId, quantity: i64) -> ClientResult<Sale> {
        let product = self.product(id)?;
        validate_sale(product, quantity)?;

        let new_sale = NewSale::for_product(product, quantity, shared::util::now());
        let restocked = product.with_quantity(product.quantity - quantity);

        let saved = self.api.create_sale(&new_sale).await?;
        self.store.push_sale(saved.clone());

        if let Err(e) = self.api.update_product(&restocked).await {
            tracing::warn!(
                %id,
                quantity,
                error = %e,
                "Sale recorded but stock update failed; products and sales now disagree"
            );
            return Err(ClientError::StockNotUpdated {
                sale: Box::new(saved),
                source: Box::new(e),
            });
        }
        self.store.upsert_product(restocked);
        Ok(saved)
    }

    /// Look up a product in the local copy. A miss is the user's mistake
    /// only when the copy was actually loaded.
    pub fn product(&self, id: &RecordId) -> ClientResult<&Product> {
        match self.store.product(id) {
            Some(product) => Ok(product),
            None if !self.products_loaded => Err(ClientError::Unavailable("products")),
            None => Err(ValidationError::UnknownProduct(id.clone()).into()),
        }
    }
}
