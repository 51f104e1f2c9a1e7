//! Local copies of the remote collections
//!
//! The store owns the transient, possibly stale copy of `products` and
//! `sales`. Fetches replace a collection wholesale; writes patch it by id
//! without re-fetching (optimistic merge). When two writes race, whichever
//! is merged last wins.

use shared::dashboard::{Shelf, dashboard_shelves};
use shared::{Product, RecordId, Sale, SalesReport};

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    sales: Vec<Sale>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn product(&self, id: &RecordId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn replace_sales(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
    }

    /// Replace the product with the same id, or append it
    pub fn upsert_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => self.products.push(product),
        }
    }

    /// Returns the removed product, if it was present
    pub fn remove_product(&mut self, id: &RecordId) -> Option<Product> {
        let pos = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(pos))
    }

    /// Sales are append-only
    pub fn push_sale(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Fresh report over the current copies
    pub fn report(&self) -> SalesReport {
        SalesReport::build(&self.sales, &self.products)
    }

    pub fn shelves(&self) -> Vec<Shelf> {
        dashboard_shelves(&self.products)
    }
}
