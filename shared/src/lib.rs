//! Shared types for the Wings Cafe client
//!
//! Wire models for the `products` and `sales` collections, local
//! validation guards, and the report and dashboard view models. Nothing in
//! this crate performs I/O.

pub mod dashboard;
pub mod error;
pub mod models;
pub mod numeric;
pub mod report;
pub mod types;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ValidationError, ValidationResult};
pub use models::{NewSale, Product, ProductInput, Sale, StockStatus};
pub use report::{SalesReport, format_money};
pub use types::{RecordId, Timestamp};
