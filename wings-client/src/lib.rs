//! Wings Cafe client
//!
//! Talks to the remote store that owns the `products` and `sales`
//! collections, keeps a local copy of both, and turns user actions into
//! requests.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod image;
pub mod logger;
pub mod render;
pub mod service;
pub mod store;

pub use api::CafeApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use service::{CafeService, RefreshSummary};
pub use store::InventoryStore;

// Re-export shared types for convenience
pub use shared::{NewSale, Product, ProductInput, RecordId, Sale, SalesReport};
