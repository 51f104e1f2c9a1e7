//! Data models
//!
//! Wire shapes of the `products` and `sales` collections (camelCase JSON).

pub mod category;
pub mod product;
pub mod sale;

// Re-exports
pub use category::*;
pub use product::*;
pub use sale::*;
