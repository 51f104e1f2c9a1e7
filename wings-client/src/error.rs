//! Client error types

use shared::{Sale, ValidationError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the store (400 / 422)
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// Any other non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File picked for a product image is not an image
    #[error("Not an image file: {0}")]
    UnsupportedImage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local copy of a collection is missing because its last fetch failed
    #[error("{0} could not be loaded; refresh and try again")]
    Unavailable(&'static str),

    /// The sale was saved but the follow-up stock update failed.
    /// The two collections disagree until someone fixes the stock by hand.
    #[error("Sale recorded but stock was not updated: {source}")]
    StockNotUpdated {
        sale: Box<Sale>,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Local guard failure, to be shown to the user as a blocking alert
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnsupportedImage(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
