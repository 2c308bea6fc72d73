//! Error types for the storefront

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the edges of the storefront.
///
/// Cart and carousel operations are total and never produce these; they come
/// from loading catalogs and configuration, parsing actions, and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// A carousel needs at least one featured item
    #[error("Carousel requires at least one featured item")]
    EmptyCarousel,

    /// A custom catalog failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// An action named an item that is not in the catalog
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Session input could not be parsed into an action
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Failed to render the page
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Writing into the output buffer failed
    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),

    /// I/O failure while reading or writing files and streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
