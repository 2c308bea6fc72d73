//! Pizzeria storefront
//!
//! A single-page ordering site for a pizza restaurant: a hero carousel of
//! featured pizzas, a static menu, and an in-memory cart shown in an overlay.
//! All state lives in an owned [`Storefront`] for the length of a session.
//!
//! # Features
//!
//! - **Cart store**: add/remove/change-quantity by item name, exact decimal totals
//! - **Carousel**: circular next/previous over the featured pizzas
//! - **Rendering**: HTML and plain-text pages, content digests, text snapshots
//! - **Session**: a line-oriented driver that applies one action per line
//!
//! # Example
//!
//! ```no_run
//! use pizzeria::render::{HtmlRenderer, Renderer};
//! use pizzeria::{Action, Catalog, Storefront, StorefrontConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig {
//!     brand: "Slice of Rust".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut store = Storefront::new(config, Catalog::builtin())?;
//! store.dispatch(Action::AddFeatured)?;
//! store.dispatch("add Wagyu Wonder".parse()?)?;
//!
//! let page = HtmlRenderer::new().render(&store)?;
//! println!("{} bytes, digest {}", page.content.len(), page.digest);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub use error::{Error, Result};

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod money;
pub mod render;
pub mod session;
pub mod storefront;

pub use carousel::Carousel;
pub use cart::{Cart, CartLine, LineId, QuantityChange};
pub use catalog::{Catalog, CatalogItem, MenuCategory};
pub use money::Price;
pub use storefront::{Action, Storefront};

/// Restaurant contact details shown at the bottom of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub hours: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "(555) 123-4567".to_string(),
            address: "123 Pizza Street, NY 10001".to_string(),
            hours: "Mon-Sun: 11AM - 10PM".to_string(),
        }
    }
}

/// Configuration for a storefront session
///
/// Defaults reproduce the standard page. A JSON file may override any subset
/// of fields.
///
/// # Examples
///
/// ```
/// let cfg = pizzeria::StorefrontConfig::default();
/// assert!(cfg.open_cart_on_add);
/// assert_eq!(cfg.brand, "Pizzeria 3D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Name shown in the header and page title
    pub brand: String,
    /// Contact section content
    pub contact: ContactInfo,
    /// Whether every add-to-cart also opens the cart overlay
    pub open_cart_on_add: bool,
    /// Message shown when checkout is requested
    pub checkout_notice: String,
    /// Symbol printed before every amount
    pub currency_symbol: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "Pizzeria 3D".to_string(),
            contact: ContactInfo::default(),
            open_cart_on_add: true,
            checkout_notice: "Checkout functionality coming soon!".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StorefrontConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(Error::ConfigError("brand must not be empty".into()));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(Error::ConfigError("currency_symbol must not be empty".into()));
        }
        if self.checkout_notice.trim().is_empty() {
            return Err(Error::ConfigError("checkout_notice must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.contact.phone, "(555) 123-4567");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.open_cart_on_add);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_config() {
        let config =
            StorefrontConfig::from_json(r#"{"brand": "Slice", "contact": {"hours": "24/7"}}"#)
                .unwrap();
        assert_eq!(config.brand, "Slice");
        assert_eq!(config.contact.hours, "24/7");
        assert_eq!(config.contact.phone, "(555) 123-4567");
        assert_eq!(config.checkout_notice, "Checkout functionality coming soon!");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"brand": "  "}"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"brand": 7}"#),
            Err(Error::Json(_))
        ));
    }
}
