//! Catalog provider: featured pizzas for the carousel and the categorized menu.
//!
//! The built-in catalog is the restaurant's fixed page content. Custom catalogs
//! can be loaded from JSON and are validated before use, so everything
//! downstream (carousel, cart, rendering) can rely on unique names, a
//! non-empty featured list and non-negative prices.

use crate::money::Price;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A single purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Absolute image URL
    pub image: String,
}

impl CatalogItem {
    pub fn new(name: &str, description: &str, price: Price, image: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
    pub items: Vec<CatalogItem>,
}

/// Read-only catalog: featured pizzas plus menu categories.
///
/// Every `Catalog` value has passed [`Catalog::validate`]; deserialization
/// validates too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    featured: Vec<CatalogItem>,
    menu: Vec<MenuCategory>,
}

#[derive(Deserialize)]
struct RawCatalog {
    featured: Vec<CatalogItem>,
    #[serde(default)]
    menu: Vec<MenuCategory>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = Error;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Catalog::new(raw.featured, raw.menu)
    }
}

impl Catalog {
    /// Build and validate a catalog.
    pub fn new(featured: Vec<CatalogItem>, menu: Vec<MenuCategory>) -> Result<Self> {
        let catalog = Self { featured, menu };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The restaurant's standard page content.
    pub fn builtin() -> Self {
        let featured = vec![
            CatalogItem::new(
                "Margherita Supreme",
                "Fresh basil, mozzarella, and our signature tomato sauce",
                Price::from_cents(1499),
                "https://images.unsplash.com/photo-1604382354936-07c5d9983bd3?auto=format&fit=crop&w=800&q=80",
            ),
            CatalogItem::new(
                "Pepperoni Paradise",
                "Double pepperoni, extra cheese, and Italian herbs",
                Price::from_cents(1699),
                "https://images.unsplash.com/photo-1628840042765-356cda07504e?auto=format&fit=crop&w=800&q=80",
            ),
            CatalogItem::new(
                "Veggie Delight",
                "Bell peppers, mushrooms, onions, and black olives",
                Price::from_cents(1599),
                "https://images.unsplash.com/photo-1571407970349-bc81e7e96d47?auto=format&fit=crop&w=800&q=80",
            ),
        ];

        let menu = vec![
            MenuCategory {
                category: "Signature Pizzas".to_string(),
                items: vec![
                    CatalogItem::new(
                        "The Royal Feast",
                        "24K gold leaf, caviar, truffle, wagyu beef, and buffalo mozzarella",
                        Price::from_cents(99999),
                        "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&w=800&q=80",
                    ),
                    CatalogItem::new(
                        "Lobster Luxury",
                        "Fresh lobster, scallops, shrimp, garlic butter sauce",
                        Price::from_cents(59999),
                        "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?auto=format&fit=crop&w=800&q=80",
                    ),
                ],
            },
            MenuCategory {
                category: "Premium Selection".to_string(),
                items: vec![
                    CatalogItem::new(
                        "Truffle Paradise",
                        "Black truffle shavings, wild mushrooms, fontina cheese",
                        Price::from_cents(29999),
                        "https://images.unsplash.com/photo-1593560708920-61dd98c46a4e?auto=format&fit=crop&w=800&q=80",
                    ),
                    CatalogItem::new(
                        "Wagyu Wonder",
                        "Premium wagyu beef, caramelized onions, gorgonzola",
                        Price::from_cents(24999),
                        "https://images.unsplash.com/photo-1590947132387-155cc02f3212?auto=format&fit=crop&w=800&q=80",
                    ),
                ],
            },
            MenuCategory {
                category: "Classic Collection".to_string(),
                items: vec![
                    CatalogItem::new(
                        "Mediterranean Dream",
                        "Kalamata olives, feta, sun-dried tomatoes, oregano",
                        Price::from_cents(14999),
                        "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?auto=format&fit=crop&w=800&q=80",
                    ),
                    CatalogItem::new(
                        "Four Cheese Royale",
                        "Mozzarella, gorgonzola, parmesan, ricotta",
                        Price::from_cents(12999),
                        "https://images.unsplash.com/photo-1548369937-47519962c11a?auto=format&fit=crop&w=800&q=80",
                    ),
                ],
            },
        ];

        Self { featured, menu }
    }

    /// Parse and validate a catalog from JSON:
    /// `{"featured": [item...], "menu": [{"category": "...", "items": [item...]}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        log::info!(
            "loaded catalog from {} ({} featured, {} categories)",
            path.display(),
            catalog.featured.len(),
            catalog.menu.len()
        );
        Ok(catalog)
    }

    pub fn featured(&self) -> &[CatalogItem] {
        &self.featured
    }

    pub fn menu(&self) -> &[MenuCategory] {
        &self.menu
    }

    /// All menu items in category order.
    pub fn menu_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.menu.iter().flat_map(|c| c.items.iter())
    }

    /// Look up an item by name, featured list first, then the menu.
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.featured
            .iter()
            .find(|i| i.name == name)
            .or_else(|| self.menu_items().find(|i| i.name == name))
    }

    /// Look up a menu item within one category.
    pub fn menu_item(&self, category: &str, name: &str) -> Option<&CatalogItem> {
        self.menu
            .iter()
            .find(|c| c.category == category)
            .and_then(|c| c.items.iter().find(|i| i.name == name))
    }

    /// Check the invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<()> {
        if self.featured.is_empty() {
            return Err(Error::InvalidCatalog(
                "at least one featured item is required".into(),
            ));
        }
        check_unique("featured", self.featured.iter())?;
        check_unique("menu", self.menu_items())?;

        for category in &self.menu {
            if category.category.trim().is_empty() {
                return Err(Error::InvalidCatalog("empty category name".into()));
            }
        }

        for item in self.featured.iter().chain(self.menu_items()) {
            check_item(item)?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_unique<'a>(list: &str, items: impl Iterator<Item = &'a CatalogItem>) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.name.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate name '{}' in {} list",
                item.name, list
            )));
        }
    }
    Ok(())
}

fn check_item(item: &CatalogItem) -> Result<()> {
    if item.name.trim().is_empty() {
        return Err(Error::InvalidCatalog("item with empty name".into()));
    }
    if item.price.is_negative() {
        return Err(Error::InvalidCatalog(format!(
            "negative price for '{}'",
            item.name
        )));
    }
    url::Url::parse(&item.image).map_err(|e| {
        Error::InvalidCatalog(format!("bad image URL for '{}': {}", item.name, e))
    })?;
    Ok(())
}
