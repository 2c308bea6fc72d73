//! Circular cursor over the featured pizzas.

use crate::catalog::{Catalog, CatalogItem};
use crate::{Error, Result};

/// Hero carousel. Holds its own copy of the featured items so `current()` is
/// always defined.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<CatalogItem>,
    cursor: usize,
}

impl Carousel {
    /// Starts at index 0. Fails on an empty list.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self { items, cursor: 0 })
    }

    /// Carousel over a catalog's featured items. A `Catalog` always has at
    /// least one, so this cannot fail.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            items: catalog.featured().to_vec(),
            cursor: 0,
        }
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let n = self.items.len();
        self.cursor = (self.cursor + n - 1) % n;
    }

    /// Jump straight to `index`, wrapping modulo the item count.
    pub fn select(&mut self, index: usize) {
        self.cursor = index % self.items.len();
    }

    pub fn current(&self) -> &CatalogItem {
        &self.items[self.cursor]
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}
