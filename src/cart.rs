//! Cart store: the only mutable domain state of the storefront.
//!
//! Lines are keyed by item name and kept in insertion order. Every operation
//! is total: unknown names are no-ops, and a line whose quantity would reach
//! zero is removed instead of stored.

use crate::catalog::CatalogItem;
use crate::money::Price;
use serde::Serialize;
use std::fmt;

/// Session-unique token minted when a line is first inserted.
///
/// Carries no meaning for cart operations, which address lines by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineId(u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

/// One item in the cart with its quantity (always at least 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: LineId,
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// `price × quantity`, exact.
    pub fn subtotal(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}

/// What `change_quantity` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Line kept with this new quantity
    Updated(u32),
    /// Quantity reached zero or below; line deleted
    Removed,
    /// No line with that name
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`. Bumps an existing line with the same name or
    /// appends a new one. Returns the line's id.
    pub fn add_item(&mut self, item: &CatalogItem) -> LineId {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == item.name) {
            line.quantity = line.quantity.saturating_add(1);
            log::debug!("cart: '{}' quantity -> {}", item.name, line.quantity);
            return line.id;
        }

        let id = self.mint_id();
        self.lines.push(CartLine {
            id,
            item: item.clone(),
            quantity: 1,
        });
        log::debug!("cart: added '{}' as {}", item.name, id);
        id
    }

    /// Delete the line named `name`. Absent names are ignored.
    pub fn remove_item(&mut self, name: &str) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| l.item.name == name)?;
        log::debug!("cart: removed '{}'", name);
        Some(self.lines.remove(pos))
    }

    /// Adjust the quantity of `name` by `delta`. A result of zero or less
    /// deletes the line.
    pub fn change_quantity(&mut self, name: &str, delta: i64) -> QuantityChange {
        let Some(pos) = self.lines.iter().position(|l| l.item.name == name) else {
            return QuantityChange::Missing;
        };

        let next = i64::from(self.lines[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
            log::debug!("cart: '{}' dropped to {}, removed", name, next);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[pos].quantity = quantity;
        log::debug!("cart: '{}' quantity -> {}", name, quantity);
        QuantityChange::Updated(quantity)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item.name == name)
    }

    /// Sum of `price × quantity` over all lines, unrounded.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn total_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line. Ids keep counting so they stay unique for the session.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn mint_id(&mut self) -> LineId {
        self.next_id += 1;
        LineId(self.next_id)
    }
}
