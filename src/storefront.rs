//! Top-level view state and the actions that drive it.
//!
//! A `Storefront` owns everything one browsing session can change: the
//! carousel cursor, the cart, whether the cart overlay is open, and a pending
//! notice. Each user interaction is an [`Action`] applied with
//! [`Storefront::dispatch`]; the renderer reads the resulting state.

use crate::carousel::Carousel;
use crate::cart::{Cart, QuantityChange};
use crate::catalog::{Catalog, CatalogItem};
use crate::{Error, Result, StorefrontConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    NextPizza,
    PreviousPizza,
    /// Add the pizza currently shown in the carousel
    AddFeatured,
    /// Add a catalog item by name, featured list first
    AddItem { name: String },
    /// Add the item listed under `category` on the menu
    AddMenuItem { category: String, name: String },
    RemoveItem { name: String },
    ChangeQuantity { name: String, delta: i64 },
    OpenCart,
    CloseCart,
    Checkout,
    DismissNotice,
}

impl Action {
    pub fn increment(name: &str) -> Self {
        Action::ChangeQuantity {
            name: name.to_string(),
            delta: 1,
        }
    }

    pub fn decrement(name: &str) -> Self {
        Action::ChangeQuantity {
            name: name.to_string(),
            delta: -1,
        }
    }

    /// Compact JSON form, used for `data-action` attributes.
    pub fn to_json(&self) -> String {
        // Serializing a plain enum of strings and integers cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Parses either a JSON object or the short command form:
/// `next`, `prev`, `add-featured`, `add <name>`, `add-menu <category>/<name>`,
/// `inc <name>`, `dec <name>`, `remove <name>`, `qty <name> <delta>`, `open`, `close`, `checkout`, `dismiss`.
impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('{') {
            return serde_json::from_str(s)
                .map_err(|e| Error::InvalidAction(format!("{}: {}", s, e)));
        }

        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (s, ""),
        };
        let name = || {
            if rest.is_empty() {
                Err(Error::InvalidAction(format!("'{}' needs an item name", verb)))
            } else {
                Ok(rest.to_string())
            }
        };

        let action = match verb {
            "next" => Action::NextPizza,
            "prev" | "previous" => Action::PreviousPizza,
            "add-featured" => Action::AddFeatured,
            "add" => Action::AddItem { name: name()? },
            "add-menu" => {
                let (category, item) = rest.split_once('/').ok_or_else(|| {
                    Error::InvalidAction("usage: add-menu <category>/<name>".into())
                })?;
                Action::AddMenuItem {
                    category: category.trim().to_string(),
                    name: item.trim().to_string(),
                }
            }
            "remove" | "rm" => Action::RemoveItem { name: name()? },
            "inc" => Action::increment(&name()?),
            "dec" => Action::decrement(&name()?),
            "qty" => {
                let (item, delta) = rest.rsplit_once(char::is_whitespace).ok_or_else(|| {
                    Error::InvalidAction("usage: qty <name> <delta>".into())
                })?;
                let delta = delta
                    .parse::<i64>()
                    .map_err(|e| Error::InvalidAction(format!("bad delta '{}': {}", delta, e)))?;
                Action::ChangeQuantity {
                    name: item.trim().to_string(),
                    delta,
                }
            }
            "open" => Action::OpenCart,
            "close" => Action::CloseCart,
            "checkout" => Action::Checkout,
            "dismiss" => Action::DismissNotice,
            other => return Err(Error::InvalidAction(format!("unknown command '{}'", other))),
        };
        Ok(action)
    }
}

/// One rendering session's state.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    carousel: Carousel,
    cart: Cart,
    cart_open: bool,
    notice: Option<String>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let carousel = Carousel::from_catalog(&catalog);
        Ok(Self {
            config,
            catalog,
            carousel,
            cart: Cart::new(),
            cart_open: false,
            notice: None,
        })
    }

    /// Built-in catalog with default configuration.
    pub fn with_defaults() -> Self {
        let catalog = Catalog::builtin();
        let carousel = Carousel::from_catalog(&catalog);
        Self {
            config: StorefrontConfig::default(),
            catalog,
            carousel,
            cart: Cart::new(),
            cart_open: false,
            notice: None,
        }
    }

    /// Apply one action. Fails only for item names the catalog does not know.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        log::debug!("dispatch {:?}", action);
        match action {
            Action::NextPizza => self.carousel.next(),
            Action::PreviousPizza => self.carousel.previous(),
            Action::AddFeatured => {
                let item = self.carousel.current().clone();
                self.add_to_cart(&item);
            }
            Action::AddItem { name } => {
                let item = self
                    .catalog
                    .find(&name)
                    .cloned()
                    .ok_or(Error::UnknownItem(name))?;
                self.add_to_cart(&item);
            }
            Action::AddMenuItem { category, name } => {
                let item = self
                    .catalog
                    .menu_item(&category, &name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownItem(format!("{}/{}", category, name)))?;
                self.add_to_cart(&item);
            }
            Action::RemoveItem { name } => {
                if self.cart.remove_item(&name).is_none() {
                    log::debug!("remove of '{}' ignored: not in cart", name);
                }
            }
            Action::ChangeQuantity { name, delta } => {
                if self.cart.change_quantity(&name, delta) == QuantityChange::Missing {
                    log::debug!("quantity change for '{}' ignored: not in cart", name);
                }
            }
            Action::OpenCart => self.cart_open = true,
            Action::CloseCart => self.cart_open = false,
            Action::Checkout => {
                if let Some(notice) = self.checkout() {
                    self.notice = Some(notice);
                }
            }
            Action::DismissNotice => self.notice = None,
        }
        Ok(())
    }

    /// Add to cart and, per configuration, reveal the cart overlay, even if
    /// the user just closed it.
    pub fn add_to_cart(&mut self, item: &CatalogItem) {
        self.cart.add_item(item);
        if self.config.open_cart_on_add {
            self.cart_open = true;
        }
    }

    /// Checkout stub. Returns the "not yet available" notice, or `None` when
    /// the cart is empty and there is nothing to check out.
    pub fn checkout(&self) -> Option<String> {
        if self.cart.is_empty() {
            log::debug!("checkout ignored: cart is empty");
            return None;
        }
        log::info!(
            "checkout requested for {} item(s), total {}{}",
            self.cart.total_count(),
            self.config.currency_symbol,
            self.cart.total_price().display_rounded()
        );
        Some(self.config.checkout_notice.clone())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Count shown on the cart badge; `None` hides the badge.
    pub fn badge(&self) -> Option<u64> {
        match self.cart.total_count() {
            0 => None,
            n => Some(n),
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuCategory, Price};

    #[test]
    fn add_opens_cart_even_after_close() {
        let mut s = Storefront::with_defaults();
        assert!(!s.is_cart_open());
        s.dispatch(Action::AddFeatured).unwrap();
        assert!(s.is_cart_open());
        s.dispatch(Action::CloseCart).unwrap();
        assert!(!s.is_cart_open());
        s.dispatch(Action::AddItem { name: "Wagyu Wonder".into() }).unwrap();
        assert!(s.is_cart_open());
    }

    #[test]
    fn add_can_leave_cart_closed_when_configured() {
        let config = StorefrontConfig {
            open_cart_on_add: false,
            ..Default::default()
        };
        let mut s = Storefront::new(config, Catalog::builtin()).unwrap();
        s.dispatch(Action::AddFeatured).unwrap();
        assert!(!s.is_cart_open());
        assert_eq!(s.badge(), Some(1));
    }

    #[test]
    fn add_featured_follows_carousel() {
        let mut s = Storefront::with_defaults();
        s.dispatch(Action::PreviousPizza).unwrap();
        s.dispatch(Action::AddFeatured).unwrap();
        assert_eq!(s.cart().lines()[0].name(), "Veggie Delight");
    }

    #[test]
    fn unknown_item_is_an_error_and_leaves_state() {
        let mut s = Storefront::with_defaults();
        let err = s.dispatch(Action::AddItem { name: "Hawaiian".into() });
        assert!(matches!(err, Err(Error::UnknownItem(_))));
        assert!(s.cart().is_empty());
        assert!(!s.is_cart_open());
    }

    #[test]
    fn menu_add_uses_the_menu_entry_when_names_collide() {
        let featured = vec![CatalogItem::new(
            "A",
            "featured",
            Price::from_cents(1000),
            "https://img.example/a.jpg",
        )];
        let menu = vec![MenuCategory {
            category: "Mains".into(),
            items: vec![CatalogItem::new(
                "A",
                "menu",
                Price::from_cents(2000),
                "https://img.example/a2.jpg",
            )],
        }];
        let catalog = Catalog::new(featured, menu).unwrap();
        let mut s = Storefront::new(StorefrontConfig::default(), catalog).unwrap();

        s.dispatch(Action::AddMenuItem { category: "Mains".into(), name: "A".into() })
            .unwrap();
        let line = &s.cart().lines()[0];
        assert_eq!(line.item.description, "menu");
        assert_eq!(line.subtotal().display_rounded(), "20.00");

        let err = s.dispatch(Action::AddMenuItem { category: "Sides".into(), name: "A".into() });
        assert!(matches!(err, Err(Error::UnknownItem(ref n)) if n == "Sides/A"));
        assert_eq!(s.cart().total_count(), 1);
    }

    #[test]
    fn checkout_only_with_items() {
        let mut s = Storefront::with_defaults();
        s.dispatch(Action::Checkout).unwrap();
        assert!(s.notice().is_none());

        s.dispatch(Action::AddFeatured).unwrap();
        s.dispatch(Action::Checkout).unwrap();
        assert_eq!(s.notice(), Some("Checkout functionality coming soon!"));
        assert_eq!(s.cart().total_count(), 1);

        s.dispatch(Action::DismissNotice).unwrap();
        assert!(s.notice().is_none());
    }

    #[test]
    fn badge_hidden_when_empty() {
        let mut s = Storefront::with_defaults();
        assert_eq!(s.badge(), None);
        s.dispatch(Action::AddFeatured).unwrap();
        s.dispatch(Action::AddFeatured).unwrap();
        assert_eq!(s.badge(), Some(2));
        s.dispatch(Action::RemoveItem { name: "Margherita Supreme".into() }).unwrap();
        assert_eq!(s.badge(), None);
    }

    #[test]
    fn parses_short_commands() {
        assert_eq!("next".parse::<Action>().unwrap(), Action::NextPizza);
        assert_eq!(
            "add The Royal Feast".parse::<Action>().unwrap(),
            Action::AddItem { name: "The Royal Feast".into() }
        );
        assert_eq!(
            "dec Wagyu Wonder".parse::<Action>().unwrap(),
            Action::decrement("Wagyu Wonder")
        );
        assert_eq!(
            "qty Four Cheese Royale -3".parse::<Action>().unwrap(),
            Action::ChangeQuantity { name: "Four Cheese Royale".into(), delta: -3 }
        );
        assert_eq!(
            "add-menu Signature Pizzas / The Royal Feast".parse::<Action>().unwrap(),
            Action::AddMenuItem {
                category: "Signature Pizzas".into(),
                name: "The Royal Feast".into()
            }
        );
        assert!("add-menu The Royal Feast".parse::<Action>().is_err());
        assert!("add".parse::<Action>().is_err());
        assert!("qty Wagyu Wonder lots".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
    }

    #[test]
    fn parses_json_actions() {
        let a: Action = r#"{"type":"change_quantity","name":"Veggie Delight","delta":2}"#
            .parse()
            .unwrap();
        assert_eq!(a, Action::ChangeQuantity { name: "Veggie Delight".into(), delta: 2 });
        assert_eq!(Action::CloseCart.to_json(), r#"{"type":"close_cart"}"#);
        assert_eq!(Action::CloseCart.to_json().parse::<Action>().unwrap(), Action::CloseCart);
    }
}
