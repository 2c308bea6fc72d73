//! Text snapshots of rendered HTML.
//!
//! Parses a page produced by [`super::HtmlRenderer`] and pulls out what a
//! visitor would see: the title, the visible text, the badge, and the cart.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// A cart line as displayed in the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLine {
    pub name: String,
    pub quantity: u32,
}

/// A textual snapshot of a rendered storefront page
#[derive(Debug, Clone, Default)]
pub struct TextSnapshot {
    /// Page title
    pub title: String,
    /// Visible body text with whitespace collapsed
    pub text: String,
    /// Heading of the carousel's current pizza
    pub hero: String,
    /// Badge count, absent when the badge is hidden
    pub badge: Option<u64>,
    /// Whether the cart overlay is shown
    pub cart_open: bool,
    /// Lines listed in the overlay
    pub cart_lines: Vec<SnapshotLine>,
    /// Displayed total, without the currency symbol
    pub total: Option<String>,
    /// Pending notice text
    pub notice: Option<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::RenderError(format!("bad selector '{}': {:?}", css, e)))
}

fn collapse(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_text(root: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    let sel = selector(css)?;
    Ok(root.select(&sel).next().map(collapse))
}

/// Parse a rendered page into a [`TextSnapshot`].
pub fn text_snapshot(html: &str) -> Result<TextSnapshot> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let title = first_text(root, "title")?.unwrap_or_default();
    let text = first_text(root, "body")?.unwrap_or_default();
    let hero = first_text(root, "#hero h1")?.unwrap_or_default();

    let badge = match first_text(root, ".cart-badge")? {
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| Error::RenderError(format!("bad badge '{}': {}", raw, e)))?,
        ),
        None => None,
    };

    let overlay_sel = selector(".cart-overlay")?;
    let overlay = document.select(&overlay_sel).next();

    let mut cart_lines = Vec::new();
    let mut total = None;
    if let Some(overlay) = overlay {
        let line_sel = selector(".cart-line")?;
        for line in overlay.select(&line_sel) {
            let name = first_text(line, ".line-name")?.unwrap_or_default();
            let qty = first_text(line, ".line-qty")?.unwrap_or_default();
            let quantity = qty
                .parse::<u32>()
                .map_err(|e| Error::RenderError(format!("bad quantity '{}': {}", qty, e)))?;
            cart_lines.push(SnapshotLine { name, quantity });
        }
        total = first_text(overlay, ".cart-total strong")?
            .map(|t| t.trim_start_matches(|c: char| !c.is_ascii_digit()).to_string());
    }

    let notice = first_text(root, ".notice p")?;

    Ok(TextSnapshot {
        title,
        text,
        hero,
        badge,
        cart_open: overlay.is_some(),
        cart_lines,
        total,
        notice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HtmlRenderer, Renderer};
    use crate::{Action, Storefront};

    fn snap(s: &Storefront) -> TextSnapshot {
        let page = HtmlRenderer::new().render(s).unwrap();
        text_snapshot(&page.content).unwrap()
    }

    #[test]
    fn snapshot_of_fresh_page() {
        let t = snap(&Storefront::with_defaults());
        assert_eq!(t.title, "Pizzeria 3D");
        assert_eq!(t.hero, "Margherita Supreme");
        assert_eq!(t.badge, None);
        assert!(!t.cart_open);
        assert!(t.cart_lines.is_empty());
        assert!(t.text.contains("Visit Us Today"));
        assert!(t.text.contains("Four Cheese Royale"));
    }

    #[test]
    fn snapshot_tracks_cart() {
        let mut s = Storefront::with_defaults();
        s.dispatch(Action::AddFeatured).unwrap();
        s.dispatch(Action::NextPizza).unwrap();
        s.dispatch(Action::AddFeatured).unwrap();
        s.dispatch(Action::increment("Pepperoni Paradise")).unwrap();

        let t = snap(&s);
        assert_eq!(t.hero, "Pepperoni Paradise");
        assert_eq!(t.badge, Some(3));
        assert!(t.cart_open);
        assert_eq!(
            t.cart_lines,
            vec![
                SnapshotLine { name: "Margherita Supreme".into(), quantity: 1 },
                SnapshotLine { name: "Pepperoni Paradise".into(), quantity: 2 },
            ]
        );
        // 14.99 + 2 * 16.99
        assert_eq!(t.total.as_deref(), Some("48.97"));
    }

    #[test]
    fn escaped_names_survive_round_trip() {
        let html = "<html><head><title>A &amp; B</title></head><body><p>x</p></body></html>";
        let t = text_snapshot(html).unwrap();
        assert_eq!(t.title, "A & B");
    }
}
