//! Plain-text renderer for terminals and logs.

use super::Renderer;
use crate::{Result, Storefront};
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Width of section rules
    pub width: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { width: 60 }
    }

    fn rule(&self, out: &mut String, title: &str) -> Result<()> {
        let pad = self.width.saturating_sub(title.chars().count() + 4);
        writeln!(out, "== {} {}", title, "=".repeat(pad))?;
        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render_to_string(&self, s: &Storefront) -> Result<String> {
        let mut out = String::new();
        let config = s.config();
        let currency = &config.currency_symbol;

        match s.badge() {
            Some(n) => writeln!(out, "{}  [Cart: {}]", config.brand, n)?,
            None => writeln!(out, "{}  [Cart]", config.brand)?,
        }
        writeln!(out)?;

        let carousel = s.carousel();
        let pizza = carousel.current();
        self.rule(
            &mut out,
            &format!("{} ({}/{})", pizza.name, carousel.index() + 1, carousel.len()),
        )?;
        writeln!(out, "{}", pizza.description)?;
        writeln!(out, "{}{}", currency, pizza.price)?;
        writeln!(out)?;

        if s.is_cart_open() {
            self.rule(&mut out, "Your Cart")?;
            let cart = s.cart();
            if cart.is_empty() {
                writeln!(out, "Your cart is empty")?;
            } else {
                for line in cart.lines() {
                    writeln!(
                        out,
                        "{:>3} x {} @ {}{}",
                        line.quantity,
                        line.name(),
                        currency,
                        line.item.price
                    )?;
                }
                writeln!(out, "Total: {}{}", currency, cart.total_price().display_rounded())?;
            }
            writeln!(out)?;
        }

        self.rule(&mut out, "Our Menu")?;
        for category in s.catalog().menu() {
            writeln!(out, "{}", category.category)?;
            for item in &category.items {
                writeln!(out, "  {} - {}{}", item.name, currency, item.price)?;
                writeln!(out, "    {}", item.description)?;
            }
        }
        writeln!(out)?;

        self.rule(&mut out, "Visit Us Today")?;
        writeln!(out, "Call Us: {}", config.contact.phone)?;
        writeln!(out, "Location: {}", config.contact.address)?;
        writeln!(out, "Hours: {}", config.contact.hours)?;

        if let Some(notice) = s.notice() {
            writeln!(out)?;
            writeln!(out, "! {}", notice)?;
        }
        Ok(out)
    }
}
