//! HTML page renderer.
//!
//! Produces a complete document. Every interactive control carries a
//! `data-action` attribute holding the JSON form of the [`Action`] it
//! dispatches.

use super::Renderer;
use crate::catalog::CatalogItem;
use crate::storefront::Action;
use crate::{Result, Storefront};
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }
}

fn button(out: &mut String, class: &str, action: &Action, label: &str) -> Result<()> {
    writeln!(
        out,
        "<button class=\"{}\" data-action=\"{}\">{}</button>",
        class,
        escape(&action.to_json()),
        escape(label)
    )?;
    Ok(())
}

fn header(out: &mut String, s: &Storefront) -> Result<()> {
    writeln!(out, "<header>")?;
    writeln!(out, "<nav>")?;
    writeln!(out, "<span class=\"brand\">{}</span>", escape(&s.config().brand))?;
    writeln!(out, "<a href=\"#menu\">Menu</a>")?;
    writeln!(out, "<a href=\"#contact\">Contact</a>")?;
    write!(
        out,
        "<button class=\"cart-button\" data-action=\"{}\">Cart",
        escape(&Action::OpenCart.to_json())
    )?;
    if let Some(count) = s.badge() {
        write!(out, "<span class=\"cart-badge\">{}</span>", count)?;
    }
    writeln!(out, "</button>")?;
    writeln!(out, "</nav>")?;
    writeln!(out, "</header>")?;
    Ok(())
}

fn cart_overlay(out: &mut String, s: &Storefront) -> Result<()> {
    let cart = s.cart();
    let currency = &s.config().currency_symbol;

    writeln!(out, "<div class=\"cart-overlay\" role=\"dialog\">")?;
    writeln!(out, "<h2>Your Cart</h2>")?;
    button(out, "cart-close", &Action::CloseCart, "Close")?;

    if cart.is_empty() {
        writeln!(out, "<p class=\"cart-empty\">Your cart is empty</p>")?;
        writeln!(out, "</div>")?;
        return Ok(());
    }

    writeln!(out, "<ul class=\"cart-lines\">")?;
    for line in cart.lines() {
        let name = line.name();
        writeln!(out, "<li class=\"cart-line\" id=\"{}\">", line.id)?;
        writeln!(
            out,
            "<img src=\"{}\" alt=\"{}\">",
            escape(&line.item.image),
            escape(name)
        )?;
        writeln!(out, "<h3 class=\"line-name\">{}</h3>", escape(name))?;
        writeln!(
            out,
            "<p class=\"line-price\">{}{}</p>",
            escape(currency),
            line.item.price
        )?;
        button(out, "line-dec", &Action::decrement(name), "-")?;
        writeln!(out, "<span class=\"line-qty\">{}</span>", line.quantity)?;
        button(out, "line-inc", &Action::increment(name), "+")?;
        button(
            out,
            "line-remove",
            &Action::RemoveItem {
                name: name.to_string(),
            },
            "Remove",
        )?;
        writeln!(out, "</li>")?;
    }
    writeln!(out, "</ul>")?;
    writeln!(
        out,
        "<p class=\"cart-total\">Total: <strong>{}{}</strong></p>",
        escape(currency),
        cart.total_price().display_rounded()
    )?;
    button(out, "checkout", &Action::Checkout, "Proceed to Checkout")?;
    writeln!(out, "</div>")?;
    Ok(())
}

fn hero(out: &mut String, s: &Storefront) -> Result<()> {
    let carousel = s.carousel();
    let pizza = carousel.current();

    writeln!(
        out,
        "<section id=\"hero\" data-index=\"{}\" data-count=\"{}\">",
        carousel.index(),
        carousel.len()
    )?;
    writeln!(
        out,
        "<img class=\"hero-image\" src=\"{}\" alt=\"{}\">",
        escape(&pizza.image),
        escape(&pizza.name)
    )?;
    button(out, "carousel-prev", &Action::PreviousPizza, "Previous")?;
    button(out, "carousel-next", &Action::NextPizza, "Next")?;
    writeln!(out, "<h1>{}</h1>", escape(&pizza.name))?;
    writeln!(out, "<p class=\"description\">{}</p>", escape(&pizza.description))?;
    writeln!(
        out,
        "<div class=\"price\">{}{}</div>",
        escape(&s.config().currency_symbol),
        pizza.price
    )?;
    button(out, "add-to-cart", &Action::AddFeatured, "Add to Cart")?;
    writeln!(out, "</section>")?;
    Ok(())
}

fn menu_item(out: &mut String, category: &str, item: &CatalogItem, currency: &str) -> Result<()> {
    writeln!(out, "<article class=\"menu-item\">")?;
    writeln!(
        out,
        "<img src=\"{}\" alt=\"{}\">",
        escape(&item.image),
        escape(&item.name)
    )?;
    writeln!(out, "<h4>{}</h4>", escape(&item.name))?;
    writeln!(out, "<span class=\"price\">{}{}</span>", escape(currency), item.price)?;
    writeln!(out, "<p>{}</p>", escape(&item.description))?;
    button(
        out,
        "add-to-cart",
        &Action::AddMenuItem {
            category: category.to_string(),
            name: item.name.clone(),
        },
        "Add to Cart",
    )?;
    writeln!(out, "</article>")?;
    Ok(())
}

fn menu(out: &mut String, s: &Storefront) -> Result<()> {
    writeln!(out, "<section id=\"menu\">")?;
    writeln!(out, "<h2>Our Menu</h2>")?;
    for category in s.catalog().menu() {
        writeln!(out, "<div class=\"category\">")?;
        writeln!(out, "<h3>{}</h3>", escape(&category.category))?;
        for item in &category.items {
            menu_item(out, &category.category, item, &s.config().currency_symbol)?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn contact(out: &mut String, s: &Storefront) -> Result<()> {
    let c = &s.config().contact;
    writeln!(out, "<section id=\"contact\">")?;
    writeln!(out, "<h2>Visit Us Today</h2>")?;
    for (class, heading, value) in [
        ("phone", "Call Us", &c.phone),
        ("location", "Location", &c.address),
        ("hours", "Hours", &c.hours),
    ] {
        writeln!(
            out,
            "<div class=\"{}\"><h3>{}</h3><p>{}</p></div>",
            class,
            heading,
            escape(value)
        )?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

impl Renderer for HtmlRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render_to_string(&self, s: &Storefront) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(
            out,
            "<head><meta charset=\"utf-8\"><title>{}</title></head>",
            escape(&s.config().brand)
        )?;
        writeln!(out, "<body>")?;
        header(&mut out, s)?;
        if s.is_cart_open() {
            cart_overlay(&mut out, s)?;
        }
        hero(&mut out, s)?;
        menu(&mut out, s)?;
        contact(&mut out, s)?;
        if let Some(notice) = s.notice() {
            writeln!(out, "<div class=\"notice\" role=\"alertdialog\">")?;
            writeln!(out, "<p>{}</p>", escape(notice))?;
            button(&mut out, "notice-dismiss", &Action::DismissNotice, "OK")?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn initial_page_has_no_overlay_or_badge() {
        let html = HtmlRenderer::new().render_to_string(&Storefront::with_defaults()).unwrap();
        assert!(html.contains("<title>Pizzeria 3D</title>"));
        assert!(html.contains("<h1>Margherita Supreme</h1>"));
        assert!(html.contains("$14.99"));
        assert!(!html.contains("cart-overlay"));
        assert!(!html.contains("cart-badge"));
        assert!(html.contains("(555) 123-4567"));
    }

    #[test]
    fn menu_buttons_name_their_category() {
        let html = HtmlRenderer::new().render_to_string(&Storefront::with_defaults()).unwrap();
        assert!(html.contains("data-action=\"{&quot;type&quot;:&quot;add_menu_item&quot;,&quot;category&quot;:&quot;Signature Pizzas&quot;,&quot;name&quot;:&quot;The Royal Feast&quot;}\""));
        assert!(!html.contains("&quot;add_item&quot;"));
    }

    #[test]
    fn open_cart_shows_lines_and_total() {
        let mut s = Storefront::with_defaults();
        s.dispatch(Action::AddFeatured).unwrap();
        s.dispatch(Action::AddFeatured).unwrap();
        let html = HtmlRenderer::new().render_to_string(&s).unwrap();
        assert!(html.contains("<span class=\"cart-badge\">2</span>"));
        assert!(html.contains("<span class=\"line-qty\">2</span>"));
        assert!(html.contains("Total: <strong>$29.98</strong>"));
        assert!(html.contains("Proceed to Checkout"));
        assert!(html.contains("data-action=\"{&quot;type&quot;:&quot;change_quantity&quot;,&quot;name&quot;:&quot;Margherita Supreme&quot;,&quot;delta&quot;:-1}\""));
    }

    #[test]
    fn open_empty_cart_shows_message() {
        let mut s = Storefront::with_defaults();
        s.dispatch(Action::OpenCart).unwrap();
        let html = HtmlRenderer::new().render_to_string(&s).unwrap();
        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("Proceed to Checkout"));
    }
}
