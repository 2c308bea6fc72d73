//! Rendering: turn a `Storefront` into a page.
//!
//! Renderers are stateless and read the storefront without mutating it. Each
//! rendered page carries a SHA-256 digest of its content so callers and golden
//! tests can detect changes cheaply.

pub mod html;
pub mod text;

// Parse rendered HTML back into a structured text snapshot
#[cfg(feature = "snapshot")]
pub mod snapshot;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

#[cfg(feature = "snapshot")]
pub use snapshot::{text_snapshot, SnapshotLine, TextSnapshot};

use crate::{Result, Storefront};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Output formats the crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Html,
    Text,
}

impl FromStr for PageFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(PageFormat::Html),
            "text" | "txt" => Ok(PageFormat::Text),
            other => Err(crate::Error::InvalidAction(format!(
                "unknown page format '{}'",
                other
            ))),
        }
    }
}

/// A rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Document body
    pub content: String,
    /// MIME type such as `text/html; charset=utf-8`
    pub content_type: &'static str,
    /// Lowercase hex SHA-256 of `content`
    pub digest: String,
}

impl RenderedPage {
    pub fn new(content: String, content_type: &'static str) -> Self {
        let digest = digest_hex(content.as_bytes());
        Self {
            content,
            content_type,
            digest,
        }
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Core trait for page renderers
pub trait Renderer {
    /// MIME type of the produced content
    fn content_type(&self) -> &'static str;

    /// Write the page for the storefront's current state
    fn render_to_string(&self, storefront: &Storefront) -> Result<String>;

    /// Render and wrap the output with its digest
    fn render(&self, storefront: &Storefront) -> Result<RenderedPage> {
        let content = self.render_to_string(storefront)?;
        Ok(RenderedPage::new(content, self.content_type()))
    }
}

/// Create a renderer for the given format
pub fn new_renderer(format: PageFormat) -> Box<dyn Renderer> {
    match format {
        PageFormat::Html => Box::new(HtmlRenderer::new()),
        PageFormat::Text => Box::new(TextRenderer::new()),
    }
}
