//! # modmark
//!
//! Sanitizing Markdown to HTML renderer for comment moderation dashboards.
//!
//! Comments and AI-drafted replies are untrusted text. The renderer accepts
//! a deliberately small Markdown subset (headings, flat lists, paragraphs,
//! fenced code, links, images, code spans, bold and italic) and returns HTML
//! that can be injected into a page as-is: every piece of user text is
//! entity-escaped and only `http(s)` or explicitly relative URLs reach an
//! `href` or `src`.
//!
//! ## Example
//!
//! ```
//! let html = modmark::render("**Thanks!** See [the FAQ](https://example.com/faq)");
//! assert_eq!(
//!     html,
//!     "<p><strong>Thanks!</strong> See <a href=\"https://example.com/faq\" \
//!      target=\"_blank\" rel=\"noopener noreferrer\">the FAQ</a></p>"
//! );
//!
//! let html = modmark::render("[x](javascript:alert(1))");
//! assert!(!html.contains("javascript:"));
//! ```

pub mod adapters;
pub mod core;
pub mod error;
pub mod placeholder;
pub mod render;

use adapters::markdown::{AstExtractor, MarkdownExtractor};
use render::{HtmlRenderer, Renderer};

pub use error::{Error, Result};
pub use placeholder::{image_placeholder, PlaceholderOptions};
pub use render::{escape_html, sanitize_url};

/// Markdown subset to sanitized HTML.
///
/// Stateless; one value can serve any number of callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer {
    extractor: MarkdownExtractor,
    html: HtmlRenderer,
}

impl MarkdownRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `markdown` to HTML. Never fails; empty input gives an empty string.
    pub fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }
        let document = self.extractor.extract(markdown);
        self.html.render(&document)
    }
}

/// Renders `markdown` with a default [`MarkdownRenderer`].
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

// WebAssembly bindings (only when 'wasm' feature is enabled)
#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use wasm_bindgen::prelude::*;

    /// Renders Markdown to sanitized HTML.
    #[wasm_bindgen(js_name = renderMarkdown)]
    pub fn render_markdown(markdown: &str) -> String {
        render(markdown)
    }

    /// Builds a default-styled placeholder image data URI.
    #[wasm_bindgen(js_name = imagePlaceholder)]
    pub fn image_placeholder_uri(label: &str) -> std::result::Result<String, JsValue> {
        image_placeholder(label, &PlaceholderOptions::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
