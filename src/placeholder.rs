//! SVG placeholder images for media without a usable thumbnail.

use crate::render::escape_html;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

const FALLBACK_LABEL: &str = "Image";
const FONT_STACK: &str = "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";

/// Appearance of a generated placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill colour, `#rgb` or `#rrggbb`.
    pub background: String,
    /// Text colour, `#rgb` or `#rrggbb`.
    pub foreground: String,
    /// Font size in pixels; 12% of the shorter side when unset.
    pub font_size: Option<u32>,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: "#1d4ed8".to_string(),
            foreground: "#ffffff".to_string(),
            font_size: None,
        }
    }
}

impl PlaceholderOptions {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidPlaceholder(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, colour) in [
            ("background", &self.background),
            ("foreground", &self.foreground),
        ] {
            if !is_hex_colour(colour) {
                return Err(Error::InvalidPlaceholder(format!(
                    "{name} must be a #rgb or #rrggbb colour, got {colour:?}"
                )));
            }
        }
        Ok(())
    }

    fn resolved_font_size(&self) -> u32 {
        self.font_size.unwrap_or_else(|| {
            (f64::from(self.width.min(self.height)) * 0.12).round() as u32
        })
    }
}

/// Builds a labelled SVG placeholder and returns it as a base64 data URI.
///
/// The URI is meant for trusted UI chrome. Markdown rendering still refuses
/// every `data:` URL coming from user text.
pub fn image_placeholder(label: &str, options: &PlaceholderOptions) -> Result<String> {
    options.validate()?;

    let text = escape_html(if label.is_empty() {
        FALLBACK_LABEL
    } else {
        label
    });
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" role=\"img\" aria-label=\"{text}\">\n  \
         <rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>\n  \
         <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"{FONT_STACK}\" font-size=\"{font_size}\" fill=\"{foreground}\" opacity=\"0.95\">{text}</text>\n\
         </svg>",
        width = options.width,
        height = options.height,
        background = options.background,
        foreground = options.foreground,
        font_size = options.resolved_font_size(),
    );

    Ok(format!("data:image/svg+xml;base64,{}", BASE64.encode(svg)))
}

fn is_hex_colour(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
