//! Inline pass: images, links, code spans, escaping and emphasis.
//!
//! Markup that must survive escaping is rendered first and parked behind a
//! placeholder token. The remaining text is escaped in one go, emphasis is
//! applied to the escaped text, and the parked fragments are put back.

use super::escape::escape_html;
use super::url::check_url;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image pattern is valid"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

static CODE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

/// Applied in order; each rule only sees what earlier rules left behind.
static EMPHASIS_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*\*(.+?)\*\*\*", "<strong><em>${1}</em></strong>"),
        (r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        (r"__(.+?)__", "<strong>${1}</strong>"),
        (r"\*(.+?)\*", "<em>${1}</em>"),
        (r"_(.+?)_", "<em>${1}</em>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("emphasis pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Placeholder tokens are `TOKEN_OPEN index TOKEN_CLOSE`: no character that
/// escaping or an emphasis rule reacts to. Both marks are stripped from the
/// input so tokens cannot be forged.
const TOKEN_OPEN: char = '\u{FFF9}';
const TOKEN_CLOSE: char = '\u{FFFB}';

/// Trusted HTML fragments parked during one inline render.
#[derive(Debug, Default)]
struct Fragments {
    items: Vec<String>,
}

impl Fragments {
    fn token(index: usize) -> String {
        format!("{TOKEN_OPEN}{index}{TOKEN_CLOSE}")
    }

    fn protect(&mut self, html: String) -> String {
        let token = Self::token(self.items.len());
        self.items.push(html);
        token
    }

    /// Newest first: a fragment may embed tokens created before it
    /// (a code span around a link), never after.
    fn restore(&self, mut text: String) -> String {
        for (index, html) in self.items.iter().enumerate().rev() {
            text = text.replace(&Self::token(index), html);
        }
        text
    }
}

/// Renders one line of inline Markdown to safe HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineRenderer;

impl InlineRenderer {
    pub fn render(&self, text: &str) -> String {
        let mut fragments = Fragments::default();
        let source = text.replace([TOKEN_OPEN, TOKEN_CLOSE], "");

        let source = IMAGE_RE
            .replace_all(&source, |caps: &Captures| {
                fragments.protect(image_html(&caps[1], &caps[2]))
            })
            .into_owned();

        let source = LINK_RE
            .replace_all(&source, |caps: &Captures| {
                fragments.protect(link_html(&caps[1], &caps[2]))
            })
            .into_owned();

        let source = CODE_SPAN_RE
            .replace_all(&source, |caps: &Captures| {
                fragments.protect(format!("<code>{}</code>", escape_html(&caps[1])))
            })
            .into_owned();

        let mut html = escape_html(&source);
        for (pattern, replacement) in EMPHASIS_RULES.iter() {
            html = pattern.replace_all(&html, *replacement).into_owned();
        }

        fragments.restore(html)
    }
}

fn image_html(alt: &str, url: &str) -> String {
    match check_url(url) {
        Ok(src) => format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_html(src),
            escape_html(alt)
        ),
        Err(reason) => {
            tracing::debug!(url, ?reason, "dropping image with unsafe url");
            escape_html(alt)
        }
    }
}

fn link_html(label: &str, url: &str) -> String {
    match check_url(url) {
        Ok(href) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(href),
            escape_html(label)
        ),
        Err(reason) => {
            tracing::debug!(url, ?reason, "dropping link with unsafe url");
            escape_html(label)
        }
    }
}
