mod escape;
mod html;
mod inline;
mod url;

use crate::core::ast::DocumentAst;

pub use escape::escape_html;
pub use html::HtmlRenderer;
pub use inline::InlineRenderer;
pub use url::sanitize_url;

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> String;
}
