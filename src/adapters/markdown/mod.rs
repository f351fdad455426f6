mod extractor;

use crate::core::ast::DocumentAst;

/// Turns source text into the block node stream consumed by a renderer.
pub trait AstExtractor {
    fn extract(&self, source: &str) -> DocumentAst;
}

pub use extractor::MarkdownExtractor;
