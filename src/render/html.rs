use super::escape::escape_html;
use super::inline::InlineRenderer;
use super::Renderer;
use crate::core::ast::{BlockNode, DocumentAst};

/// Renders block nodes to HTML fragments, concatenated without separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer {
    inline: InlineRenderer,
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &DocumentAst) -> String {
        let mut out = String::new();
        for block in &document.blocks {
            self.render_block(block, &mut out);
        }
        out
    }
}

impl HtmlRenderer {
    fn render_block(&self, block: &BlockNode, out: &mut String) {
        match block {
            BlockNode::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                out.push_str(&format!(
                    "<h{level}>{}</h{level}>",
                    self.inline.render(text)
                ));
            }
            BlockNode::Paragraph(lines) => {
                let joined = lines
                    .iter()
                    .map(|line| self.inline.render(line))
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str("<p>");
                out.push_str(&joined);
                out.push_str("</p>");
            }
            BlockNode::ListStart => out.push_str("<ul>"),
            BlockNode::ListItem(text) => {
                out.push_str("<li>");
                out.push_str(&self.inline.render(text));
                out.push_str("</li>");
            }
            BlockNode::ListEnd => out.push_str("</ul>"),
            BlockNode::CodeFenceOpen => out.push_str("<pre><code>"),
            BlockNode::CodeLine(line) => {
                out.push_str(&escape_html(line));
                out.push('\n');
            }
            BlockNode::CodeFenceClose => out.push_str("</code></pre>"),
        }
    }
}
