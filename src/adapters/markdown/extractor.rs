use super::AstExtractor;
use crate::core::ast::{BlockNode, DocumentAst};
use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is valid"));

static BULLET_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s+(.*)$").expect("bullet item pattern is valid"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)$").expect("ordered item pattern is valid"));

const CODE_FENCE: &str = "```";

/// Line-oriented block scanner for the supported Markdown subset.
///
/// A single forward pass; nothing is looked up across lines except the
/// open list, the open code fence and the pending paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExtractor;

impl AstExtractor for MarkdownExtractor {
    fn extract(&self, source: &str) -> DocumentAst {
        let mut state = BlockState::default();
        for line in source.split('\n') {
            state.push_line(line.trim_end());
        }
        let doc = state.finish();
        tracing::trace!(blocks = doc.blocks.len(), "extracted markdown blocks");
        doc
    }
}

#[derive(Debug, Default)]
struct BlockState {
    doc: DocumentAst,
    in_list: bool,
    in_code_block: bool,
    paragraph: Vec<String>,
}

impl BlockState {
    fn push_line(&mut self, line: &str) {
        if line.starts_with(CODE_FENCE) {
            self.flush_paragraph();
            self.in_code_block = !self.in_code_block;
            self.doc.blocks.push(if self.in_code_block {
                BlockNode::CodeFenceOpen
            } else {
                BlockNode::CodeFenceClose
            });
            return;
        }

        if self.in_code_block {
            self.doc.blocks.push(BlockNode::CodeLine(line.to_string()));
            return;
        }

        if let Some(caps) = HEADING_RE.captures(line) {
            self.flush_paragraph();
            // At most six hashes can match, so the cast cannot truncate.
            let level = caps[1].len() as u8;
            self.doc.blocks.push(BlockNode::Heading {
                level,
                text: caps[2].to_string(),
            });
            return;
        }

        if let Some(item) = list_item_text(line) {
            self.flush_paragraph();
            if !self.in_list {
                self.doc.blocks.push(BlockNode::ListStart);
                self.in_list = true;
            }
            self.doc.blocks.push(BlockNode::ListItem(item.to_string()));
            return;
        }

        let blank = line.trim().is_empty();

        if self.in_list {
            self.doc.blocks.push(BlockNode::ListEnd);
            self.in_list = false;
            if blank {
                return;
            }
        }

        if blank {
            self.flush_paragraph();
            return;
        }

        self.paragraph.push(line.to_string());
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let lines = std::mem::take(&mut self.paragraph);
            self.doc.blocks.push(BlockNode::Paragraph(lines));
        }
    }

    fn finish(mut self) -> DocumentAst {
        if self.in_list {
            self.doc.blocks.push(BlockNode::ListEnd);
        }
        self.flush_paragraph();
        self.doc
    }
}

fn list_item_text(line: &str) -> Option<&str> {
    BULLET_ITEM_RE
        .captures(line)
        .or_else(|| ORDERED_ITEM_RE.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::BlockNode::*;

    fn extract(source: &str) -> Vec<BlockNode> {
        MarkdownExtractor.extract(source).blocks
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            extract("# One\n###### Six"),
            vec![
                Heading {
                    level: 1,
                    text: "One".to_string()
                },
                Heading {
                    level: 6,
                    text: "Six".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        assert_eq!(
            extract("####### deep"),
            vec![Paragraph(vec!["####### deep".to_string()])]
        );
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(
            extract("#hashtag"),
            vec![Paragraph(vec!["#hashtag".to_string()])]
        );
    }

    #[test]
    fn test_mixed_list_markers_share_one_list() {
        assert_eq!(
            extract("- a\n* b\n3. c"),
            vec![
                ListStart,
                ListItem("a".to_string()),
                ListItem("b".to_string()),
                ListItem("c".to_string()),
                ListEnd,
            ]
        );
    }

    #[test]
    fn test_text_after_list_closes_it_and_starts_paragraph() {
        assert_eq!(
            extract("- a\nafter"),
            vec![
                ListStart,
                ListItem("a".to_string()),
                ListEnd,
                Paragraph(vec!["after".to_string()]),
            ]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            extract("- a\n\n- b"),
            vec![
                ListStart,
                ListItem("a".to_string()),
                ListEnd,
                ListStart,
                ListItem("b".to_string()),
                ListEnd,
            ]
        );
    }

    #[test]
    fn test_paragraph_lines_are_grouped_and_trimmed_right() {
        assert_eq!(
            extract("one  \ntwo\r\n\nthree"),
            vec![
                Paragraph(vec!["one".to_string(), "two".to_string()]),
                Paragraph(vec!["three".to_string()]),
            ]
        );
    }

    #[test]
    fn test_code_fence_suspends_block_rules() {
        assert_eq!(
            extract("```rust\n# not heading\n- not item\n```"),
            vec![
                CodeFenceOpen,
                CodeLine("# not heading".to_string()),
                CodeLine("- not item".to_string()),
                CodeFenceClose,
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_is_left_open() {
        assert_eq!(
            extract("text\n```\ncode"),
            vec![
                Paragraph(vec!["text".to_string()]),
                CodeFenceOpen,
                CodeLine("code".to_string()),
            ]
        );
    }

    #[test]
    fn test_indented_fence_is_text() {
        assert_eq!(
            extract("  ```"),
            vec![Paragraph(vec!["  ```".to_string()])]
        );
    }

    #[test]
    fn test_heading_inside_open_list_does_not_close_it() {
        assert_eq!(
            extract("- a\n## H\n- b"),
            vec![
                ListStart,
                ListItem("a".to_string()),
                Heading {
                    level: 2,
                    text: "H".to_string()
                },
                ListItem("b".to_string()),
                ListEnd,
            ]
        );
    }

    #[test]
    fn test_empty_source_has_no_blocks() {
        assert!(MarkdownExtractor.extract("").is_empty());
        assert!(MarkdownExtractor.extract("\n \n").is_empty());
    }
}
