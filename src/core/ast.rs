/// Block-level view of a Markdown source, in emission order.
///
/// List and code fence boundaries are separate nodes, so a heading or fence
/// seen while a list is open is emitted exactly where it occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<BlockNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    /// `#`..`######` heading; `text` is the raw inline source.
    Heading { level: u8, text: String },
    /// Consecutive non-blank lines, joined with a space when rendered.
    Paragraph(Vec<String>),
    ListStart,
    ListItem(String),
    ListEnd,
    CodeFenceOpen,
    /// Verbatim line inside a fenced code block.
    CodeLine(String),
    CodeFenceClose,
}

impl DocumentAst {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
