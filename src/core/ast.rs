//! ODT output model.
//!
//! Paragraphs only ever hold inline content, so a `text:p` nested inside
//! another `text:p` cannot be represented.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdtFragment {
    pub blocks: Vec<OdtBlock>,
}

impl OdtFragment {
    pub fn new(blocks: Vec<OdtBlock>) -> Self {
        Self { blocks }
    }

    /// Text content of every paragraph, in output order, ignoring markup.
    pub fn text_segments(&self) -> Vec<&str> {
        let mut segments = Vec::new();
        for block in &self.blocks {
            block.collect_text(&mut segments);
        }
        segments
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OdtBlock {
    Paragraph(OdtParagraph),
    List(OdtList),
}

impl OdtBlock {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            OdtBlock::Paragraph(para) => {
                for inline in &para.content {
                    let text = inline.text();
                    if !text.is_empty() {
                        out.push(text);
                    }
                }
            }
            OdtBlock::List(list) => {
                for item in &list.items {
                    for block in &item.blocks {
                        block.collect_text(out);
                    }
                }
            }
        }
    }
}

/// A `text:p` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdtParagraph {
    pub style_name: String,
    pub content: Vec<Inline>,
}

impl OdtParagraph {
    pub fn empty(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            content: Vec::new(),
        }
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// A `text:span` carrying a character style.
    Span { style_name: String, text: String },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Span { text, .. } => text,
        }
    }
}

/// A `text:list` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdtList {
    pub style_name: String,
    pub items: Vec<OdtListItem>,
}

/// A `text:list-item`; may hold nested lists next to its paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdtListItem {
    pub blocks: Vec<OdtBlock>,
}
