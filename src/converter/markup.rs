//! Markup classifier - sorts XHTML nodes into the kinds the converter handles.

use crate::error::Error;
use crate::Result;
use roxmltree::Node;

pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A source node as seen by the splitter.
#[derive(Debug, Clone, Copy)]
pub enum Markup<'a, 'input> {
    Text(&'a str),
    Block(BlockKind, Node<'a, 'input>),
    Inline(InlineKind, Node<'a, 'input>),
    /// `<br/>`: keeps the words on either side apart.
    LineBreak,
    /// Unknown element, flattened to unstyled text.
    Other(Node<'a, 'input>),
    /// Document metadata, comments and processing instructions.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    List(ListKind),
    BlockQuote,
    Preformatted,
    DefinitionList,
    Heading(u8),
    /// Transparent container whose paragraphs stay separate (`div`, `table`, ...).
    Section,
    /// Paragraph-like container (`td`, `th`).
    Cell,
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "p" => BlockKind::Paragraph,
            "ul" => BlockKind::List(ListKind::Bullet),
            "ol" => BlockKind::List(ListKind::Numbered),
            "blockquote" => BlockKind::BlockQuote,
            "pre" => BlockKind::Preformatted,
            "dl" => BlockKind::DefinitionList,
            "h1" => BlockKind::Heading(1),
            "h2" => BlockKind::Heading(2),
            "h3" => BlockKind::Heading(3),
            "h4" => BlockKind::Heading(4),
            "h5" => BlockKind::Heading(5),
            "h6" => BlockKind::Heading(6),
            "div" | "body" | "section" | "article" | "header" | "footer" | "main" | "nav"
            | "aside" | "table" | "thead" | "tbody" | "tfoot" | "tr" | "center" | "address"
            | "figure" => BlockKind::Section,
            "td" | "th" | "caption" => BlockKind::Cell,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Superscript,
    Subscript,
    Strong,
    Emphasis,
    Underline,
    Strike,
    Code,
    Small,
    Big,
}

impl InlineKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "sup" => InlineKind::Superscript,
            "sub" => InlineKind::Subscript,
            "strong" | "b" => InlineKind::Strong,
            "em" | "i" | "cite" | "dfn" | "var" => InlineKind::Emphasis,
            "u" | "ins" => InlineKind::Underline,
            "del" | "s" | "strike" => InlineKind::Strike,
            "code" | "tt" | "kbd" | "samp" => InlineKind::Code,
            "small" => InlineKind::Small,
            "big" => InlineKind::Big,
            _ => return None,
        };
        Some(kind)
    }
}

fn is_ignored_tag(tag: &str) -> bool {
    matches!(
        tag,
        "head" | "title" | "meta" | "link" | "script" | "style" | "object" | "param"
    )
}

/// Local name of an element, or `None` when it lives outside the XHTML vocabulary.
pub fn xhtml_tag<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    if !node.is_element() {
        return None;
    }
    match node.tag_name().namespace() {
        None | Some(XHTML_NAMESPACE) => Some(node.tag_name().name()),
        Some(_) => None,
    }
}

pub fn classify<'a, 'input>(node: Node<'a, 'input>) -> Markup<'a, 'input> {
    if node.is_text() {
        return Markup::Text(node.text().unwrap_or_default());
    }
    if !node.is_element() {
        return Markup::Ignored;
    }
    let Some(tag) = xhtml_tag(node) else {
        return Markup::Other(node);
    };
    if let Some(kind) = BlockKind::from_tag(tag) {
        Markup::Block(kind, node)
    } else if let Some(kind) = InlineKind::from_tag(tag) {
        Markup::Inline(kind, node)
    } else if is_ignored_tag(tag) {
        Markup::Ignored
    } else if tag == "br" {
        Markup::LineBreak
    } else {
        Markup::Other(node)
    }
}

/// Concatenated descendant text of a node, in document order.
pub fn flatten_text(node: Node<'_, '_>) -> String {
    if node.is_text() {
        return node.text().unwrap_or_default().to_string();
    }
    let mut text = String::new();
    for descendant in node.descendants() {
        if xhtml_tag(descendant) == Some("br") {
            text.push(' ');
            continue;
        }
        if descendant.is_text() {
            if descendant
                .ancestors()
                .filter_map(xhtml_tag)
                .any(is_ignored_tag)
            {
                continue;
            }
            text.push_str(descendant.text().unwrap_or_default());
        }
    }
    text
}

/// Whether `text` is made of XML whitespace only (space, tab, CR, LF).
///
/// Unlike [`str::trim`], a no-break space counts as content.
pub fn is_xml_whitespace(text: &str) -> bool {
    text.chars().all(is_xml_space)
}

pub(crate) fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Fails when a translator is handed an element it does not handle.
pub fn ensure_tag(node: Node<'_, '_>, expected: &[&str]) -> Result<()> {
    match xhtml_tag(node) {
        Some(tag) if expected.contains(&tag) => Ok(()),
        _ => Err(Error::Conversion(format!(
            "expected <{}>, got <{}>",
            expected.join("|"),
            node.tag_name().name()
        ))),
    }
}

/// Whether any descendant element is a block.
pub fn contains_block(node: Node<'_, '_>) -> bool {
    node.descendants()
        .skip(1)
        .filter_map(xhtml_tag)
        .any(|tag| BlockKind::from_tag(tag).is_some())
}
