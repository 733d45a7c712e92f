//! Style resolver - maps tags and inline declarations to ODT style names.

use super::markup::{xhtml_tag, BlockKind, InlineKind, ListKind};
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::Node;

static TEXT_ALIGN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*text-align\s*:\s*(center|left|right|justify)\s*(?:;|$)")
        .expect("text-align regex")
});

/// Names of the ODT styles the converter refers to.
///
/// The converter only names styles; the target document's style sheet has to
/// define them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNames {
    pub body: String,
    pub quotation: String,
    pub preformatted: String,
    pub bullet_list: String,
    pub numbered_list: String,
    pub bullet_item: String,
    pub numbered_item: String,
    pub definition_term: String,
    pub definition_description: String,
    /// Prefix completed by the heading level (`Heading_20_` + `1`).
    pub heading_prefix: String,
}

impl Default for StyleNames {
    fn default() -> Self {
        Self {
            body: "Text_20_body".to_string(),
            quotation: "Quotations".to_string(),
            preformatted: "Preformatted_20_Text".to_string(),
            bullet_list: "List_20_1".to_string(),
            numbered_list: "Numbering_20_1".to_string(),
            bullet_item: "list-item-bullet".to_string(),
            numbered_item: "list-item-number".to_string(),
            definition_term: "Definition_20_Term".to_string(),
            definition_description: "Definition_20_Description".to_string(),
            heading_prefix: "Heading_20_".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Paragraph,
    Character,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBinding {
    pub name: String,
    pub kind: StyleKind,
}

/// Values of `text-align` that have a same-named paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    Left,
    Right,
    Justify,
}

impl Alignment {
    pub fn style_name(self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// Reads `text-align` out of an inline `style` attribute.
    ///
    /// Other declarations, unknown values and malformed text are ignored.
    pub fn from_declarations(style: &str) -> Option<Self> {
        let caps = TEXT_ALIGN_RE.captures(style)?;
        match caps[1].to_ascii_lowercase().as_str() {
            "center" => Some(Alignment::Center),
            "left" => Some(Alignment::Left),
            "right" => Some(Alignment::Right),
            "justify" => Some(Alignment::Justify),
            _ => None,
        }
    }
}

/// Resolver for ODT style names.
///
/// [`StyleResolver::resolve`] holds the only tag table; the converters take
/// their style names from the binding it returns.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    names: StyleNames,
}

impl StyleResolver {
    pub fn new(names: StyleNames) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &StyleNames {
        &self.names
    }

    /// Resolves the style of an element from its tag and its `style` attribute.
    ///
    /// Paragraph-kind bindings are overridden by a recognised `text-align`
    /// declaration; anything unrecognised falls back to the body style. A
    /// `<li>` takes the item style of its parent list.
    pub fn resolve(&self, node: Node<'_, '_>) -> StyleBinding {
        let tag = xhtml_tag(node).unwrap_or_default();
        if let Some(kind) = InlineKind::from_tag(tag) {
            return StyleBinding {
                name: Self::character_style(kind).to_string(),
                kind: StyleKind::Character,
            };
        }
        if let Some(BlockKind::List(list)) = BlockKind::from_tag(tag) {
            return StyleBinding {
                name: self.list_style(list).to_string(),
                kind: StyleKind::List,
            };
        }

        let default = match (tag, BlockKind::from_tag(tag)) {
            (_, Some(BlockKind::BlockQuote)) => self.names.quotation.clone(),
            (_, Some(BlockKind::Preformatted)) => self.names.preformatted.clone(),
            (_, Some(BlockKind::Heading(level))) => {
                format!("{}{}", self.names.heading_prefix, level)
            }
            ("li", _) => match node.parent_element().and_then(xhtml_tag) {
                Some("ul") => self.names.bullet_item.clone(),
                Some("ol") => self.names.numbered_item.clone(),
                _ => self.names.body.clone(),
            },
            ("dt", _) => self.names.definition_term.clone(),
            ("dd", _) => self.names.definition_description.clone(),
            _ => self.names.body.clone(),
        };
        StyleBinding {
            name: self.paragraph_style(node, &default),
            kind: StyleKind::Paragraph,
        }
    }

    /// Paragraph style for an element: its own `text-align`, else `default`.
    ///
    /// Used directly where the default comes from the enclosing container
    /// (a `<p>` inside a quote keeps the quotation style).
    pub fn paragraph_style(&self, node: Node<'_, '_>, default: &str) -> String {
        node.attribute("style")
            .and_then(Alignment::from_declarations)
            .map(|alignment| alignment.style_name().to_string())
            .unwrap_or_else(|| default.to_string())
    }

    fn character_style(kind: InlineKind) -> &'static str {
        match kind {
            InlineKind::Superscript => "sup",
            InlineKind::Subscript => "sub",
            InlineKind::Strong => "strong",
            InlineKind::Emphasis => "emphasis",
            InlineKind::Underline => "underline",
            InlineKind::Strike => "strike",
            InlineKind::Code => "Teletype",
            InlineKind::Small => "small",
            InlineKind::Big => "big",
        }
    }

    fn list_style(&self, kind: ListKind) -> &str {
        match kind {
            ListKind::Bullet => &self.names.bullet_list,
            ListKind::Numbered => &self.names.numbered_list,
        }
    }
}
