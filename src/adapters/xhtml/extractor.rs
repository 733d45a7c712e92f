use super::AstExtractor;
use crate::converter::markup::{classify, xhtml_tag, Markup};
use crate::converter::{BlockTranslator, ConversionContext, NestedParagraphs, ParagraphConverter};
use crate::core::ast::OdtFragment;
use crate::Result;
use roxmltree::{Document, Node};

/// Locates the body of an XHTML document and flattens it.
#[derive(Debug, Default, Clone, Copy)]
pub struct XhtmlExtractor;

impl AstExtractor for XhtmlExtractor {
    fn extract(
        &self,
        document: &Document<'_>,
        context: &ConversionContext<'_>,
    ) -> Result<OdtFragment> {
        let root = document.root_element();
        if xhtml_tag(root) == Some("html") {
            let body = Self::body(root);
            log::debug!("converting <{}> content", body.tag_name().name());
            let style = context.styles().resolve(body).name;
            let blocks = ParagraphConverter::split(body, &style, NestedParagraphs::Break, context)?;
            return Ok(OdtFragment::new(blocks));
        }
        self.extract_element(root, context)
    }
}

impl XhtmlExtractor {
    /// Converts a single element as if it appeared directly in a body.
    pub fn extract_element(
        &self,
        element: Node<'_, '_>,
        context: &ConversionContext<'_>,
    ) -> Result<OdtFragment> {
        let body_style = &context.styles().names().body;
        let blocks = match classify(element) {
            Markup::Block(kind, node) => BlockTranslator::translate(kind, node, body_style, context)?,
            _ => ParagraphConverter::split(element, body_style, NestedParagraphs::Break, context)?,
        };
        Ok(OdtFragment::new(blocks))
    }

    /// The `<body>` child of `<html>`, or `<html>` itself for bare fragments.
    fn body<'a, 'input>(html: Node<'a, 'input>) -> Node<'a, 'input> {
        html.children()
            .find(|child| xhtml_tag(*child) == Some("body"))
            .unwrap_or(html)
    }
}
