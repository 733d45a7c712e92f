//! Block translators - one strategy per block element found inside a container.

use super::markup::{ensure_tag, flatten_text, BlockKind};
use super::paragraph::NestedParagraphs;
use super::{
    ConversionContext, DefinitionListConverter, InlineRun, ListConverter, ParagraphConverter,
};
use crate::core::ast::OdtBlock;
use crate::Result;
use roxmltree::Node;

/// Dispatches a nested block to its translator.
pub struct BlockTranslator;

impl BlockTranslator {
    /// Translates `node` into top-level ODT blocks.
    ///
    /// `inherited_style` is the paragraph style of the container the block
    /// interrupted.
    pub fn translate(
        kind: BlockKind,
        node: Node<'_, '_>,
        inherited_style: &str,
        context: &ConversionContext<'_>,
    ) -> Result<Vec<OdtBlock>> {
        let styles = context.styles();
        match kind {
            BlockKind::Paragraph => ParagraphConverter::convert(node, inherited_style, context),
            BlockKind::List(list_kind) => {
                let list = ListConverter::convert(node, list_kind, context)?;
                Ok(vec![OdtBlock::List(list)])
            }
            BlockKind::BlockQuote => ParagraphConverter::split(
                node,
                &styles.resolve(node).name,
                NestedParagraphs::Break,
                context,
            ),
            BlockKind::Preformatted => Self::preformatted(node, context),
            BlockKind::DefinitionList => DefinitionListConverter::convert(node, context),
            BlockKind::Heading(_) | BlockKind::Cell => ParagraphConverter::split(
                node,
                &styles.resolve(node).name,
                NestedParagraphs::Splice,
                context,
            ),
            BlockKind::Section => {
                ParagraphConverter::split(node, inherited_style, NestedParagraphs::Break, context)
            }
        }
    }

    /// `<pre>`: the verbatim text, then an empty body paragraph for spacing.
    fn preformatted(node: Node<'_, '_>, context: &ConversionContext<'_>) -> Result<Vec<OdtBlock>> {
        ensure_tag(node, &["pre"])?;
        let styles = context.styles();

        let mut run = InlineRun::open(styles.resolve(node).name);
        run.append_text(&flatten_text(node));

        Ok(vec![
            OdtBlock::Paragraph(run.into_paragraph()),
            OdtBlock::Paragraph(InlineRun::open(&styles.names().body).into_paragraph()),
        ])
    }
}
