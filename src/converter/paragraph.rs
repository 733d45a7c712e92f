//! Paragraph converter - splits paragraph containers around nested blocks.
//!
//! XHTML lets lists, quotes and preformatted blocks sit inside a `<p>`, but a
//! `text:p` may only hold inline content. The splitter walks a container's
//! children, accumulating inline content into an [`InlineRun`]. Each nested
//! block closes the run, is translated into its own top-level constructs, and
//! a fresh run bound to the same paragraph style picks up the siblings that
//! follow.

use super::markup::{classify, contains_block, BlockKind, Markup};
use super::{BlockTranslator, ConversionContext, InlineRun};
use crate::core::ast::OdtBlock;
use crate::Result;
use roxmltree::Node;

/// What a `<p>` found directly inside the container means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedParagraphs {
    /// Paragraph-like containers (`p`, `li`, `td`, ...): the nested `<p>` adds
    /// no wrapper, its children continue the current run.
    Splice,
    /// Block containers (`body`, `div`, `blockquote`): each `<p>` is a
    /// paragraph of its own.
    Break,
}

impl NestedParagraphs {
    /// Opens the run for a container's own inline content. Only paragraph-like
    /// containers are explicit paragraphs.
    fn open_run(self, style: &str) -> InlineRun {
        match self {
            NestedParagraphs::Splice => InlineRun::open(style),
            NestedParagraphs::Break => InlineRun::implicit(style),
        }
    }
}

/// Converter for paragraph-like containers.
pub struct ParagraphConverter;

impl ParagraphConverter {
    /// Converts a `<p>` whose enclosing container defaults to `default_style`.
    pub fn convert(
        para: Node<'_, '_>,
        default_style: &str,
        context: &ConversionContext<'_>,
    ) -> Result<Vec<OdtBlock>> {
        let style = context.styles().paragraph_style(para, default_style);
        Self::split(para, &style, NestedParagraphs::Splice, context)
    }

    /// Flattens `container` into top-level ODT blocks.
    ///
    /// `style` is the paragraph style of the container's own inline content; it
    /// also applies to text that resumes after a nested block.
    pub fn split(
        container: Node<'_, '_>,
        style: &str,
        nesting: NestedParagraphs,
        context: &ConversionContext<'_>,
    ) -> Result<Vec<OdtBlock>> {
        let mut output = Vec::new();
        let run = Self::walk(
            container,
            style,
            nesting,
            context,
            nesting.open_run(style),
            &mut output,
        )?;
        output.extend(run.flush().map(OdtBlock::Paragraph));
        Ok(output)
    }

    fn walk(
        container: Node<'_, '_>,
        style: &str,
        nesting: NestedParagraphs,
        context: &ConversionContext<'_>,
        mut run: InlineRun,
        output: &mut Vec<OdtBlock>,
    ) -> Result<InlineRun> {
        for child in container.children() {
            match classify(child) {
                Markup::Text(text) => run.append_text(text),
                Markup::Inline(_, element) => {
                    if contains_block(element) {
                        context.structural_anomaly(
                            element,
                            "block content inside an inline element is flattened to text",
                        )?;
                    }
                    run.append_inline(element, context.styles());
                }
                Markup::LineBreak => run.append_break(),
                Markup::Other(element) => {
                    if contains_block(element) {
                        context.structural_anomaly(
                            element,
                            "block content inside an unknown element is flattened to text",
                        )?;
                    }
                    run.append_plain(element);
                }
                Markup::Ignored => {}
                Markup::Block(BlockKind::Paragraph, element)
                    if nesting == NestedParagraphs::Splice =>
                {
                    log::debug!("splicing nested <p> into a {style} paragraph");
                    run = Self::walk(element, style, nesting, context, run, output)?;
                }
                Markup::Block(kind, element) => {
                    log::debug!("{kind:?} interrupts a {style} paragraph");
                    output.extend(run.flush().map(OdtBlock::Paragraph));
                    output.extend(BlockTranslator::translate(kind, element, style, context)?);
                    run = nesting.open_run(style);
                }
            }
        }
        Ok(run)
    }
}
