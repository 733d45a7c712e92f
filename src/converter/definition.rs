//! Definition list converter - `<dl>` becomes alternating term and description paragraphs.

use super::markup::{ensure_tag, xhtml_tag};
use super::paragraph::NestedParagraphs;
use super::{ConversionContext, ParagraphConverter};
use crate::core::ast::OdtBlock;
use crate::Result;
use roxmltree::Node;

/// Converter for `<dl>` elements.
pub struct DefinitionListConverter;

impl DefinitionListConverter {
    pub fn convert(dl: Node<'_, '_>, context: &ConversionContext<'_>) -> Result<Vec<OdtBlock>> {
        ensure_tag(dl, &["dl"])?;
        let styles = context.styles();

        let mut output = Vec::new();
        let mut pending_term: Option<Node<'_, '_>> = None;

        for child in dl.children().filter(|c| c.is_element()) {
            match xhtml_tag(child) {
                Some("dt") => {
                    if let Some(term) = pending_term.replace(child) {
                        context.structural_anomaly(term, "term without a description")?;
                    }
                }
                Some("dd") => pending_term = None,
                _ => {
                    context.structural_anomaly(
                        child,
                        "only <dt> and <dd> are allowed in a definition list, skipped",
                    )?;
                    continue;
                }
            }

            let style = styles.resolve(child).name;
            output.extend(ParagraphConverter::split(
                child,
                &style,
                NestedParagraphs::Splice,
                context,
            )?);
        }

        if let Some(term) = pending_term {
            context.structural_anomaly(term, "term without a description")?;
        }

        Ok(output)
    }
}
