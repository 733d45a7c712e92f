//! List converter - turns `<ul>`/`<ol>` into `text:list`.

use super::markup::{ensure_tag, is_xml_whitespace, xhtml_tag, ListKind};
use super::paragraph::NestedParagraphs;
use super::{ConversionContext, ParagraphConverter};
use crate::core::ast::{OdtList, OdtListItem};
use crate::Result;
use roxmltree::Node;

/// Converter for list elements.
pub struct ListConverter;

impl ListConverter {
    pub fn convert(
        list: Node<'_, '_>,
        kind: ListKind,
        context: &ConversionContext<'_>,
    ) -> Result<OdtList> {
        ensure_tag(list, &["ul", "ol"])?;
        let styles = context.styles();
        log::trace!("converting {kind:?} list");

        let mut items = Vec::new();
        for child in list.children() {
            if child.is_text() {
                if !is_xml_whitespace(child.text().unwrap_or_default()) {
                    context.structural_anomaly(list, "text outside <li> is dropped")?;
                }
                continue;
            }
            if !child.is_element() {
                continue;
            }
            if xhtml_tag(child) != Some("li") {
                context.structural_anomaly(child, "only <li> is allowed in a list, skipped")?;
                continue;
            }

            let style = styles.resolve(child).name;
            let blocks =
                ParagraphConverter::split(child, &style, NestedParagraphs::Splice, context)?;
            items.push(OdtListItem { blocks });
        }

        Ok(OdtList {
            style_name: styles.resolve(list).name,
            items,
        })
    }
}
