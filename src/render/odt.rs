use super::{escape_xml_attr, escape_xml_text};
use crate::core::ast::{Inline, OdtBlock, OdtFragment, OdtList, OdtListItem, OdtParagraph};
use crate::render::Renderer;
use crate::Result;

pub const OFFICE_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
pub const TEXT_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";

const INDENT: &str = "  ";

/// Serialises fragments as `text:` XML.
///
/// With `pretty` set, elements holding only elements (lists and list items)
/// put each child on its own indented line. Paragraphs have mixed content and
/// are always written inline; top-level blocks follow each other directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct OdtRenderer {
    pub pretty: bool,
    /// Wrap the fragment in an `office:document-content` document.
    pub standalone: bool,
}

impl Renderer for OdtRenderer {
    fn render(&self, fragment: &OdtFragment) -> Result<String> {
        let mut out = String::new();
        if self.standalone {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
            out.push_str(&format!(
                "<office:document-content xmlns:office=\"{OFFICE_NAMESPACE}\" \
                 xmlns:text=\"{TEXT_NAMESPACE}\" office:version=\"1.2\">\
                 <office:body><office:text>"
            ));
        }

        for block in &fragment.blocks {
            self.write_block(block, 0, &mut out);
        }

        if self.standalone {
            out.push_str("</office:text></office:body></office:document-content>\n");
        }
        Ok(out)
    }
}

impl OdtRenderer {
    fn write_block(&self, block: &OdtBlock, depth: usize, out: &mut String) {
        match block {
            OdtBlock::Paragraph(para) => write_paragraph(para, out),
            OdtBlock::List(list) => self.write_list(list, depth, out),
        }
    }

    fn write_list(&self, list: &OdtList, depth: usize, out: &mut String) {
        let open = format!(
            "<text:list text:style-name=\"{}\"",
            escape_xml_attr(&list.style_name)
        );
        if list.items.is_empty() {
            out.push_str(&open);
            out.push_str("/>");
            return;
        }
        out.push_str(&open);
        out.push('>');
        for item in &list.items {
            self.break_line(depth + 1, out);
            self.write_item(item, depth + 1, out);
        }
        self.break_line(depth, out);
        out.push_str("</text:list>");
    }

    fn write_item(&self, item: &OdtListItem, depth: usize, out: &mut String) {
        if item.blocks.is_empty() {
            out.push_str("<text:list-item/>");
            return;
        }
        out.push_str("<text:list-item>");
        for block in &item.blocks {
            self.break_line(depth + 1, out);
            self.write_block(block, depth + 1, out);
        }
        self.break_line(depth, out);
        out.push_str("</text:list-item>");
    }

    fn break_line(&self, depth: usize, out: &mut String) {
        if self.pretty {
            out.push('\n');
            out.push_str(&INDENT.repeat(depth));
        }
    }
}

fn write_paragraph(para: &OdtParagraph, out: &mut String) {
    let mut body = String::new();
    for inline in &para.content {
        match inline {
            Inline::Text(text) => body.push_str(&escape_xml_text(text)),
            Inline::Span { style_name, text } => {
                body.push_str(&format!(
                    "<text:span text:style-name=\"{}\"",
                    escape_xml_attr(style_name)
                ));
                if text.is_empty() {
                    body.push_str("/>");
                } else {
                    body.push('>');
                    body.push_str(&escape_xml_text(text));
                    body.push_str("</text:span>");
                }
            }
        }
    }

    out.push_str(&format!(
        "<text:p text:style-name=\"{}\"",
        escape_xml_attr(&para.style_name)
    ));
    if body.is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');
        out.push_str(&body);
        out.push_str("</text:p>");
    }
}
