//! Inline run builder - accumulates the content of one flat `text:p`.

use super::markup::{flatten_text, is_xml_space, is_xml_whitespace};
use super::StyleResolver;
use crate::core::ast::{Inline, OdtParagraph};
use roxmltree::Node;

/// Accumulator for the paragraph currently being built.
///
/// The paragraph style is fixed when the run is opened. Flushing consumes the
/// run; callers open a fresh one for whatever follows.
#[derive(Debug)]
pub struct InlineRun {
    style_name: String,
    content: Vec<Inline>,
    has_element: bool,
    /// Set for runs that stand for an explicit source paragraph. Only those
    /// keep a paragraph for elements that carry no text (`<p><img/></p>`).
    explicit: bool,
}

impl InlineRun {
    /// Opens the run of an explicit paragraph (`p`, `li`, `td`, ...).
    pub fn open(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            content: Vec::new(),
            has_element: false,
            explicit: true,
        }
    }

    /// Opens the run collecting loose inline content of a block container
    /// (`body`, `div`, `blockquote`). Textless elements alone never make it a
    /// paragraph.
    pub fn implicit(style_name: impl Into<String>) -> Self {
        Self {
            explicit: false,
            ..Self::open(style_name)
        }
    }

    pub fn append_text(&mut self, text: &str) {
        if let Some(Inline::Text(last)) = self.content.last_mut() {
            last.push_str(text);
            return;
        }
        self.content.push(Inline::Text(text.to_string()));
    }

    /// Appends a recognised inline element as a span styled by the resolver.
    pub fn append_inline(&mut self, element: Node<'_, '_>, styles: &StyleResolver) {
        self.has_element = true;
        self.content.push(Inline::Span {
            style_name: styles.resolve(element).name,
            text: flatten_text(element),
        });
    }

    /// Appends an unknown element as unstyled text.
    ///
    /// An explicit run counts as non-empty afterwards even when the element
    /// carried no text (an `<img/>` still keeps its paragraph).
    pub fn append_plain(&mut self, element: Node<'_, '_>) {
        self.has_element = true;
        let text = flatten_text(element);
        self.append_text(&text);
    }

    /// Appends a `<br/>` as a single space.
    pub fn append_break(&mut self) {
        self.has_element = true;
        self.append_text(" ");
    }

    /// Closes the run.
    ///
    /// Runs holding only XML whitespace produce nothing, unless the run is
    /// explicit and saw an element. Leading and trailing XML whitespace (source
    /// indentation) is dropped; a no-break space is kept.
    pub fn flush(mut self) -> Option<OdtParagraph> {
        let has_text = self
            .content
            .iter()
            .any(|inline| !is_xml_whitespace(inline.text()));
        if !has_text && !(self.explicit && self.has_element) {
            return None;
        }
        if let Some(Inline::Text(first)) = self.content.first_mut() {
            *first = first.trim_start_matches(is_xml_space).to_string();
        }
        if let Some(Inline::Text(last)) = self.content.last_mut() {
            let kept = last.trim_end_matches(is_xml_space).len();
            last.truncate(kept);
        }
        Some(self.into_paragraph())
    }

    /// Closes the run, emitting a paragraph even when it is empty. Text is
    /// kept verbatim.
    pub fn into_paragraph(self) -> OdtParagraph {
        let content = self
            .content
            .into_iter()
            .filter(|inline| !matches!(inline, Inline::Text(text) if text.is_empty()))
            .collect();
        OdtParagraph {
            style_name: self.style_name,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_flushes_to_nothing() {
        assert_eq!(InlineRun::open("Text_20_body").flush(), None);

        let mut run = InlineRun::open("Text_20_body");
        run.append_text("\n   ");
        assert_eq!(run.flush(), None);
    }

    #[test]
    fn test_explicit_request_emits_empty_paragraph() {
        let para = InlineRun::open("Text_20_body").into_paragraph();
        assert_eq!(para, OdtParagraph::empty("Text_20_body"));
    }

    #[test]
    fn test_adjacent_text_is_coalesced() {
        let mut run = InlineRun::open("center");
        run.append_text("Top ");
        run.append_text("text");
        let para = run.flush().expect("run has text");
        assert_eq!(para.style_name, "center");
        assert_eq!(para.content, vec![Inline::Text("Top text".to_string())]);
    }

    #[test]
    fn test_inline_element_becomes_span() {
        let doc = roxmltree::Document::parse("<sup>sup <b>text</b></sup>").expect("fixture must parse");
        let mut run = InlineRun::open("Text_20_body");
        run.append_text("Top ");
        run.append_inline(doc.root_element(), &StyleResolver::default());
        run.append_text(" text");
        let para = run.flush().expect("run has content");
        assert_eq!(
            para.content,
            vec![
                Inline::Text("Top ".to_string()),
                Inline::Span {
                    style_name: "sup".to_string(),
                    text: "sup text".to_string(),
                },
                Inline::Text(" text".to_string()),
            ]
        );
    }

    #[test]
    fn test_textless_unknown_element_keeps_paragraph() {
        let doc = roxmltree::Document::parse(r#"<img src="test"/>"#).expect("fixture must parse");
        let mut run = InlineRun::open("Text_20_body");
        run.append_plain(doc.root_element());
        let para = run.flush().expect("element keeps the paragraph");
        assert!(para.content.is_empty());
    }

    #[test]
    fn test_textless_element_does_not_make_implicit_paragraph() {
        let doc = roxmltree::Document::parse(r#"<a id="x"/>"#).expect("fixture must parse");
        let mut run = InlineRun::implicit("Text_20_body");
        run.append_text("\n  ");
        run.append_plain(doc.root_element());
        run.append_break();
        assert_eq!(run.flush(), None);
    }

    #[test]
    fn test_no_break_space_is_content() {
        let mut run = InlineRun::implicit("Text_20_body");
        run.append_text("\u{a0}");
        let para = run.flush().expect("no-break space is content");
        assert_eq!(para.content, vec![Inline::Text("\u{a0}".to_string())]);
    }

    #[test]
    fn test_flush_trims_source_indentation_only_at_the_edges() {
        let doc = roxmltree::Document::parse("<b>bold</b>").expect("fixture must parse");
        let mut run = InlineRun::open("list-item-bullet");
        run.append_text("\n    Item ");
        run.append_inline(doc.root_element(), &StyleResolver::default());
        run.append_text(" tail\u{a0}\n  ");
        let para = run.flush().expect("run has text");
        assert_eq!(
            para.content,
            vec![
                Inline::Text("Item ".to_string()),
                Inline::Span {
                    style_name: "strong".to_string(),
                    text: "bold".to_string(),
                },
                Inline::Text(" tail\u{a0}".to_string()),
            ]
        );
    }
}
