//! Converter modules for XHTML to ODT transformation.

mod block;
mod context;
mod definition;
mod list;
pub mod markup;
mod paragraph;
mod run;
mod styles;

use crate::adapters::xhtml::{AstExtractor, XhtmlExtractor};
use crate::core::ast::OdtFragment;
use crate::render::{OdtRenderer, Renderer};
use crate::{ConvertOptions, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

pub use self::block::BlockTranslator;
pub use self::context::ConversionContext;
pub use self::definition::DefinitionListConverter;
pub use self::list::ListConverter;
pub use self::paragraph::{NestedParagraphs, ParagraphConverter};
pub use self::run::InlineRun;
pub use self::styles::{Alignment, StyleBinding, StyleKind, StyleNames, StyleResolver};

/// Main converter struct that orchestrates XHTML to ODT conversion.
///
/// Holds no per-document state; one instance can convert any number of
/// documents, from any number of threads.
pub struct Xhtml2Odt {
    options: ConvertOptions,
    style_resolver: StyleResolver,
}

impl Xhtml2Odt {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        let style_resolver = StyleResolver::new(options.styles.clone());
        Self {
            options,
            style_resolver,
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Converts an XHTML file to an ODT fragment.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let xhtml = std::fs::read_to_string(path.as_ref())?;
        self.convert_str(&xhtml)
    }

    /// Converts XHTML markup to serialized ODT.
    ///
    /// # Returns
    /// The `text:` elements in document order, without an XML declaration or
    /// root element unless [`ConvertOptions::standalone`] is set.
    pub fn convert_str(&self, xhtml: &str) -> Result<String> {
        let parsing = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(xhtml, parsing)?;
        let fragment = self.convert_document(&document)?;
        self.render(&fragment)
    }

    /// Converts a parsed document into the ODT fragment model.
    pub fn convert_document(&self, document: &Document<'_>) -> Result<OdtFragment> {
        let context = ConversionContext::new(&self.options, &self.style_resolver);
        XhtmlExtractor.extract(document, &context)
    }

    /// Converts one element (a `<p>`, a list, a `<div>`, ...) on its own.
    pub fn convert_element(&self, element: Node<'_, '_>) -> Result<OdtFragment> {
        let context = ConversionContext::new(&self.options, &self.style_resolver);
        XhtmlExtractor.extract_element(element, &context)
    }

    /// Serializes a fragment according to the configured layout.
    pub fn render(&self, fragment: &OdtFragment) -> Result<String> {
        let renderer = OdtRenderer {
            pretty: self.options.pretty_print,
            standalone: self.options.standalone,
        };
        renderer.render(fragment)
    }
}
