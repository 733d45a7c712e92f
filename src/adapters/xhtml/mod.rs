mod extractor;

use crate::converter::ConversionContext;
use crate::core::ast::OdtFragment;
use crate::Result;
use roxmltree::Document;

pub trait AstExtractor {
    fn extract(&self, document: &Document<'_>, context: &ConversionContext<'_>)
        -> Result<OdtFragment>;
}

pub use extractor::XhtmlExtractor;
