mod escape;
mod odt;

use crate::core::ast::OdtFragment;
use crate::Result;

pub use escape::{escape_xml_attr, escape_xml_text};
pub use odt::{OdtRenderer, OFFICE_NAMESPACE, TEXT_NAMESPACE};

pub trait Renderer {
    fn render(&self, fragment: &OdtFragment) -> Result<String>;
}
