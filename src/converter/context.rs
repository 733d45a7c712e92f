use super::StyleResolver;
use crate::error::Error;
use crate::{ConvertOptions, Result};
use roxmltree::Node;

/// Read-only state shared by every converter during one conversion.
///
/// Nothing here is mutated while walking the tree, so recursive translators
/// can borrow it freely.
pub struct ConversionContext<'a> {
    options: &'a ConvertOptions,
    style_resolver: &'a StyleResolver,
}

impl<'a> ConversionContext<'a> {
    pub fn new(options: &'a ConvertOptions, style_resolver: &'a StyleResolver) -> Self {
        Self {
            options,
            style_resolver,
        }
    }

    pub fn styles(&self) -> &'a StyleResolver {
        self.style_resolver
    }

    pub fn strict(&self) -> bool {
        self.options.strict
    }

    /// Reports an element the converter cannot place.
    ///
    /// Strict conversions fail; permissive ones log and let the caller skip
    /// or degrade the element.
    pub fn structural_anomaly(&self, node: Node<'_, '_>, reason: &str) -> Result<()> {
        let element = node.tag_name().name().to_string();
        let parent = node
            .parent_element()
            .map(|p| p.tag_name().name().to_string())
            .unwrap_or_default();

        if self.strict() {
            return Err(Error::UnsupportedStructure { element, parent });
        }
        log::warn!("<{element}> inside <{parent}>: {reason}");
        Ok(())
    }
}
