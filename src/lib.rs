//! # xhtml2odt
//!
//! XHTML to OpenDocument Text converter.
//!
//! XHTML allows lists, quotes and preformatted blocks inside a `<p>`; ODT does
//! not allow anything but inline content inside a `text:p`. The converter
//! flattens such paragraphs into a sequence of `text:p` and `text:list`
//! elements ready to be placed inside an `office:text` body.
//!
//! ## Example
//!
//! ```
//! use xhtml2odt::{ConvertOptions, Xhtml2Odt};
//!
//! let converter = Xhtml2Odt::new(ConvertOptions::default());
//! let odt = converter
//!     .convert_str(r#"<html xmlns="http://www.w3.org/1999/xhtml"><p>Test</p></html>"#)
//!     .unwrap();
//! assert_eq!(odt, r#"<text:p text:style-name="Text_20_body">Test</text:p>"#);
//! ```

pub mod adapters;
pub mod converter;
pub mod core;
pub mod error;
pub mod render;

pub use converter::{StyleNames, StyleResolver, Xhtml2Odt};
pub use error::{Error, Result};

/// Options for XHTML to ODT conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Indent lists and list items, one child per line.
    pub pretty_print: bool,
    /// Fail on structures the converter can only approximate (stray list
    /// children, unpaired terms, blocks inside inline elements) instead of
    /// logging and skipping them.
    pub strict: bool,
    /// Wrap the output in a standalone `office:document-content` document.
    pub standalone: bool,
    /// Style names written into `text:style-name`.
    pub styles: StyleNames,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty_print: true,
            strict: false,
            standalone: false,
            styles: StyleNames::default(),
        }
    }
}

/// Converts an XHTML document with default options.
pub fn xhtml2odt(xhtml: &str) -> Result<String> {
    Xhtml2Odt::with_defaults().convert_str(xhtml)
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Converts an XHTML string to an ODT fragment.
    #[pyfunction]
    #[pyo3(signature = (xhtml, strict = false))]
    fn convert_xhtml(xhtml: String, strict: bool) -> PyResult<String> {
        let options = ConvertOptions {
            strict,
            ..Default::default()
        };
        Xhtml2Odt::new(options)
            .convert_str(&xhtml)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn xhtml2odt(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(convert_xhtml, m)?)?;
        Ok(())
    }
}
