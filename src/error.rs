//! Error types for xhtml2odt.

use thiserror::Error;

/// Result type for xhtml2odt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during XHTML to ODT conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not well-formed XML.
    #[error("Failed to parse XHTML input: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An element appeared where the converter cannot place it (strict mode only).
    #[error("Unsupported structure: <{element}> inside <{parent}>")]
    UnsupportedStructure { element: String, parent: String },

    /// A converter was handed a node it does not translate.
    #[error("Conversion error: {0}")]
    Conversion(String),
}
