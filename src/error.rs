//! Error types for svgdocx operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while registering images, building drawings, or
/// writing a package.
#[derive(Error, Debug)]
pub enum Error {
    /// Image input rejected before any document state was touched.
    #[error("invalid image: {0}")]
    Validation(String),

    /// A handle or run that is not part of the document.
    #[error("unresolved reference: {0}")]
    Reference(String),

    /// Staging or loading an image payload on disk failed.
    #[error("storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Storage {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
