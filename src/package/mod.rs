//! OPC package plumbing: relationship and content-type tables and the zip writer.

mod content_types;
mod relationships;
mod writer;

pub use content_types::ContentTypes;
pub use relationships::{Relationship, Relationships, rel_type};
pub use writer::{DocxConfig, DocxWriter, write_docx, write_docx_to_writer};

/// Part name of the main document.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Content type of the main document part.
pub const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
