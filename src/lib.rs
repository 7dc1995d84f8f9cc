//! # svgdocx
//!
//! Embed SVG images into WordprocessingML (`.docx`) documents with a PNG
//! fallback for readers that do not support SVG.
//!
//! Office 2016 and later render the SVG; older readers see the PNG. Both live
//! in one `mc:AlternateContent` block: an `mc:Choice Requires="asvg"` drawing
//! whose blip carries an `asvg:svgBlip` extension, and an `mc:Fallback`
//! drawing that paints only the PNG.
//!
//! ## Quick Start
//!
//! ```no_run
//! use svgdocx::{Document, write_docx};
//!
//! let svg = std::fs::read("diagram.svg")?;
//! let png = std::fs::read("diagram.png")?;
//!
//! let mut doc = Document::new();
//! let (png_ref, svg_ref) = doc.add_image_svg(&svg, &png, 200, 100)?;
//!
//! let para = doc.add_paragraph();
//! let run = doc.add_run(para)?;
//! doc.add_drawing_inline_svg(run, &svg_ref, &png_ref)?;
//!
//! write_docx(&doc, "diagram.docx")?;
//! # Ok::<(), svgdocx::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod package;
pub mod util;
pub mod xml;

pub use document::drawing::{AlternateContent, Drawing, Extent, IdSource, SequentialIds};
pub use document::{Document, DocumentConfig, Image, ImageRef, Run, RunRef};
pub use error::{Error, Result};
pub use package::{DocxConfig, DocxWriter, write_docx, write_docx_to_writer};
pub use xml::{SvgBlip, XmlElement, XmlRead, to_xml_string};
