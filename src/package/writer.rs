use std::io::{Seek, Write};
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::document::Document;
use crate::error::Result;
use crate::xml::to_part_bytes;

use super::{DOCUMENT_PART, Relationships, rel_type};

/// Configuration for package output.
#[derive(Debug, Clone, Default)]
pub struct DocxConfig {
    /// Compression level for deflate (1-9, default 6). 0 stores entries uncompressed.
    pub compression_level: Option<u32>,
}

impl DocxConfig {
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level.min(9));
        self
    }
}

/// Writes a [`Document`] as a `.docx` package.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use svgdocx::{Document, DocxConfig, DocxWriter};
///
/// let doc = Document::new();
/// let file = File::create("output.docx")?;
/// DocxWriter::new()
///     .with_config(DocxConfig::default().with_compression_level(9))
///     .write(&doc, file)?;
/// # Ok::<(), svgdocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    config: DocxConfig,
}

impl DocxWriter {
    /// Create a new writer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the writer with custom settings.
    pub fn with_config(mut self, config: DocxConfig) -> Self {
        self.config = config;
        self
    }

    /// Write the package to any [`Write`] + [`Seek`] destination.
    pub fn write<W: Write + Seek>(&self, doc: &Document, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        let compression_level = self.config.compression_level.unwrap_or(6);
        let options = if compression_level == 0 {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(compression_level as i64))
        };

        // 1. Content types manifest
        let content_types = to_part_bytes(doc.content_types())?;
        start_entry(&mut zip, "[Content_Types].xml", options)?;
        zip.write_all(&content_types)?;

        // 2. Package relationships pointing at the main document
        let mut package_rels = Relationships::new();
        package_rels.add(rel_type::OFFICE_DOCUMENT, DOCUMENT_PART);
        let package_rels = to_part_bytes(&package_rels)?;
        start_entry(&mut zip, "_rels/.rels", options)?;
        zip.write_all(&package_rels)?;

        // 3. Main document
        let body = to_part_bytes(doc)?;
        start_entry(&mut zip, DOCUMENT_PART, options)?;
        zip.write_all(&body)?;

        // 4. Document relationships
        let document_rels = to_part_bytes(doc.relationships())?;
        start_entry(&mut zip, "word/_rels/document.xml.rels", options)?;
        zip.write_all(&document_rels)?;

        // 5. Media, in registration order
        for image in doc.stored_images() {
            let data = image.load()?;
            start_entry(&mut zip, &format!("word/{}", image.target), options)?;
            zip.write_all(&data)?;
        }

        zip.finish()?;
        log::debug!(
            "wrote package with {} images and {} relationships",
            doc.image_count(),
            doc.relationships().len()
        );
        Ok(())
    }
}

fn start_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    log::trace!("writing package entry {}", name);
    zip.start_file(name, options)?;
    Ok(())
}

/// Write a [`Document`] to a `.docx` file on disk.
///
/// # Example
///
/// ```no_run
/// use svgdocx::{Document, write_docx};
///
/// let mut doc = Document::new();
/// let (png, svg) = doc.add_image_svg(b"<svg/>", b"\x89PNG...", 200, 100)?;
/// let para = doc.add_paragraph();
/// let run = doc.add_run(para)?;
/// doc.add_drawing_inline_svg(run, &svg, &png)?;
/// write_docx(&doc, "output.docx")?;
/// # Ok::<(), svgdocx::Error>(())
/// ```
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_docx_to_writer(doc, file)
}

/// Write a [`Document`] to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers.
pub fn write_docx_to_writer<W: Write + Seek>(doc: &Document, writer: W) -> Result<()> {
    DocxWriter::new().write(doc, writer)
}
