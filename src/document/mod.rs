//! The document being assembled: paragraphs, runs, images and package tables.
//!
//! A [`Document`] exclusively owns everything that ends up in the package.
//! All mutation goes through `&mut Document`; there is no internal locking.

pub mod drawing;
pub(crate) mod image;

use std::io::{Seek, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::package::{
    self, ContentTypes, DOCUMENT_CONTENT_TYPE, DOCUMENT_PART, Relationships, rel_type,
};

use self::drawing::{AlternateContent, Drawing, IdSource, SequentialIds};
use self::image::StoredImage;

pub use self::image::{Image, ImageRef};

/// Settings that apply for the lifetime of a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentConfig {
    /// Write image payloads here at registration instead of holding them in
    /// memory. The directory must exist and belong to this document alone.
    pub staging_dir: Option<PathBuf>,
}

impl DocumentConfig {
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }
}

/// Position of a run within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunRef {
    pub paragraph: usize,
    pub run: usize,
}

/// Ordinary run content, serialized in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    Drawing(Drawing),
}

/// A `w:r` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub content: Vec<RunContent>,
    /// Foreign content written after the ordinary content. Append-only.
    extra: Vec<AlternateContent>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extra(&self) -> &[AlternateContent] {
        &self.extra
    }

    pub(crate) fn push_extra(&mut self, content: AlternateContent) {
        self.extra.push(content);
    }
}

/// A `w:p` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// A WordprocessingML document under construction.
///
/// # Example
///
/// ```
/// use svgdocx::Document;
///
/// let mut doc = Document::new();
/// let (png, svg) = doc.add_image_svg(b"<svg/>", b"\x89PNG", 200, 100)?;
/// let para = doc.add_paragraph();
/// let run = doc.add_run(para)?;
/// let fragment = doc.add_drawing_inline_svg(run, &svg, &png)?;
/// assert_eq!(fragment.requires, "asvg");
/// # Ok::<(), svgdocx::Error>(())
/// ```
pub struct Document {
    config: DocumentConfig,
    images: Vec<StoredImage>,
    relationships: Relationships,
    content_types: ContentTypes,
    paragraphs: Vec<Paragraph>,
    ids: Box<dyn IdSource + Send>,
}

impl Document {
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        let mut content_types = ContentTypes::new();
        content_types.add_override(DOCUMENT_PART, DOCUMENT_CONTENT_TYPE);
        Self {
            config,
            images: Vec::new(),
            relationships: Relationships::new(),
            content_types,
            paragraphs: Vec::new(),
            ids: Box::new(SequentialIds::new()),
        }
    }

    /// Replace the drawing id source.
    pub fn with_id_source(mut self, ids: impl IdSource + Send + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub(crate) fn stored_images(&self) -> &[StoredImage] {
        &self.images
    }

    /// Append an empty paragraph and return its index.
    pub fn add_paragraph(&mut self) -> usize {
        self.paragraphs.push(Paragraph::default());
        self.paragraphs.len() - 1
    }

    /// Append an empty run to `paragraph`.
    pub fn add_run(&mut self, paragraph: usize) -> Result<RunRef> {
        let para = self
            .paragraphs
            .get_mut(paragraph)
            .ok_or_else(|| Error::Reference(format!("no paragraph at index {}", paragraph)))?;
        para.runs.push(Run::new());
        Ok(RunRef {
            paragraph,
            run: para.runs.len() - 1,
        })
    }

    pub fn run(&self, run: RunRef) -> Option<&Run> {
        self.paragraphs.get(run.paragraph)?.runs.get(run.run)
    }

    pub fn run_mut(&mut self, run: RunRef) -> Option<&mut Run> {
        self.paragraphs.get_mut(run.paragraph)?.runs.get_mut(run.run)
    }

    fn existing_run_mut(&mut self, run: RunRef) -> Result<&mut Run> {
        self.run_mut(run).ok_or_else(|| {
            Error::Reference(format!(
                "no run {} in paragraph {}",
                run.run, run.paragraph
            ))
        })
    }

    /// Append text to a run.
    pub fn add_text(&mut self, run: RunRef, text: impl Into<String>) -> Result<()> {
        self.existing_run_mut(run)?
            .content
            .push(RunContent::Text(text.into()));
        Ok(())
    }

    /// Append an ordinary inline picture of `image` to a run.
    pub fn add_drawing_inline(&mut self, run: RunRef, image: &ImageRef) -> Result<Drawing> {
        self.existing_run_mut(run)?;
        self.ensure_linked(image)?;
        let id = drawing::positive_id(self.ids.next_id());
        let drawing = Drawing::inline_picture(id, image)?;
        self.existing_run_mut(run)?
            .content
            .push(RunContent::Drawing(drawing.clone()));
        Ok(drawing)
    }

    /// Append an SVG drawing with a PNG fallback to a run's extra content.
    ///
    /// SVG-aware readers render `svg`; others render `png`. Fails with
    /// [`Error::Reference`] if either image is not linked into this document
    /// or the run does not exist, in which case nothing is appended.
    pub fn add_drawing_inline_svg(
        &mut self,
        run: RunRef,
        svg: &ImageRef,
        png: &ImageRef,
    ) -> Result<AlternateContent> {
        self.existing_run_mut(run)?;
        self.ensure_linked(png)?;
        self.ensure_linked(svg)?;
        let content = AlternateContent::svg_with_fallback(self.ids.as_mut(), svg, png)?;
        self.existing_run_mut(run)?.push_extra(content.clone());
        Ok(content)
    }

    /// Check that `image` names an image relationship of this document.
    ///
    /// Handles are plain data, so one issued by another document can carry a
    /// relationship id that is missing here or points at a different part.
    fn ensure_linked(&self, image: &ImageRef) -> Result<()> {
        let rel_id = image.linked_rel_id()?;
        match self.relationships.get(rel_id) {
            Some(rel)
                if rel.rel_type == rel_type::IMAGE && image.target() == Some(rel.target.as_str()) =>
            {
                Ok(())
            }
            _ => Err(Error::Reference(format!(
                "{} image {} is not linked into this document",
                image.format(),
                rel_id
            ))),
        }
    }

    /// Write the document as a `.docx` package.
    pub fn save<W: Write + Seek>(&self, writer: W) -> Result<()> {
        package::write_docx_to_writer(self, writer)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
