//! Image registration: media parts, image relationships and content types.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::package::rel_type;
use crate::util::{MediaFormat, detect_media_format, extract_image_dimensions, media_type_for_tag};

use super::Document;

/// Raw image input: bytes plus their pixel size and format tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Format tag, also used as the media file extension ("png", "svg", ...).
    pub format: String,
}

impl Image {
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: impl Into<String>) -> Self {
        Self {
            data,
            width,
            height,
            format: format.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::Validation(format!(
                "{} image data is empty",
                self.format
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::Validation(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.format.is_empty() {
            return Err(Error::Validation("image format tag is empty".to_string()));
        }
        Ok(())
    }
}

/// Handle to an image registered with a [`Document`].
///
/// Handles are immutable; the payload itself stays with the document and is
/// read through [`Document::image_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    index: usize,
    width: u32,
    height: u32,
    format: String,
    rel_id: Option<String>,
    target: Option<String>,
}

impl ImageRef {
    /// A handle that was never linked into a document's relationships.
    ///
    /// Building a drawing from it fails with [`Error::Reference`].
    pub fn unlinked(image: &Image) -> Self {
        Self {
            index: 0,
            width: image.width,
            height: image.height,
            format: image.format.to_ascii_lowercase(),
            rel_id: None,
            target: None,
        }
    }

    pub(crate) fn linked(
        index: usize,
        width: u32,
        height: u32,
        format: &str,
        rel_id: &str,
        target: impl Into<String>,
    ) -> Self {
        Self {
            index,
            width,
            height,
            format: format.to_string(),
            rel_id: Some(rel_id.to_string()),
            target: Some(target.into()),
        }
    }

    /// 1-based registration order within the document; 0 when unlinked.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Relationship id, e.g. `rId3`.
    pub fn rel_id(&self) -> Option<&str> {
        self.rel_id.as_deref()
    }

    /// Relationship target relative to the main document part, e.g. `media/image1.png`.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub(crate) fn linked_rel_id(&self) -> Result<&str> {
        match self.rel_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(Error::Reference(format!(
                "{} image is not linked into the document relationships",
                self.format
            ))),
        }
    }
}

/// Where a registered payload lives.
#[derive(Debug, Clone)]
pub(crate) enum ImageData {
    Memory(Vec<u8>),
    Staged(PathBuf),
}

#[derive(Debug, Clone)]
pub(crate) struct StoredImage {
    pub(crate) target: String,
    pub(crate) data: ImageData,
}

/// A validated, staged image not yet visible in the document.
struct PendingImage {
    index: usize,
    width: u32,
    height: u32,
    format: String,
    media_type: String,
    target: String,
    data: ImageData,
}

impl Document {
    /// Register an image and link it into the main document relationships.
    ///
    /// The image is stored as `word/media/image<N>.<format>` and the format's
    /// content type is declared once. Nothing changes on error.
    pub fn add_image(&mut self, image: Image) -> Result<ImageRef> {
        let media_type = media_type_for_tag(&image.format);
        let pending = self.prepare_image(image, media_type, 0)?;
        Ok(self.commit_image(pending))
    }

    /// Register an SVG and its PNG fallback of the same pixel size.
    ///
    /// Returns `(png, svg)`. Both inputs are validated and staged before
    /// either becomes part of the document.
    pub fn add_image_svg(
        &mut self,
        svg: &[u8],
        png: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(ImageRef, ImageRef)> {
        let png_image = Image::new(png.to_vec(), width, height, MediaFormat::Png.tag());
        let svg_image = Image::new(svg.to_vec(), width, height, MediaFormat::Svg.tag());
        png_image.validate()?;
        svg_image.validate()?;

        let png_pending =
            self.prepare_image(png_image, MediaFormat::Png.mime_type().to_string(), 0)?;
        let svg_pending =
            match self.prepare_image(svg_image, MediaFormat::Svg.mime_type().to_string(), 1) {
                Ok(pending) => pending,
                Err(e) => {
                    discard_staged(&png_pending.data);
                    return Err(e);
                }
            };

        let png_ref = self.commit_image(png_pending);
        let svg_ref = self.commit_image(svg_pending);
        Ok((png_ref, svg_ref))
    }

    /// Register an image file, detecting its format and pixel size.
    pub fn add_image_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImageRef> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| Error::storage(path, e))?;

        let format = detect_media_format(&path.to_string_lossy(), &data).ok_or_else(|| {
            Error::Validation(format!("unrecognized image format: {}", path.display()))
        })?;
        let (width, height) = extract_image_dimensions(&data).ok_or_else(|| {
            Error::Validation(format!("cannot determine image size: {}", path.display()))
        })?;

        self.add_image(Image::new(data, width, height, format.tag()))
    }

    /// Bytes of a registered image.
    pub fn image_data(&self, image: &ImageRef) -> Result<Cow<'_, [u8]>> {
        let stored = image
            .index
            .checked_sub(1)
            .and_then(|i| self.images.get(i))
            .filter(|stored| image.target() == Some(stored.target.as_str()))
            .ok_or_else(|| Error::Reference(format!("image {} is not registered", image.index)))?;
        stored.load()
    }

    /// Number of registered images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Validate and stage `image` as the `offset`-th image after the current list.
    fn prepare_image(
        &self,
        mut image: Image,
        media_type: String,
        offset: usize,
    ) -> Result<PendingImage> {
        image.validate()?;
        image.format.make_ascii_lowercase();

        let index = self.images.len() + 1 + offset;
        let file_name = format!("image{}.{}", index, image.format);
        let data = match &self.config.staging_dir {
            Some(dir) => {
                let path = dir.join(&file_name);
                fs::write(&path, &image.data).map_err(|e| Error::storage(&path, e))?;
                ImageData::Staged(path)
            }
            None => ImageData::Memory(image.data),
        };

        Ok(PendingImage {
            index,
            width: image.width,
            height: image.height,
            target: format!("media/{}", file_name),
            format: image.format,
            media_type,
            data,
        })
    }

    fn commit_image(&mut self, pending: PendingImage) -> ImageRef {
        debug_assert_eq!(pending.index, self.images.len() + 1);

        self.images.push(StoredImage {
            target: pending.target.clone(),
            data: pending.data,
        });
        let rel_id = self
            .relationships
            .add(rel_type::IMAGE, &pending.target)
            .id
            .clone();
        self.content_types
            .ensure_default(&pending.format, &pending.media_type);

        log::debug!(
            "registered {} image {} ({}x{}) as {}",
            pending.format,
            pending.target,
            pending.width,
            pending.height,
            rel_id
        );

        ImageRef::linked(
            pending.index,
            pending.width,
            pending.height,
            &pending.format,
            &rel_id,
            pending.target,
        )
    }
}

impl StoredImage {
    pub(crate) fn load(&self) -> Result<Cow<'_, [u8]>> {
        match &self.data {
            ImageData::Memory(bytes) => Ok(Cow::Borrowed(bytes)),
            ImageData::Staged(path) => fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| Error::storage(path, e)),
        }
    }
}

fn discard_staged(data: &ImageData) {
    if let ImageData::Staged(path) = data {
        let _ = fs::remove_file(path);
    }
}
