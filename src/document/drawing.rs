//! Inline picture drawings and the SVG/PNG `mc:AlternateContent` pair.
//!
//! A conditional drawing is two complete `w:drawing` subtrees. The choice
//! drawing paints the PNG and carries an `asvg:svgBlip` extension pointing at
//! the SVG; the fallback drawing paints only the PNG. Readers that do not
//! understand `asvg` discard the choice branch wholesale, so the fallback has
//! to stand on its own.

use crate::error::{Error, Result};
use crate::xml::{SVG_BLIP_URI, SvgBlip};

use super::image::ImageRef;

/// `a:graphicData` URI for picture content.
pub const PICTURE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Capability a reader must support to take the choice branch.
pub const SVG_REQUIRES: &str = "asvg";

/// Points per source pixel. Pixels are taken at 72 dpi.
pub const POINTS_PER_PIXEL: i64 = 1;

/// English Metric Units per point (914 400 per inch / 72).
pub const EMU_PER_POINT: i64 = 12_700;

/// Largest drawing id; ids live in the positive 31-bit range.
pub const MAX_DRAWING_ID: u32 = 0x7FFF_FFFF;

/// Drawing size in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub cx: i64,
    pub cy: i64,
}

impl Extent {
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            cx: width as i64 * POINTS_PER_PIXEL * EMU_PER_POINT,
            cy: height as i64 * POINTS_PER_PIXEL * EMU_PER_POINT,
        }
    }
}

/// Source of `wp:docPr` / `pic:cNvPr` ids.
pub trait IdSource {
    fn next_id(&mut self) -> u32;
}

/// Per-document counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Counter whose first id is `first`, kept within `1..=MAX_DRAWING_ID`.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first.clamp(1, MAX_DRAWING_ID),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = if id >= MAX_DRAWING_ID { 1 } else { id + 1 };
        id
    }
}

impl<F: FnMut() -> u32> IdSource for F {
    fn next_id(&mut self) -> u32 {
        self()
    }
}

/// Clear the reserved top bit of `raw`; a result of 0 becomes 1.
pub(crate) fn positive_id(raw: u32) -> u32 {
    match raw & MAX_DRAWING_ID {
        0 => 1,
        id => id,
    }
}

/// Draw two ids that differ after masking.
fn distinct_ids(ids: &mut dyn IdSource) -> (u32, u32) {
    let first = positive_id(ids.next_id());
    let mut second = positive_id(ids.next_id());
    if second == first {
        second = first % MAX_DRAWING_ID + 1;
    }
    (first, second)
}

/// One `a:ext` entry of a blip's extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlipExtension {
    pub uri: String,
    pub svg_blip: SvgBlip,
}

impl BlipExtension {
    pub fn svg(rel_id: impl Into<String>) -> Self {
        Self {
            uri: SVG_BLIP_URI.to_string(),
            svg_blip: SvgBlip::new(rel_id),
        }
    }
}

/// A `pic:pic` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub id: u32,
    pub name: String,
    /// Relationship id of the raster image painted by `a:blip`.
    pub embed: String,
    pub extensions: Vec<BlipExtension>,
    pub extent: Extent,
}

/// An inline `w:drawing` holding one picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub extent: Extent,
    pub doc_pr_id: u32,
    pub name: String,
    pub picture: Picture,
}

impl Drawing {
    /// Inline raster picture with the given id.
    pub fn inline_picture(id: u32, image: &ImageRef) -> Result<Self> {
        let embed = image.linked_rel_id()?;
        let extent = Extent::from_pixels(image.width(), image.height());
        Ok(Self::build(id, extent, embed, Vec::new()))
    }

    fn build(id: u32, extent: Extent, embed: &str, extensions: Vec<BlipExtension>) -> Self {
        let name = format!("Picture {}", id);
        Self {
            extent,
            doc_pr_id: id,
            name: name.clone(),
            picture: Picture {
                id,
                name,
                embed: embed.to_string(),
                extensions,
                extent,
            },
        }
    }

    /// The SVG reference carried by this drawing's blip, if any.
    pub fn svg_blip(&self) -> Option<&SvgBlip> {
        self.picture
            .extensions
            .iter()
            .find(|ext| ext.uri == SVG_BLIP_URI)
            .map(|ext| &ext.svg_blip)
    }
}

/// An `mc:AlternateContent` block pairing an SVG drawing with its PNG fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateContent {
    /// Value of `mc:Choice/@Requires`.
    pub requires: String,
    pub choice: Drawing,
    pub fallback: Drawing,
}

impl AlternateContent {
    /// Build the choice/fallback pair for an SVG and its PNG fallback.
    ///
    /// Both handles must be linked into the document's relationships. The
    /// extent comes from the PNG's pixel size and is shared by both branches.
    pub fn svg_with_fallback(
        ids: &mut dyn IdSource,
        svg: &ImageRef,
        png: &ImageRef,
    ) -> Result<Self> {
        let png_rel = png.linked_rel_id().map_err(|_| {
            Error::Reference("PNG image is not linked into the document relationships".into())
        })?;
        let svg_rel = svg.linked_rel_id().map_err(|_| {
            Error::Reference("SVG image is not linked into the document relationships".into())
        })?;

        let extent = Extent::from_pixels(png.width(), png.height());
        let (choice_id, fallback_id) = distinct_ids(ids);

        let choice = Drawing::build(choice_id, extent, png_rel, vec![BlipExtension::svg(svg_rel)]);
        let fallback = Drawing::build(fallback_id, extent, png_rel, Vec::new());

        log::debug!(
            "built SVG drawing (svg {}, png {}, ids {}/{})",
            svg_rel,
            png_rel,
            choice_id,
            fallback_id
        );

        Ok(Self {
            requires: SVG_REQUIRES.to_string(),
            choice,
            fallback,
        })
    }
}
