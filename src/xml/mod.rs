//! XML serialization for package parts and the foreign-namespace elements
//! that ride inside them.
//!
//! Every element that must be written verbatim implements [`XmlElement`].
//! The document serializer dispatches to these implementations through the
//! run content enum, so nothing here depends on reflection or on a generic
//! schema model.

mod alternate;
mod document;
mod drawing;
mod package;
mod svg_blip;

use std::io::Write;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::Result;

pub use svg_blip::{SVG_BLIP_URI, SvgBlip};

/// Namespace URIs used by WordprocessingML parts.
pub mod ns {
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    pub const WP14: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing";
    pub const WPG: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingGroup";
    pub const WPS: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingShape";
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    pub const W10: &str = "urn:schemas-microsoft-com:office:word";
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const V: &str = "urn:schemas-microsoft-com:vml";
    pub const O: &str = "urn:schemas-microsoft-com:office:office";
    pub const ASVG: &str = "http://schemas.microsoft.com/office/drawing/2016/SVG/main";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";
}

/// An element that knows how to emit itself, start tag to end tag.
pub trait XmlElement {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;
}

/// An element that can be read back from the start tag that introduced it.
///
/// `start` has already been consumed from `reader`. For `Event::Start`
/// implementations must consume through the matching end tag; for
/// `Event::Empty` there is nothing left to consume.
pub trait XmlRead: Sized {
    fn read_xml(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> Result<Self>;
}

/// Serialize a single element to a string, without an XML declaration.
pub fn to_xml_string<E: XmlElement>(element: &E) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    element.write_xml(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Serialize a whole part: declaration followed by `root`.
pub(crate) fn to_part_bytes<E: XmlElement>(root: &E) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    root.write_xml(&mut writer)?;
    Ok(writer.into_inner())
}

/// Write `<name attrs.../>`.
pub(crate) fn write_empty<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<()> {
    let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Empty(start))?;
    Ok(())
}

/// Write `<name attrs...>`, run `body`, then `</name>`.
pub(crate) fn write_wrapped<W, F>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    body: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> Result<()>,
{
    let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Start(start))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Strip any namespace prefix from a qualified name.
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
