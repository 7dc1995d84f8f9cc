//! The `asvg:svgBlip` extension payload.

use std::io::Write;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use super::{XmlElement, XmlRead, local_name, ns, write_empty};
use crate::error::{Error, Result};

/// Extension URI under which Office looks for an SVG blip in `a:blip/a:extLst`.
pub const SVG_BLIP_URI: &str = "{96DAC541-7B7A-43D3-8B79-37D633B846F1}";

/// Reference from a raster blip to its SVG counterpart.
///
/// Serializes as
/// `<asvg:svgBlip xmlns:asvg="…/2016/SVG/main" r:embed="rIdN"/>`. The `asvg`
/// prefix is declared on the element itself because it sits arbitrarily deep
/// inside an extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgBlip {
    /// Relationship id of the SVG image part.
    pub embed: String,
}

impl SvgBlip {
    pub fn new(embed: impl Into<String>) -> Self {
        Self {
            embed: embed.into(),
        }
    }

    /// Parse the first `svgBlip` element found in `xml`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event()? {
                Event::Empty(e) if local_name(e.name().as_ref()) == b"svgBlip" => {
                    return Self::read_xml(&mut reader, &e, true);
                }
                Event::Start(e) if local_name(e.name().as_ref()) == b"svgBlip" => {
                    return Self::read_xml(&mut reader, &e, false);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Err(Error::Reference("no svgBlip element found".to_string()))
    }
}

impl XmlElement for SvgBlip {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_empty(
            writer,
            "asvg:svgBlip",
            &[("xmlns:asvg", ns::ASVG), ("r:embed", self.embed.as_str())],
        )
    }
}

impl XmlRead for SvgBlip {
    fn read_xml(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> Result<Self> {
        let mut embed = None;
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if attr.key.local_name().as_ref() == b"embed" {
                let raw = String::from_utf8(attr.value.to_vec())?;
                embed = Some(unescape(&raw).map_err(quick_xml::Error::from)?.into_owned());
            }
        }

        if !empty {
            reader.read_to_end(start.name())?;
        }

        match embed {
            Some(embed) if !embed.is_empty() => Ok(Self { embed }),
            _ => Err(Error::Reference("svgBlip has no r:embed relationship id".to_string())),
        }
    }
}
