//! The `mc:AlternateContent` wrapper for SVG drawings.

use std::io::Write;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::BytesStart;

use super::{XmlElement, ns, write_wrapped};
use crate::document::drawing::AlternateContent;
use crate::error::Result;

/// Namespaces declared on the wrapper. Every prefix a branch may use is
/// declared here once, so nothing below needs to redeclare it.
const NAMESPACES: [(&str, &str); 14] = [
    ("xmlns:wpg", ns::WPG),
    ("xmlns:mc", ns::MC),
    ("xmlns:w", ns::W),
    ("xmlns:wp", ns::WP),
    ("xmlns:wp14", ns::WP14),
    ("xmlns:a", ns::A),
    ("xmlns:pic", ns::PIC),
    ("xmlns:r", ns::R),
    ("xmlns:wps", ns::WPS),
    ("xmlns:v", ns::V),
    ("xmlns:w14", ns::W14),
    ("xmlns:o", ns::O),
    ("xmlns:w10", ns::W10),
    ("xmlns:asvg", ns::ASVG),
];

/// Prefixes older readers may ignore.
const IGNORABLE: &str = "wp14 w14 w10 asvg";

impl XmlElement for AlternateContent {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut attrs: Vec<(&str, &str)> = NAMESPACES.to_vec();
        attrs.push(("mc:Ignorable", IGNORABLE));

        write_wrapped(writer, "mc:AlternateContent", &attrs, |w| {
            write_wrapped(
                w,
                "mc:Choice",
                &[("Requires", self.requires.as_str())],
                |w| self.choice.write_xml(w),
            )?;
            write_wrapped(w, "mc:Fallback", &[], |w| self.fallback.write_xml(w))
        })
    }
}

impl AlternateContent {
    /// Skip an `mc:AlternateContent` element whose start tag was just read.
    ///
    /// Reading is lossy: branches are rebuilt by whoever owns the run tree,
    /// so this only consumes input through the matching end tag.
    pub fn skip_xml(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<()> {
        reader.read_to_end(start.name())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ImageRef;
    use crate::document::drawing::{Drawing, SequentialIds};
    use crate::xml::{SvgBlip, to_xml_string};
    use quick_xml::events::Event;

    fn fragment() -> AlternateContent {
        let png = ImageRef::linked(1, 200, 100, "png", "rId1", "media/image1.png");
        let svg = ImageRef::linked(2, 200, 100, "svg", "rId2", "media/image2.svg");
        AlternateContent::svg_with_fallback(&mut SequentialIds::new(), &svg, &png).unwrap()
    }

    #[test]
    fn test_wrapper_structure() {
        let xml = to_xml_string(&fragment()).unwrap();

        assert!(xml.starts_with("<mc:AlternateContent xmlns:wpg="));
        assert!(xml.contains(r#"xmlns:asvg="http://schemas.microsoft.com/office/drawing/2016/SVG/main""#));
        assert!(xml.contains(r#"mc:Ignorable="wp14 w14 w10 asvg">"#));
        assert!(xml.contains(r#"<mc:Choice Requires="asvg"><w:drawing>"#));
        assert!(xml.contains("</w:drawing></mc:Choice><mc:Fallback><w:drawing>"));
        assert!(xml.ends_with("</w:drawing></mc:Fallback></mc:AlternateContent>"));
        assert_eq!(xml.matches("<mc:Choice ").count(), 1);
        assert_eq!(xml.matches("<mc:Fallback>").count(), 1);
        assert_eq!(xml.matches("<asvg:svgBlip ").count(), 1);
        assert_eq!(xml.matches("xmlns:a=").count(), 1);
        assert_eq!(xml.matches("xmlns:pic=").count(), 1);
    }

    #[test]
    fn test_svg_blip_only_in_choice() {
        let xml = to_xml_string(&fragment()).unwrap();
        let (choice, rest) = xml.split_once("<mc:Fallback>").unwrap();
        let (fallback, _) = rest.split_once("</mc:Fallback>").unwrap();

        assert_eq!(SvgBlip::from_xml(choice).unwrap().embed, "rId2");
        assert!(SvgBlip::from_xml(fallback).is_err());
        assert_eq!(fallback.matches(r#"<wp:extent cx="2540000" cy="1270000"/>"#).count(), 1);
        assert_eq!(choice.matches(r#"<wp:extent cx="2540000" cy="1270000"/>"#).count(), 1);
    }

    #[test]
    fn test_fallback_matches_plain_drawing() {
        let ac = fragment();
        let png = ImageRef::linked(1, 200, 100, "png", "rId1", "media/image1.png");
        let plain = Drawing::inline_picture(ac.fallback.doc_pr_id, &png).unwrap();

        assert_eq!(
            to_xml_string(&ac.fallback).unwrap(),
            to_xml_string(&plain).unwrap()
        );
    }

    #[test]
    fn test_skip_xml_consumes_whole_block() {
        let xml = format!("<w:r>{}<w:t>after</w:t></w:r>", to_xml_string(&fragment()).unwrap());
        let mut reader = Reader::from_str(&xml);

        let mut next_after_skip = None;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"mc:AlternateContent" => {
                    AlternateContent::skip_xml(&mut reader, &e).unwrap();
                    if let Event::Start(next) = reader.read_event().unwrap() {
                        next_after_skip = Some(String::from_utf8(next.name().as_ref().to_vec()).unwrap());
                    }
                    break;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        assert_eq!(next_after_skip.as_deref(), Some("w:t"));
    }
}
