//! Serializers for `[Content_Types].xml` and relationship parts.

use std::io::Write;

use quick_xml::Writer;

use super::{XmlElement, ns, write_empty, write_wrapped};
use crate::error::Result;
use crate::package::{ContentTypes, Relationships};

impl XmlElement for ContentTypes {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_wrapped(writer, "Types", &[("xmlns", ns::CONTENT_TYPES)], |w| {
            for (extension, media_type) in self.defaults() {
                write_empty(
                    w,
                    "Default",
                    &[("Extension", extension), ("ContentType", media_type)],
                )?;
            }
            for (part_name, content_type) in self.overrides() {
                write_empty(
                    w,
                    "Override",
                    &[("PartName", part_name), ("ContentType", content_type)],
                )?;
            }
            Ok(())
        })
    }
}

impl XmlElement for Relationships {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_wrapped(
            writer,
            "Relationships",
            &[("xmlns", ns::PACKAGE_RELATIONSHIPS)],
            |w| {
                for rel in self.iter() {
                    write_empty(
                        w,
                        "Relationship",
                        &[
                            ("Id", rel.id.as_str()),
                            ("Type", rel.rel_type.as_str()),
                            ("Target", rel.target.as_str()),
                        ],
                    )?;
                }
                Ok(())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::rel_type;
    use crate::xml::to_xml_string;

    #[test]
    fn test_content_types_xml() {
        let mut types = ContentTypes::new();
        types.ensure_default("png", "image/png");
        types.add_override("/word/document.xml", "main");
        let xml = to_xml_string(&types).unwrap();

        assert!(xml.starts_with(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#
        ));
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml" ContentType="main"/>"#));
    }

    #[test]
    fn test_relationships_xml() {
        let mut rels = Relationships::new();
        rels.add(rel_type::IMAGE, "media/image1.png");
        let xml = to_xml_string(&rels).unwrap();

        assert!(xml.contains(&format!(
            r#"<Relationship Id="rId1" Type="{}" Target="media/image1.png"/>"#,
            rel_type::IMAGE
        )));
    }
}
