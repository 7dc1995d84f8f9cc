//! Serializer for the main document part (`word/document.xml`).

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesText, Event};

use super::{XmlElement, ns, write_empty, write_wrapped};
use crate::document::{Document, Paragraph, Run, RunContent};
use crate::error::Result;

const ROOT_NAMESPACES: [(&str, &str); 8] = [
    ("xmlns:w", ns::W),
    ("xmlns:r", ns::R),
    ("xmlns:wp", ns::WP),
    ("xmlns:wp14", ns::WP14),
    ("xmlns:a", ns::A),
    ("xmlns:pic", ns::PIC),
    ("xmlns:mc", ns::MC),
    ("xmlns:w14", ns::W14),
];

impl XmlElement for Document {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut attrs: Vec<(&str, &str)> = ROOT_NAMESPACES.to_vec();
        attrs.push(("mc:Ignorable", "w14 wp14"));

        write_wrapped(writer, "w:document", &attrs, |w| {
            write_wrapped(w, "w:body", &[], |w| {
                for paragraph in self.paragraphs() {
                    paragraph.write_xml(w)?;
                }
                write_section_properties(w)
            })
        })
    }
}

/// US Letter, one-inch margins.
fn write_section_properties<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    write_wrapped(writer, "w:sectPr", &[], |w| {
        write_empty(w, "w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
        write_empty(
            w,
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )
    })
}

impl XmlElement for Paragraph {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.runs.is_empty() {
            return write_empty(writer, "w:p", &[]);
        }
        write_wrapped(writer, "w:p", &[], |w| {
            for run in &self.runs {
                run.write_xml(w)?;
            }
            Ok(())
        })
    }
}

impl XmlElement for Run {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_wrapped(writer, "w:r", &[], |w| {
            for content in &self.content {
                match content {
                    RunContent::Text(text) => {
                        write_wrapped(w, "w:t", &[("xml:space", "preserve")], |w| {
                            w.write_event(Event::Text(BytesText::new(text)))?;
                            Ok(())
                        })?;
                    }
                    RunContent::Drawing(drawing) => drawing.write_xml(w)?,
                }
            }
            for extra in self.extra() {
                extra.write_xml(w)?;
            }
            Ok(())
        })
    }
}
