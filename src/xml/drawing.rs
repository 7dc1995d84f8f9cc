//! Serializer for inline picture drawings (`w:drawing/wp:inline/.../pic:pic`).
//!
//! The same code writes ordinary run drawings and both branches of an
//! `mc:AlternateContent` block, so the branches match plain content exactly.
//! Prefixes resolve against the enclosing `w:document` or
//! `mc:AlternateContent`, which declare every namespace used here.

use std::io::Write;

use quick_xml::Writer;

use super::{XmlElement, write_empty, write_wrapped};
use crate::document::drawing::{BlipExtension, Drawing, PICTURE_URI, Picture};
use crate::error::Result;

impl XmlElement for Drawing {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let cx = self.extent.cx.to_string();
        let cy = self.extent.cy.to_string();
        let id = self.doc_pr_id.to_string();

        write_wrapped(writer, "w:drawing", &[], |w| {
            write_wrapped(
                w,
                "wp:inline",
                &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
                |w| {
                    write_empty(w, "wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
                    write_empty(w, "wp:docPr", &[("id", id.as_str()), ("name", self.name.as_str())])?;
                    write_wrapped(w, "wp:cNvGraphicFramePr", &[], |w| {
                        write_empty(w, "a:graphicFrameLocks", &[("noChangeAspect", "1")])
                    })?;
                    write_wrapped(w, "a:graphic", &[], |w| {
                        write_wrapped(w, "a:graphicData", &[("uri", PICTURE_URI)], |w| {
                            self.picture.write_xml(w)
                        })
                    })
                },
            )
        })
    }
}

impl XmlElement for Picture {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let id = self.id.to_string();
        let cx = self.extent.cx.to_string();
        let cy = self.extent.cy.to_string();

        write_wrapped(writer, "pic:pic", &[], |w| {
            write_wrapped(w, "pic:nvPicPr", &[], |w| {
                write_empty(w, "pic:cNvPr", &[("id", id.as_str()), ("name", self.name.as_str())])?;
                write_empty(w, "pic:cNvPicPr", &[])
            })?;

            write_wrapped(w, "pic:blipFill", &[], |w| {
                let embed = [("r:embed", self.embed.as_str())];
                if self.extensions.is_empty() {
                    write_empty(w, "a:blip", &embed)?;
                } else {
                    write_wrapped(w, "a:blip", &embed, |w| {
                        write_wrapped(w, "a:extLst", &[], |w| {
                            for ext in &self.extensions {
                                ext.write_xml(w)?;
                            }
                            Ok(())
                        })
                    })?;
                }
                write_wrapped(w, "a:stretch", &[], |w| write_empty(w, "a:fillRect", &[]))
            })?;

            write_wrapped(w, "pic:spPr", &[], |w| {
                write_wrapped(w, "a:xfrm", &[], |w| {
                    write_empty(w, "a:off", &[("x", "0"), ("y", "0")])?;
                    write_empty(w, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])
                })?;
                write_wrapped(w, "a:prstGeom", &[("prst", "rect")], |w| {
                    write_empty(w, "a:avLst", &[])
                })
            })
        })
    }
}

impl XmlElement for BlipExtension {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_wrapped(writer, "a:ext", &[("uri", self.uri.as_str())], |w| {
            self.svg_blip.write_xml(w)
        })
    }
}
