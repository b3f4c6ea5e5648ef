//! Inline picture markup (w:drawing / wp:inline)

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// An inline picture anchored in a run.
///
/// The binary payload lives in a `/word/media/` part; this struct only carries
/// the relationship pointing at it plus the display extent.
#[derive(Clone, Debug)]
pub struct Drawing {
    /// Relationship ID of the image part (r:embed)
    pub rel_id: String,
    /// Document-unique drawing object id
    pub object_id: u32,
    /// Display name ("Picture 1")
    pub name: String,
    /// Display extent in EMUs
    pub cx: u64,
    pub cy: u64,
}

impl Drawing {
    /// Write to XML writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let cx = self.cx.to_string();
        let cy = self.cy.to_string();
        let id = self.object_id.to_string();

        writer.write_event(Event::Start(BytesStart::new("w:drawing")))?;

        let mut inline = BytesStart::new("wp:inline");
        for attr in ["distT", "distB", "distL", "distR"] {
            inline.push_attribute((attr, "0"));
        }
        writer.write_event(Event::Start(inline))?;

        xml::write_empty(writer, "wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        xml::write_empty(writer, "wp:docPr", &[("id", id.as_str()), ("name", self.name.as_str())])?;

        writer.write_event(Event::Start(BytesStart::new("a:graphic")))?;
        let mut graphic_data = BytesStart::new("a:graphicData");
        graphic_data.push_attribute(("uri", xml::PIC));
        writer.write_event(Event::Start(graphic_data))?;

        writer.write_event(Event::Start(BytesStart::new("pic:pic")))?;

        writer.write_event(Event::Start(BytesStart::new("pic:nvPicPr")))?;
        xml::write_empty(writer, "pic:cNvPr", &[("id", id.as_str()), ("name", self.name.as_str())])?;
        xml::write_empty(writer, "pic:cNvPicPr", &[])?;
        writer.write_event(Event::End(BytesEnd::new("pic:nvPicPr")))?;

        writer.write_event(Event::Start(BytesStart::new("pic:blipFill")))?;
        xml::write_empty(writer, "a:blip", &[("r:embed", self.rel_id.as_str())])?;
        writer.write_event(Event::Start(BytesStart::new("a:stretch")))?;
        xml::write_empty(writer, "a:fillRect", &[])?;
        writer.write_event(Event::End(BytesEnd::new("a:stretch")))?;
        writer.write_event(Event::End(BytesEnd::new("pic:blipFill")))?;

        writer.write_event(Event::Start(BytesStart::new("pic:spPr")))?;
        writer.write_event(Event::Start(BytesStart::new("a:xfrm")))?;
        xml::write_empty(writer, "a:off", &[("x", "0"), ("y", "0")])?;
        xml::write_empty(writer, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        writer.write_event(Event::End(BytesEnd::new("a:xfrm")))?;
        let mut geom = BytesStart::new("a:prstGeom");
        geom.push_attribute(("prst", "rect"));
        writer.write_event(Event::Start(geom))?;
        xml::write_empty(writer, "a:avLst", &[])?;
        writer.write_event(Event::End(BytesEnd::new("a:prstGeom")))?;
        writer.write_event(Event::End(BytesEnd::new("pic:spPr")))?;

        writer.write_event(Event::End(BytesEnd::new("pic:pic")))?;
        writer.write_event(Event::End(BytesEnd::new("a:graphicData")))?;
        writer.write_event(Event::End(BytesEnd::new("a:graphic")))?;
        writer.write_event(Event::End(BytesEnd::new("wp:inline")))?;
        writer.write_event(Event::End(BytesEnd::new("w:drawing")))?;

        Ok(())
    }
}
