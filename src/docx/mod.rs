//! Document model - write-side API for producing DOCX files

mod body;
mod core_props;
mod drawing;
mod numbering;
mod paragraph;
mod run;
mod styles;

pub use body::Body;
pub use drawing::Drawing;
pub use paragraph::{Paragraph, ParagraphContent, ParagraphProperties};
pub use run::{Run, RunContent};

use crate::error::{Error, Result};
use crate::opc::{self, rel_types, Package, Part, PartUri, Relationships};
use crate::xml;
use image::ImageFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::Path;

/// Field instruction telling Word to build a hyperlinked TOC from heading
/// levels 1-3 with page numbers, updated by the application on field refresh.
const TOC_INSTRUCTION: &str = r#"TOC \o "1-3" \h \z \u"#;

/// EMUs per inch, the unit DrawingML measures picture extents in.
const EMU_PER_INCH: f64 = 914_400.0;

/// A DOCX document under construction
#[derive(Debug)]
pub struct Document {
    /// Document body, appended to in emission order
    body: Body,
    /// Embedded media payloads, one part each under /word/media/
    media: Vec<MediaPart>,
    /// Relationships of the main document part
    doc_rels: Relationships,
    /// Document title (docProps/core.xml)
    title: Option<String>,
    /// Next drawing object id
    next_drawing_id: u32,
}

#[derive(Debug)]
struct MediaPart {
    file_name: String,
    content_type: &'static str,
    data: Vec<u8>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        let mut doc_rels = Relationships::new();
        doc_rels.add(rel_types::STYLES, "styles.xml");
        doc_rels.add(rel_types::NUMBERING, "numbering.xml");

        Self {
            body: Body::default(),
            media: Vec::new(),
            doc_rels,
            title: None,
            next_drawing_id: 1,
        }
    }

    /// Set the document title (lands in the core properties part)
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Get the document title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Add a heading paragraph styled `Heading{level}`
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Paragraph {
        let mut para = Paragraph::new(text);
        para.set_style(format!("Heading{}", level));
        self.body.push_and_get(para)
    }

    /// Add a bulleted list paragraph
    pub fn add_bullet(&mut self, text: &str) -> &mut Paragraph {
        let mut para = Paragraph::new(text);
        para.set_style("ListBullet");
        para.set_numbering(numbering::BULLET_NUM_ID, 0);
        self.body.push_and_get(para)
    }

    /// Insert a TOC field paragraph, evaluated later by the consuming application
    pub fn add_toc_field(&mut self) {
        let mut para = Paragraph::default();
        para.content.push(ParagraphContent::SimpleField {
            instruction: TOC_INSTRUCTION.to_string(),
        });
        self.body.push(para);
    }

    /// Embed a picture at the given width (inches), preserving aspect ratio.
    ///
    /// Only PNG, JPEG, GIF and BMP payloads embed; anything else (or malformed
    /// data) is an error the caller may treat as non-fatal.
    pub fn add_picture(&mut self, data: &[u8], width_in: f64) -> Result<()> {
        let format = image::guess_format(data)
            .map_err(|_| Error::UnsupportedImage("unrecognized image data".into()))?;
        let (ext, content_type) = match format {
            ImageFormat::Png => ("png", "image/png"),
            ImageFormat::Jpeg => ("jpeg", "image/jpeg"),
            ImageFormat::Gif => ("gif", "image/gif"),
            ImageFormat::Bmp => ("bmp", "image/bmp"),
            other => {
                return Err(Error::UnsupportedImage(format!(
                    "{:?} images cannot be embedded",
                    other
                )))
            }
        };

        let (px_w, px_h) =
            image::ImageReader::with_format(Cursor::new(data), format).into_dimensions()?;
        if px_w == 0 || px_h == 0 {
            return Err(Error::UnsupportedImage("image has zero extent".into()));
        }

        let cx = (width_in * EMU_PER_INCH) as u64;
        let cy = (width_in * EMU_PER_INCH * px_h as f64 / px_w as f64) as u64;

        let file_name = format!("image{}.{}", self.media.len() + 1, ext);
        let rel_id = self
            .doc_rels
            .add(rel_types::IMAGE, &format!("media/{}", file_name));
        self.media.push(MediaPart {
            file_name,
            content_type,
            data: data.to_vec(),
        });

        let id = self.next_drawing_id;
        self.next_drawing_id += 1;

        let mut run = Run::default();
        run.content.push(RunContent::Drawing(Drawing {
            rel_id,
            object_id: id,
            name: format!("Picture {}", id),
            cx,
            cy,
        }));
        let mut para = Paragraph::default();
        para.content.push(ParagraphContent::Run(run));
        self.body.push(para);
        Ok(())
    }

    /// Get the body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Get paragraph count
    pub fn paragraph_count(&self) -> usize {
        self.body.len()
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.build_package()?.save(path)
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.build_package()?.to_bytes()
    }

    /// Assemble the OPC package from the current document state
    fn build_package(&self) -> Result<Package> {
        let mut package = Package::new();

        package.add_part(
            Part::new(
                PartUri::new("/word/document.xml")?,
                opc::MAIN_DOCUMENT,
                self.document_xml()?.into_bytes(),
            )
            .with_relationships(self.doc_rels.clone()),
        );

        package.add_part(Part::new(
            PartUri::new("/word/styles.xml")?,
            opc::STYLES,
            styles::styles_xml()?.into_bytes(),
        ));
        package.add_part(Part::new(
            PartUri::new("/word/numbering.xml")?,
            opc::NUMBERING,
            numbering::numbering_xml()?.into_bytes(),
        ));
        package.add_part(Part::new(
            PartUri::new("/docProps/core.xml")?,
            opc::CORE_PROPERTIES,
            core_props::core_xml(self.title.as_deref())?.into_bytes(),
        ));

        for media in &self.media {
            package.add_part(Part::new(
                PartUri::new(&format!("/word/media/{}", media.file_name))?,
                media.content_type,
                media.data.clone(),
            ));
        }

        package.add_relationship(rel_types::OFFICE_DOCUMENT, "word/document.xml");
        package.add_relationship(rel_types::CORE_PROPERTIES, "docProps/core.xml");

        Ok(package)
    }

    /// Serialize the body to document.xml content
    fn document_xml(&self) -> Result<String> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new(&mut buffer);

        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;

        let mut doc_start = BytesStart::new("w:document");
        for (attr, value) in xml::document_namespaces() {
            doc_start.push_attribute((attr, value));
        }
        writer.write_event(Event::Start(doc_start))?;

        self.body.write_to(&mut writer)?;

        writer.write_event(Event::End(BytesEnd::new("w:document")))?;

        let xml_bytes = buffer.into_inner();
        String::from_utf8(xml_bytes).map_err(|e| Error::InvalidDocument(e.to_string()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid 1x1 24-bit BMP (58 bytes)
    fn tiny_bmp() -> Vec<u8> {
        let mut bmp = Vec::new();
        bmp.extend_from_slice(b"BM");
        bmp.extend_from_slice(&58u32.to_le_bytes()); // file size
        bmp.extend_from_slice(&[0; 4]); // reserved
        bmp.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
        bmp.extend_from_slice(&40u32.to_le_bytes()); // info header size
        bmp.extend_from_slice(&1i32.to_le_bytes()); // width
        bmp.extend_from_slice(&1i32.to_le_bytes()); // height
        bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
        bmp.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
        bmp.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
        bmp.extend_from_slice(&4u32.to_le_bytes()); // image size
        bmp.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
        bmp.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
        bmp.extend_from_slice(&0u32.to_le_bytes()); // colors used
        bmp.extend_from_slice(&0u32.to_le_bytes()); // important colors
        bmp.extend_from_slice(&[0x00, 0x00, 0xFF, 0x00]); // one red pixel + row padding
        bmp
    }

    #[test]
    fn test_heading_and_bullet_styles() {
        let mut doc = Document::new();
        doc.add_heading("Title", 1);
        doc.add_bullet("Point").set_left_indent_twips(360);

        let paras: Vec<_> = doc.body().paragraphs().collect();
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].style(), Some("Heading1"));
        assert_eq!(paras[0].text(), "Title");
        assert_eq!(paras[1].style(), Some("ListBullet"));
        assert_eq!(paras[1].left_indent_twips(), Some(360));
    }

    #[test]
    fn test_toc_field_paragraph() {
        let mut doc = Document::new();
        doc.add_toc_field();

        let para = doc.body().paragraphs().next().unwrap();
        assert!(para.is_simple_field());

        let xml = doc.document_xml().unwrap();
        assert!(xml.contains("w:fldSimple"));
        assert!(xml.contains("TOC \\o"));
    }

    #[test]
    fn test_add_picture_square_extent() {
        let mut doc = Document::new();
        doc.add_picture(&tiny_bmp(), 2.0).unwrap();

        let para = doc.body().paragraphs().next().unwrap();
        assert!(para.has_drawing());

        // 1x1 source at 2.0" width: both extents are 2.0" in EMUs
        let xml = doc.document_xml().unwrap();
        assert!(xml.contains(r#"cx="1828800" cy="1828800""#));
        assert!(xml.contains(r#"r:embed="rId3""#));
    }

    #[test]
    fn test_add_picture_rejects_unknown_format() {
        let mut doc = Document::new();
        let err = doc.add_picture(b"<svg xmlns='http://www.w3.org/2000/svg'/>", 2.0);
        assert!(err.is_err());
        assert_eq!(doc.paragraph_count(), 0, "nothing should be emitted");
    }

    #[test]
    fn test_add_picture_rejects_truncated_payload() {
        let mut doc = Document::new();
        // BMP signature with a garbage header
        let err = doc.add_picture(b"BMxxxx", 2.0);
        assert!(err.is_err());
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_package_layout() {
        let mut doc = Document::new();
        doc.set_title("Example");
        doc.add_heading("Example", 1);
        doc.add_picture(&tiny_bmp(), 1.0).unwrap();

        let bytes = doc.to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/numbering.xml",
            "word/media/image1.bmp",
            "docProps/core.xml",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }

        use std::io::Read;
        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:title>Example</dc:title>"));
    }
}
