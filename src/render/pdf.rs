//! PDF output through `lopdf`.
//!
//! Pages are collected as content-stream operations and the document is only
//! assembled and written in [`PageSink::finish`]. The file is written to a
//! temporary sibling of the destination and renamed into place, so a failed
//! render never leaves a half-written paper behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::layout::{FontStyle, PageLayout};
use crate::model::DocumentMetadata;

use super::PageSink;

/// Font resources shared by every page: (resource name, base font).
const FONT_RESOURCES: [(&str, &str); 3] = [
    ("F1", "Helvetica-Bold"),
    ("F2", "Helvetica"),
    ("F3", "Helvetica-Oblique"),
];

fn font_resource(style: FontStyle) -> &'static str {
    let base = style.base_font();
    FONT_RESOURCES
        .iter()
        .find(|(_, font)| *font == base)
        .map(|(name, _)| *name)
        .unwrap_or("F2")
}

/// Encode a document-info text string: ASCII stays a literal, anything else
/// becomes UTF-16BE with a byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(|unit| unit.to_be_bytes()));
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// A [`PageSink`] that writes a PDF file.
pub struct PdfSink {
    destination: PathBuf,
    layout: PageLayout,
    title: Option<String>,
    creation_date: Option<String>,
    pages: Vec<Vec<Operation>>,
    current: Option<Vec<Operation>>,
    finished: bool,
}

impl PdfSink {
    /// Create a sink that will write to `destination` on finish.
    pub fn new(destination: impl Into<PathBuf>, layout: PageLayout) -> Self {
        Self {
            destination: destination.into(),
            layout,
            title: None,
            creation_date: None,
            pages: Vec::new(),
            current: None,
            finished: false,
        }
    }

    /// Record title and creation date in the document info dictionary.
    pub fn with_metadata(mut self, metadata: &DocumentMetadata) -> Self {
        self.title = Some(metadata.display_title().to_string());
        self.creation_date = Some(
            metadata
                .generated_at
                .format("D:%Y%m%d%H%M%S")
                .to_string(),
        );
        self
    }

    /// Output path.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    fn operations(&mut self) -> Result<&mut Vec<Operation>> {
        self.current
            .as_mut()
            .ok_or_else(|| Error::Render("no page has been started".to_string()))
    }

    fn close_page(&mut self) {
        if let Some(ops) = self.current.take() {
            self.pages.push(ops);
        }
    }

    fn build_document(&mut self) -> Result<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for (name, base_font) in FONT_RESOURCES {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(name, font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for ops in self.pages.drain(..) {
            let content = Content { operations: ops };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.layout.width.into(),
                self.layout.height.into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal(concat!("qpaper ", env!("CARGO_PKG_VERSION"))),
        };
        if let Some(ref title) = self.title {
            info.set("Title", text_string(title));
        }
        if let Some(ref date) = self.creation_date {
            info.set("CreationDate", Object::string_literal(date.as_str()));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        doc.compress();
        Ok(doc)
    }

    fn write_atomically(&self, doc: &mut Document) -> Result<()> {
        let dir = match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            doc.save_to(&mut writer)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.destination).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

impl PageSink for PdfSink {
    fn start_page(&mut self, _number: u32) -> Result<()> {
        if self.finished {
            return Err(Error::DocumentClosed);
        }
        self.close_page();
        self.current = Some(Vec::new());
        Ok(())
    }

    fn set_style(&mut self, style: FontStyle) -> Result<()> {
        let ops = self.operations()?;
        ops.push(Operation::new(
            "Tf",
            vec![font_resource(style).into(), style.font_size().into()],
        ));
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        let (encoded, missing) = encode_win_ansi(text);
        if missing > 0 {
            log::warn!(
                "{} character(s) not representable in WinAnsi replaced with '?': {:?}",
                missing,
                text
            );
        }

        let ops = self.operations()?;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Err(Error::DocumentClosed);
        }
        self.finished = true;
        self.close_page();
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }

        let page_count = self.pages.len();
        let mut doc = self.build_document()?;
        self.write_atomically(&mut doc)?;
        log::info!(
            "Wrote {} page(s) to {}",
            page_count,
            self.destination.display()
        );
        Ok(())
    }
}

/// Encode text for the WinAnsi base fonts.
///
/// Returns the encoded bytes and the number of characters replaced by `?`.
pub fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut missing = 0;

    for ch in text.chars() {
        let code = ch as u32;
        let byte = match ch {
            _ if code < 0x80 => Some(code as u8),
            _ if (0xA0..=0xFF).contains(&code) => Some(code as u8),
            '€' => Some(0x80),
            '…' => Some(0x85),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '™' => Some(0x99),
            _ => None,
        };

        match byte {
            Some(b) => bytes.push(b),
            None => {
                bytes.push(b'?');
                missing += 1;
            }
        }
    }

    (bytes, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_resource_mapping() {
        assert_eq!(font_resource(FontStyle::Title), "F1");
        assert_eq!(font_resource(FontStyle::Caption), "F2");
        assert_eq!(font_resource(FontStyle::Body), "F2");
        assert_eq!(font_resource(FontStyle::Answer), "F3");
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Q1. (2 marks)"), (b"Q1. (2 marks)".to_vec(), 0));
        assert_eq!(encode_win_ansi("café"), (vec![b'c', b'a', b'f', 0xE9], 0));
        assert_eq!(encode_win_ansi("“x”"), (vec![0x93, b'x', 0x94], 0));
        assert_eq!(encode_win_ansi("π"), (vec![b'?'], 1));
    }

    #[test]
    fn test_draw_before_page_fails() {
        let mut sink = PdfSink::new("unused.pdf", PageLayout::a4());
        assert!(matches!(
            sink.draw_text(50.0, 700.0, "x"),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_finish_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");

        let mut sink = PdfSink::new(&path, PageLayout::a4());
        sink.start_page(1).unwrap();
        sink.set_style(FontStyle::Body).unwrap();
        sink.draw_text(50.0, 700.0, "Hello").unwrap();
        sink.start_page(2).unwrap();
        sink.set_style(FontStyle::Body).unwrap();
        sink.draw_text(50.0, 700.0, "World").unwrap();
        sink.finish().unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        assert!(matches!(sink.finish(), Err(Error::DocumentClosed)));
    }

    #[test]
    fn test_missing_directory_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("paper.pdf");

        let mut sink = PdfSink::new(&path, PageLayout::a4());
        sink.start_page(1).unwrap();
        let result = sink.finish();
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_text_string_encoding() {
        assert!(matches!(
            text_string("Quiz"),
            Object::String(ref bytes, StringFormat::Literal) if bytes == b"Quiz"
        ));
        let expected = vec![0xFE, 0xFF, 0, b'C', 0, b'a', 0, b'f', 0, 0xE9, 0, b' ', 0x03, 0xC0];
        assert!(matches!(
            text_string("Café π"),
            Object::String(ref bytes, StringFormat::Hexadecimal) if *bytes == expected
        ));
    }

    #[test]
    fn test_non_ascii_title_in_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titled.pdf");

        let metadata = DocumentMetadata::new("Physique — Unité 3", 10, 30);
        let mut sink = PdfSink::new(&path, PageLayout::a4()).with_metadata(&metadata);
        sink.start_page(1).unwrap();
        sink.finish().unwrap();

        let doc = Document::load(&path).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        let bytes = info.get(b"Title").unwrap().as_str().unwrap();

        assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
        let units: Vec<u16> = bytes[2..]
            .chunks(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        assert_eq!(String::from_utf16(&units).unwrap(), "Physique — Unité 3");
    }
}
