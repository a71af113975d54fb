//! Fixture builders shared by unit tests.

use std::collections::HashMap;
use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::skills::tagger::{PartOfSpeech, PosTagger, TaggedToken};

/// Builds a DOCX whose body is one paragraph per entry (`""` = empty paragraph).
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for text in paragraphs {
        let paragraph = if text.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(*text))
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

/// One page of a PDF fixture.
pub enum FixturePage<'a> {
    /// A single `Tj` string in Helvetica.
    Text(&'a str),
    /// A content stream with no operations.
    Blank,
    /// A content stream with these raw operations.
    Operations(Vec<Operation>),
    /// `Contents` references an object that does not exist.
    DanglingContents,
}

/// Builds a PDF with one page per entry; `None` produces a page with no text.
pub fn pdf_bytes(pages: &[Option<&str>]) -> Vec<u8> {
    let pages: Vec<FixturePage> = pages
        .iter()
        .map(|page| match page {
            Some(text) => FixturePage::Text(text),
            None => FixturePage::Blank,
        })
        .collect();
    pdf_document(&pages)
}

pub fn pdf_document(pages: &[FixturePage]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            FixturePage::Text(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            FixturePage::Operations(operations) => operations.clone(),
            FixturePage::Blank | FixturePage::DanglingContents => vec![],
        };
        let content_id = match page {
            FixturePage::DanglingContents => (9_999, 0),
            _ => {
                let content = Content { operations };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()))
            }
        };
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Tagger double: whitespace tokens, tags looked up in a fixed table, `X` otherwise.
pub struct TableTagger {
    tags: HashMap<String, PartOfSpeech>,
}

impl TableTagger {
    pub fn new(entries: &[(&str, PartOfSpeech)]) -> Self {
        Self {
            tags: entries
                .iter()
                .map(|(word, pos)| (word.to_string(), *pos))
                .collect(),
        }
    }
}

impl PosTagger for TableTagger {
    fn name(&self) -> &'static str {
        "table"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|word| TaggedToken {
                text: word.to_string(),
                pos: self.tags.get(word).copied().unwrap_or(PartOfSpeech::X),
            })
            .collect()
    }
}
