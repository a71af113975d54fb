//! PDF rendering for `Report`.
//!
//! A4 portrait, 10 mm margins, one 10 mm line per entry. The title is bold and
//! centered in a 200 mm cell; body lines are left aligned with a 1 mm cell
//! padding. When the next line would cross 20 mm above the bottom edge a new
//! page starts. Lines never wrap.
//!
//! Output carries no timestamps or document IDs, so equal reports render to
//! byte-identical buffers.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use thiserror::Error;

use crate::report::font_metrics::ReportFont;
use crate::report::{Report, REPORT_TITLE};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("character {ch:?} cannot be encoded in the report's single-byte encoding")]
    Unencodable { ch: char },

    #[error("failed to write PDF: {0}")]
    Pdf(String),
}

const MM: f32 = 72.0 / 25.4;

const PAGE_WIDTH_PT: i64 = 595;
const PAGE_HEIGHT_PT: i64 = 842;
const MARGIN: f32 = 10.0 * MM;
const LINE_HEIGHT: f32 = 10.0 * MM;
const CELL_WIDTH: f32 = 200.0 * MM;
const CELL_PADDING: f32 = 1.0 * MM;
const PAGE_BREAK_MARGIN: f32 = 20.0 * MM;

const TITLE_SIZE_PT: i64 = 16;
const BODY_SIZE_PT: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// One positioned line of text. `x`/`y` are the baseline origin in PDF user space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlacedLine {
    pub font: ReportFont,
    pub size_pt: i64,
    pub x: i64,
    pub y: i64,
    pub bytes: Vec<u8>,
}

pub fn render_pdf(report: &Report) -> Result<Vec<u8>, ReportError> {
    let pages = layout_pages(report)?;

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(font_dictionary(ReportFont::Helvetica));
    let bold_id = doc.add_object(font_dictionary(ReportFont::HelveticaBold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            ReportFont::Helvetica.resource_name() => regular_id,
            ReportFont::HelveticaBold.resource_name() => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for lines in &pages {
        let operations: Vec<Operation> = lines
            .iter()
            .flat_map(|line| {
                [
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![line.font.resource_name().into(), line.size_pt.into()],
                    ),
                    Operation::new("Td", vec![line.x.into(), line.y.into()]),
                    Operation::new("Tj", vec![Object::string_literal(line.bytes.clone())]),
                    Operation::new("ET", vec![]),
                ]
            })
            .collect();
        let encoded = Content { operations }
            .encode()
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => media_box(),
        });
        kids.push(Object::from(page_id));
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
    doc.save_to(&mut buffer)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(buffer)
}

/// Positions the title and every entry, breaking pages as needed.
pub(crate) fn layout_pages(report: &Report) -> Result<Vec<Vec<PlacedLine>>, ReportError> {
    let title = (ReportFont::HelveticaBold, TITLE_SIZE_PT, REPORT_TITLE.to_string(), Align::Center);
    let body = report.entries().iter().map(|entry| {
        (
            ReportFont::Helvetica,
            BODY_SIZE_PT,
            format!("{}: {}", entry.label, entry.value),
            Align::Left,
        )
    });

    let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
    let mut cursor_top = MARGIN;

    for (font, size_pt, text, align) in std::iter::once(title).chain(body) {
        let page_is_empty = pages.last().map_or(true, Vec::is_empty);
        if !page_is_empty && cursor_top + LINE_HEIGHT > PAGE_HEIGHT_PT as f32 - PAGE_BREAK_MARGIN {
            pages.push(Vec::new());
            cursor_top = MARGIN;
        }

        let bytes = encode_latin1(&text)?;
        let x = match align {
            Align::Left => MARGIN + CELL_PADDING,
            Align::Center => {
                let width = font.metrics().measure_str(&text, size_pt as f32);
                MARGIN + (CELL_WIDTH - width) / 2.0
            }
        };
        let baseline_from_top = cursor_top + LINE_HEIGHT / 2.0 + 0.3 * size_pt as f32;

        if let Some(page) = pages.last_mut() {
            page.push(PlacedLine {
                font,
                size_pt,
                x: x.round() as i64,
                y: (PAGE_HEIGHT_PT as f32 - baseline_from_top).round() as i64,
                bytes,
            });
        }
        cursor_top += LINE_HEIGHT;
    }

    Ok(pages)
}

/// Latin-1: one byte per character, code points above U+00FF are rejected.
fn encode_latin1(text: &str) -> Result<Vec<u8>, ReportError> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| ReportError::Unencodable { ch }))
        .collect()
}

fn font_dictionary(font: ReportFont) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(PAGE_WIDTH_PT),
        Object::Integer(PAGE_HEIGHT_PT),
    ]
}
