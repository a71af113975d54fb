use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::debug;

use crate::extraction::ExtractionError;

/// Extracts top-level body paragraphs in document order, one per line.
///
/// Empty paragraphs are kept as empty lines. Tables, headers and footers are
/// not part of the body paragraph list and are ignored.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(data)?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    debug!(paragraphs = paragraphs.len(), "extracted DOCX text");
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
