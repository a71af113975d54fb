use lopdf::Document;
use tracing::debug;

use crate::extraction::ExtractionError;

/// Extracts text page by page, skipping pages that yield no text.
///
/// A page whose content cannot be decoded counts as empty. Only a document that
/// cannot be loaded at all is an error.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(data)?;
    let pages = doc.get_pages();

    let mut page_texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => {
                let text = text.trim_end();
                if text.trim().is_empty() {
                    debug!(page_number, "skipping PDF page with no text");
                    continue;
                }
                page_texts.push(text.to_string());
            }
            Err(e) => {
                debug!(page_number, error = %e, "skipping unreadable PDF page");
            }
        }
    }

    debug!(
        pages = pages.len(),
        pages_with_text = page_texts.len(),
        "extracted PDF text"
    );
    Ok(page_texts.join("\n"))
}
