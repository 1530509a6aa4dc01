use crate::error::ParseError;
use lopdf::Document;

/// Extracts the text of every page of a PDF, in page order.
///
/// Fails only if the bytes are not a loadable PDF. Pages whose text cannot
/// be decoded (unsupported font encodings and the like) are skipped.
pub fn extract_text(bytes: &[u8]) -> Result<String, ParseError> {
    let doc = Document::load_mem(bytes)?;

    // get_pages is keyed by page number, so iteration is already in page order
    let pages = doc.get_pages();
    ::log::debug!("PDF has {} pages", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text = match doc.extract_text(&[*page_number]) {
            Ok(page_text) => page_text,
            Err(e) => {
                ::log::warn!("Skipping PDF page {}: {}", page_number, e);
                continue;
            }
        };
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&page_text);
    }

    Ok(text)
}
