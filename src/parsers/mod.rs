pub mod html;
pub mod pdf;

#[cfg(test)]
mod tests;

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Kind of document behind a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    /// HTML page
    Html,
    /// PDF document
    Pdf,
}

impl ContentKind {
    /// Determines the content kind from the URL alone.
    ///
    /// Any URL containing `.pdf` (case-sensitive, anywhere in the string) is
    /// treated as a PDF, everything else as HTML. This is the only place the
    /// decision is made.
    pub fn from_url(url: &str) -> Self {
        if url.contains(".pdf") {
            ::log::debug!("Classifying as PDF: {}", url);
            ContentKind::Pdf
        } else {
            ::log::debug!("Classifying as HTML: {}", url);
            ContentKind::Html
        }
    }
}

/// Extracts plain text from raw bytes of the given kind
pub fn extract_text(bytes: &[u8], kind: ContentKind) -> Result<String, ParseError> {
    match kind {
        ContentKind::Html => Ok(html::extract_text(&String::from_utf8_lossy(bytes))),
        ContentKind::Pdf => pdf::extract_text(bytes),
    }
}
