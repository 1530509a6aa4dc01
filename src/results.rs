use crate::parsers::ContentKind;
use serde::{Deserialize, Serialize};

/// Placeholder used when a field could not be extracted
pub const MISSING: &str = "?";

/// An anchor discovered on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Raw href, absolute or relative
    pub href: String,

    /// Display text of the anchor
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Raw bytes retrieved for one link, discarded after text extraction
#[derive(Debug, Clone)]
pub struct FetchedContent {
    pub url: String,
    pub kind: ContentKind,
    pub body: Vec<u8>,
}

/// One keyword-relevant tender announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderRecord {
    #[serde(rename = "Titel")]
    pub title: String,

    /// Deadline in `D.M.YYYY` form, or `?`
    #[serde(rename = "Frist")]
    pub deadline: String,

    /// Location, or `?`
    #[serde(rename = "Ort")]
    pub location: String,

    #[serde(rename = "Link")]
    pub url: String,
}

/// Which stage of per-link processing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    Network,
    Parse,
}

/// A link that could not be fetched or parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Zero-based position of the link in discovery order
    pub index: usize,
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of one pass over the listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of anchors discovered on the listing page
    pub links_found: usize,

    /// Relevant records in link-discovery order
    pub records: Vec<TenderRecord>,

    /// Per-link failures in link-discovery order
    pub failures: Vec<FetchFailure>,
}

impl RunReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Progress after a link has been fully processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction of links processed, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.processed as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}
