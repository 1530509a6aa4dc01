use crate::results::MISSING;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// "frist", anything on the same line, then a D.M.YYYY / DD.MM.YYYY date
const DEADLINE_PATTERN: &str = r"(?i)frist.*?[:\s]*(\d{1,2}\.\d{1,2}\.\d{4})";

/// "ort" followed by a colon or whitespace, then letters, spaces and hyphens
const LOCATION_PATTERN: &str = r"(?i)ort[:\s]+([A-Za-zÄÖÜäöüß\s\-]+)";

/// Deadline and location pulled out of a tender document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderFields {
    pub deadline: String,
    pub location: String,
}

/// Best-effort pattern matcher for deadline and location.
///
/// Misses are expected on free-form text and yield `?`, never an error.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    deadline: Regex,
    location: Regex,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new().expect("Built-in field patterns should be valid")
    }
}

impl FieldExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            deadline: Regex::new(DEADLINE_PATTERN)?,
            location: Regex::new(LOCATION_PATTERN)?,
        })
    }

    /// Extract both fields, taking the first match of each
    pub fn extract(&self, text: &str) -> TenderFields {
        TenderFields {
            deadline: self.deadline(text).unwrap_or(MISSING).to_string(),
            location: self.location(text).unwrap_or(MISSING).to_string(),
        }
    }

    /// First date following "frist", if any
    pub fn deadline<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.deadline
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// First location following "ort", trimmed
    pub fn location<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.location
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

/// `FieldExtractor::default().extract(text)`
pub fn extract_fields(text: &str) -> TenderFields {
    FieldExtractor::default().extract(text)
}
