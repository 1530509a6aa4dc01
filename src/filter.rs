/// Phrases marking a document as a Kunst-am-Bau tender, lower-case
pub const KEYWORDS: [&str; 3] = ["kunst am bau", "kunst und bau", "künstlerische gestaltung"];

/// Keyword filter deciding whether a document is in scope
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new(KEYWORDS)
    }
}

impl RelevanceFilter {
    /// Create a filter from a keyword set. Keywords are lower-cased once here.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if the text contains any keyword, ignoring case.
    ///
    /// Plain substring containment: no word boundaries, no fuzzy matching.
    pub fn is_relevant(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// `RelevanceFilter::default().is_relevant(text)`
pub fn is_relevant(text: &str) -> bool {
    RelevanceFilter::default().is_relevant(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_matches() {
        let filter = RelevanceFilter::default();
        assert!(filter.is_relevant("Offener Wettbewerb Kunst am Bau für die Schule"));
        assert!(filter.is_relevant("Ausschreibung Kunst und Bau, Neubau Rathaus"));
        assert!(filter.is_relevant("Künstlerische Gestaltung des Foyers"));
    }

    #[test]
    fn test_any_case_matches() {
        for text in ["KUNST AM BAU", "kunst am bau", "Kunst Am Bau", "kUnSt aM bAu"] {
            assert!(is_relevant(text), "{text:?} should be relevant");
        }
        assert!(is_relevant("KÜNSTLERISCHE GESTALTUNG"));
    }

    #[test]
    fn test_no_keyword_is_irrelevant() {
        let filter = RelevanceFilter::default();
        assert!(!filter.is_relevant(""));
        assert!(!filter.is_relevant("Stipendium für Malerei, Frist: 01.02.2025"));
        assert!(!filter.is_relevant("Kunst im öffentlichen Raum"));
        assert!(!filter.is_relevant("Kunst am\nBau"));
    }

    #[test]
    fn test_substring_inside_longer_words() {
        // no word boundaries
        assert!(is_relevant("Wettbewerbkunst am bauvorhaben"));
    }

    #[test]
    fn test_custom_keywords_are_lowercased() {
        let filter = RelevanceFilter::new(["Wandbild"]);
        assert_eq!(filter.keywords(), ["wandbild".to_string()]);
        assert!(filter.is_relevant("Ein WANDBILD für die Halle"));
        assert!(!filter.is_relevant("Kunst am Bau"));
    }
}
