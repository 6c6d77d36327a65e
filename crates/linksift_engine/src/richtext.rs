use std::collections::HashSet;

use regex::Regex;

/// The literal annotation token, optional whitespace, then a quoted target.
const HYPERLINK_PATTERN: &str = r#"HYPERLINK\s*"([^"]+)""#;

/// Finds `HYPERLINK "<url>"` annotations in rich-text markup.
///
/// This is a separate detection mechanism from [`crate::UrlExtractor`]: it
/// keys on the annotation token rather than inline URL text, and returns the
/// distinct targets as an unordered set.
#[derive(Debug, Clone)]
pub struct HyperlinkScanner {
    pattern: Regex,
}

impl HyperlinkScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(HYPERLINK_PATTERN).expect("hyperlink pattern compiles"),
        }
    }

    /// Return the distinct quoted targets of every annotation in `document`.
    pub fn extract_hyperlinks(&self, document: &str) -> HashSet<String> {
        self.pattern
            .captures_iter(document)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl Default for HyperlinkScanner {
    fn default() -> Self {
        Self::new()
    }
}
