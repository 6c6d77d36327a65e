use regex::Regex;

/// A scheme token followed by a greedy run of non-whitespace characters.
const URL_PATTERN: &str = r"https?://\S+";

/// Finds URL-like substrings in plain text.
///
/// Matches are taken verbatim up to the next whitespace or end of input:
/// no trailing-punctuation stripping, no deduplication, no validation.
#[derive(Debug, Clone)]
pub struct UrlExtractor {
    pattern: Regex,
}

impl UrlExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(URL_PATTERN).expect("url pattern compiles"),
        }
    }

    /// Return every URL-like substring of `text`, in order of appearance.
    ///
    /// Empty when nothing matches; never fails.
    pub fn extract_links(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}
