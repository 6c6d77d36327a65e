use std::collections::HashSet;

use linksift_engine::HyperlinkScanner;
use pretty_assertions::assert_eq;

fn scan(document: &str) -> HashSet<String> {
    HyperlinkScanner::new().extract_hyperlinks(document)
}

#[test]
fn annotations_are_found_in_markup() {
    let document = r#"{\field{\*\fldinst HYPERLINK "http://twitter.com/a"}{\fldrslt tweet}}"#;
    assert_eq!(scan(document), HashSet::from(["http://twitter.com/a".to_string()]));
}

#[test]
fn whitespace_between_token_and_quote_is_optional() {
    assert_eq!(
        scan(r#"HYPERLINK"http://a.com" HYPERLINK   "http://b.com""#),
        HashSet::from(["http://a.com".to_string(), "http://b.com".to_string()])
    );
}

#[test]
fn repeated_targets_are_deduplicated() {
    let document = r#"HYPERLINK "http://goodreads.com/x" filler HYPERLINK "http://goodreads.com/x""#;
    assert_eq!(scan(document), HashSet::from(["http://goodreads.com/x".to_string()]));
}

#[test]
fn documents_without_annotations_yield_nothing() {
    // Inline URL text is the plain-text extractor's surface, not this one's.
    assert!(scan("plain http://a.com text").is_empty());
    assert!(scan("").is_empty());
}

#[test]
fn unterminated_quote_is_not_a_match() {
    assert!(scan(r#"HYPERLINK "http://a.com"#).is_empty());
}
