use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Result of tolerantly decoding a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// True when malformed sequences were replaced with U+FFFD.
    pub had_replacements: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> chardetng fallback.
///
/// Malformed sequences are substituted rather than failing, so the caller
/// always gets text back.
pub fn decode_lossy(bytes: &[u8]) -> DecodedText {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, _, had_replacements) = encoding.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
        had_replacements,
    }
}

#[cfg(test)]
mod tests {
    use super::decode_lossy;

    #[test]
    fn plain_ascii_decodes_cleanly() {
        let decoded = decode_lossy(b"HYPERLINK \"http://a.com\"");
        assert_eq!(decoded.text, "HYPERLINK \"http://a.com\"");
        assert!(!decoded.had_replacements);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_lossy(b"\xEF\xBB\xBFhello");
        assert_eq!(decoded.text, "hello");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn malformed_bytes_are_substituted_not_fatal() {
        // The BOM pins UTF-8, so the stray 0xFF must be replaced.
        let decoded = decode_lossy(b"\xEF\xBB\xBFab\xFFcd");
        assert!(decoded.had_replacements);
        assert!(decoded.text.contains('\u{FFFD}'));
        assert!(decoded.text.contains("ab"));
        assert!(decoded.text.contains("cd"));
    }
}
