//! Linksift engine: source readers and the ingestion pipeline.
mod decode;
mod extract;
mod pipeline;
mod richtext;
mod source;

pub use decode::{decode_lossy, DecodedText};
pub use extract::UrlExtractor;
pub use pipeline::{ingest, IngestSummary, RichTextOutcome, SourceConfig};
pub use richtext::HyperlinkScanner;
pub use source::{read_plain_text, read_rich_text, SourceError};
