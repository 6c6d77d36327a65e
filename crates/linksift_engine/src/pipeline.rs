use std::path::PathBuf;

use linksift_core::LinkStore;
use linksift_logging::{sift_debug, sift_info};

use crate::extract::UrlExtractor;
use crate::richtext::HyperlinkScanner;
use crate::source::{read_plain_text, read_rich_text, SourceError};

/// Where the pipeline reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Plain-text source scanned line by line for inline URLs.
    pub links_path: PathBuf,
    /// Optional rich-text document scanned for hyperlink annotations.
    pub rich_text_path: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            links_path: PathBuf::from("links.txt"),
            rich_text_path: None,
        }
    }
}

/// Outcome of the rich-text leg of an ingest run.
#[derive(Debug)]
pub enum RichTextOutcome {
    /// No rich-text source was configured. Informational, not an error.
    NotConfigured,
    /// The document was scanned; `count` distinct hyperlinks were stored.
    Ingested { count: usize },
    /// The document could not be read.
    Failed(SourceError),
}

/// Per-source outcomes of one ingest run.
///
/// Detection is decoupled from presentation: the caller decides how to
/// surface each leg, and no outcome prevents reporting.
#[derive(Debug)]
pub struct IngestSummary {
    pub plain: Result<usize, SourceError>,
    pub rich: RichTextOutcome,
}

/// Run the plain-text reader and then, when configured, the rich-text
/// reader against `store`.
pub fn ingest(config: &SourceConfig, store: &mut LinkStore) -> IngestSummary {
    let extractor = UrlExtractor::new();
    let scanner = HyperlinkScanner::new();

    let plain = read_plain_text(&config.links_path, &extractor, store);
    if let Ok(count) = &plain {
        sift_info!("stored {count} links from {}", config.links_path.display());
    }

    let rich = match &config.rich_text_path {
        None => {
            sift_debug!("no rich-text source configured");
            RichTextOutcome::NotConfigured
        }
        Some(path) => match read_rich_text(path, &scanner, store) {
            Ok(count) => {
                sift_info!("stored {count} hyperlinks from {}", path.display());
                RichTextOutcome::Ingested { count }
            }
            Err(err) => RichTextOutcome::Failed(err),
        },
    };

    IngestSummary { plain, rich }
}
