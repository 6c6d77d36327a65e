use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use linksift_core::LinkStore;
use linksift_logging::sift_warn;
use thiserror::Error;

use crate::decode::decode_lossy;
use crate::extract::UrlExtractor;
use crate::richtext::HyperlinkScanner;

/// Faults raised while reading a configured source. None of these abort the
/// run; the caller reports them and reporting still happens.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },
}

impl SourceError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Read {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

/// Read the plain-text source line by line, extracting and storing links.
///
/// Returns the number of links inserted. Links inserted before a mid-file
/// fault stay in the store; the file handle is released on all paths.
pub fn read_plain_text(
    path: &Path,
    extractor: &UrlExtractor,
    store: &mut LinkStore,
) -> Result<usize, SourceError> {
    let file = File::open(path).map_err(|err| SourceError::from_io(path, err))?;
    let mut inserted = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|err| SourceError::from_io(path, err))?;
        for link in extractor.extract_links(&line) {
            store.insert(link);
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Read the rich-text source whole, scan for hyperlink annotations, and
/// store the distinct targets.
///
/// Malformed bytes are tolerated by substitution during decoding.
pub fn read_rich_text(
    path: &Path,
    scanner: &HyperlinkScanner,
    store: &mut LinkStore,
) -> Result<usize, SourceError> {
    let bytes = std::fs::read(path).map_err(|err| SourceError::from_io(path, err))?;

    let decoded = decode_lossy(&bytes);
    if decoded.had_replacements {
        sift_warn!(
            "replaced malformed {} bytes while decoding {}",
            decoded.encoding_label,
            path.display()
        );
    }

    let hyperlinks = scanner.extract_hyperlinks(&decoded.text);
    let count = hyperlinks.len();
    for link in hyperlinks {
        store.insert(link);
    }
    Ok(count)
}
