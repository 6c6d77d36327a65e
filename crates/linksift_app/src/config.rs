//! Configuration loading for the linksift CLI.
//!
//! Reads `./linksift.ron` from the working directory. Both fields are
//! optional; a missing or broken file falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use linksift_engine::SourceConfig;
use linksift_logging::sift_warn;
use serde::Deserialize;

const CONFIG_FILENAME: &str = "linksift.ron";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Plain-text source path; `links.txt` when unset.
    pub links_file: Option<PathBuf>,
    /// Rich-text source path; the rich-text leg is skipped when unset.
    pub rich_text_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load the configuration from the working directory.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILENAME))
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                sift_warn!("failed to read config {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match ron::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                sift_warn!("failed to parse config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Resolve into the engine's source configuration.
    pub fn into_source_config(self) -> SourceConfig {
        let defaults = SourceConfig::default();
        SourceConfig {
            links_path: self.links_file.unwrap_or(defaults.links_path),
            rich_text_path: self.rich_text_file,
        }
    }
}
