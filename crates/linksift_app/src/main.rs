//! linksift: sort URLs from text documents into category buckets.

mod config;

use linksift_core::{render_report, LinkStore};
use linksift_engine::{ingest, RichTextOutcome};
use linksift_logging::{sift_error, sift_info, LogDestination};

use crate::config::AppConfig;

fn main() {
    linksift_logging::initialize(LogDestination::File);

    let config = AppConfig::load().into_source_config();
    let mut store = LinkStore::new();
    let summary = ingest(&config, &mut store);

    if let Err(err) = &summary.plain {
        sift_error!("{err}");
        eprintln!("{err}");
    }
    match &summary.rich {
        RichTextOutcome::NotConfigured => {
            eprintln!("no rich-text source configured; skipping");
        }
        RichTextOutcome::Failed(err) => {
            sift_error!("{err}");
            eprintln!("{err}");
        }
        RichTextOutcome::Ingested { .. } => {}
    }

    sift_info!("reporting {} stored links", store.len());
    print!("{}", render_report(&store));
}
