//! Batch selection
//!
//! Walks candidate sources in order and keeps every file that pulls in at
//! least one unprocessed header nobody else in the batch has claimed yet,
//! until the batch holds `target` headers or the candidates run out.

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ScanError;
use crate::includes::IncludeScanner;
use crate::progress::Progress;
use crate::walker::SourceWalker;

/// One proposed unit of work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Entry-point sources, in selection order
    pub sources: Vec<PathBuf>,
    /// Unprocessed headers reached through `sources`, as written in the checklist
    pub headers: BTreeSet<String>,
}

/// Pick the shortest prefix of `sources` (skipping files that add nothing)
/// whose new unprocessed headers reach `target`
pub fn select_batch(
    sources: &[PathBuf],
    unprocessed: &BTreeSet<String>,
    scanner: &IncludeScanner,
    target: usize,
) -> Batch {
    let mut batch = Batch::default();

    for source in sources {
        if batch.headers.len() >= target {
            break;
        }

        let new_headers: Vec<String> = scanner
            .scan(source)
            .into_iter()
            .map(|h| h.to_string_lossy().into_owned())
            .filter(|h| unprocessed.contains(h) && !batch.headers.contains(h))
            .collect();

        if new_headers.is_empty() {
            continue;
        }

        debug!(?source, new = new_headers.len(), "Selected source");
        batch.sources.push(source.clone());
        batch.headers.extend(new_headers);
    }

    batch
}

/// Load the checklist, walk the tree and select the next batch of `target` headers
pub fn next_batch(config: &Config, target: usize) -> Result<Batch, ScanError> {
    config.validate()?;

    let progress = Progress::load(&config.progress_file, &config.header_extensions)?;
    let walker = SourceWalker::new(&config.project_root, config);
    let sources = walker.find_sources(&progress.problems);
    let scanner = IncludeScanner::new(walker.root(), config);

    let batch = select_batch(&sources, &progress.unprocessed, &scanner, target);
    info!(
        target,
        candidates = sources.len(),
        headers = batch.headers.len(),
        sources = batch.sources.len(),
        "Batch selected"
    );
    Ok(batch)
}
