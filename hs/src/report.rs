//! Plain-text rendering of batches and checklist stats

use std::fmt::Write;

use crate::batch::Batch;
use crate::progress::ProgressStats;

/// Render the `--stats` summary
pub fn render_stats(stats: &ProgressStats) -> String {
    format!(
        "Unprocessed headers: {}\nProcessed headers: {}\nProblem files: {}\n",
        stats.unprocessed, stats.processed, stats.problems
    )
}

/// Render a batch: sorted headers first, then entry-point sources in selection order
pub fn render_batch(batch: &Batch) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "=== Next batch of headers to process ===");
    let _ = writeln!(out, "Total headers: {}", batch.headers.len());
    for header in &batch.headers {
        let _ = writeln!(out, "  {header}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "=== CPP files to use as entry points ({}) ===", batch.sources.len());
    for source in &batch.sources {
        let _ = writeln!(out, "  {}", source.display());
    }

    out
}
