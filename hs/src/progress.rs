//! Checklist parsing
//!
//! The progress file is a markdown checklist where each tracked file appears as
//! `- [s] /absolute/path`, with `s` one of ` ` (pending), `x` (done) or
//! `!` (problem). Everything else in the document is ignored.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::ScanError;

/// Matches a checklist item anywhere in the text.
/// - Group 1: status character
/// - Group 2: absolute path (up to the next whitespace)
static CHECKLIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- \[([x! ])\] (/\S+)").expect("Invalid checklist item regex"));

/// Processing status of a checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `[ ]`
    Unprocessed,
    /// `[x]`
    Processed,
    /// `[!]`
    Problem,
}

impl Status {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            " " => Some(Self::Unprocessed),
            "x" => Some(Self::Processed),
            "!" => Some(Self::Problem),
            _ => None,
        }
    }
}

/// A single `- [s] /path` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub status: Status,
    pub path: String,
}

/// Extract every checklist entry from the document, in document order
pub fn parse_entries(content: &str) -> Vec<ChecklistEntry> {
    CHECKLIST_ITEM_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let status = Status::from_marker(caps.get(1)?.as_str())?;
            let path = caps.get(2)?.as_str().to_string();
            Some(ChecklistEntry { status, path })
        })
        .collect()
}

/// Counts reported by `--stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub unprocessed: usize,
    pub processed: usize,
    pub problems: usize,
}

/// The three disjoint path sets described by the checklist.
///
/// Paths are kept exactly as written, so `/a/b.h` and `/a//b.h` are distinct
/// entries.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    /// Headers marked `[ ]`
    pub unprocessed: BTreeSet<String>,
    /// Headers marked `[x]`
    pub processed: BTreeSet<String>,
    /// Any file marked `[!]`, header or not
    pub problems: BTreeSet<String>,
}

impl Progress {
    /// Classify checklist entries.
    ///
    /// `[ ]` and `[x]` entries only count when the path ends in one of
    /// `header_extensions`. A path listed under several statuses keeps the
    /// strongest one: problem, then processed, then unprocessed.
    pub fn parse(content: &str, header_extensions: &[String]) -> Self {
        let mut progress = Self::default();

        for entry in parse_entries(content) {
            let is_header = header_extensions.iter().any(|ext| entry.path.ends_with(ext.as_str()));
            match entry.status {
                Status::Problem => {
                    progress.problems.insert(entry.path);
                }
                Status::Processed if is_header => {
                    progress.processed.insert(entry.path);
                }
                Status::Unprocessed if is_header => {
                    progress.unprocessed.insert(entry.path);
                }
                _ => {}
            }
        }

        let problems = &progress.problems;
        progress.processed.retain(|p| !problems.contains(p));
        let processed = &progress.processed;
        progress.unprocessed.retain(|p| !problems.contains(p) && !processed.contains(p));

        progress
    }

    /// Read and classify the checklist at `path`
    pub fn load(path: &Path, header_extensions: &[String]) -> Result<Self, ScanError> {
        if !path.exists() {
            return Err(ScanError::ProgressNotFound { path: path.to_path_buf() });
        }

        let content = fs::read_to_string(path).map_err(|source| ScanError::ProgressRead {
            path: path.to_path_buf(),
            source,
        })?;

        let progress = Self::parse(&content, header_extensions);
        debug!(
            ?path,
            unprocessed = progress.unprocessed.len(),
            processed = progress.processed.len(),
            problems = progress.problems.len(),
            "Loaded progress file"
        );
        Ok(progress)
    }

    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            unprocessed: self.unprocessed.len(),
            processed: self.processed.len(),
            problems: self.problems.len(),
        }
    }
}
