//! Source tree enumeration

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::includes::normalize_path;

/// Finds candidate entry-point sources under a project root
#[derive(Debug, Clone)]
pub struct SourceWalker {
    root: PathBuf,
    source_extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl SourceWalker {
    pub fn new(project_root: &Path, config: &Config) -> Self {
        Self {
            root: normalize_path(project_root),
            source_extensions: config.source_extensions.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.excluded_dirs.iter().any(|d| d == name))
                .unwrap_or(false)
    }

    fn is_source(&self, entry: &DirEntry) -> bool {
        !entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.source_extensions.iter().any(|ext| name.ends_with(ext.as_str())))
                .unwrap_or(false)
    }

    /// Absolute paths of all source files below the root, minus `problems`.
    ///
    /// Problem paths match by text against the normalized walked path.
    ///
    /// Entries are visited in file-name order, so the result is stable for a
    /// given tree. A missing root yields no sources.
    pub fn find_sources(&self, problems: &BTreeSet<String>) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            warn!(root = ?self.root, "Project root is not a directory");
            return Vec::new();
        }

        let sources: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded_dir(e))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|e| self.is_source(e))
            .map(|e| normalize_path(e.path()))
            .filter(|path| !problems.contains(&*path.to_string_lossy()))
            .collect();

        debug!(root = ?self.root, count = sources.len(), "Found source files");
        sources
    }
}
