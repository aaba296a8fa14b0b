//! `#include` extraction and resolution
//!
//! This is a textual scan, not a preprocessor: every `#include <...>` or
//! `#include "..."` in the file counts, whether or not it sits inside an
//! `#if` block. Only includes that resolve to a file on disk are reported.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::config::Config;

/// Matches an include directive.
/// - Group 1: the path between `<>` or `""`
static INCLUDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#include\s+[<"]([^>"]+)[>"]"#).expect("Invalid include regex"));

/// Make `path` absolute and drop `.`/`..` components without touching the
/// filesystem. Symlinks are left as written.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves the internal headers a source file pulls in
#[derive(Debug, Clone)]
pub struct IncludeScanner {
    /// Project directories tried before the including file's own directory
    search_dirs: Vec<PathBuf>,
    third_party_prefixes: Vec<String>,
    generated_suffixes: Vec<String>,
}

impl IncludeScanner {
    /// Scanner for the tree at `project_root`, with search dirs and filters from `config`
    pub fn new(project_root: &Path, config: &Config) -> Self {
        let root = normalize_path(project_root);
        Self {
            search_dirs: config.include_dirs.iter().map(|dir| root.join(dir)).collect(),
            third_party_prefixes: config.third_party_prefixes.clone(),
            generated_suffixes: config.generated_suffixes.clone(),
        }
    }

    /// Include paths written in `content` that are neither vendored nor generated
    pub fn extract_includes<'a>(&self, content: &'a str) -> Vec<&'a str> {
        INCLUDE_REGEX
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|include| !self.is_third_party(include))
            .filter(|include| !self.is_generated(include))
            .collect()
    }

    fn is_third_party(&self, include: &str) -> bool {
        self.third_party_prefixes
            .iter()
            .any(|prefix| include.starts_with(prefix.as_str()))
    }

    fn is_generated(&self, include: &str) -> bool {
        self.generated_suffixes
            .iter()
            .any(|suffix| include.ends_with(suffix.as_str()))
    }

    /// First existing candidate for `include`, searching the project dirs and
    /// then the directory of `source`
    pub fn resolve(&self, include: &str, source: &Path) -> Option<PathBuf> {
        let source_dir = source.parent().unwrap_or_else(|| Path::new(""));

        self.search_dirs
            .iter()
            .map(|dir| dir.join(include))
            .chain(std::iter::once(source_dir.join(include)))
            .find(|candidate| candidate.exists())
            .map(|found| normalize_path(&found))
    }

    /// Absolute paths of every resolvable internal header included by `source`.
    ///
    /// A file that cannot be read yields an empty set.
    pub fn scan(&self, source: &Path) -> BTreeSet<PathBuf> {
        let bytes = match fs::read(source) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(?source, error = %e, "Skipping unreadable source file");
                return BTreeSet::new();
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        self.extract_includes(&content)
            .into_iter()
            .filter_map(|include| self.resolve(include, source))
            .collect()
    }
}
