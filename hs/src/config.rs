//! Configuration for headerscan

use eyre::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use crate::error::ScanError;

/// Vendored or system-provided include prefixes that are never resolved
const THIRD_PARTY_PREFIXES: &[&str] = &[
    "boost/",
    "arrow/",
    "google/",
    "fmt/",
    "folly/",
    "nlohmann/",
    "simdjson/",
    "tbb/",
    "aws/",
    "azure/",
    "opentelemetry/",
    "prometheus/",
    "re2/",
    "antlr4",
    "tantivy",
    "knowhere/",
    "faiss/",
    "minio/",
    "opendal/",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the markdown checklist
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,

    /// Root of the source tree to scan
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Number of headers to collect when no target is given
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Suffixes that mark a checklist path as a header
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Suffixes of source files used as entry points
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Directory names pruned from the walk at any depth
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Include prefixes that are never resolved
    #[serde(default = "default_third_party_prefixes")]
    pub third_party_prefixes: Vec<String>,

    /// Include suffixes of generated headers
    #[serde(default = "default_generated_suffixes")]
    pub generated_suffixes: Vec<String>,

    /// Subdirectories of the project root searched for includes, in order
    #[serde(default = "default_include_dirs")]
    pub include_dirs: Vec<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_progress_file() -> PathBuf {
    PathBuf::from(crate::DEFAULT_PROGRESS_FILE)
}

fn default_project_root() -> PathBuf {
    PathBuf::from(crate::DEFAULT_PROJECT_ROOT)
}

fn default_batch_size() -> usize {
    crate::DEFAULT_BATCH_SIZE
}

fn default_header_extensions() -> Vec<String> {
    vec![".h".to_string(), ".hpp".to_string()]
}

fn default_source_extensions() -> Vec<String> {
    vec![".cpp".to_string()]
}

fn default_excluded_dirs() -> Vec<String> {
    ["build", "cmake_build", "output", "thirdparty"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_third_party_prefixes() -> Vec<String> {
    THIRD_PARTY_PREFIXES.iter().map(|s| s.to_string()).collect()
}

fn default_generated_suffixes() -> Vec<String> {
    vec![".pb.h".to_string()]
}

fn default_include_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("src"), PathBuf::from("unittest")]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_file: default_progress_file(),
            project_root: default_project_root(),
            batch_size: default_batch_size(),
            header_extensions: default_header_extensions(),
            source_extensions: default_source_extensions(),
            excluded_dirs: default_excluded_dirs(),
            third_party_prefixes: default_third_party_prefixes(),
            generated_suffixes: default_generated_suffixes(),
            include_dirs: default_include_dirs(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {}", config_path.display()))?;
            let config: Config = serde_yaml::from_str(&content)
                .context(format!("Failed to parse config file: {}", config_path.display()))?;
            debug!(?config_path, "Loaded config from explicit path");
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("headerscan").join("config.yml")),
            Some(PathBuf::from("headerscan.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)
                    .context(format!("Failed to read config file: {}", path.display()))?;
                let config: Config = serde_yaml::from_str(&content)
                    .context(format!("Failed to parse config file: {}", path.display()))?;
                debug!(?path, "Loaded config from default location");
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Read only the log level, so logging can start before the full load
    pub fn load_log_level(path: Option<&PathBuf>) -> Option<String> {
        Self::load(path).ok().and_then(|config| config.log_level)
    }

    /// Reject settings that would make every scan come back empty
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.header_extensions.is_empty() {
            return Err(ScanError::Config("header_extensions must not be empty".to_string()));
        }
        if self.source_extensions.is_empty() {
            return Err(ScanError::Config("source_extensions must not be empty".to_string()));
        }
        Ok(())
    }
}
