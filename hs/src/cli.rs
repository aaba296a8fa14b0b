//! CLI argument parsing for headerscan

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Pick the next batch of headers for an include-cleanup pass
#[derive(Parser, Debug)]
#[command(name = "hs")]
#[command(author, version, about = "Pick the next batch of headers for include cleanup", long_about = None)]
pub struct Cli {
    /// Number of unprocessed headers to collect (default: 12)
    #[arg(value_name = "TARGET")]
    pub target: Option<usize>,

    /// Print checklist counts and exit without scanning sources
    #[arg(long)]
    pub stats: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Checklist file (overrides config)
    #[arg(long)]
    pub progress_file: Option<PathBuf>,

    /// Source tree root (overrides config)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Apply path overrides from the command line on top of `config`
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.progress_file {
            config.progress_file = path.clone();
        }
        if let Some(root) = &self.root {
            config.project_root = root.clone();
        }
    }

    /// Header count to collect: explicit TARGET, else the configured batch size
    pub fn target(&self, config: &Config) -> usize {
        self.target.unwrap_or(config.batch_size)
    }
}
