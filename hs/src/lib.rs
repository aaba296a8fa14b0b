//! HeaderScan - batch picker for include-cleanup passes
//!
//! Reads a markdown checklist recording which headers have already been
//! cleaned up, walks a C++ source tree, and proposes the next batch of `.cpp`
//! entry points whose includes cover a target number of unprocessed headers.
//!
//! # Checklist format
//!
//! ```text
//! - [ ] /abs/path/to/pending.h
//! - [x] /abs/path/to/done.hpp
//! - [!] /abs/path/to/broken.cpp
//! ```
//!
//! # Example
//!
//! ```ignore
//! use headerscan::{Config, next_batch};
//!
//! let config = Config::default();
//! let batch = next_batch(&config, 12)?;
//! for header in &batch.headers {
//!     println!("{header}");
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod includes;
pub mod progress;
pub mod report;
pub mod walker;

pub use batch::{Batch, next_batch, select_batch};
pub use config::Config;
pub use error::ScanError;
pub use includes::{IncludeScanner, normalize_path};
pub use progress::{ChecklistEntry, Progress, ProgressStats, Status, parse_entries};
pub use walker::SourceWalker;

/// Default number of headers per batch
pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Default checklist location, relative to the working directory
pub const DEFAULT_PROGRESS_FILE: &str = "iwyu_progress.md";

/// Default source tree root, relative to the working directory
pub const DEFAULT_PROJECT_ROOT: &str = "internal/core";
