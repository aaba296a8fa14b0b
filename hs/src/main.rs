//! HeaderScan - next-batch picker for include cleanup
//!
//! CLI entry point: prints checklist stats or the next batch of headers.

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use headerscan::cli::Cli;
use headerscan::config::Config;
use headerscan::progress::Progress;
use headerscan::report::{render_batch, render_stats};

fn parse_level(s: &str) -> tracing::Level {
    match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > default (WARN)
    let filter = match cli_log_level.or(config_log_level) {
        Some(s) => EnvFilter::from_default_env().add_directive(parse_level(s).into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    debug!("Logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    info!(
        progress_file = %config.progress_file.display(),
        project_root = %config.project_root.display(),
        "headerscan starting"
    );

    if cli.stats {
        config.validate()?;
        let progress = Progress::load(&config.progress_file, &config.header_extensions)
            .context("Failed to load progress file")?;
        print!("{}", render_stats(&progress.stats()));
        return Ok(());
    }

    let target = cli.target(&config);
    let batch = headerscan::next_batch(&config, target).context("Failed to select next batch")?;
    print!("{}", render_batch(&batch));

    Ok(())
}
