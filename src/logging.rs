//! Tracing setup.
//!
//! Both front ends own the terminal, so logs always go to a file.

use crate::config::LogSettings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber. `RUST_LOG` overrides the configured filter.
pub fn init(settings: &LogSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
