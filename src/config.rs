//! Application configuration and diagnostics setup.
//!
//! Configuration comes from the environment; there is no config file. The
//! tracing subscriber writes to a log file in the platform data directory,
//! since stdout belongs to the TUI.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::COUNTRIES_BASE_URL;

/// Default tracing filter when `ATLAS_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "atlas=info";

/// Configuration for the application.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use atlas::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_base_url("http://localhost:8080")
///     .with_skip_welcome(true);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL for the country data API
    pub api_base_url: String,
    /// Skip the welcome gate and fetch immediately (set via ATLAS_SKIP_WELCOME=1)
    pub skip_welcome: bool,
    /// Tracing filter directive (set via ATLAS_LOG)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: COUNTRIES_BASE_URL.to_string(),
            skip_welcome: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set whether to skip the welcome gate.
    pub fn with_skip_welcome(mut self, skip: bool) -> Self {
        self.skip_welcome = skip;
        self
    }

    /// Set the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Create config from environment variables.
    ///
    /// `ATLAS_API_URL` overrides the endpoint (useful against a local mock),
    /// `ATLAS_SKIP_WELCOME=1` bypasses the welcome gate, and `ATLAS_LOG`
    /// sets the tracing filter.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("ATLAS_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }
        if std::env::var("ATLAS_SKIP_WELCOME").is_ok() {
            config.skip_welcome = true;
        }
        if let Ok(filter) = std::env::var("ATLAS_LOG") {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

/// Error type for diagnostics setup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// No platform data directory to place the log file in
    #[error("could not determine a data directory for the log file")]
    NoDataDir,

    /// Log file could not be created
    #[error("failed to create log file: {0}")]
    LogFile(#[from] std::io::Error),
}

/// Resolve the log file path (`<data dir>/atlas/atlas.log`), creating the
/// directory if needed.
pub fn log_file_path() -> Result<PathBuf, StartupError> {
    let dir = dirs::data_dir().ok_or(StartupError::NoDataDir)?.join("atlas");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("atlas.log"))
}

/// Install the global tracing subscriber, writing to the log file.
///
/// Failure here is reported to the caller but should not abort the TUI;
/// the application degrades to running without diagnostics.
pub fn init_tracing(config: &AppConfig) -> Result<(), StartupError> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
