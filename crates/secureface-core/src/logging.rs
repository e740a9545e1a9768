//! Logging setup.
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so interactive
//! sessions log to a file under `$SECUREFACE_HOME/logs` instead.
//!
//! `SECUREFACE_LOG` overrides the level filter (any `EnvFilter` directive),
//! `SECUREFACE_LOG_FORMAT` picks the format (text, json, pretty).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name inside the logs directory.
pub const LOG_FILE_NAME: &str = "secureface.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Multi-line, for development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{s}'. Valid options: text, json, pretty"
            )),
        }
    }
}

/// Configuration for logging initialization.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: impl Into<String>) -> Self {
        Self {
            format,
            level: level.into(),
        }
    }

    /// Builds a config from `level`, reading the format from the environment.
    pub fn from_env(level: &str) -> Self {
        let format = std::env::var("SECUREFACE_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        Self::new(format, level)
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env("SECUREFACE_LOG").unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Installs a subscriber writing to stderr.
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already set.
    pub fn init_stderr(&self) -> Result<()> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr);

        let result = match self.format {
            LogFormat::Json => builder.json().with_target(true).try_init(),
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Text => builder.with_target(false).try_init(),
        };
        result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
    }

    /// Installs a subscriber appending to `dir/secureface.log`.
    ///
    /// The returned guard flushes buffered lines on drop; keep it alive for
    /// the whole session.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or a global
    /// subscriber is already set.
    pub fn init_file(&self, dir: &Path) -> Result<WorkerGuard> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(writer)
            .with_ansi(false);

        let result = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty | LogFormat::Text => builder.try_init(),
        };
        result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

        Ok(guard)
    }
}
