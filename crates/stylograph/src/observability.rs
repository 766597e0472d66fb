//! Logging and tracing setup.
//!
//! Human-readable diagnostics go to stderr, filtered by `-q`/`-v` or
//! `RUST_LOG`. When a log destination is configured, structured JSONL
//! records are additionally written there via a non-blocking appender.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log files should go, resolved from env and config.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`STYLOGRAPH_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`STYLOGRAPH_LOG_DIR` or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// Environment variables take precedence over the config file value.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("STYLOGRAPH_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("STYLOGRAPH_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the stderr filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` always wins; otherwise `-q` forces `error`, each `-v` steps the
/// level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the tracing subscriber.
///
/// Returns the appender's worker guard when file logging is active; the
/// caller must hold it for the lifetime of the program so buffered records
/// are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_appender = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => {
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;
            Some(tracing_appender::rolling::never(dir, name))
        }
        (None, Some(dir)) => {
            std::fs::create_dir_all(dir)?;
            Some(tracing_appender::rolling::daily(dir, "stylograph.jsonl"))
        }
        (None, None) => None,
    };

    match file_appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_forces_error_level() {
        let filter = env_filter(true, 0, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_steps_up() {
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 3, "info").to_string(), "trace");
    }

    #[test]
    fn default_uses_config_level() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
    }
}
