//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise the level comes from the
//! configured [`Verbosity`](crate::config::Verbosity). The terminal UI owns
//! the screen, so it only logs when a file is given.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Where log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, compact and coloured
    Stderr,
    /// A plain-text file, truncated on start
    File(&'a Path),
    /// Logging disabled
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Picks the target for a run mode.
    ///
    /// A configured log file always wins. Without one, `interactive` runs
    /// log nowhere and batch runs log to stderr.
    #[must_use]
    pub fn for_mode(config: &'a AppConfig, interactive: bool) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

/// Builds the filter: `RUST_LOG` if set, otherwise `level`
#[must_use]
pub fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Installs the global tracing subscriber.
///
/// # Errors
/// Returns [`CliError::Io`] if the log file cannot be created and
/// [`CliError::Logging`] if a global subscriber is already installed.
pub fn init(config: &AppConfig, target: LogTarget<'_>) -> CliResult<()> {
    let filter = env_filter(config.verbosity.level_filter());

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    #[test]
    fn test_target_for_batch_mode() {
        let config = AppConfig::new();
        assert_eq!(LogTarget::for_mode(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_target_for_interactive_mode() {
        let config = AppConfig::new();
        assert_eq!(LogTarget::for_mode(&config, true), LogTarget::Disabled);
    }

    #[test]
    fn test_log_file_wins() {
        let config = AppConfig::new().with_log_file("calc.log");
        let expected = LogTarget::File(Path::new("calc.log"));
        assert_eq!(LogTarget::for_mode(&config, true), expected);
        assert_eq!(LogTarget::for_mode(&config, false), expected);
    }

    #[test]
    fn test_disabled_is_noop() {
        let config = AppConfig::new().with_verbosity(Verbosity::Debug);
        assert!(init(&config, LogTarget::Disabled).is_ok());
    }

    #[test]
    fn test_missing_log_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calc.log");
        let config = AppConfig::new();
        let err = init(&config, LogTarget::File(&path)).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
