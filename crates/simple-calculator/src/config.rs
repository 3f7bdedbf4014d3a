//! Runtime configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::commands::{Cli, Commands};
use crate::core::Scrollback;

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational events
    Verbose,
    /// Debug - every engine event
    Debug,
}

impl Verbosity {
    /// Derives the verbosity from the `-q` flag and the `-v` count.
    ///
    /// `-q` wins over any number of `-v`.
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Tracing level used when `RUST_LOG` is not set
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Maximum scrollback lines kept
    pub scrollback_capacity: usize,
    /// Log file, if logs should be written to disk
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            scrollback_capacity: Scrollback::DEFAULT_CAPACITY,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from parsed command-line arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let scrollback_capacity = match &cli.command {
            Some(Commands::Tui(args)) => args.scrollback,
            Some(Commands::Eval(args)) => args.scrollback,
            None => Scrollback::DEFAULT_CAPACITY,
        };

        let mut config = Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_scrollback_capacity(scrollback_capacity);
        if let Some(path) = &cli.log_file {
            config = config.with_log_file(path.clone());
        }
        config
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set scrollback capacity (at least one line)
    #[must_use]
    pub fn with_scrollback_capacity(mut self, capacity: usize) -> Self {
        self.scrollback_capacity = capacity.max(1);
        self
    }

    /// Set log file path
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
