//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::Scrollback;

/// Simple Calculator: four-function running-total calculator
#[derive(Parser, Debug)]
#[command(name = "simple-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Feed a key string through the calculator and print the result
    ///
    /// Digits and `.` build the operand, `+ - * / =` apply operators, any
    /// other character is ignored. Example: `simple-calc eval "5+3="`
    Eval(EvalArgs),
}

/// Arguments for the tui command
#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    /// Maximum scrollback lines kept
    #[arg(long, default_value_t = Scrollback::DEFAULT_CAPACITY)]
    pub scrollback: usize,
}

/// Arguments for the eval command
#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Keys to press, in order
    pub keys: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum scrollback lines kept
    #[arg(long, default_value_t = Scrollback::DEFAULT_CAPACITY)]
    pub scrollback: usize,
}

/// Output format for `eval`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON object
    Json,
}
