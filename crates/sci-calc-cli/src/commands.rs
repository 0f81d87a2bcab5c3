//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// scicalc: keypad-driven scientific calculator
#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Engine configuration file (YAML)
    #[arg(long, global = true, env = "SCICALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session: one line of key tokens at a time
    Repl(ReplArgs),

    /// Press a sequence of keys and print the final display
    Keys(KeysArgs),

    /// Print the keypad layout
    Keypad(KeypadArgs),

    /// Show the effective engine configuration
    Config(ConfigArgs),
}

/// Arguments for the repl command
#[derive(Parser, Debug, Default)]
pub struct ReplArgs {
    /// Start powered off instead of switching on
    #[arg(long)]
    pub off: bool,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Key tokens (`12.5`, `+`, `sin`, `shift`, `Enter`, ...)
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Wait out transient messages before printing
    #[arg(long)]
    pub settle: bool,

    /// Print every display update, not just the last
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the keypad command
#[derive(Parser, Debug, Default)]
pub struct KeypadArgs {
    /// Show shifted labels
    #[arg(long)]
    pub shift: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug, Default)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable display
    #[default]
    Text,
    /// JSON display updates
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
