//! scicalc CLI library
//!
//! Command-line front end for the `sci-calc` engine: one-shot key scripts,
//! an interactive line session, and keypad/config inspection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;
pub mod repl;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, FormatArg, KeypadArgs, KeysArgs, ReplArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{DisplayPrinter, OutputFormat};
pub use repl::{Repl, ReplOutcome};
