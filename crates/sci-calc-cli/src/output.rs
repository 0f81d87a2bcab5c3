//! Output formatting for display updates

use crate::error::CliResult;
use console::{Style, Term};
use sci_calc::{DisplayKind, DisplayUpdate};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for display updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable display line
    #[default]
    Text,
    /// One JSON object per update
    Json,
}

/// Renders display updates as lines of text or JSON
#[derive(Debug, Clone)]
pub struct DisplayPrinter {
    format: OutputFormat,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for DisplayPrinter {
    fn default() -> Self {
        Self::new(OutputFormat::Text, false, false)
    }
}

impl DisplayPrinter {
    /// Create a new printer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
        }
    }

    /// Output format in use
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    fn style_for(&self, kind: DisplayKind) -> Style {
        if !self.use_color {
            return Style::new();
        }
        let style = match kind {
            DisplayKind::Value => Style::new().bold(),
            DisplayKind::Error => Style::new().red().bold(),
            DisplayKind::Message => Style::new().yellow(),
            DisplayKind::Off => Style::new().dim(),
        };
        style.force_styling(true)
    }

    /// Formats one update as a single line
    pub fn format_update(&self, update: &DisplayUpdate) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(update)?),
            OutputFormat::Text => {
                let indicator = if update.shift_active { "S" } else { " " };
                let indicator = if self.use_color && update.shift_active {
                    Style::new().cyan().bold().force_styling(true).apply_to(indicator).to_string()
                } else {
                    indicator.to_string()
                };
                let text = self.style_for(update.kind).apply_to(&update.rendered);
                Ok(format!("[{indicator}] {text}"))
            }
        }
    }

    /// Writes one update to `out`
    pub fn write_update<W: Write>(&self, out: &mut W, update: &DisplayUpdate) -> CliResult<()> {
        writeln!(out, "{}", self.format_update(update)?)?;
        Ok(())
    }

    /// Writes every update in order
    pub fn write_updates<W: Write>(&self, out: &mut W, updates: &[DisplayUpdate]) -> CliResult<()> {
        for update in updates {
            self.write_update(out, update)?;
        }
        Ok(())
    }

    /// Print an informational line to stderr unless quiet
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = if self.use_color {
            Style::new().blue().force_styling(true).apply_to(message).to_string()
        } else {
            message.to_string()
        };
        let _ = Term::stderr().write_line(&line);
    }
}
