//! Line-oriented interactive session
//!
//! Each line is a whitespace-separated key script (`12 + 3 =`, `shift sin`).
//! Lines starting with `:` are session commands. Wall-clock time elapsed
//! between lines is fed to the engine so transient messages revert the way
//! they would on a live display.

use crate::error::CliResult;
use crate::output::DisplayPrinter;
use sci_calc::keymap::parse_script;
use sci_calc::{Engine, EngineConfig, RecordingSink};
use sci_calc::keypad::Keypad;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::debug;

const HELP: &str = "\
keys:     0-9 . + - * / % = ( ) Enter Escape Backspace
buttons:  sin cos tan log ln sqrt inv cube sq x10 neg ans sto rcl
control:  shift ce ac on off
commands: :keypad  :state  :wait <ms>  :help  :quit";

/// What the caller should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Keep reading
    Continue,
    /// End the session
    Quit,
}

/// Interactive calculator session
#[derive(Debug)]
pub struct Repl {
    engine: Engine<RecordingSink>,
    keypad: Keypad,
    printer: DisplayPrinter,
}

impl Repl {
    /// Create a session; the calculator starts powered off
    #[must_use]
    pub fn new(config: EngineConfig, printer: DisplayPrinter) -> Self {
        Self {
            engine: Engine::with_config(config, RecordingSink::new()),
            keypad: Keypad::new(),
            printer,
        }
    }

    /// Switch the calculator on
    pub fn power_on(&mut self) {
        self.engine.power_on();
        self.engine.sink_mut().clear();
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine<RecordingSink> {
        &self.engine
    }

    /// Handles one input line after `elapsed` time has passed
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        elapsed: Duration,
        out: &mut W,
    ) -> CliResult<ReplOutcome> {
        self.engine.advance(elapsed);
        self.engine.sink_mut().clear();

        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command, out);
        }

        match parse_script(line) {
            Ok(actions) => {
                debug!(count = actions.len(), "pressing keys");
                for action in actions {
                    self.engine.press(action);
                }
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(ReplOutcome::Continue);
            }
        }

        self.printer.write_update(out, &self.engine.snapshot())?;
        Ok(ReplOutcome::Continue)
    }

    fn handle_command<W: Write>(&mut self, command: &str, out: &mut W) -> CliResult<ReplOutcome> {
        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or_default() {
            "q" | "quit" | "exit" => return Ok(ReplOutcome::Quit),
            "help" | "h" => writeln!(out, "{HELP}")?,
            "keypad" => writeln!(out, "{}", self.keypad.render(self.engine.shift_active()))?,
            "state" => writeln!(
                out,
                "memory={} ans={} pending_reverts={}",
                self.engine.memory(),
                self.engine.last_answer(),
                self.engine.pending_reverts()
            )?,
            "wait" => match parts.next().map(str::parse::<u64>) {
                Some(Ok(ms)) => {
                    self.engine.advance(Duration::from_millis(ms));
                    self.printer.write_update(out, &self.engine.snapshot())?;
                }
                _ => writeln!(out, "usage: :wait <ms>")?,
            },
            other => writeln!(out, "unknown command :{other} (try :help)")?,
        }
        Ok(ReplOutcome::Continue)
    }
}

/// Runs the session until `:quit` or end of input
pub fn run<R: BufRead, W: Write>(repl: &mut Repl, input: R, out: &mut W) -> CliResult<()> {
    let mut last = Instant::now();
    repl.printer.write_update(out, &repl.engine.snapshot())?;

    for line in input.lines() {
        let line = line?;
        let elapsed = last.elapsed();
        last = Instant::now();
        if repl.handle_line(&line, elapsed, out)? == ReplOutcome::Quit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
