//! Calculator evaluation state machine
//!
//! The [`Engine`] owns a single [`Session`] and exposes one method per key
//! category. After every change it pushes a [`DisplayUpdate`] to its
//! [`DisplaySink`]; presentation (animation, styling, DOM) lives behind the sink.
//!
//! Errors and confirmations are shown transiently. Their reverts sit on a
//! logical clock that the host moves with [`Engine::advance`], so a browser can
//! drive it from `requestAnimationFrame`, a terminal from `Instant`, and tests
//! from plain durations.

mod transient;

pub use transient::{PendingRevert, RevertQueue};

use crate::config::EngineConfig;
use crate::core::format;
use crate::core::functions::FunctionContext;
use crate::core::{CalcError, FunctionKind, OperatorKind};
use crate::keymap::KeypadAction;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Confirmation shown after storing to memory
pub const MEMORY_STORED_TEXT: &str = "Memory stored";

/// What the display is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    /// A number (possibly mid-entry)
    Value,
    /// A transient error message
    Error,
    /// A transient confirmation message
    Message,
    /// The powered-off sentinel
    Off,
}

impl DisplayKind {
    /// Returns true for text that reverts on its own
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Error | Self::Message)
    }
}

/// Snapshot pushed to the sink after every change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayUpdate {
    /// Raw display text
    pub text: String,
    /// Text fitted to the display width
    pub rendered: String,
    /// Shift indicator
    pub shift_active: bool,
    /// Power indicator
    pub powered: bool,
    /// Classification of `text`
    pub kind: DisplayKind,
}

/// Receives display updates from the engine
pub trait DisplaySink {
    /// Called synchronously after each state change
    fn update(&mut self, update: &DisplayUpdate);
}

impl<F> DisplaySink for F
where
    F: FnMut(&DisplayUpdate),
{
    fn update(&mut self, update: &DisplayUpdate) {
        self(update);
    }
}

/// Sink that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn update(&mut self, _update: &DisplayUpdate) {}
}

/// Sink that keeps every update, for tests and scripted runs
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    updates: Vec<DisplayUpdate>,
}

impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates received so far, oldest first
    #[must_use]
    pub fn updates(&self) -> &[DisplayUpdate] {
        &self.updates
    }

    /// Most recent update
    #[must_use]
    pub fn last(&self) -> Option<&DisplayUpdate> {
        self.updates.last()
    }

    /// Number of updates received
    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Returns true if no update was received
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Forget recorded updates
    pub fn clear(&mut self) {
        self.updates.clear();
    }

    /// Removes and returns every recorded update
    pub fn take(&mut self) -> Vec<DisplayUpdate> {
        std::mem::take(&mut self.updates)
    }
}

impl DisplaySink for RecordingSink {
    fn update(&mut self, update: &DisplayUpdate) {
        self.updates.push(update.clone());
    }
}

/// Mutable calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Current display text; never empty
    pub display_text: String,
    /// What `display_text` holds
    pub display_kind: DisplayKind,
    /// Left operand of the pending operation
    pub pending_operand: Option<f64>,
    /// Operator waiting for its right operand
    pub pending_operator: Option<OperatorKind>,
    /// Next digit starts a new operand
    pub awaiting_new_operand: bool,
    /// Shift (inverse) mode
    pub shift_active: bool,
    /// Memory register
    pub memory: f64,
    /// Most recent successful result
    pub last_answer: f64,
    /// Power state
    pub powered: bool,
    /// Display generation, bumped on every display change
    pub generation: u64,
}

impl Session {
    /// A powered-off session showing `off_text`
    #[must_use]
    pub fn powered_off(off_text: &str) -> Self {
        Self {
            display_text: off_text.to_string(),
            display_kind: DisplayKind::Off,
            pending_operand: None,
            pending_operator: None,
            awaiting_new_operand: false,
            shift_active: false,
            memory: 0.0,
            last_answer: 0.0,
            powered: false,
            generation: 0,
        }
    }

    /// Numeric value of the display
    #[must_use]
    pub fn display_value(&self) -> f64 {
        format::parse(&self.display_text)
    }
}

/// The calculator engine
#[derive(Debug)]
pub struct Engine<S: DisplaySink = NullSink> {
    session: Session,
    config: EngineConfig,
    reverts: RevertQueue,
    sink: S,
}

impl Engine<NullSink> {
    /// Create an engine with default config and no sink
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), NullSink)
    }
}

impl Default for Engine<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DisplaySink> Engine<S> {
    /// Create an engine with default config reporting to `sink`
    pub fn with_sink(sink: S) -> Self {
        Self::with_config(EngineConfig::default(), sink)
    }

    /// Create an engine with explicit config reporting to `sink`
    ///
    /// The engine starts powered off.
    pub fn with_config(config: EngineConfig, sink: S) -> Self {
        Self {
            session: Session::powered_off(&config.off_text),
            config,
            reverts: RevertQueue::new(),
            sink,
        }
    }

    // ===== Accessors =====

    /// Current session state
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Raw display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.session.display_text
    }

    /// Display text fitted to the configured width
    #[must_use]
    pub fn rendered_display(&self) -> String {
        format::fit_to_width(&self.session.display_text, self.config.display_width)
    }

    /// Shift indicator
    #[must_use]
    pub fn shift_active(&self) -> bool {
        self.session.shift_active
    }

    /// Power indicator
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.session.powered
    }

    /// Memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.session.memory
    }

    /// Most recent successful result
    #[must_use]
    pub fn last_answer(&self) -> f64 {
        self.session.last_answer
    }

    /// Number of reverts still scheduled (stale ones included)
    #[must_use]
    pub fn pending_reverts(&self) -> usize {
        self.reverts.len()
    }

    /// Logical time since the engine was created
    #[must_use]
    pub fn now(&self) -> Duration {
        self.reverts.now()
    }

    /// Engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The display sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The display sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the engine, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Snapshot of what the sink last received
    #[must_use]
    pub fn snapshot(&self) -> DisplayUpdate {
        DisplayUpdate {
            text: self.session.display_text.clone(),
            rendered: self.rendered_display(),
            shift_active: self.session.shift_active,
            powered: self.session.powered,
            kind: self.session.display_kind,
        }
    }

    // ===== Key categories =====

    /// Types a digit or parenthesis
    ///
    /// Starts a new operand when one is awaited; a lone `"0"` is replaced.
    pub fn input_digit_or_symbol(&mut self, token: char) {
        if !self.ensure_powered() {
            return;
        }
        self.settle_transient();

        let text = if self.session.awaiting_new_operand {
            self.session.awaiting_new_operand = false;
            token.to_string()
        } else if self.session.display_text == "0" {
            token.to_string()
        } else {
            format!("{}{token}", self.session.display_text)
        };
        self.set_display(text, DisplayKind::Value);

        debug!(token = %token, display = %self.session.display_text, "input");
        self.notify();
    }

    /// Types a decimal point; a second point in one operand is ignored
    pub fn input_decimal_point(&mut self) {
        if !self.ensure_powered() {
            return;
        }
        self.settle_transient();

        if self.session.awaiting_new_operand {
            self.session.awaiting_new_operand = false;
            self.set_display("0.".to_string(), DisplayKind::Value);
        } else if !self.session.display_text.contains('.') {
            let text = format!("{}.", self.session.display_text);
            self.set_display(text, DisplayKind::Value);
        }

        debug!(display = %self.session.display_text, "decimal point");
        self.notify();
    }

    /// Presses a binary operator, evaluating any pending one first
    pub fn apply_binary_operator(&mut self, op: OperatorKind) {
        if !self.ensure_powered() {
            return;
        }
        self.settle_transient();

        let value = self.session.display_value();
        match (self.session.pending_operand, self.session.pending_operator) {
            (None, _) => self.session.pending_operand = Some(value),
            (Some(left), Some(pending)) => match pending.apply(left, value) {
                Ok(result) => {
                    self.set_display(format::format(result), DisplayKind::Value);
                    self.session.pending_operand = Some(result);
                    self.session.last_answer = result;
                }
                Err(err) => {
                    self.session.pending_operand = Some(0.0);
                    self.flash_error(&err);
                }
            },
            (Some(_), None) => {}
        }
        self.session.awaiting_new_operand = true;
        self.session.pending_operator = Some(op);

        debug!(op = %op, display = %self.session.display_text, "operator");
        self.notify();
    }

    /// Presses equals; a no-op unless an operation is pending
    pub fn evaluate(&mut self) {
        if !self.ensure_powered() {
            return;
        }
        let (Some(left), Some(op)) = (self.session.pending_operand, self.session.pending_operator)
        else {
            trace!("equals with nothing pending");
            return;
        };
        self.settle_transient();

        let value = self.session.display_value();
        match op.apply(left, value) {
            Ok(result) => {
                self.set_display(format::format(result), DisplayKind::Value);
                self.session.last_answer = result;
            }
            Err(err) => self.flash_error(&err),
        }
        self.session.pending_operand = None;
        self.session.pending_operator = None;
        self.session.awaiting_new_operand = true;

        debug!(display = %self.session.display_text, "evaluate");
        self.notify();
    }

    /// Presses a function key, honouring shift mode
    pub fn apply_unary_function(&mut self, func: FunctionKind) {
        if !self.ensure_powered() {
            return;
        }
        self.settle_transient();

        let value = self.session.display_value();
        if func == FunctionKind::Store {
            self.session.memory = value;
            let restore = self.session.display_text.clone();
            self.show_transient(
                MEMORY_STORED_TEXT.to_string(),
                restore,
                DisplayKind::Message,
                self.config.message_revert(),
            );
            debug!(memory = value, "store");
            self.notify();
            return;
        }

        let ctx = FunctionContext {
            shifted: self.session.shift_active,
            last_answer: self.session.last_answer,
            memory: self.session.memory,
        };
        match func.apply(value, ctx) {
            Ok(result) => {
                self.set_display(format::format(result), DisplayKind::Value);
                self.session.awaiting_new_operand = true;
                self.session.last_answer = result;
            }
            Err(err) => self.flash_error(&err),
        }

        debug!(
            func = %func,
            shifted = self.session.shift_active,
            display = %self.session.display_text,
            "function"
        );
        self.notify();
    }

    /// Flips shift mode
    pub fn toggle_shift(&mut self) {
        if !self.ensure_powered() {
            return;
        }
        self.session.shift_active = !self.session.shift_active;
        debug!(shift = self.session.shift_active, "shift");
        self.notify();
    }

    /// Resets the display only
    pub fn clear_entry(&mut self) {
        if !self.ensure_powered() {
            return;
        }
        self.set_display("0".to_string(), DisplayKind::Value);
        debug!("clear entry");
        self.notify();
    }

    /// Resets display, pending operation and shift; memory survives
    pub fn all_clear(&mut self) {
        if !self.ensure_powered() {
            return;
        }
        self.reset_entry_state();
        debug!("all clear");
        self.notify();
    }

    /// Powers on, resetting everything but memory and last answer
    pub fn power_on(&mut self) {
        self.session.powered = true;
        self.reset_entry_state();
        info!("power on");
        self.notify();
    }

    /// Powers off; scheduled reverts become stale
    pub fn power_off(&mut self) {
        self.session.powered = false;
        let off_text = self.config.off_text.clone();
        self.set_display(off_text, DisplayKind::Off);
        info!("power off");
        self.notify();
    }

    /// Dispatches one keypad action
    pub fn press(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(_) | KeypadAction::Symbol(_) => {
                if let Some(c) = action.to_char() {
                    self.input_digit_or_symbol(c);
                }
            }
            KeypadAction::Decimal => self.input_decimal_point(),
            KeypadAction::Operator(op) => self.apply_binary_operator(op),
            KeypadAction::Equals => self.evaluate(),
            KeypadAction::Function(func) => self.apply_unary_function(func),
            KeypadAction::Shift => self.toggle_shift(),
            KeypadAction::ClearEntry => self.clear_entry(),
            KeypadAction::AllClear => self.all_clear(),
            KeypadAction::PowerOn => self.power_on(),
            KeypadAction::PowerOff => self.power_off(),
        }
    }

    /// Handles a keyboard key; returns whether it was recognised
    ///
    /// The keyboard does nothing while powered off. Only a keypad press turns
    /// the calculator on.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.session.powered {
            trace!(key, "key ignored while off");
            return false;
        }
        match KeypadAction::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => {
                trace!(key, "unmapped key");
                false
            }
        }
    }

    // ===== Time =====

    /// Moves the logical clock forward, applying due reverts in order
    pub fn advance(&mut self, elapsed: Duration) {
        for revert in self.reverts.advance(elapsed) {
            let current = revert.generation == self.session.generation
                && revert.transient_text == self.session.display_text;
            if !current {
                trace!(
                    scheduled = revert.generation,
                    generation = self.session.generation,
                    "stale revert skipped"
                );
                continue;
            }
            debug!(from = %revert.transient_text, to = %revert.restore_text, "revert");
            self.set_display(revert.restore_text, DisplayKind::Value);
            self.notify();
        }
    }

    /// Advances the clock past every scheduled revert
    pub fn settle(&mut self) {
        let remaining = self.reverts.time_until_idle();
        self.advance(remaining);
    }

    // ===== Internals =====

    /// Turns an unpowered press into a power-on; true if the press may proceed
    fn ensure_powered(&mut self) -> bool {
        if self.session.powered {
            return true;
        }
        self.power_on();
        false
    }

    fn set_display(&mut self, text: String, kind: DisplayKind) {
        self.session.display_text = text;
        self.session.display_kind = kind;
        self.session.generation += 1;
    }

    /// Replaces a transient error or message with the text it would revert to
    fn settle_transient(&mut self) {
        if !self.session.display_kind.is_transient() {
            return;
        }
        let restore = self
            .reverts
            .take_active(self.session.generation, &self.session.display_text)
            .map_or_else(|| "0".to_string(), |revert| revert.restore_text);
        self.set_display(restore, DisplayKind::Value);
    }

    fn reset_entry_state(&mut self) {
        self.set_display("0".to_string(), DisplayKind::Value);
        self.session.pending_operand = None;
        self.session.pending_operator = None;
        self.session.awaiting_new_operand = false;
        self.session.shift_active = false;
    }

    fn flash_error(&mut self, err: &CalcError) {
        warn!(error = %err, "evaluation failed");
        self.show_transient(
            err.display_text(),
            "0".to_string(),
            DisplayKind::Error,
            self.config.error_revert(),
        );
    }

    fn show_transient(&mut self, text: String, restore: String, kind: DisplayKind, delay: Duration) {
        self.set_display(text.clone(), kind);
        self.reverts
            .schedule(self.session.generation, text, restore, delay);
    }

    fn notify(&mut self) {
        let update = self.snapshot();
        self.sink.update(&update);
    }
}
