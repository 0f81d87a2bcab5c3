//! Keypad actions and input translation
//!
//! Visual feedback stays in the presentation layer; this module only turns
//! keyboard keys, HTML button names and script tokens into [`KeypadAction`]s.

use crate::core::{CalcError, CalcResult, FunctionKind, OperatorKind};

/// Every key category the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a literal symbol such as a parenthesis
    Symbol(char),
    /// Insert a decimal point
    Decimal,
    /// Apply a binary operator
    Operator(OperatorKind),
    /// Evaluate the pending operation
    Equals,
    /// Apply a unary function key
    Function(FunctionKind),
    /// Toggle shift (inverse) mode
    Shift,
    /// Reset the display only
    ClearEntry,
    /// Reset display and pending operation
    AllClear,
    /// Power on
    PowerOn,
    /// Power off
    PowerOff,
}

impl KeypadAction {
    /// Returns the character this action inserts into the display, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Symbol(c) => Some(*c),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Returns the key label, taking shift mode into account
    #[must_use]
    pub fn label(&self, shifted: bool) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Symbol(c) => c.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Function(f) => f.label(shifted).to_string(),
            Self::Shift => "SHIFT".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::PowerOn => "ON".to_string(),
            Self::PowerOff => "OFF".to_string(),
        }
    }

    /// Script token that presses this key (see [`parse_token`])
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Function(f) => f.name().to_string(),
            Self::Shift => "shift".to_string(),
            Self::ClearEntry => "ce".to_string(),
            Self::AllClear => "ac".to_string(),
            Self::PowerOn => "on".to_string(),
            Self::PowerOff => "off".to_string(),
            other => other.label(false),
        }
    }

    /// Maps a keyboard key identifier to an action
    ///
    /// Only the keys a physical keyboard reaches; function keys have no
    /// keyboard binding.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => key
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .map(|d| Self::Digit(d as u8)),
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(OperatorKind::Add)),
            "-" => Some(Self::Operator(OperatorKind::Sub)),
            "*" => Some(Self::Operator(OperatorKind::Mul)),
            "/" => Some(Self::Operator(OperatorKind::Div)),
            "%" => Some(Self::Operator(OperatorKind::Mod)),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::AllClear),
            "Backspace" => Some(Self::ClearEntry),
            "(" => Some(Self::Symbol('(')),
            ")" => Some(Self::Symbol(')')),
            _ => None,
        }
    }

    /// Maps a keypad button name to an action
    ///
    /// Accepts every keyboard key plus the names the HTML keypad passes to its
    /// handlers (`sin`, `x-1`, `(-)`, `sto`, ...) and the control buttons.
    #[must_use]
    pub fn from_button(name: &str) -> Option<Self> {
        if let Some(action) = Self::from_key(name) {
            return Some(action);
        }
        match name {
            "shift" => Some(Self::Shift),
            "ce" => Some(Self::ClearEntry),
            "ac" => Some(Self::AllClear),
            "on" => Some(Self::PowerOn),
            "off" => Some(Self::PowerOff),
            other => FunctionKind::from_button_name(other).map(Self::Function),
        }
    }
}

/// Translates one script token into keypresses
///
/// A token is a key or button name, or a run of digits and points such as
/// `12.5` that expands to one keypress per character.
pub fn parse_token(token: &str) -> CalcResult<Vec<KeypadAction>> {
    if let Some(action) = KeypadAction::from_button(token) {
        return Ok(vec![action]);
    }

    let is_number_run = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.');
    if is_number_run {
        return token
            .chars()
            .map(|c| {
                KeypadAction::from_key(c.encode_utf8(&mut [0; 4]))
                    .ok_or_else(|| CalcError::unknown_key(token))
            })
            .collect();
    }

    Err(CalcError::unknown_key(token))
}

/// Translates a whitespace-separated line of tokens into keypresses
pub fn parse_script(line: &str) -> CalcResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in line.split_whitespace() {
        actions.extend(parse_token(token)?);
    }
    Ok(actions)
}
