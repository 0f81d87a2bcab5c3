//! Scientific keypad layout
//!
//! Layout:
//! ```text
//! [SHIFT] [ ON ] [ OFF] [ CE ] [ AC ]
//! [ sin ] [ cos] [ tan] [ log] [ ln ]
//! [  √  ] [ x⁻¹] [ x³ ] [ x² ] [ ×10]
//! [ (-) ] [ Ans] [ STO] [ RCL]
//! [  7  ] [  8 ] [  9 ] [  ( ] [  ) ]
//! [  4  ] [  5 ] [  6 ] [  * ] [  / ]
//! [  1  ] [  2 ] [  3 ] [  + ] [  - ]
//! [  0  ] [  . ] [  % ] [  = ]
//! ```
//!
//! Rows may be ragged; every button knows its own grid position.

use crate::core::{FunctionKind, OperatorKind};
use crate::keymap::KeypadAction;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Element ID (`btn-7`, `btn-sin`, `btn-plus`, ...)
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at the given grid position
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            id: element_id(action),
            row,
            col,
        }
    }
}

/// Element ID for an action
#[must_use]
pub fn element_id(action: KeypadAction) -> String {
    let suffix = match action {
        KeypadAction::Digit(d) => return format!("btn-{d}"),
        KeypadAction::Function(f) => return format!("btn-{}", f.name()),
        KeypadAction::Decimal => "decimal",
        KeypadAction::Symbol('(') => "open-paren",
        KeypadAction::Symbol(')') => "close-paren",
        KeypadAction::Symbol(_) => "symbol",
        KeypadAction::Operator(op) => op_name(op),
        KeypadAction::Equals => "equals",
        KeypadAction::Shift => "shift",
        KeypadAction::ClearEntry => "ce",
        KeypadAction::AllClear => "ac",
        KeypadAction::PowerOn => "on",
        KeypadAction::PowerOff => "off",
    };
    format!("btn-{suffix}")
}

const fn op_name(op: OperatorKind) -> &'static str {
    match op {
        OperatorKind::Add => "plus",
        OperatorKind::Sub => "minus",
        OperatorKind::Mul => "times",
        OperatorKind::Div => "divide",
        OperatorKind::Mod => "mod",
    }
}

/// The full scientific keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard scientific layout
    #[must_use]
    pub fn new() -> Self {
        use FunctionKind as F;
        use KeypadAction as A;
        use OperatorKind as Op;

        let rows: [&[KeypadAction]; 8] = [
            &[A::Shift, A::PowerOn, A::PowerOff, A::ClearEntry, A::AllClear],
            &[
                A::Function(F::Sin),
                A::Function(F::Cos),
                A::Function(F::Tan),
                A::Function(F::Log),
                A::Function(F::Ln),
            ],
            &[
                A::Function(F::Sqrt),
                A::Function(F::Inverse),
                A::Function(F::Cube),
                A::Function(F::Square),
                A::Function(F::Times10),
            ],
            &[
                A::Function(F::Negate),
                A::Function(F::Ans),
                A::Function(F::Store),
                A::Function(F::Recall),
            ],
            &[A::Digit(7), A::Digit(8), A::Digit(9), A::Symbol('('), A::Symbol(')')],
            &[A::Digit(4), A::Digit(5), A::Digit(6), A::Operator(Op::Mul), A::Operator(Op::Div)],
            &[A::Digit(1), A::Digit(2), A::Digit(3), A::Operator(Op::Add), A::Operator(Op::Sub)],
            &[A::Digit(0), A::Decimal, A::Operator(Op::Mod), A::Equals],
        ];

        let buttons = rows
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.buttons.last().map_or(0, |b| b.row + 1)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Processes a click on an element and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }

    /// Renders the keypad as text, with labels for the given shift state
    #[must_use]
    pub fn render(&self, shifted: bool) -> String {
        let mut lines: Vec<String> = Vec::new();
        for button in &self.buttons {
            if lines.len() <= button.row {
                lines.push(String::new());
            }
            let line = &mut lines[button.row];
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&format!("[{:^5}]", button.action.label(shifted)));
        }
        lines.join("\n")
    }
}
