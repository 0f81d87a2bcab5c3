//! Binary arithmetic for pending operators
//!
//! Error prevention: the operator is a closed enum, so an unknown operator
//! cannot reach evaluation.

use crate::core::{check_finite, CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Type-safe binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Remainder (%)
    Mod,
}

impl OperatorKind {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// Applies the operator to `a` and `b`
    ///
    /// Division and remainder by zero fail with [`CalcError::DivisionByZero`];
    /// an overflowing result fails with [`CalcError::MathError`].
    /// Remainder follows IEEE semantics (sign of the dividend).
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div | Self::Mod if b == 0.0 => return Err(CalcError::DivisionByZero),
            Self::Div => a / b,
            Self::Mod => a % b,
        };
        check_finite(result)
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
