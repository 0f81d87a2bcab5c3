//! Core arithmetic with exhaustive error types
//!
//! - Error prevention: closed operator/function enums make invalid keys unrepresentable
//! - Every evaluation returns a [`CalcResult`]; the engine decides what the display shows

pub mod format;
pub mod functions;
mod operations;

pub use functions::FunctionKind;
pub use operations::OperatorKind;

use thiserror::Error;

/// Result type for calculator evaluations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division or modulo with a zero right operand
    #[error("Division by zero")]
    DivisionByZero,
    /// A result was non-finite or a function received an invalid domain value
    #[error("Math Error")]
    MathError,
    /// A script token did not name any key
    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey(token.into())
    }

    /// Text shown on the display while this error is flashed
    #[must_use]
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

/// Rejects NaN and infinities
///
/// Every evaluation result passes through here before reaching the display.
pub fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::MathError)
    }
}
