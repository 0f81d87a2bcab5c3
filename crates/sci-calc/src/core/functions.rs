//! Unary function keys and their shifted (inverse) meanings
//!
//! Angles are in degrees on both sides of the table: normal trig keys convert
//! the input to radians, shifted keys convert the result back to degrees.

use crate::core::{check_finite, CalcResult};
use serde::{Deserialize, Serialize};

/// Largest argument whose factorial is finite in `f64`
pub const MAX_FACTORIAL_ARG: f64 = 170.0;

/// Function keys on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// sin / asin
    Sin,
    /// cos / acos
    Cos,
    /// tan / atan
    Tan,
    /// log10 / 10^x
    Log,
    /// ln / e^x
    Ln,
    /// sqrt / x*x
    Sqrt,
    /// 1/x / x!
    Inverse,
    /// x^3 / cube root
    Cube,
    /// x^2 (no shifted meaning)
    Square,
    /// x*10 (no shifted meaning)
    Times10,
    /// -x (no shifted meaning)
    Negate,
    /// Recalls the last answer
    Ans,
    /// Writes the display value into memory
    Store,
    /// Recalls memory
    Recall,
}

/// Values a function may read besides its argument
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FunctionContext {
    /// Whether shift mode is active
    pub shifted: bool,
    /// Result of the last completed operation
    pub last_answer: f64,
    /// Memory cell
    pub memory: f64,
}

impl FunctionKind {
    /// All function keys in keypad order
    pub const ALL: [Self; 14] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Inverse,
        Self::Cube,
        Self::Square,
        Self::Times10,
        Self::Negate,
        Self::Ans,
        Self::Store,
        Self::Recall,
    ];

    /// Canonical key name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Inverse => "inv",
            Self::Cube => "cube",
            Self::Square => "sq",
            Self::Times10 => "x10",
            Self::Negate => "neg",
            Self::Ans => "ans",
            Self::Store => "sto",
            Self::Recall => "rcl",
        }
    }

    /// Parses a canonical key name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Parses the button names used by the HTML keypad (`x-1`, `x3`, `xy`, `(-)`, ...)
    #[must_use]
    pub fn from_button_name(name: &str) -> Option<Self> {
        match name {
            "x-1" => Some(Self::Inverse),
            "x3" => Some(Self::Cube),
            "xy" => Some(Self::Square),
            "(-)" => Some(Self::Negate),
            other => Self::from_name(other),
        }
    }

    /// Label printed on the key, normal or shifted
    #[must_use]
    pub const fn label(&self, shifted: bool) -> &'static str {
        match (self, shifted) {
            (Self::Sin, false) => "sin",
            (Self::Sin, true) => "sin⁻¹",
            (Self::Cos, false) => "cos",
            (Self::Cos, true) => "cos⁻¹",
            (Self::Tan, false) => "tan",
            (Self::Tan, true) => "tan⁻¹",
            (Self::Log, false) => "log",
            (Self::Log, true) => "10ˣ",
            (Self::Ln, false) => "ln",
            (Self::Ln, true) => "eˣ",
            (Self::Sqrt, false) => "√",
            (Self::Sqrt, true) => "x²",
            (Self::Inverse, false) => "x⁻¹",
            (Self::Inverse, true) => "x!",
            (Self::Cube, false) => "x³",
            (Self::Cube, true) => "∛",
            (Self::Square, _) => "x²",
            (Self::Times10, _) => "×10",
            (Self::Negate, _) => "(-)",
            (Self::Ans, _) => "Ans",
            (Self::Store, _) => "STO",
            (Self::Recall, _) => "RCL",
        }
    }

    /// Evaluates the function for `x`
    ///
    /// `Store` evaluates to `x` here; writing memory is the engine's job.
    /// Non-finite results become [`crate::core::CalcError::MathError`].
    pub fn apply(self, x: f64, ctx: FunctionContext) -> CalcResult<f64> {
        let raw = match (self, ctx.shifted) {
            (Self::Sin, false) => to_radians(x).sin(),
            (Self::Sin, true) => to_degrees(x.asin()),
            (Self::Cos, false) => to_radians(x).cos(),
            (Self::Cos, true) => to_degrees(x.acos()),
            (Self::Tan, false) => to_radians(x).tan(),
            (Self::Tan, true) => to_degrees(x.atan()),
            (Self::Log, false) => x.log10(),
            (Self::Log, true) => 10f64.powf(x),
            (Self::Ln, false) => x.ln(),
            (Self::Ln, true) => x.exp(),
            (Self::Sqrt, false) => x.sqrt(),
            (Self::Sqrt, true) => x * x,
            (Self::Inverse, false) => 1.0 / x,
            (Self::Inverse, true) => factorial(x),
            (Self::Cube, false) => x.powi(3),
            (Self::Cube, true) => x.powf(1.0 / 3.0),
            (Self::Square, _) => x * x,
            (Self::Times10, _) => x * 10.0,
            (Self::Negate, _) => -x,
            (Self::Ans, _) => ctx.last_answer,
            (Self::Store, _) => x,
            (Self::Recall, _) => ctx.memory,
        };
        check_finite(raw)
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Factorial over non-negative integers
///
/// Returns NaN for negative or fractional input and +inf above 170.
#[must_use]
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 || n.is_nan() {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL_ARG {
        return f64::INFINITY;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Degrees to radians
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Radians to degrees
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use proptest::prelude::*;

    fn normal() -> FunctionContext {
        FunctionContext::default()
    }

    fn shifted() -> FunctionContext {
        FunctionContext {
            shifted: true,
            ..FunctionContext::default()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ===== Name tests =====

    #[test]
    fn test_name_round_trip() {
        for f in FunctionKind::ALL {
            assert_eq!(FunctionKind::from_name(f.name()), Some(f));
        }
    }

    #[test]
    fn test_button_names() {
        assert_eq!(FunctionKind::from_button_name("x-1"), Some(FunctionKind::Inverse));
        assert_eq!(FunctionKind::from_button_name("x3"), Some(FunctionKind::Cube));
        assert_eq!(FunctionKind::from_button_name("xy"), Some(FunctionKind::Square));
        assert_eq!(FunctionKind::from_button_name("(-)"), Some(FunctionKind::Negate));
        assert_eq!(FunctionKind::from_button_name("sto"), Some(FunctionKind::Store));
        assert_eq!(FunctionKind::from_button_name("rcl"), Some(FunctionKind::Recall));
        assert_eq!(FunctionKind::from_button_name("x10"), Some(FunctionKind::Times10));
        assert_eq!(FunctionKind::from_button_name("nope"), None);
    }

    #[test]
    fn test_labels_change_with_shift() {
        assert_ne!(FunctionKind::Sin.label(false), FunctionKind::Sin.label(true));
        assert_eq!(FunctionKind::Negate.label(false), FunctionKind::Negate.label(true));
    }

    // ===== Trig tests =====

    #[test]
    fn test_sin_degrees() {
        let result = FunctionKind::Sin.apply(30.0, normal()).unwrap();
        assert!(approx(result, 0.5));
    }

    #[test]
    fn test_asin_returns_degrees() {
        let result = FunctionKind::Sin.apply(0.5, shifted()).unwrap();
        assert!(approx(result, 30.0));
    }

    #[test]
    fn test_cos_and_acos() {
        assert!(approx(FunctionKind::Cos.apply(60.0, normal()).unwrap(), 0.5));
        assert!(approx(FunctionKind::Cos.apply(0.5, shifted()).unwrap(), 60.0));
    }

    #[test]
    fn test_tan_and_atan() {
        assert!(approx(FunctionKind::Tan.apply(45.0, normal()).unwrap(), 1.0));
        assert!(approx(FunctionKind::Tan.apply(1.0, shifted()).unwrap(), 45.0));
    }

    #[test]
    fn test_asin_out_of_domain() {
        assert_eq!(
            FunctionKind::Sin.apply(2.0, shifted()),
            Err(CalcError::MathError)
        );
    }

    // ===== Logarithm tests =====

    #[test]
    fn test_log_and_power_of_ten() {
        assert!(approx(FunctionKind::Log.apply(1000.0, normal()).unwrap(), 3.0));
        assert!(approx(FunctionKind::Log.apply(2.0, shifted()).unwrap(), 100.0));
    }

    #[test]
    fn test_log_of_zero_is_math_error() {
        assert_eq!(FunctionKind::Log.apply(0.0, normal()), Err(CalcError::MathError));
    }

    #[test]
    fn test_ln_and_exp() {
        assert!(approx(FunctionKind::Ln.apply(std::f64::consts::E, normal()).unwrap(), 1.0));
        assert!(approx(FunctionKind::Ln.apply(1.0, shifted()).unwrap(), std::f64::consts::E));
    }

    #[test]
    fn test_ln_negative_is_math_error() {
        assert_eq!(FunctionKind::Ln.apply(-1.0, normal()), Err(CalcError::MathError));
    }

    // ===== Power tests =====

    #[test]
    fn test_sqrt_and_shifted_square() {
        assert_eq!(FunctionKind::Sqrt.apply(16.0, normal()), Ok(4.0));
        assert_eq!(FunctionKind::Sqrt.apply(3.0, shifted()), Ok(9.0));
        assert_eq!(FunctionKind::Sqrt.apply(-4.0, normal()), Err(CalcError::MathError));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(FunctionKind::Inverse.apply(4.0, normal()), Ok(0.25));
        assert_eq!(FunctionKind::Inverse.apply(0.0, normal()), Err(CalcError::MathError));
    }

    #[test]
    fn test_shifted_inverse_is_factorial() {
        assert_eq!(FunctionKind::Inverse.apply(5.0, shifted()), Ok(120.0));
    }

    #[test]
    fn test_cube_and_cube_root() {
        assert_eq!(FunctionKind::Cube.apply(3.0, normal()), Ok(27.0));
        assert!(approx(FunctionKind::Cube.apply(27.0, shifted()).unwrap(), 3.0));
    }

    #[test]
    fn test_cube_root_of_negative_is_math_error() {
        assert_eq!(FunctionKind::Cube.apply(-8.0, shifted()), Err(CalcError::MathError));
    }

    #[test]
    fn test_unshifted_keys_ignore_shift() {
        for ctx in [normal(), shifted()] {
            assert_eq!(FunctionKind::Square.apply(-3.0, ctx), Ok(9.0));
            assert_eq!(FunctionKind::Times10.apply(1.5, ctx), Ok(15.0));
            assert_eq!(FunctionKind::Negate.apply(2.0, ctx), Ok(-2.0));
        }
    }

    #[test]
    fn test_ans_recall_store() {
        let ctx = FunctionContext {
            shifted: false,
            last_answer: 42.0,
            memory: 7.0,
        };
        assert_eq!(FunctionKind::Ans.apply(1.0, ctx), Ok(42.0));
        assert_eq!(FunctionKind::Recall.apply(1.0, ctx), Ok(7.0));
        assert_eq!(FunctionKind::Store.apply(3.0, ctx), Ok(3.0));
    }

    // ===== Factorial tests =====

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
    }

    #[test]
    fn test_factorial_invalid_domain() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(f64::NAN).is_nan());
    }

    #[test]
    fn test_factorial_limits() {
        assert!(factorial(170.0).is_finite());
        assert_eq!(factorial(171.0), f64::INFINITY);
    }

    #[test]
    fn test_factorial_errors_surface_as_math_error() {
        assert_eq!(FunctionKind::Inverse.apply(-1.0, shifted()), Err(CalcError::MathError));
        assert_eq!(FunctionKind::Inverse.apply(171.0, shifted()), Err(CalcError::MathError));
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_sin_asin_round_trip(deg in -89.0f64..89.0f64) {
            let ratio = FunctionKind::Sin.apply(deg, normal()).unwrap();
            let back = FunctionKind::Sin.apply(ratio, shifted()).unwrap();
            prop_assert!((back - deg).abs() < 1e-6);
        }

        #[test]
        fn prop_negate_involution(x in -1e10f64..1e10f64) {
            let once = FunctionKind::Negate.apply(x, normal()).unwrap();
            prop_assert_eq!(FunctionKind::Negate.apply(once, normal()), Ok(x));
        }

        #[test]
        fn prop_factorial_recurrence(n in 1u32..170u32) {
            let n = f64::from(n);
            let ratio = factorial(n) / factorial(n - 1.0);
            prop_assert!((ratio - n).abs() / n < 1e-9);
        }
    }
}
