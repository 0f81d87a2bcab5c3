//! Scientific Calculator Engine
//!
//! A keypad-driven calculator core: keystrokes build operands, binary
//! operators chain strictly left to right, shift mode swaps function keys for
//! their inverses, and every change is pushed to a [`DisplaySink`].
//!
//! # Design
//!
//! - **Closed key set**: operators and functions are enums, so an unknown key
//!   cannot reach evaluation
//! - **Errors as display state**: division by zero and math errors flash on the
//!   display and revert on their own; nothing is returned to the caller
//! - **Logical time**: transient reverts fire when the host calls
//!   [`Engine::advance`], which keeps tests deterministic
//!
//! # Example
//!
//! ```rust
//! use sci_calc::prelude::*;
//! use std::time::Duration;
//!
//! let mut engine = Engine::with_sink(RecordingSink::new());
//! engine.power_on();
//!
//! for key in ["2", "+", "3", "*", "4", "Enter"] {
//!     engine.handle_key(key);
//! }
//! assert_eq!(engine.display_text(), "20");
//!
//! engine.apply_unary_function(FunctionKind::Store);
//! assert_eq!(engine.display_text(), "Memory stored");
//! engine.advance(Duration::from_secs(1));
//! assert_eq!(engine.display_text(), "20");
//! assert_eq!(engine.memory(), 20.0);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod keymap;
pub mod keypad;

/// Browser bindings (wasm-bindgen)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{ConfigError, EngineConfig};
pub use engine::{DisplayKind, DisplaySink, DisplayUpdate, Engine, NullSink, RecordingSink};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::core::{CalcError, CalcResult, FunctionKind, OperatorKind};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::engine::{
        DisplayKind, DisplaySink, DisplayUpdate, Engine, NullSink, RecordingSink, Session,
    };
    pub use crate::keymap::KeypadAction;
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
