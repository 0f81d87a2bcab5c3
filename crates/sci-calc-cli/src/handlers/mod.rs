//! Command handlers - extracted from main.rs for testability
//!
//! Handlers write to any `Write` so tests can capture output.

pub mod config;
pub mod keypad;
pub mod keys;

pub use config::execute_config;
pub use keypad::execute_keypad;
pub use keys::{execute_keys, run_script};
