//! WASM frontend for the calculator
//!
//! The browser page keeps its own markup and animation; it forwards clicks,
//! key presses and animation-frame ticks here and repaints from the returned
//! display state.

mod browser;

pub use browser::{init, BrowserCalculator};
