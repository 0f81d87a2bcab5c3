//! Browser WASM bindings for the calculator

use std::time::Duration;

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::EngineConfig;
use crate::core::CalcResult;
use crate::driver::CalculatorDriver;
use crate::engine::{Engine, RecordingSink};
use crate::keymap::{parse_script, KeypadAction};
use crate::keypad::Keypad;

/// Browser calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: Engine<RecordingSink>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator with default settings (powered off)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a calculator from a YAML configuration string
    pub fn from_yaml(yaml: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            EngineConfig::from_yaml_str(yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Handle a keypad click by element ID (`btn-sin`) or button name (`sin`, `x-1`)
    pub fn press_button(&mut self, name: &str) -> bool {
        let action = self
            .keypad
            .handle_click(name)
            .or_else(|| KeypadAction::from_button(name));
        match action {
            Some(action) => {
                self.engine.press(action);
                true
            }
            None => false,
        }
    }

    /// Handle a keyboard key; ignored while powered off
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.engine.handle_key(key)
    }

    /// Let `ms` milliseconds pass so transient messages can revert
    pub fn tick(&mut self, ms: u32) {
        self.engine.advance(Duration::from_millis(u64::from(ms)));
    }

    /// Raw display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.engine.display_text().to_string()
    }

    /// Display text fitted to the display width
    #[wasm_bindgen(getter)]
    pub fn rendered(&self) -> String {
        self.engine.rendered_display()
    }

    /// Shift indicator
    #[wasm_bindgen(getter)]
    pub fn shift_active(&self) -> bool {
        self.engine.shift_active()
    }

    /// Power indicator
    #[wasm_bindgen(getter)]
    pub fn powered(&self) -> bool {
        self.engine.is_powered()
    }

    /// Display updates since the last call, as a JSON array
    pub fn take_updates_json(&mut self) -> String {
        let updates = self.engine.sink_mut().take();
        serde_json::to_string(&updates).unwrap_or_else(|_| "[]".to_string())
    }

    /// Keypad rendered as text for the current shift state
    pub fn keypad_text(&self) -> String {
        self.keypad.render(self.engine.shift_active())
    }
}

impl BrowserCalculator {
    fn with_config(config: EngineConfig) -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: Engine::with_config(config, RecordingSink::new()),
            keypad: Keypad::new(),
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorDriver for BrowserCalculator {
    fn press_keys(&mut self, script: &str) -> CalcResult<()> {
        for action in parse_script(script)? {
            self.engine.press(action);
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display_text().to_string()
    }

    fn shift_active(&self) -> bool {
        self.engine.shift_active()
    }

    fn is_powered(&self) -> bool {
        self.engine.is_powered()
    }

    fn wait(&mut self, elapsed: Duration) {
        self.engine.advance(elapsed);
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
