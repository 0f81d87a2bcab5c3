//! Unified calculator driver
//!
//! Behavioural checks are written once against [`CalculatorDriver`] and run
//! against every host: the plain engine here, the browser binding under the
//! `wasm` feature, and anything else that can press keys and read a display.

use crate::core::CalcResult;
use crate::engine::{Engine, RecordingSink};
use crate::keymap::parse_script;
use crate::EngineConfig;
use std::time::Duration;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use sci_calc::driver::{verify_left_to_right_chaining, CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_keys("on 6 * 7 =").unwrap();
/// assert_eq!(driver.display(), "42");
///
/// verify_left_to_right_chaining(&mut driver).unwrap();
/// ```
pub trait CalculatorDriver {
    /// Presses each whitespace-separated key token in order
    fn press_keys(&mut self, script: &str) -> CalcResult<()>;

    /// Current raw display text
    fn display(&self) -> String;

    /// Shift indicator
    fn shift_active(&self) -> bool;

    /// Power indicator
    fn is_powered(&self) -> bool;

    /// Lets `elapsed` pass so transient messages can revert
    fn wait(&mut self, elapsed: Duration);

    /// Brings the calculator to a powered, cleared state
    fn reset(&mut self) -> CalcResult<()> {
        if !self.is_powered() {
            self.press_keys("on")?;
        }
        self.press_keys("ac")
    }
}

/// Driver over an in-process [`Engine`]
#[derive(Debug)]
pub struct EngineDriver {
    engine: Engine<RecordingSink>,
}

impl Default for EngineDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineDriver {
    /// Creates a driver with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a driver with explicit configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config, RecordingSink::new()),
        }
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine<RecordingSink> {
        &self.engine
    }

    /// The underlying engine, mutably
    pub fn engine_mut(&mut self) -> &mut Engine<RecordingSink> {
        &mut self.engine
    }
}

impl CalculatorDriver for EngineDriver {
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

// ===== Unified Specifications =====
// These checks work with ANY CalculatorDriver implementation

/// Runs `script` and asserts the display
fn expect<D: CalculatorDriver>(driver: &mut D, script: &str, display: &str) -> CalcResult<()> {
    driver.press_keys(script)?;
    assert_eq!(driver.display(), display, "after `{script}`");
    Ok(())
}

/// Verifies the four basic operations and remainder
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "2 + 3 =", "5")?;
    expect(driver, "10 - 4 =", "6")?;
    expect(driver, "6 * 7 =", "42")?;
    expect(driver, "20 / 8 =", "2.5")?;
    expect(driver, "17 % 5 =", "2")?;
    Ok(())
}

/// Verifies that operators chain strictly left to right
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "2 + 3 *", "5")?;
    expect(driver, "4 =", "20")?;
    expect(driver, "10 - 2 - 3 =", "5")?;
    Ok(())
}

/// Verifies division by zero flashes and then reverts to zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "5 / 0 =", "Division by zero")?;
    driver.wait(Duration::from_secs(3));
    assert_eq!(driver.display(), "0");
    expect(driver, "5 % 0 =", "Division by zero")?;
    expect(driver, "8", "8")?;
    Ok(())
}

/// Verifies store, recall and answer keys
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "12 sto", "Memory stored")?;
    driver.wait(Duration::from_secs(2));
    assert_eq!(driver.display(), "12");
    expect(driver, "ac 3 * 4 = ac ans", "12")?;
    expect(driver, "ac rcl", "12")?;
    Ok(())
}

/// Verifies shifted function keys
pub fn verify_shift_functions<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "30 sin", "0.5")?;
    expect(driver, "shift", "0.5")?;
    assert!(driver.shift_active());
    expect(driver, "0.5 sin", "30")?;
    expect(driver, "5 x-1", "120")?;
    expect(driver, "3 sqrt", "9")?;
    expect(driver, "2 log", "100")?;
    expect(driver, "shift", "100")?;
    assert!(!driver.shift_active());
    Ok(())
}

/// Verifies a power cycle clears entry state
pub fn verify_power_cycle<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    expect(driver, "7 + shift", "7")?;
    driver.press_keys("off")?;
    assert!(!driver.is_powered());
    expect(driver, "5", "0")?;
    assert!(driver.is_powered());
    assert!(!driver.shift_active());
    expect(driver, "1 =", "1")?;
    Ok(())
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_left_to_right_chaining(driver)?;
    verify_division_by_zero(driver)?;
    verify_memory(driver)?;
    verify_shift_functions(driver)?;
    verify_power_cycle(driver)?;
    Ok(())
}
