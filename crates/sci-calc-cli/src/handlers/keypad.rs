//! Keypad command handler

use crate::error::CliResult;
use crate::KeypadArgs;
use sci_calc::keypad::Keypad;
use std::io::Write;

/// Execute the keypad command
pub fn execute_keypad<W: Write>(args: &KeypadArgs, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", Keypad::new().render(args.shift))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(shift: bool) -> String {
        let mut out = Vec::new();
        execute_keypad(&KeypadArgs { shift }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_keypad_rows() {
        let output = render(false);
        assert_eq!(output.lines().count(), 8);
        assert!(output.contains("[ sin ]"));
    }

    #[test]
    fn test_keypad_shifted_labels() {
        let output = render(true);
        assert!(output.contains("sin⁻¹"));
        assert!(!output.contains("[ sin ]"));
    }
}
