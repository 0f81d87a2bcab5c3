//! Property-based tests for keypad layout and input translation

use proptest::prelude::*;
use sci_calc::keymap::{parse_script, parse_token};
use sci_calc::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any button on the keypad
fn button_strategy() -> impl Strategy<Value = KeypadButton> {
    proptest::sample::select(Keypad::new().buttons().to_vec())
}

// ===== Property tests for KeypadAction =====

proptest! {
    /// All digits should convert to their character representation
    #[test]
    fn prop_digit_action_to_char(d in digit_strategy()) {
        let ch = KeypadAction::Digit(d).to_char();
        prop_assert!(ch.is_some());
        prop_assert_eq!(ch.unwrap().to_digit(10), Some(u32::from(d)));
    }

    /// Every digit key on the keyboard maps to its digit
    #[test]
    fn prop_digit_key_maps(d in digit_strategy()) {
        prop_assert_eq!(KeypadAction::from_key(&d.to_string()), Some(KeypadAction::Digit(d)));
    }

    /// Every button has a label in both shift states
    #[test]
    fn prop_button_has_labels(button in button_strategy(), shifted in any::<bool>()) {
        prop_assert!(!button.action.label(shifted).is_empty());
    }

    /// Every button's script token presses exactly that button
    #[test]
    fn prop_token_round_trip(button in button_strategy()) {
        prop_assert_eq!(parse_token(&button.action.token()).unwrap(), vec![button.action]);
    }

    /// Clicking a button's element ID yields its action
    #[test]
    fn prop_click_by_id(button in button_strategy()) {
        let keypad = Keypad::new();
        prop_assert_eq!(keypad.handle_click(&button.id), Some(button.action));
    }

    /// Positions found in the layout point back at the same button
    #[test]
    fn prop_button_at_position(button in button_strategy()) {
        let keypad = Keypad::new();
        prop_assert_eq!(keypad.button_at(button.row, button.col), Some(&button));
    }
}

// ===== Property tests for scripts =====

proptest! {
    /// A number token expands to one press per character
    #[test]
    fn prop_number_token_expands(number in "[0-9]{1,8}(\\.[0-9]{1,4})?") {
        let actions = parse_token(&number).unwrap();
        prop_assert_eq!(actions.len(), number.chars().count());
    }

    /// Scripts of button tokens parse to the same button sequence
    #[test]
    fn prop_script_of_buttons(buttons in prop::collection::vec(button_strategy(), 0..20)) {
        let script: Vec<String> = buttons.iter().map(|b| b.action.token()).collect();
        let actions = parse_script(&script.join(" ")).unwrap();
        let expected: Vec<KeypadAction> = buttons.iter().map(|b| b.action).collect();
        prop_assert_eq!(actions, expected);
    }

    /// Tokens with letters outside the key names are rejected
    #[test]
    fn prop_garbage_token_rejected(token in "[qwz]{2,6}") {
        prop_assert!(parse_token(&token).is_err());
    }

    /// Keyboard mapping never panics
    #[test]
    fn prop_from_key_never_panics(key in ".*") {
        let _ = KeypadAction::from_key(&key);
        let _ = KeypadAction::from_button(&key);
    }
}
