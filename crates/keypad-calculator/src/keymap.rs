//! Mapping front-end input onto calculator events
//!
//! Button labels, typed characters and named keys all resolve to the same
//! closed set of [`InputEvent`]s before they reach the controller.

use crate::core::{CalcError, CalcResult, Operation};

/// A single discrete input accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A digit (0-9)
    Digit(u8),
    /// The decimal point
    Decimal,
    /// Start exponent entry (EXP)
    Exponent,
    /// An arithmetic operator
    Operator(Operation),
    /// Evaluate (=)
    Equals,
    /// Delete the last character (DEL)
    Delete,
    /// Negate the mantissa or exponent (+/-)
    ToggleSign,
    /// Reset everything (AC)
    AllClear,
}

impl InputEvent {
    /// Every keypad button, digits first
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut events: Vec<Self> = (0..=9).map(Self::Digit).collect();
        events.extend([Self::Decimal, Self::Exponent]);
        events.extend(Operation::ALL.map(Self::Operator));
        events.extend([Self::Equals, Self::Delete, Self::ToggleSign, Self::AllClear]);
        events
    }

    /// Returns the button label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Exponent => "EXP".to_string(),
            Self::Operator(op) => op.display_symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Maps a typed character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operation::from_symbol(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' | '\n' | '\r' => Some(Self::Equals),
            'e' | 'E' => Some(Self::Exponent),
            '~' | '\u{00B1}' => Some(Self::ToggleSign),
            'c' | 'C' => Some(Self::AllClear),
            '\u{8}' | '\u{7f}' => Some(Self::Delete),
            _ => None,
        }
    }

    /// Maps a named key (`Enter`, `Backspace`, `Delete`, `Escape`) or a
    /// single character
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Equals),
            "backspace" | "delete" => Some(Self::Delete),
            "escape" | "esc" => Some(Self::AllClear),
            _ => single_char(name).and_then(Self::from_char),
        }
    }

    /// Maps a keypad button label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "AC" => Some(Self::AllClear),
            "DEL" => Some(Self::Delete),
            "EXP" => Some(Self::Exponent),
            "+/-" | "\u{00B1}" => Some(Self::ToggleSign),
            "=" => Some(Self::Equals),
            "." => Some(Self::Decimal),
            _ => {
                let c = single_char(label)?;
                if let Some(d) = c.to_digit(10) {
                    return Some(Self::Digit(d as u8));
                }
                Operation::from_symbol(c).map(Self::Operator)
            }
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parses a keystroke sequence.
///
/// Tokens are separated by whitespace. A token that is a button label (`AC`,
/// `DEL`, `EXP`, `+/-`) maps to that button; any other token is read one
/// character at a time.
pub fn parse_sequence(text: &str) -> CalcResult<Vec<InputEvent>> {
    let mut events = Vec::new();
    for token in text.split_whitespace() {
        if token.chars().count() > 1 {
            if let Some(event) = InputEvent::from_label(token) {
                events.push(event);
                continue;
            }
        }
        for c in token.chars() {
            let event = InputEvent::from_char(c)
                .ok_or_else(|| CalcError::unknown_input(c.to_string()))?;
            events.push(event);
        }
    }
    Ok(events)
}
