//! Text sink the controller writes into
//!
//! A front-end renders three fields: the mantissa, the pending operator
//! symbol and the exponent. Anything with get/set semantics on those three
//! strings can back the controller; [`DisplayFields`] is the in-memory
//! default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Main number field
    Mantissa,
    /// Pending operator symbol
    Operator,
    /// Exponent (`E+007`)
    Exponent,
}

/// Three-field text sink with get/set semantics
pub trait DisplaySink {
    /// Current text of a field
    fn text(&self, field: Field) -> &str;

    /// Replaces the text of a field
    fn set_text(&mut self, field: Field, text: &str);

    /// Mantissa text
    fn mantissa(&self) -> &str {
        self.text(Field::Mantissa)
    }

    /// Operator symbol text
    fn operator(&self) -> &str {
        self.text(Field::Operator)
    }

    /// Exponent text
    fn exponent(&self) -> &str {
        self.text(Field::Exponent)
    }

    /// Blanks the operator and exponent and shows `0`
    fn reset(&mut self) {
        self.set_text(Field::Mantissa, "0");
        self.set_text(Field::Operator, "");
        self.set_text(Field::Exponent, "");
    }
}

/// In-memory display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    /// Mantissa text
    pub mantissa: String,
    /// Operator symbol text
    pub operator: String,
    /// Exponent text
    pub exponent: String,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self {
            mantissa: "0".to_string(),
            operator: String::new(),
            exponent: String::new(),
        }
    }
}

impl DisplayFields {
    /// Creates a display showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Mantissa => &mut self.mantissa,
            Field::Operator => &mut self.operator,
            Field::Exponent => &mut self.exponent,
        }
    }
}

impl DisplaySink for DisplayFields {
    fn text(&self, field: Field) -> &str {
        match field {
            Field::Mantissa => &self.mantissa,
            Field::Operator => &self.operator,
            Field::Exponent => &self.exponent,
        }
    }

    fn set_text(&mut self, field: Field, text: &str) {
        let slot = self.slot_mut(field);
        slot.clear();
        slot.push_str(text);
    }
}

impl fmt::Display for DisplayFields {
    /// One terminal line: operator column, then mantissa and exponent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = if self.operator.is_empty() {
            " "
        } else {
            &self.operator
        };
        write!(f, "{operator} {}{}", self.mantissa, self.exponent)
    }
}
