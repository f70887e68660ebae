//! Calculator core: operations, the incremental evaluator and display formatting
//!
//! Nothing in here knows about keystrokes. The controller feeds operands and
//! operators in, asks for a result, and hands it to the formatter.

pub mod evaluator;
pub mod format;
mod operations;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised by the calculator's fallible edges
///
/// Input handling itself never fails: the controller logs and skips. These
/// errors come from parsing operand text, mapping front-end input, and
/// loading configuration.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Display text that does not parse as a number
    #[error("Invalid operand: {text:?}")]
    InvalidOperand {
        /// The offending text
        text: String,
    },

    /// Operator symbol outside `+ - * /`
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Character or key with no calculator meaning
    #[error("Unknown input: {0:?}")]
    UnknownInput(String),

    /// Rejected configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an invalid operand error
    #[must_use]
    pub fn invalid_operand(text: impl Into<String>) -> Self {
        Self::InvalidOperand { text: text.into() }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown input error
    #[must_use]
    pub fn unknown_input(input: impl Into<String>) -> Self {
        Self::UnknownInput(input.into())
    }
}

/// Parses display text into an operand.
///
/// `exponent` is the exponent field as displayed (`E+12`, `E-3`) or empty.
/// The marker is dropped and the signed digits are appended to the mantissa
/// behind an `E`. A typed magnitude beyond `f64` comes back infinite and is
/// left for the formatter to show as overflow.
pub fn parse_operand(mantissa: &str, exponent: &str) -> CalcResult<f64> {
    let text = match exponent.strip_prefix('E') {
        Some(digits) if !digits.is_empty() => format!("{mantissa}E{digits}"),
        _ => mantissa.to_string(),
    };

    // f64::from_str also accepts "inf"/"infinity"; of the spelled-out
    // values only NaN may come back in
    let unsigned = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let numeric = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if !numeric && !unsigned.eq_ignore_ascii_case("nan") {
        return Err(CalcError::invalid_operand(text));
    }
    text.parse::<f64>().map_err(|_| CalcError::invalid_operand(text))
}
