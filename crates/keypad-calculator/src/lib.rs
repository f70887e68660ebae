//! Keypad Calculator - keystroke-driven arithmetic engine
//!
//! Turns a stream of button presses into the three text fields of a desk
//! calculator display (mantissa, operator, exponent).
//!
//! - **Evaluator**: two-stack, precedence-aware, fed one operand or operator
//!   at a time. No expression strings, no parentheses.
//! - **Formatter**: renders results within a 15-digit budget, switching to
//!   scientific form (`9.99` `E-014`) and showing `NaN` / `OvFlow` sentinels.
//! - **Controller**: the entry state machine (typing, operator pending,
//!   result shown, exponent entry) that drives both and writes the display.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = InputController::new();
//! for c in "123".chars() {
//!     calc.append_digit_or_decimal(c);
//! }
//! calc.apply_operator(Operation::Multiply);
//! calc.append_digit_or_decimal('4');
//! calc.append_digit_or_decimal('5');
//! calc.compute_and_display();
//!
//! assert_eq!(calc.display().mantissa(), "5535");
//! assert_eq!(calc.display().exponent(), "");
//!
//! // Keystroke sequences work too
//! calc.type_keys("AC 5 / 0 =").unwrap();
//! assert_eq!(calc.display().mantissa(), "NaN");
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
pub mod controller;
pub mod core;
pub mod display;
pub mod keymap;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::{EntryState, InputController, EXPONENT_PLACEHOLDER};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::{FormatConfig, Formatter, Rendered};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::display::{DisplayFields, DisplaySink, Field};
    pub use crate::keymap::{parse_sequence, InputEvent};
}
