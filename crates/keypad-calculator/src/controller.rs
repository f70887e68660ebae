//! Input controller: keystrokes in, display text out
//!
//! The controller owns the evaluator, the formatter and the display. Each
//! input is handled to completion (entry state, stacks and display) before
//! the next one. Nothing here fails: input that makes no sense in the
//! current state is logged and ignored.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::Formatter;
use crate::core::{parse_operand, CalcResult, Operation};
use crate::display::{DisplayFields, DisplaySink, Field};
use crate::keymap::{parse_sequence, InputEvent};

/// Exponent field shown when exponent entry starts
pub const EXPONENT_PLACEHOLDER: &str = "E+0";

/// How the next input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Digits extend the mantissa
    #[default]
    Entering,
    /// An operator was just applied; the next digit starts a new operand
    OperatorPending,
    /// A result is showing; the next digit replaces it
    ResultDisplayed,
    /// Digits extend the exponent field
    ExponentEntry,
}

/// Keystroke-driven calculator
#[derive(Debug)]
pub struct InputController<S: DisplaySink = DisplayFields> {
    evaluator: Evaluator,
    formatter: Formatter,
    config: CalculatorConfig,
    state: EntryState,
    display: S,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    /// Creates a controller with the default limits and an in-memory display
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a controller with custom limits and an in-memory display
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_display(DisplayFields::new(), config)
    }
}

impl<S: DisplaySink> InputController<S> {
    /// Creates a controller writing into `display`, which is reset to `0`
    pub fn with_display(mut display: S, config: CalculatorConfig) -> Self {
        display.reset();
        Self {
            evaluator: Evaluator::new(),
            formatter: Formatter::new(config.format_config()),
            config,
            state: EntryState::Entering,
            display,
        }
    }

    /// Current entry state
    #[must_use]
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// The display being written
    #[must_use]
    pub fn display(&self) -> &S {
        &self.display
    }

    /// Gives the display back
    #[must_use]
    pub fn into_display(self) -> S {
        self.display
    }

    /// The evaluator holding the pending expression
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The active limits
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Dispatches one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => self.append_digit_or_decimal(c),
                None => debug!(d, "ignored out-of-range digit"),
            },
            InputEvent::Decimal => self.append_digit_or_decimal('.'),
            InputEvent::Exponent => self.request_exponent_mode(),
            InputEvent::Operator(op) => self.apply_operator(op),
            InputEvent::Equals => self.compute_and_display(),
            InputEvent::Delete => self.delete_last_character(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::AllClear => self.all_clear(),
        }
    }

    /// Parses a keystroke sequence and handles every event in order.
    ///
    /// Nothing is applied if the sequence contains an unknown key.
    pub fn type_keys(&mut self, keys: &str) -> CalcResult<()> {
        for event in parse_sequence(keys)? {
            self.handle(event);
        }
        Ok(())
    }

    /// Handles a digit (`0`-`9`) or the decimal point
    pub fn append_digit_or_decimal(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            debug!(?ch, "ignored non-digit input");
            return;
        }
        if self.display.mantissa() == self.config.overflow_text {
            debug!("clearing overflow display");
            self.display.reset();
            self.state = EntryState::Entering;
        }

        if ch == '.' {
            self.enter_decimal();
        } else {
            self.enter_digit(ch);
        }
    }

    fn enter_digit(&mut self, digit: char) {
        match self.state {
            EntryState::ExponentEntry => {
                let exponent = self.display.exponent();
                if exponent == EXPONENT_PLACEHOLDER {
                    if digit != '0' {
                        self.set(Field::Exponent, &format!("E+{digit}"));
                    }
                } else if exponent.chars().count() < self.config.max_exponent_len {
                    let extended = format!("{exponent}{digit}");
                    self.set(Field::Exponent, &extended);
                }
            }
            EntryState::ResultDisplayed | EntryState::OperatorPending => {
                self.start_operand(&digit.to_string());
            }
            EntryState::Entering => {
                let mantissa = self.display.mantissa();
                if mantissa == "0" {
                    self.set(Field::Mantissa, &digit.to_string());
                } else if mantissa.chars().count() < self.config.max_digits {
                    let extended = format!("{mantissa}{digit}");
                    self.set(Field::Mantissa, &extended);
                } else {
                    debug!(max_digits = self.config.max_digits, "digit cap reached");
                }
            }
        }
    }

    fn enter_decimal(&mut self) {
        match self.state {
            EntryState::ExponentEntry => {}
            EntryState::ResultDisplayed | EntryState::OperatorPending => {
                self.start_operand("0.");
            }
            EntryState::Entering => {
                let mantissa = self.display.mantissa();
                if !mantissa.contains('.') && mantissa.chars().count() < self.config.max_digits {
                    let extended = format!("{mantissa}.");
                    self.set(Field::Mantissa, &extended);
                }
            }
        }
    }

    /// Replaces the shown value with the first character of a new operand
    fn start_operand(&mut self, mantissa: &str) {
        self.set(Field::Mantissa, mantissa);
        self.set(Field::Exponent, "");
        self.transition(EntryState::Entering);
    }

    /// Starts exponent entry; only effective while typing a mantissa
    pub fn request_exponent_mode(&mut self) {
        if self.state != EntryState::Entering {
            debug!(state = ?self.state, "exponent entry unavailable");
            return;
        }
        self.set(Field::Exponent, EXPONENT_PLACEHOLDER);
        self.transition(EntryState::ExponentEntry);
    }

    /// Applies `+ - * /`.
    ///
    /// Directly after another operator this only swaps the pending operator.
    /// Otherwise the displayed value becomes an operand.
    pub fn apply_operator(&mut self, op: Operation) {
        if self.state == EntryState::OperatorPending {
            self.evaluator.replace_last_operator(op);
            self.set(Field::Operator, op.display_symbol());
            debug!(%op, "pending operator replaced");
            return;
        }

        let Some(operand) = self.current_operand() else {
            return;
        };
        self.evaluator.push_operand(operand);
        self.evaluator.push_operator(op);
        self.set(Field::Operator, op.display_symbol());
        debug!(operand, %op, "operator applied");
        self.transition(EntryState::OperatorPending);
    }

    /// Evaluates the pending expression with the displayed value as the final
    /// operand, then shows the result
    pub fn compute_and_display(&mut self) {
        let Some(operand) = self.current_operand() else {
            return;
        };
        self.evaluator.push_operand(operand);
        let result = self.evaluator.compute_result();
        let rendered = self.formatter.format(result);
        debug!(
            result,
            mantissa = %rendered.mantissa,
            exponent = %rendered.exponent,
            "result computed"
        );

        self.set(Field::Mantissa, &rendered.mantissa);
        self.set(Field::Exponent, &rendered.exponent);
        self.set(Field::Operator, "");
        self.evaluator.clear();
        self.transition(EntryState::ResultDisplayed);
    }

    /// Removes the last typed character of the mantissa or exponent
    pub fn delete_last_character(&mut self) {
        match self.state {
            EntryState::ExponentEntry => {
                let exponent = self.display.exponent();
                if exponent == EXPONENT_PLACEHOLDER {
                    return;
                }
                let shortened = if exponent.chars().count() > EXPONENT_PLACEHOLDER.len() {
                    drop_last(exponent)
                } else {
                    EXPONENT_PLACEHOLDER.to_string()
                };
                self.set(Field::Exponent, &shortened);
            }
            EntryState::ResultDisplayed | EntryState::OperatorPending => {}
            EntryState::Entering => {
                let mantissa = self.display.mantissa();
                if mantissa == "0" {
                    return;
                }
                let mut shortened = drop_last(mantissa);
                if shortened.is_empty() || shortened == "-" {
                    shortened = "0".to_string();
                }
                self.set(Field::Mantissa, &shortened);
            }
        }
    }

    /// Negates the exponent while typing one, otherwise the mantissa
    pub fn toggle_sign(&mut self) {
        if self.state == EntryState::ExponentEntry {
            let exponent = self.display.exponent();
            let digits = exponent.strip_prefix('E').unwrap_or(exponent);
            match digits.parse::<i32>() {
                Ok(value) => {
                    let negated = format!("E{:+}", -value);
                    self.set(Field::Exponent, &negated);
                }
                Err(err) => debug!(%err, exponent, "exponent not negated"),
            }
            return;
        }

        // the sign is flipped on the text so typed digits stay as typed
        let mantissa = self.display.mantissa();
        match mantissa.parse::<f64>() {
            Ok(value) if value.is_finite() && value != 0.0 => {
                let negated = match mantissa.strip_prefix('-') {
                    Some(positive) => positive.to_string(),
                    None => format!("-{mantissa}"),
                };
                self.set(Field::Mantissa, &negated);
            }
            Ok(value) => debug!(value, "mantissa not negated"),
            Err(err) => debug!(%err, "mantissa not negated"),
        }
    }

    /// Resets the display, the evaluator and the entry state
    pub fn all_clear(&mut self) {
        self.display.reset();
        self.evaluator.clear();
        self.transition(EntryState::Entering);
    }

    /// The displayed value as an operand, or None (logged) if the display
    /// does not hold a number
    fn current_operand(&self) -> Option<f64> {
        match parse_operand(self.display.mantissa(), self.display.exponent()) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(%err, "no operand on display, input skipped");
                None
            }
        }
    }

    fn set(&mut self, field: Field, text: &str) {
        self.display.set_text(field, text);
    }

    fn transition(&mut self, next: EntryState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "entry state");
            self.state = next;
        }
    }
}

fn drop_last(text: &str) -> String {
    let mut chars = text.chars();
    chars.next_back();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> InputController {
        InputController::new()
    }

    fn typed(keys: &str) -> InputController {
        let mut c = calc();
        c.type_keys(keys).unwrap();
        c
    }

    fn shown(c: &InputController) -> (&str, &str, &str) {
        let d = c.display();
        (d.mantissa(), d.operator(), d.exponent())
    }

    // ===== Construction tests =====

    #[test]
    fn test_new_controller_shows_zero() {
        let c = calc();
        assert_eq!(shown(&c), ("0", "", ""));
        assert_eq!(c.state(), EntryState::Entering);
        assert!(c.evaluator().is_empty());
    }

    #[test]
    fn test_with_display_resets_sink() {
        let dirty = DisplayFields {
            mantissa: "42".into(),
            operator: "+".into(),
            exponent: "E+1".into(),
        };
        let c = InputController::with_display(dirty, CalculatorConfig::default());
        assert_eq!(c.display(), &DisplayFields::new());
    }

    // ===== Digit entry tests =====

    #[test]
    fn test_digits_append() {
        let c = typed("123");
        assert_eq!(c.display().mantissa(), "123");
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(typed("0").display().mantissa(), "0");
        assert_eq!(typed("00").display().mantissa(), "0");
        assert_eq!(typed("07").display().mantissa(), "7");
    }

    #[test]
    fn test_digit_cap() {
        let c = typed("1234567890123456789");
        assert_eq!(c.display().mantissa(), "123456789012345");
    }

    #[test]
    fn test_digit_cap_from_config() {
        let mut c = InputController::with_config(CalculatorConfig::new().with_max_digits(4));
        c.type_keys("123456").unwrap();
        assert_eq!(c.display().mantissa(), "1234");
    }

    #[test]
    fn test_non_digit_char_ignored() {
        let mut c = typed("12");
        c.append_digit_or_decimal('a');
        assert_eq!(c.display().mantissa(), "12");
    }

    #[test]
    fn test_out_of_range_digit_event_ignored() {
        let mut c = typed("12");
        c.handle(InputEvent::Digit(12));
        assert_eq!(c.display().mantissa(), "12");
    }

    // ===== Decimal tests =====

    #[test]
    fn test_decimal_once() {
        assert_eq!(typed("1.2.3").display().mantissa(), "1.23");
    }

    #[test]
    fn test_decimal_on_zero() {
        assert_eq!(typed(".5").display().mantissa(), "0.5");
    }

    #[test]
    fn test_decimal_after_operator_starts_operand() {
        let c = typed("3+.");
        assert_eq!(c.display().mantissa(), "0.");
        assert_eq!(c.state(), EntryState::Entering);
    }

    #[test]
    fn test_decimal_after_result() {
        let c = typed("2*3=.");
        assert_eq!(c.display().mantissa(), "0.");
    }

    #[test]
    fn test_decimal_ignored_in_exponent_entry() {
        let c = typed("5 EXP 2 .");
        assert_eq!(shown(&c), ("5", "", "E+2"));
    }

    // ===== Exponent entry tests =====

    #[test]
    fn test_exponent_placeholder() {
        let c = typed("5 EXP");
        assert_eq!(c.display().exponent(), "E+0");
        assert_eq!(c.state(), EntryState::ExponentEntry);
    }

    #[test]
    fn test_exponent_first_digit_replaces_placeholder() {
        assert_eq!(typed("5 EXP 0").display().exponent(), "E+0");
        assert_eq!(typed("5 EXP 7").display().exponent(), "E+7");
    }

    #[test]
    fn test_exponent_width_cap() {
        assert_eq!(typed("5 EXP 12345").display().exponent(), "E+123");
    }

    #[test]
    fn test_exponent_unavailable_outside_entering() {
        assert_eq!(typed("5+ EXP").display().exponent(), "");
        assert_eq!(typed("5= EXP").display().exponent(), "");
        let c = typed("5 EXP 3 EXP");
        assert_eq!(c.display().exponent(), "E+3");
    }

    #[test]
    fn test_exponent_operand_evaluates() {
        let c = typed("1.5 EXP 3 + 1 =");
        assert_eq!(shown(&c), ("1501", "", ""));
    }

    #[test]
    fn test_negative_exponent_operand() {
        let c = typed("2 EXP 2 +/- * 100 =");
        assert_eq!(c.display().mantissa(), "2");
    }

    // ===== Operator tests =====

    #[test]
    fn test_operator_pushes_operand() {
        let c = typed("123*");
        assert_eq!(shown(&c), ("123", "×", ""));
        assert_eq!(c.state(), EntryState::OperatorPending);
        assert_eq!(c.evaluator().operand_count(), 1);
        assert_eq!(c.evaluator().pending_operator(), Some(Operation::Multiply));
    }

    #[test]
    fn test_operator_substitution() {
        let c = typed("9+-");
        assert_eq!(c.display().operator(), "-");
        assert_eq!(c.evaluator().operand_count(), 1);
        assert_eq!(c.evaluator().operator_count(), 1);
        assert_eq!(typed("9+-4=").display().mantissa(), "5");
    }

    #[test]
    fn test_substitution_to_lower_precedence() {
        assert_eq!(typed("10-4*+1=").display().mantissa(), "7");
        assert_eq!(typed("2*3/+1=").display().mantissa(), "7");
    }

    #[test]
    fn test_digit_after_operator_starts_operand() {
        let c = typed("123*45");
        assert_eq!(shown(&c), ("45", "×", ""));
        assert_eq!(c.state(), EntryState::Entering);
    }

    #[test]
    fn test_operator_on_overflow_skipped() {
        let mut c = typed("9 EXP 300 * 9 EXP 300 =");
        assert_eq!(c.display().mantissa(), "OvFlow");
        c.apply_operator(Operation::Add);
        assert_eq!(c.display().operator(), "");
        assert!(c.evaluator().is_empty());
    }

    // ===== Equals tests =====

    #[test]
    fn test_end_to_end_product() {
        let c = typed("123*45=");
        assert_eq!(shown(&c), ("5535", "", ""));
        assert_eq!(c.state(), EntryState::ResultDisplayed);
        assert!(c.evaluator().is_empty());
    }

    #[test]
    fn test_precedence_through_controller() {
        assert_eq!(typed("2+3*4=").display().mantissa(), "14");
        assert_eq!(typed("3+4-2=").display().mantissa(), "5");
    }

    #[test]
    fn test_equals_without_operator() {
        assert_eq!(typed("42=").display().mantissa(), "42");
    }

    #[test]
    fn test_equals_after_operator_reuses_operand() {
        assert_eq!(typed("2+=").display().mantissa(), "4");
    }

    #[test]
    fn test_result_chains_into_next_operator() {
        assert_eq!(typed("2*3=+4=").display().mantissa(), "10");
    }

    #[test]
    fn test_digit_after_result_replaces() {
        let c = typed("2*3=7");
        assert_eq!(shown(&c), ("7", "", ""));
        assert_eq!(c.state(), EntryState::Entering);
    }

    #[test]
    fn test_division_by_zero_shows_nan() {
        let c = typed("5/0=");
        assert_eq!(shown(&c), ("NaN", "", ""));
    }

    #[test]
    fn test_nan_result_recovers_on_digit() {
        let c = typed("5/0=8");
        assert_eq!(c.display().mantissa(), "8");
    }

    #[test]
    fn test_scientific_result() {
        let c = typed("99999999 * 99999999 =");
        assert_eq!(shown(&c), ("9.9999998", "", "E+015"));
    }

    #[test]
    fn test_underflow_result() {
        let c = typed("1 / 10000000 / 10000000 =");
        assert_eq!(shown(&c), ("1", "", "E-014"));
    }

    #[test]
    fn test_scientific_result_reused_as_operand() {
        let c = typed("2 EXP 20 = / 2 EXP 19 =");
        assert_eq!(shown(&c), ("10", "", ""));
    }

    #[test]
    fn test_digit_after_scientific_result_clears_exponent() {
        let c = typed("99999999 * 99999999 = 3");
        assert_eq!(shown(&c), ("3", "", ""));
    }

    // ===== Overflow tests =====

    #[test]
    fn test_overflow_sentinel_and_recovery() {
        let mut c = typed("9 EXP 300 * 9 EXP 300 =");
        assert_eq!(shown(&c), ("OvFlow", "", ""));
        c.append_digit_or_decimal('4');
        assert_eq!(shown(&c), ("4", "", ""));
        assert_eq!(c.state(), EntryState::Entering);
    }

    #[test]
    fn test_overflow_recovery_on_decimal() {
        let mut c = typed("9 EXP 300 * 9 EXP 300 =");
        c.append_digit_or_decimal('.');
        assert_eq!(c.display().mantissa(), "0.");
    }

    #[test]
    fn test_equals_on_overflow_is_skipped() {
        let mut c = typed("9 EXP 300 * 9 EXP 300 =");
        c.compute_and_display();
        assert_eq!(c.display().mantissa(), "OvFlow");
    }

    // ===== Delete tests =====

    #[test]
    fn test_delete_mantissa() {
        let mut c = typed("120");
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "12");
        c.delete_last_character();
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "0");
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "0");
    }

    #[test]
    fn test_delete_negative_single_digit() {
        let mut c = typed("5 +/-");
        assert_eq!(c.display().mantissa(), "-5");
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "0");
    }

    #[test]
    fn test_delete_noop_after_operator_and_result() {
        let mut c = typed("12+");
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "12");

        let mut c = typed("12+3=");
        c.delete_last_character();
        assert_eq!(c.display().mantissa(), "15");
    }

    #[test]
    fn test_delete_exponent() {
        let mut c = typed("5 EXP 42");
        c.delete_last_character();
        assert_eq!(c.display().exponent(), "E+4");
        c.delete_last_character();
        assert_eq!(c.display().exponent(), "E+0");
        c.delete_last_character();
        assert_eq!(c.display().exponent(), "E+0");
        assert_eq!(c.display().mantissa(), "5");
    }

    #[test]
    fn test_delete_negative_exponent_restores_placeholder() {
        let mut c = typed("5 EXP 4 +/-");
        assert_eq!(c.display().exponent(), "E-4");
        c.delete_last_character();
        assert_eq!(c.display().exponent(), "E+0");
    }

    // ===== Sign tests =====

    #[test]
    fn test_toggle_sign_mantissa() {
        let mut c = typed("12.50");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "-12.50");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "12.50");
    }

    #[test]
    fn test_toggle_sign_keeps_typed_digits() {
        let mut c = typed("123456789.12345");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "-123456789.12345");
        assert_eq!(c.state(), EntryState::Entering);

        // sign counts towards the digit cap
        let mut c = typed("12345678901234 +/- 5");
        assert_eq!(c.display().mantissa(), "-12345678901234");
        c.toggle_sign();
        c.append_digit_or_decimal('5');
        assert_eq!(c.display().mantissa(), "123456789012345");
    }

    #[test]
    fn test_toggle_sign_trailing_decimal_point() {
        let c = typed("5. +/- 2");
        assert_eq!(c.display().mantissa(), "-5.2");
    }

    #[test]
    fn test_toggle_sign_zero_is_noop() {
        let mut c = calc();
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "0");
        let mut c = typed("0.");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "0.");
    }

    #[test]
    fn test_toggle_sign_exponent() {
        let mut c = typed("5 EXP 12");
        c.toggle_sign();
        assert_eq!(c.display().exponent(), "E-12");
        c.toggle_sign();
        assert_eq!(c.display().exponent(), "E+12");
    }

    #[test]
    fn test_toggle_sign_placeholder_stays_positive() {
        let mut c = typed("5 EXP");
        c.toggle_sign();
        assert_eq!(c.display().exponent(), "E+0");
    }

    #[test]
    fn test_toggle_sign_result() {
        let mut c = typed("2*3=");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "-6");
        assert_eq!(c.state(), EntryState::ResultDisplayed);
    }

    #[test]
    fn test_toggle_sign_after_operator_negates_next_operand() {
        let c = typed("5 + +/- =");
        assert_eq!(c.display().mantissa(), "0");
    }

    #[test]
    fn test_typed_overflow_shows_sentinel() {
        let c = typed("9 EXP 999 =");
        assert_eq!(shown(&c), ("OvFlow", "", ""));
        assert_eq!(c.state(), EntryState::ResultDisplayed);

        let c = typed("9 EXP 999 * 2 =");
        assert_eq!(shown(&c), ("OvFlow", "", ""));
        assert!(c.evaluator().is_empty());
    }

    #[test]
    fn test_typed_overflow_as_first_operand() {
        let c = typed("9 EXP 999 +");
        assert_eq!(shown(&c), ("9", "+", "E+999"));
        assert_eq!(c.state(), EntryState::OperatorPending);
        assert_eq!(c.evaluator().operand_count(), 1);
    }

    #[test]
    fn test_toggle_sign_overflow_ignored() {
        let mut c = typed("9 EXP 300 * 9 EXP 300 =");
        c.toggle_sign();
        assert_eq!(c.display().mantissa(), "OvFlow");
    }

    // ===== All-clear tests =====

    #[test]
    fn test_all_clear_resets_everything() {
        let mut c = typed("12+3* 5 EXP 2");
        c.all_clear();
        assert_eq!(shown(&c), ("0", "", ""));
        assert_eq!(c.state(), EntryState::Entering);
        assert!(c.evaluator().is_empty());
    }

    // ===== Dispatch tests =====

    #[test]
    fn test_type_keys_rejects_unknown_without_applying() {
        let mut c = calc();
        assert!(c.type_keys("12 % 3").is_err());
        assert_eq!(c.display().mantissa(), "0");
    }

    #[test]
    fn test_into_display() {
        let display = typed("7").into_display();
        assert_eq!(display.mantissa, "7");
    }
}
