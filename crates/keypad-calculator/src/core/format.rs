//! Calculator-style number rendering
//!
//! A value is split into the two display strings a calculator shows: the
//! mantissa and an optional exponent (`E+007`). Values that would not fit the
//! digit budget, or that sit below the underflow threshold, switch to
//! scientific form. NaN and infinity render as sentinel texts.

use serde::{Deserialize, Serialize};

/// Formatting limits and sentinel texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Widest integer part (sign included) shown in fixed form
    pub max_digits: usize,
    /// Exponents are clamped to `[-exponent_limit, exponent_limit]`
    pub exponent_limit: i32,
    /// Non-zero magnitudes below this always render scientifically
    pub underflow_threshold: f64,
    /// Fractional digits rendered before trimming in fixed form
    pub fixed_precision: usize,
    /// Fractional mantissa digits rendered before trimming in scientific form
    pub scientific_precision: usize,
    /// Leading fractional zeros that force scientific form
    pub leading_zero_limit: usize,
    /// Shown for NaN (division by zero)
    pub nan_text: String,
    /// Shown for infinite results
    pub overflow_text: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_digits: 15,
            exponent_limit: 999,
            underflow_threshold: 1e-13,
            fixed_precision: 15,
            scientific_precision: 13,
            leading_zero_limit: 13,
            nan_text: "NaN".to_string(),
            overflow_text: "OvFlow".to_string(),
        }
    }
}

/// A value rendered for the display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rendered {
    /// Mantissa text
    pub mantissa: String,
    /// Exponent text (`E+007`), empty in fixed form
    pub exponent: String,
}

impl Rendered {
    /// A fixed-form rendering with no exponent
    #[must_use]
    pub fn fixed(mantissa: impl Into<String>) -> Self {
        Self {
            mantissa: mantissa.into(),
            exponent: String::new(),
        }
    }

    /// True when an exponent is shown
    #[must_use]
    pub fn is_scientific(&self) -> bool {
        !self.exponent.is_empty()
    }
}

/// Stateless number formatter
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Creates a formatter with custom limits
    #[must_use]
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Returns the formatter's limits
    #[must_use]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders a computed result, choosing fixed or scientific form
    #[must_use]
    pub fn format(&self, value: f64) -> Rendered {
        if !value.is_finite() {
            return Rendered::fixed(self.sentinel(value));
        }
        if value != 0.0 && value.abs() < self.config.underflow_threshold {
            return self.format_scientific(value);
        }

        let fixed = self.format_fixed(value);
        if self.needs_scientific(&fixed) {
            self.format_scientific(value)
        } else {
            Rendered::fixed(fixed)
        }
    }

    /// Fixed-point text: integers without a decimal point, everything else
    /// with trailing zeros trimmed
    #[must_use]
    pub fn format_fixed(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.sentinel(value).to_string();
        }
        if value == 0.0 {
            // covers -0.0
            return "0".to_string();
        }
        if value == value.trunc() {
            format!("{value:.0}")
        } else {
            let text = format!("{value:.prec$}", prec = self.config.fixed_precision);
            trim_trailing_zeros(&text)
        }
    }

    /// True when fixed text is too wide, or too small to read, for the display
    #[must_use]
    pub fn needs_scientific(&self, fixed: &str) -> bool {
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed, None),
        };

        if integer.chars().count() > self.config.max_digits {
            return true;
        }

        let limit = self.config.leading_zero_limit;
        integer.trim_start_matches('-') == "0"
            && fraction.is_some_and(|f| {
                f.len() >= limit && f.bytes().take(limit).all(|b| b == b'0')
            })
    }

    /// Scientific rendering: trimmed mantissa plus a clamped, signed exponent
    #[must_use]
    pub fn format_scientific(&self, value: f64) -> Rendered {
        if !value.is_finite() {
            return Rendered::fixed(self.sentinel(value));
        }

        let text = format!("{value:.prec$e}", prec = self.config.scientific_precision);
        let Some((mantissa, exponent)) = text.split_once('e') else {
            return Rendered::fixed(trim_trailing_zeros(&text));
        };
        let exponent = exponent.parse::<i32>().unwrap_or(0);

        Rendered {
            mantissa: trim_trailing_zeros(mantissa),
            exponent: self.format_exponent(exponent),
        }
    }

    /// `E` plus the exponent clamped to the limit, signed, at least three digits
    #[must_use]
    pub fn format_exponent(&self, exponent: i32) -> String {
        let limit = self.config.exponent_limit.abs();
        format!("E{:+04}", exponent.clamp(-limit, limit))
    }

    fn sentinel(&self, value: f64) -> &str {
        if value.is_nan() {
            &self.config.nan_text
        } else {
            &self.config.overflow_text
        }
    }
}

/// Strips trailing fractional zeros and a dangling decimal point.
///
/// When the text carries an exponent marker (`e` or `E`), only the mantissa
/// is trimmed; the exponent is re-appended untouched. Text without a decimal
/// point is returned as is.
#[must_use]
pub fn trim_trailing_zeros(text: &str) -> String {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };

    if !mantissa.contains('.') {
        return text.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    format!("{trimmed}{exponent}")
}
