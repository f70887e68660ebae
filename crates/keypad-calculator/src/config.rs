//! Calculator configuration
//!
//! Defaults reproduce a 15-digit desk calculator. A JSON file can override
//! any subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::FormatConfig;
use crate::core::{CalcError, CalcResult};

/// Display and entry limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters the mantissa may hold while typing, and the widest fixed
    /// integer part a result may show
    pub max_digits: usize,
    /// Characters the exponent field may hold while typing, marker included
    pub max_exponent_len: usize,
    /// Result exponents are clamped to `[-exponent_limit, exponent_limit]`
    pub exponent_limit: i32,
    /// Non-zero magnitudes below this display scientifically
    pub underflow_threshold: f64,
    /// Fractional digits rendered for fixed results
    pub fixed_precision: usize,
    /// Fractional mantissa digits rendered for scientific results
    pub scientific_precision: usize,
    /// Leading fractional zeros that force scientific form
    pub leading_zero_limit: usize,
    /// Display text for NaN
    pub nan_text: String,
    /// Display text for infinite results
    pub overflow_text: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let format = FormatConfig::default();
        Self {
            max_digits: format.max_digits,
            max_exponent_len: 5,
            exponent_limit: format.exponent_limit,
            underflow_threshold: format.underflow_threshold,
            fixed_precision: format.fixed_precision,
            scientific_precision: format.scientific_precision,
            leading_zero_limit: format.leading_zero_limit,
            nan_text: format.nan_text,
            overflow_text: format.overflow_text,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mantissa digit cap
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Set the exponent field width
    #[must_use]
    pub const fn with_max_exponent_len(mut self, len: usize) -> Self {
        self.max_exponent_len = len;
        self
    }

    /// Set the exponent clamp
    #[must_use]
    pub const fn with_exponent_limit(mut self, limit: i32) -> Self {
        self.exponent_limit = limit;
        self
    }

    /// Set the underflow threshold
    #[must_use]
    pub fn with_underflow_threshold(mut self, threshold: f64) -> Self {
        self.underflow_threshold = threshold;
        self
    }

    /// Set the NaN and overflow sentinel texts
    #[must_use]
    pub fn with_sentinels(
        mut self,
        nan_text: impl Into<String>,
        overflow_text: impl Into<String>,
    ) -> Self {
        self.nan_text = nan_text.into();
        self.overflow_text = overflow_text.into();
        self
    }

    /// Parses and validates a JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that every limit is usable
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_digits == 0 {
            return Err(CalcError::config("max_digits must be positive"));
        }
        if self.max_exponent_len < 3 {
            return Err(CalcError::config(
                "max_exponent_len must leave room for the E+0 placeholder",
            ));
        }
        if self.exponent_limit <= 0 {
            return Err(CalcError::config("exponent_limit must be positive"));
        }
        if !self.underflow_threshold.is_finite() || self.underflow_threshold <= 0.0 {
            return Err(CalcError::config(
                "underflow_threshold must be a positive finite number",
            ));
        }
        if self.leading_zero_limit == 0 {
            return Err(CalcError::config("leading_zero_limit must be positive"));
        }
        for (name, text) in [
            ("nan_text", &self.nan_text),
            ("overflow_text", &self.overflow_text),
        ] {
            if text.is_empty() {
                return Err(CalcError::config(format!("{name} must not be empty")));
            }
        }
        // a numeric overflow marker would be re-entered as an operand
        if self.overflow_text.parse::<f64>().is_ok() {
            return Err(CalcError::config("overflow_text must not read as a number"));
        }
        if self.nan_text.parse::<f64>().is_ok_and(|v| !v.is_nan()) {
            return Err(CalcError::config("nan_text must not read as a number"));
        }
        Ok(())
    }

    /// The subset the display formatter needs
    #[must_use]
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            max_digits: self.max_digits,
            exponent_limit: self.exponent_limit,
            underflow_threshold: self.underflow_threshold,
            fixed_precision: self.fixed_precision,
            scientific_precision: self.scientific_precision,
            leading_zero_limit: self.leading_zero_limit,
            nan_text: self.nan_text.clone(),
            overflow_text: self.overflow_text.clone(),
        }
    }
}
