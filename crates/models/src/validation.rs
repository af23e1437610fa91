//! Field-level checks shared by the input types.

use serde_json::Number;

use crate::errors::{FieldViolation, ModelError};

pub const FIELD_REQUIRED: &str = "field required";
pub const MUST_NOT_BE_EMPTY: &str = "must not be empty";
pub const MUST_BE_NON_NEGATIVE: &str = "must be greater than or equal to 0";

/// Collects violations so a payload reports every bad field at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Required string with at least one character. Whitespace counts.
    pub fn required_text(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            None => {
                self.push(field, FIELD_REQUIRED);
                String::new()
            }
            Some(s) if s.is_empty() => {
                self.push(field, MUST_NOT_BE_EMPTY);
                s
            }
            Some(s) => s,
        }
    }

    /// Required number strictly greater than zero.
    pub fn positive_number(&mut self, field: &str, value: Option<f64>) -> f64 {
        match value {
            None => {
                self.push(field, FIELD_REQUIRED);
                0.0
            }
            Some(v) if !v.is_finite() => {
                self.push(field, "must be a finite number");
                v
            }
            Some(v) if v <= 0.0 => {
                self.push(field, "must be greater than 0");
                v
            }
            Some(v) => v,
        }
    }

    /// Required integer greater than or equal to zero. A float with no
    /// fractional part (`5.0`) is accepted as that integer.
    pub fn non_negative_integer(&mut self, field: &str, value: Option<Number>) -> u64 {
        let Some(n) = value else {
            self.push(field, FIELD_REQUIRED);
            return 0;
        };
        if let Some(u) = n.as_u64() {
            return u;
        }
        if n.is_i64() {
            self.push(field, MUST_BE_NON_NEGATIVE);
            return 0;
        }
        match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f >= 0.0 => f as u64,
            Some(f) if f.is_finite() && f.fract() == 0.0 => {
                self.push(field, MUST_BE_NON_NEGATIVE);
                0
            }
            _ => {
                self.push(field, "must be an integer");
                0
            }
        }
    }

    pub fn finish(self) -> Result<(), ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self.0))
        }
    }
}
