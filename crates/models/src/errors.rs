use serde::Serialize;
use thiserror::Error;

/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", describe(.0))]
    Validation(Vec<FieldViolation>),
}

impl ModelError {
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ModelError::Validation(v) => v,
        }
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
