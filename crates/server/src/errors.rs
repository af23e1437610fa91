use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use models::FieldViolation;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const VALIDATION_ERROR: &str = "Validation Error";

/// Error envelope shared by every endpoint:
/// `{"error", "status_code", "timestamp"}` plus `detail` for validation failures.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<Vec<FieldViolation>>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into(), detail: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: VALIDATION_ERROR.into(),
            detail: Some(violations),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.error, "request failed");
        } else {
            warn!(status = %self.status, error = %self.error, "request rejected");
        }
        let mut body = serde_json::json!({
            "error": self.error,
            "status_code": self.status.as_u16(),
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::json!(detail);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(m) => Self::validation(m.violations().to_vec()),
            ServiceError::NotFound(msg) => Self::not_found(msg),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::validation(vec![violation_from_decode(&e.body_text())]),
            JsonRejection::JsonSyntaxError(e) => {
                Self::validation(vec![FieldViolation::new("body", strip_decode_prefix(&e.body_text()))])
            }
            other => Self::new(other.status(), other.body_text()),
        }
    }
}

fn strip_decode_prefix(text: &str) -> &str {
    text.split_once(": ").map(|(_, rest)| rest).unwrap_or(text)
}

/// Decode errors read `<prefix>: <path>: <reason>`; the path is absent when the
/// whole body has the wrong shape.
fn violation_from_decode(text: &str) -> FieldViolation {
    let inner = strip_decode_prefix(text);
    match inner.split_once(": ") {
        Some((path, reason)) if !path.is_empty() && !path.contains(' ') => FieldViolation::new(path, reason),
        _ => FieldViolation::new("body", inner),
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
