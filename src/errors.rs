use std::fmt;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{info, warn};

/// A single structural rule broken by a request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MaxLength(usize),
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "'{}' is required", self.field),
            Rule::MaxLength(max) => {
                write!(f, "'{}' must be at most {} characters", self.field, max)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("method {0} is not allowed, use POST")]
    MethodNotSupported(String),
    #[error("could not decode JSON body: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("validation failed: {}", join_violations(.0))]
    ValidationError(Vec<FieldViolation>),
    #[error("invalid 'nascimento' {0:?}, expected YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error(
        "invalid stack item {value:?} at index {index}, \
         items must be non-empty and at most 32 characters"
    )]
    InvalidStackItem { index: usize, value: String },
    #[error("nickname {0:?} already exists")]
    DuplicateNickname(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotSupported(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedInput(_)
            | ApiError::ValidationError(_)
            | ApiError::InvalidDateFormat(_)
            | ApiError::InvalidStackItem { .. } => StatusCode::BAD_REQUEST,
            ApiError::DuplicateNickname(_) => StatusCode::CONFLICT,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MethodNotSupported(_) => "method_not_supported",
            ApiError::MalformedInput(_) => "malformed_input",
            ApiError::ValidationError(_) => "validation_error",
            ApiError::InvalidDateFormat(_) => "invalid_date_format",
            ApiError::InvalidStackItem { .. } => "invalid_stack_item",
            ApiError::DuplicateNickname(_) => "duplicate_nickname",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status == StatusCode::CONFLICT {
            warn!(kind = self.kind(), error = %msg, "request rejected");
        } else {
            info!(kind = self.kind(), error = %msg, "request rejected");
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            msg,
        )
            .into_response()
    }
}
