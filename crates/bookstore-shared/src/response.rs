//! Standardized API response types.
//!
//! Every service call answers with a [`ServiceResponseDto`]. Failures that
//! never reach a service (validation, authentication, unexpected faults) are
//! reported as RFC 7807 [`ErrorResponse`] bodies instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome carried by the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Success,
    Error,
}

/// Uniform success/failure envelope returned by every service operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponseDto<T = ()> {
    pub status_code: ResponseCode,
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ServiceResponseDto<T> {
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, "Request successful")
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: ResponseCode::Success,
            status_message: message.into(),
            data: Some(data),
        }
    }

    /// Success without a payload (e.g. deletes).
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status_code: ResponseCode::Success,
            status_message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: ResponseCode::Error,
            status_message: message.into(),
            data: None,
        }
    }

    /// Error envelope that still carries a payload, used when the payload
    /// holds its own domain status.
    pub fn error_with_data(data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: ResponseCode::Error,
            status_message: message.into(),
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == ResponseCode::Success
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-level validation messages keyed by field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }

    // Common error constructors
    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(400, "One or more validation errors occurred.").with_errors(errors)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, "Unauthorized").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
