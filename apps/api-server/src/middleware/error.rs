//! Error handling - RFC 7807 compliant responses.
//!
//! Validation and malformed input map to 400 with field-level errors.
//! Service failures that reach this type are unexpected and map to a bare
//! 500; application exceptions never get here (handlers answer those with an
//! error envelope).

use std::collections::BTreeMap;

use actix_web::{HttpResponse, ResponseError, error, http::StatusCode, web};
use validator::{Validate, ValidationErrors};

use bookstore_core::ServiceError;
use bookstore_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Malformed {field}: {message}")]
    Malformed { field: &'static str, message: String },

    #[error("Unhandled service failure: {0}")]
    Service(#[from] ServiceError),
}

impl AppError {
    fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            AppError::Validation(errors) => errors
                .field_errors()
                .into_iter()
                .map(|(field, errs)| {
                    let messages = errs
                        .iter()
                        .map(|e| match &e.message {
                            Some(msg) => msg.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    (camel_case(&field), messages)
                })
                .collect(),
            AppError::Malformed { field, message } => {
                BTreeMap::from([(field.to_string(), vec![message.clone()])])
            }
            AppError::Service(_) => BTreeMap::new(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Malformed { .. } => StatusCode::BAD_REQUEST,
            AppError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Service(err) => {
                tracing::error!(error = %err, "Unhandled service failure");
                ErrorResponse::internal_error()
            }
            _ => ErrorResponse::validation(self.field_errors()),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Check a bound model against its declared constraints.
pub fn validated<T: Validate>(model: T) -> AppResult<T> {
    model.validate()?;
    Ok(model)
}

/// JSON body extractor config: parse failures become 400 problem details.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            AppError::Malformed {
                field: "body",
                message,
            }
            .error_response(),
        )
        .into()
    })
}

/// Path extractor config: an unparseable route identifier is a 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            AppError::Malformed {
                field: "id",
                message,
            }
            .error_response(),
        )
        .into()
    })
}

/// `category_id` -> `categoryId`, to match the wire names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for (i, c) in field.chars().enumerate() {
        if c == '_' && i > 0 && !field.starts_with('_') {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("category_id"), "categoryId");
        assert_eq!(camel_case("confirm_password"), "confirmPassword");
        assert_eq!(camel_case("title"), "title");
        assert_eq!(camel_case("__all__"), "__all__");
    }

    #[test]
    fn test_service_error_is_internal() {
        let err = AppError::from(ServiceError::Repository(
            bookstore_core::RepoError::Connection("refused".to_string()),
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
