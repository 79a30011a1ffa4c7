use std::collections::HashMap;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

/// Error returned to HTTP clients. Validation failures carry a map of
/// field name to human-readable messages.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
            field_errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn unique_constraint_violation(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::CONFLICT)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string())
                    })
                    .collect::<Vec<String>>();
                (field.to_string(), messages)
            })
            .collect::<HashMap<String, Vec<String>>>();

        HttpError {
            message: "Validation failed".to_string(),
            status: StatusCode::BAD_REQUEST,
            field_errors: Some(field_errors),
        }
    }

    /// Normalize storage-layer failures into client-visible errors. Row
    /// lookups that miss become 404s, constraint violations become 4xx
    /// responses naming the problem; everything else is logged and hidden
    /// behind a generic 500.
    pub fn from_db_error(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => HttpError::not_found("Record not found"),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                HttpError::unique_constraint_violation(format!(
                    "Duplicate value violates a unique constraint: {}",
                    db_err.message()
                ))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                HttpError::bad_request("Referenced record does not exist")
            }
            _ => {
                tracing::error!("database error: {:?}", err);
                HttpError::server_error("Internal database error")
            }
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = if self.status.is_server_error() {
            "error"
        } else {
            "fail"
        };

        let body = ErrorResponse {
            status: status.to_string(),
            message: self.message,
            errors: self.field_errors,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn row_not_found_maps_to_404() {
        let err = HttpError::from_db_error(sqlx::Error::RowNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_db_errors_map_to_500() {
        let err = HttpError::from_db_error(sqlx::Error::PoolClosed);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_carry_field_messages() {
        let mut errors = ValidationErrors::new();
        let mut age_error = ValidationError::new("range");
        age_error.message = Some("Age should be greater than 18".into());
        errors.add("age", age_error);

        let err = HttpError::validation(errors);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let fields = err.field_errors.unwrap();
        assert_eq!(
            fields.get("age").unwrap(),
            &vec!["Age should be greater than 18".to_string()]
        );
    }
}
