//! Error handling for the Quire Server API
//!
//! This module contains standardized error handling for the API.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::fmt::Debug;

use crate::error::ServerError;

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        api_error_response(&self)
    }
}

/// General error response handler for API errors
/// This will convert any error into a standardized API error response
pub fn api_error_response<E: Debug + std::fmt::Display + 'static>(
    err: &E,
) -> axum::response::Response<axum::body::Body> {
    let (status_code, error_code, error_message) = match as_server_error(err) {
        Some(server_err) => status_for(server_err),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_UNKNOWN".to_string(),
            err.to_string(),
        ),
    };

    let error_response = json!({
        "error": error_message,
        "errorDetails": {
            "errorCode": error_code,
            "errorMessage": error_message,
        }
    });

    (status_code, Json(error_response)).into_response()
}

fn status_for(err: &ServerError) -> (StatusCode, String, String) {
    match err {
        ServerError::NotFound { resource, message } => (
            StatusCode::NOT_FOUND,
            format!("ERR_NOT_FOUND_{}", resource.to_uppercase()),
            message.clone(),
        ),
        ServerError::ValidationError(msg) => (
            StatusCode::BAD_REQUEST,
            "ERR_VALIDATION_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::ConfigError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_CONFIG_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::WorkflowConfigError(config_err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            config_err.error_code().to_string(),
            config_err.to_string(),
        ),
        ServerError::CatalogError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_CATALOG_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::InternalError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_INTERNAL_SERVER_ERROR".to_string(),
            msg.clone(),
        ),
    }
}

/// Helper function to convert an error to a ServerError if possible
fn as_server_error<E: Debug + std::fmt::Display + 'static>(err: &E) -> Option<&ServerError> {
    let err_any = err as &dyn std::any::Any;
    err_any.downcast_ref::<ServerError>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::CoreError;

    #[test]
    fn test_status_codes() {
        let not_found: ServerError = CoreError::UnknownWorkflow("x".to_string()).into();
        assert_eq!(api_error_response(&not_found).status(), StatusCode::NOT_FOUND);

        let paging = ServerError::ValidationError("bad page".to_string());
        assert_eq!(api_error_response(&paging).status(), StatusCode::BAD_REQUEST);

        let catalog: ServerError = CoreError::CatalogError("down".to_string()).into();
        assert_eq!(
            api_error_response(&catalog).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_foreign_errors_fall_back_to_500() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(
            api_error_response(&err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
