use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pages;

/// Error taxonomy for the whole app. Auth failures are rendered inline on
/// the login page; validation failures carry an `error` JSON field;
/// everything unexpected collapses to a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad credentials. One generic message for unknown user and wrong
    /// password alike, so accounts cannot be enumerated.
    #[error("Please enter correct credentials...")]
    Auth,
    /// Missing or unparseable request body.
    #[error("{0}")]
    Validation(String),
    /// Non-numeric or missing form value.
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Rendered inline on the re-rendered login page; there is no
            // dedicated error page.
            AppError::Auth => {
                Html(pages::login_page(Some(&self.to_string()))).into_response()
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_message_is_generic() {
        assert_eq!(
            AppError::Auth.to_string(),
            "Please enter correct credentials..."
        );
    }

    #[test]
    fn auth_failure_rerenders_login_page() {
        let response = AppError::Auth.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::Validation("No data provided".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
