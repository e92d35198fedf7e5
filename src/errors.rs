use std::error::Error;
use std::fmt::{self, Display, Formatter};

use axum::response::{IntoResponse, Redirect, Response};
use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;

/// Envelope for anything the console cannot answer with a screen.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    timestamp: String,
    status: u16,
    error: String,
    message: String,
    error_code: ErrorCode,
}

impl ErrorResponse {
    fn of(http_status: StatusCode, message: &str, error_code: ErrorCode) -> Self {
        let reason = http_status.canonical_reason().unwrap_or("Unknown Status");
        let stamp = Utc::now().to_rfc3339();
        ErrorResponse {
            timestamp: stamp,
            status: http_status.as_u16(),
            error: reason.to_string(),
            message: message.to_string(),
            error_code,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(dead_code)]
pub enum ErrorCode {
    //session and sign in
    AuthRequired,

    //catch-all codes for the browser facing envelope
    ValidationError,
    ServiceUnavailable,
    UnexpectedError,
}

#[derive(Debug)]
pub enum AppError {
    /// A guarded screen was requested without a session cookie.
    AuthRequired,

    /// Anything the console cannot express as a screen. The message is
    /// logged, the client only sees the generic envelope.
    Unexpected(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthRequired => write!(f, "Not signed in"),
            AppError::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            //not something to report, just the way back to the sign in screen
            AppError::AuthRequired => Redirect::to("/login").into_response(),
            AppError::Unexpected(msg) => {
                tracing::error!("Unexpected error: {}", msg);
                let body = ErrorResponse::of(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error. Please try again later",
                    ErrorCode::UnexpectedError,
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_turns_into_a_login_redirect() {
        let response = AppError::AuthRequired.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/login");
    }

    #[test]
    fn unexpected_errors_render_the_envelope() {
        let response = AppError::Unexpected("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_codes_serialize_screaming() {
        let code = serde_json::to_string(&ErrorCode::UnexpectedError).expect("code should serialize");
        assert_eq!(code, "\"UNEXPECTED_ERROR\"");
    }
}
