use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use crate::errors::AppError;
use crate::session::cookie::extract_token_from_cookies;

/// The signed in token, handed to protected handlers as an extension.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Lets a request through iff the token cookie is present. The token stays
/// opaque, nothing here looks at its value.
pub async fn require_session(mut request: Request, next: Next) -> Response {
    match extract_token_from_cookies(request.headers()) {
        Some(token) => {
            request.extensions_mut().insert(SessionToken(token));
            next.run(request).await
        }
        None => AppError::AuthRequired.into_response(),
    }
}
