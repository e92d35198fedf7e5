use std::sync::Arc;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use crate::core::AppState;
use crate::errors::AppError;
use crate::login::login_service::{LoginInput, LoginOutcome, LoginService};
use crate::login::model::LoginScreen;
use crate::session::{clear_token_cookie, create_token_cookie, extract_token_from_cookies};

#[derive(Debug, Deserialize)]
pub struct LoginFormInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFormInput {
    fn resolve(self) -> LoginInput {
        LoginInput {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

pub async fn handle_login_screen() -> Json<LoginScreen> {
    Json(LoginScreen::blank())
}

pub async fn handle_login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginFormInput>,
) -> Result<Response, AppError> {
    match LoginService::submit(state, form.resolve()).await {
        LoginOutcome::Authenticated { token } => {
            let cookie = HeaderValue::from_str(&create_token_cookie(&token))
                .map_err(|err| AppError::Unexpected(format!("Unusable token cookie: {}", err)))?;
            let mut response = Redirect::to("/users").into_response();
            response.headers_mut().insert(header::SET_COOKIE, cookie);
            Ok(response)
        }
        LoginOutcome::Retry(screen) => Ok(Json(screen).into_response()),
    }
}

pub async fn handle_logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    LoginService::logout(state, extract_token_from_cookies(&headers)).await;
    let cookie = HeaderValue::from_str(&clear_token_cookie())
        .map_err(|err| AppError::Unexpected(format!("Unusable token cookie: {}", err)))?;
    let mut response = Redirect::to("/login").into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}
