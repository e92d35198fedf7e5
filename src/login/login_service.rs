use std::sync::Arc;
use tracing::warn;
use crate::core::AppState;
use crate::directory::{Credentials, DirectoryError};
use crate::login::model::{LoginFieldErrors, LoginScreen};
use crate::session::{Notice, NoticeArea};

#[derive(Debug, Clone, PartialEq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub enum LoginOutcome {
    /// The directory issued a token, the caller sets the cookie and
    /// moves on to the user list.
    Authenticated { token: String },
    /// Wrong input or a failed exchange, the sign in screen renders again.
    Retry(LoginScreen),
}

pub struct LoginService;

impl LoginService {

    pub async fn submit(state: Arc<AppState>, input: LoginInput) -> LoginOutcome {
        let errors = validate_login(&input);
        if !errors.is_clean() {
            //nothing leaves the console until both fields are filled
            return LoginOutcome::Retry(LoginScreen::with_form(
                input.email,
                errors,
                NoticeArea::empty(),
            ));
        }

        let credentials = Credentials {
            email: input.email.clone(),
            password: input.password,
        };
        match state.directory.login(&credentials).await {
            Ok(token) => {
                state.sessions.start_session(&token).await;
                state.sessions
                    .push_notice(&token, Notice::success("Login successful!"))
                    .await;
                LoginOutcome::Authenticated { token }
            }
            Err(DirectoryError::RejectedLogin { message }) => {
                let reason = message.unwrap_or_else(|| "Login failed".to_string());
                LoginOutcome::Retry(LoginScreen::with_form(
                    input.email,
                    LoginFieldErrors::default(),
                    NoticeArea::new(vec![Notice::error(reason)]),
                ))
            }
            Err(err) => {
                warn!("Token exchange failed: {}", err);
                LoginOutcome::Retry(LoginScreen::with_form(
                    input.email,
                    LoginFieldErrors::default(),
                    NoticeArea::new(vec![Notice::error("Something went wrong. Try again!")]),
                ))
            }
        }
    }

    /// Forgets the session record. The directory has no logout call, the
    /// token simply stops being presented.
    pub async fn logout(state: Arc<AppState>, token: Option<String>) {
        if let Some(token) = token {
            state.sessions.drop_session(&token).await;
        }
    }
}

pub fn validate_login(input: &LoginInput) -> LoginFieldErrors {
    let mut errors = LoginFieldErrors::default();
    if input.email.is_empty() {
        errors.email = Some("Email is required".to_string());
    }
    if input.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    }
    errors
}
