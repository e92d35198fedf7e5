use serde::Serialize;
use crate::session::NoticeArea;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LoginFieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFieldErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// The sign in form. The password is never carried back into the
/// rendered form, only the email survives a failed attempt.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginForm {
    pub action: String,
    pub email: String,
    pub email_placeholder: String,
    pub password_placeholder: String,
    pub errors: LoginFieldErrors,
    pub submit_label: String,
}

impl LoginForm {
    fn new(email: String, errors: LoginFieldErrors) -> Self {
        LoginForm {
            action: "/login".to_string(),
            email,
            email_placeholder: "Email Address".to_string(),
            password_placeholder: "Password".to_string(),
            errors,
            submit_label: "Sign In".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginScreen {
    pub heading: String,
    pub subtitle: String,
    pub form: LoginForm,
    pub notices: NoticeArea,
}

impl LoginScreen {
    pub fn blank() -> Self {
        LoginScreen::with_form(String::new(), LoginFieldErrors::default(), NoticeArea::empty())
    }

    pub fn with_form(email: String, errors: LoginFieldErrors, notices: NoticeArea) -> Self {
        LoginScreen {
            heading: "Welcome Back!".to_string(),
            subtitle: "Please sign in to your account".to_string(),
            form: LoginForm::new(email, errors),
            notices,
        }
    }
}
