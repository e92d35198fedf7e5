use std::sync::Arc;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form, Json};
use serde::Deserialize;
use crate::core::AppState;
use crate::editing::edit_service::{EditInput, EditOutcome, EditService};
use crate::editing::model::EditUserScreen;
use crate::session::SessionToken;

/// Raw form body of the editor. Browsers send empty inputs as empty
/// strings, but every field stays optional so a stripped field does not
/// reject the whole request.
#[derive(Debug, Deserialize)]
pub struct EditFormInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl EditFormInput {
    fn resolve(self) -> EditInput {
        EditInput {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

pub async fn handle_edit_form(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Path(user_id): Path<i64>,
) -> Json<EditUserScreen> {
    Json(EditService::load_editor(state, &token, user_id).await)
}

pub async fn handle_edit_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Path(user_id): Path<i64>,
    Form(form): Form<EditFormInput>,
) -> Response {
    match EditService::submit(state, &token, user_id, form.resolve()).await {
        EditOutcome::Saved => Redirect::to("/users").into_response(),
        EditOutcome::Rework(screen) => Json(screen).into_response(),
    }
}
