use std::sync::Arc;
use axum::Router;
use axum::routing::get;
use crate::core::AppState;
use crate::editing::handler::{handle_edit_form, handle_edit_submit};

pub fn create_editing_routes() -> Router<Arc<AppState>> {
    Router::new().route("/users/edit/{user_id}", get(handle_edit_form).post(handle_edit_submit))
}
