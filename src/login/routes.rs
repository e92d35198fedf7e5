use std::sync::Arc;
use axum::Router;
use axum::routing::{get, post};
use crate::core::AppState;
use crate::login::handler::{handle_login_screen, handle_login_submit, handle_logout};

pub fn create_login_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(handle_login_screen).post(handle_login_submit))
        .route("/logout", post(handle_logout))
}
