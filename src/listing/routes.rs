use std::sync::Arc;
use axum::Router;
use axum::routing::{get, post};
use crate::core::AppState;
use crate::listing::handler::{handle_confirm_delete, handle_user_list};

pub fn create_listing_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(handle_user_list))
        .route("/users/{user_id}/delete", post(handle_confirm_delete))
}
