use std::sync::Arc;
use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use crate::core::AppState;
use crate::editing::create_editing_routes;
use crate::listing::create_listing_routes;
use crate::login::create_login_routes;
use crate::session::require_session;

/**
 * Initializing the console routes.
 */
pub async fn init_router(app_state: AppState) -> Router {
    let public_routing = Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/health", get(|| async { (StatusCode::OK, "Healthy").into_response() }))
        .merge(create_login_routes());

    let protected_routing = Router::new() //add new routes here
        .merge(create_listing_routes())
        .merge(create_editing_routes())

        //layering bottom to top middleware
        .layer(
            ServiceBuilder::new() //layering top to bottom middleware
                .layer(TraceLayer::new_for_http()) //1
                .layer(middleware::from_fn(require_session)) //2
        );
    public_routing.merge(protected_routing).with_state(Arc::new(app_state))
}
