mod handler;
mod list_service;
mod model;
mod routes;

pub use handler::{ListQueryParams, resolve_page};
pub use list_service::{DeleteOutcome, ListQuery, ListService, filter_users};
pub use model::*;
pub use routes::create_listing_routes;
