mod edit_service;
mod handler;
mod model;
mod routes;

pub use edit_service::{EditInput, EditOutcome, EditService, validate_edit};
pub use handler::EditFormInput;
pub use model::*;
pub use routes::create_editing_routes;
