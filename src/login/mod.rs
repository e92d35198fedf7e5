mod handler;
mod login_service;
mod model;
mod routes;

pub use handler::LoginFormInput;
pub use login_service::{LoginInput, LoginOutcome, LoginService, validate_login};
pub use model::*;
pub use routes::create_login_routes;
