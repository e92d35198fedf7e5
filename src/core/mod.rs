mod config;
mod app_state;
mod paging;

pub use config::CruduiConfig;
pub use app_state::*;
pub use paging::{PageItem, pagination_window};
