mod client;
mod error;
mod model;

pub use client::DirectoryClient;
pub use error::DirectoryError;
pub use model::*;
