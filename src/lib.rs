pub mod core;
pub mod directory;
pub mod editing;
pub mod errors;
pub mod listing;
pub mod login;
pub mod router;
pub mod session;
pub mod welcome;
