mod cleanup;
mod cookie;
mod flash;
mod guard;
mod registry;

pub use cleanup::periodic_cleanup_task;
pub use cookie::{TOKEN_COOKIE, clear_token_cookie, create_token_cookie, extract_token_from_cookies};
pub use flash::{Notice, NoticeArea, NoticeLevel};
pub use guard::{SessionToken, require_session};
pub use registry::{ConsoleSession, DeletePermit, SessionRegistry};
