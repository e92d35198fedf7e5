use http::StatusCode;
use snafu::Snafu;

/// Ways a directory call can go wrong. None of these are fatal for the
/// console, the controllers turn them into notices on the rendered screen.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DirectoryError {
    #[snafu(display("directory request failed: {source}"))]
    Transport { source: reqwest::Error },

    #[snafu(display("directory answered with status {status}"))]
    UnexpectedStatus { status: StatusCode },

    #[snafu(display("no such user in the directory"))]
    NotFound,

    #[snafu(display("directory response could not be decoded: {source}"))]
    Decode { source: reqwest::Error },

    #[snafu(display("directory rejected the credentials"))]
    RejectedLogin { message: Option<String> },
}
