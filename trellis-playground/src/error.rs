//! Playground error type.

use ariadom::KeyParseError;
use thiserror::Error;
use trellis::DateError;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Key(#[from] KeyParseError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("unknown demo '{0}', run `trellis list` for the catalogue")]
    UnknownDemo(String),

    #[error("no element with id '{0}' on the page")]
    UnknownTarget(String),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
