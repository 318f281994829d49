//! Global error type.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Config(#[from] crate::config::Error),

    #[error("{0}")]
    Template(#[from] crate::view::template::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to \"{0}\" failed with status {1}")]
    Status(String, u16),

    #[error("request to \"{0}\" was cancelled by \"{1}\"")]
    Cancelled(String, &'static str),

    #[error("malformed percent-encoding in \"{0}\"")]
    MalformedEncoding(String),

    #[error("\"{0}\" is not a date we know how to read")]
    InvalidDate(String),

    #[error("failed to format a date, error: \"{0}\"")]
    TimeFormat(#[from] time::error::Format),

    #[error("{0}")]
    Error(#[from] Box<dyn std::error::Error + Sync + Send>),
}
