use thiserror::Error;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum UtilkitError {
    /// HTTP request failed (network, protocol or body read issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// The server returned a non-2xx status where a success body was required.
    /// Contains the HTTP status code and raw body.
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus { code: u16, body: String },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The origin handed to the URL joiner is not an absolute URL with a host.
    #[error("Invalid origin URL `{0}`")]
    InvalidOrigin(String),

    #[error("Invalid proxy URL `{url}`: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A row handed to `slice_to_map` does not have one cell per column.
    #[error("Column names length ({columns}) and record length ({found}) not consistent at row {row}")]
    LengthMismatch {
        row: usize,
        columns: usize,
        found: usize,
    },

    #[error("Unknown status code: {0}")]
    UnknownStatus(i32),

    #[error("Unknown outcome `{0}`")]
    UnknownOutcome(String),
}

pub type Result<T> = std::result::Result<T, UtilkitError>;
