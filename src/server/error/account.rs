use std::path::PathBuf;
use thiserror::Error;

/// Failures loading the account table.
///
/// These never reach the HTTP layer: the account resolver logs them and falls
/// back to an empty table, so the login simply fails.
#[derive(Error, Debug)]
pub enum AccountSourceError {
    #[error("Failed to read account file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Account file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Connection failure, timeout, or an undecodable response body.
    #[error("Account service request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Account service {url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
