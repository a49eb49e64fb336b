use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the configuration document.
///
/// A missing document is not an error; it is treated as an empty document.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document exists but could not be read.
    #[error("Failed to read configuration document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    ///
    /// The file is left untouched so nothing the bot relies on is lost.
    #[error("Configuration document {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the temporary file or renaming it over the document failed.
    #[error("Failed to write configuration document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
