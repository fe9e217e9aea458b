//! Typed errors for the job-push core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobPushError {
    /// A required input file is missing
    #[error("{} not found", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not the JSON shape we expect
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config is present but unusable
    #[error("config error: {0}")]
    Config(String),

    /// Bot credentials missing from both env and secrets file
    #[error("Telegram credentials not found in env or {}", path.display())]
    MissingCredentials { path: PathBuf },

    /// A chunk could not be delivered
    #[error("delivery failed on chunk {chunk} of {total}: {reason}")]
    Delivery {
        chunk: usize,
        total: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, JobPushError>;
