use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LinkedIn returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, LinkedInError>;
