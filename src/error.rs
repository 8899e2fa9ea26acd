use thiserror::Error;

#[derive(Debug, Error)]
pub enum BruteError {
    #[error("Cannot find file '{0}'")]
    FileNotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    UnexpectedStatus(u16),
    #[error("CSRF token mismatch or session expired (last attempt {username}:{password})")]
    SessionInvalidated { username: String, password: String },
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid cookie '{0}', expected NAME=VALUE")]
    InvalidCookie(String),
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, BruteError>;
