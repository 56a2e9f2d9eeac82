//! Error types for the ProCompare CLI and proxy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProCompareError>;

#[derive(Error, Debug)]
pub enum ProCompareError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("API request failed with status {code}")]
    Status { code: u16 },

    #[error("Backend URL not provided and {env_var} environment variable not set")]
    MissingBackendUrl { env_var: String },

    #[error("Username not provided and {env_var} environment variable not set")]
    MissingUsername { env_var: String },

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Local store error: {message}")]
    Store { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid sort direction: {value}")]
    InvalidSortDir { value: String },
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ProCompareError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ProCompareError::Store {
            message: err.to_string(),
        }
    }
}
