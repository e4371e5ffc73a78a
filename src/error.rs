use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed with status {status}")]
    Request { status: u16, message: Option<String> },

    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to render output: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

impl DirectoryError {
    /// Message shown to the user when a registration request fails.
    ///
    /// Non-2xx responses prefer the server-provided text; everything else
    /// falls back to the error's own description.
    pub fn user_message(&self) -> String {
        match self {
            DirectoryError::Request {
                message: Some(message),
                ..
            } => message.clone(),
            DirectoryError::Request { message: None, .. } => {
                crate::constants::GENERIC_REGISTRATION_FAILURE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Local input problems caught before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingName,

    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingRegion,

    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingEmail,

    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
