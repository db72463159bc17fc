use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid {kind} record '{id}': {reason}")]
    Validation {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("Preference store error: {0}")]
    Preferences(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn validation(kind: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
