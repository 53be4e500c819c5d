use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("config missing required field: {0}")]
    MissingField(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no value found in environment for {0}")]
    ValueNotFound(String),

    #[error("no GitHub token found (set GH_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    #[error("value store error: {0}")]
    Store(String),

    #[error("{failed} of {total} items failed to sync")]
    SyncFailed { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
