use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransnameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("The {role} directory {path} does not exist.")]
    DirectoryNotFound { role: String, path: String },

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

pub type Result<T> = std::result::Result<T, TransnameError>;
