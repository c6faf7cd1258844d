use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Upload error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl WallError {
    /// True for errors caused by what the client sent rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            WallError::Validation(_) | WallError::PayloadTooLarge(_) | WallError::Multipart(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WallError>;
