use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown theme mode: {0}")]
    UnknownThemeMode(String),

    #[error("Invalid navigation config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
