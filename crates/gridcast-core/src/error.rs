use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown session type: {0}")]
    UnknownSessionType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
