use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("ron error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("ron serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
