use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid numeric objective: {0}")]
    InvalidObjective(i64),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
