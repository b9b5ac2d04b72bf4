use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Unknown field key: {0}")]
    UnknownField(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
