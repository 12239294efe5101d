use thiserror::Error;

#[derive(Debug, Error)]
pub enum MimeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("content too short: need at least {needed} bytes to sniff a signature")]
    TooShort { needed: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid mime table: {0}")]
    InvalidTable(String),

    #[error("unknown mime category: {0:?}")]
    UnknownCategory(String),
}

pub type Result<T, E = MimeError> = std::result::Result<T, E>;
