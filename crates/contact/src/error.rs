#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("malformed validation body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContactError>;
