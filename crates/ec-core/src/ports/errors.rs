use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ResourceApiError {
    #[error("unexpected http status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),
}
