use hash_ring::RingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Ring error: {0}")]
    Ring(#[from] RingError),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}
