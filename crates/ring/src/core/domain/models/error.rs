use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid key: key is empty")]
    InvalidKey,

    #[error("Ring is empty")]
    EmptyRing,

    #[error("Invalid replica count {0}: at least one replica per node is required")]
    InvalidReplicaCount(usize),

    #[error("Unknown hash kind: {0}")]
    UnknownHashKind(String),
}

pub type RingResult<T> = Result<T, RingError>;
