pub mod crc32;
pub mod fnv;

use std::{fmt, str::FromStr, sync::Arc};

pub use crc32::Crc32Hasher;
pub use fnv::Fnv1aHasher;

use crate::core::domain::{models::RingError, services::HashStrategy};

/// Built-in strategies selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashKind {
    #[default]
    Fnv1a,
    Crc32,
}

impl HashKind {
    pub fn strategy(self) -> Arc<dyn HashStrategy> {
        match self {
            HashKind::Fnv1a => Arc::new(Fnv1aHasher),
            HashKind::Crc32 => Arc::new(Crc32Hasher),
        }
    }
}

impl FromStr for HashKind {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fnv" | "fnv1a" | "fnv-1a" => Ok(HashKind::Fnv1a),
            "crc32" | "crc-32" => Ok(HashKind::Crc32),
            other => Err(RingError::UnknownHashKind(other.to_string())),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashKind::Fnv1a => f.write_str("fnv1a"),
            HashKind::Crc32 => f.write_str("crc32"),
        }
    }
}
