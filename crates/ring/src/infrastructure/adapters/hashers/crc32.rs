use crate::core::domain::services::HashStrategy;

/// CRC-32 (IEEE), for rings shared with systems that place nodes by CRC32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Hasher;

impl HashStrategy for Crc32Hasher {
    #[inline]
    fn hash(&self, key: &str) -> u32 {
        crc32fast::hash(key.as_bytes())
    }
}
