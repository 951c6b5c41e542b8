use crate::core::domain::services::HashStrategy;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a, the ring's default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aHasher;

impl HashStrategy for Fnv1aHasher {
    #[inline]
    fn hash(&self, key: &str) -> u32 {
        key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ byte as u32).wrapping_mul(FNV_PRIME)
        })
    }
}
