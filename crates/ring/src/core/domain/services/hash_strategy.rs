/// Maps a string onto the 32-bit ring.
///
/// Must be deterministic: the same input always yields the same value, otherwise
/// virtual nodes cannot be found again on removal and lookups are not repeatable.
pub trait HashStrategy: Send + Sync {
    fn hash(&self, key: &str) -> u32;
}

impl<F> HashStrategy for F
where
    F: Fn(&str) -> u32 + Send + Sync,
{
    #[inline]
    fn hash(&self, key: &str) -> u32 {
        self(key)
    }
}
