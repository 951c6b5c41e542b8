#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Crc32Hasher, Fnv1aHasher, HashKind, HashStrategy, RingError};

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(Fnv1aHasher.hash(""), 0x811c_9dc5);
        assert_eq!(Fnv1aHasher.hash("a"), 0xe40c_292c);
        assert_eq!(Fnv1aHasher.hash("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn crc32_matches_check_value() {
        assert_eq!(Crc32Hasher.hash("123456789"), 0xcbf4_3926);
        assert_eq!(Crc32Hasher.hash(""), 0);
    }

    #[test]
    fn closures_are_strategies() {
        let strategy: Arc<dyn HashStrategy> = Arc::new(|key: &str| key.len() as u32);
        assert_eq!(strategy.hash("abcd"), 4);
    }

    #[test]
    fn hash_kind_parses_known_names() {
        assert_eq!("fnv".parse::<HashKind>(), Ok(HashKind::Fnv1a));
        assert_eq!("FNV1A".parse::<HashKind>(), Ok(HashKind::Fnv1a));
        assert_eq!(" crc32 ".parse::<HashKind>(), Ok(HashKind::Crc32));
        assert_eq!(HashKind::default(), HashKind::Fnv1a);
    }

    #[test]
    fn hash_kind_rejects_unknown_names() {
        let err = "md5".parse::<HashKind>().unwrap_err();
        assert_eq!(err, RingError::UnknownHashKind("md5".into()));
    }

    #[test]
    fn hash_kind_builds_matching_strategy() {
        assert_eq!(HashKind::Fnv1a.strategy().hash("key"), Fnv1aHasher.hash("key"));
        assert_eq!(HashKind::Crc32.strategy().hash("key"), Crc32Hasher.hash("key"));
        assert_eq!(HashKind::Crc32.to_string(), "crc32");
    }
}
