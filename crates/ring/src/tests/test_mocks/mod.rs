use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{Fnv1aHasher, HashStrategy};

/// Reads `"<id>#<replica>"` backwards as a base-10 number, so `"1#1"` is 11
/// and `"5#3"` is 35. Plain keys like `"39"` hash to themselves.
pub struct ReversedDigitsHasher;

impl HashStrategy for ReversedDigitsHasher {
    fn hash(&self, key: &str) -> u32 {
        let reversed: String = key.rsplit('#').collect();
        reversed.parse().expect("numeric key")
    }
}

/// Fixed hash per input, FNV-1a for anything else. Used to force collisions.
pub struct TableHasher {
    pub table: HashMap<String, u32>,
}

impl TableHasher {
    pub fn new(entries: &[(&str, u32)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(key, hash)| (key.to_string(), *hash))
                .collect(),
        }
    }
}

impl HashStrategy for TableHasher {
    fn hash(&self, key: &str) -> u32 {
        self.table
            .get(key)
            .copied()
            .unwrap_or_else(|| Fnv1aHasher.hash(key))
    }
}

/// Records every input it hashes.
pub struct RecordingHasher {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingHasher {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl HashStrategy for RecordingHasher {
    fn hash(&self, key: &str) -> u32 {
        self.calls.lock().push(key.to_string());
        Fnv1aHasher.hash(key)
    }
}
