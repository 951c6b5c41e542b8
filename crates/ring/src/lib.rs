//! Consistent-hashing ring that maps string keys onto a dynamic set of nodes.
//!
//! Each node is projected onto a 32-bit ring through `replicas` virtual nodes.
//! A key belongs to the first ring point clockwise from its own hash, wrapping
//! past the largest point back to the smallest one.

pub mod core;
pub mod infrastructure;

#[cfg(test)]
mod tests;

pub use crate::core::domain::models::{RingError, RingResult, VirtualNode};
pub use crate::core::domain::services::HashStrategy;
pub use crate::core::services::HashRing;
pub use crate::infrastructure::adapters::hashers::{Crc32Hasher, Fnv1aHasher, HashKind};
