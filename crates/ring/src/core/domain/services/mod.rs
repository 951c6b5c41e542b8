pub mod hash_strategy;

pub use hash_strategy::HashStrategy;
