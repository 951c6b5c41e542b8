pub mod ring;
pub mod statistics;

pub use ring::HashRing;
