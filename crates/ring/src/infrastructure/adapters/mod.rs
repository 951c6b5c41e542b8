pub mod hashers;
