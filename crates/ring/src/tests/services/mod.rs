pub mod hashers_test;
