// tests/support/mod.rs
// Shared mocks and builders for the integration test binaries. Individual
// test crates use different subsets, which would otherwise trip dead_code
// warnings; allow them at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
