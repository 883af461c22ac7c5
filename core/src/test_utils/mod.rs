//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mock client parses its canned bodies with the real XML adapter, so
//! loader tests exercise the same document shapes production sees.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
