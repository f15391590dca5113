//! Shared helpers for integration tests

pub mod fixtures;
pub mod mock_service;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_service::*;
