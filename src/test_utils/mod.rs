//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid fixtures
//! - In-memory implementations of the identity, subscription and billing portal ports
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod factories;
mod mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use mocks::*;
