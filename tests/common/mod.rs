//! Shared test utilities for resfind integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_delivery_api;

pub use builders::*;
pub use fake_delivery_api::FakeDeliveryApi;
pub use fixtures::*;
