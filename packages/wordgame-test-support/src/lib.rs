//! Test support for the word game backend.
//!
//! Shared by the backend's integration test binaries: one-time logging
//! installation and assertions over the JSON error contract.

pub mod error_body;
pub mod logging;

pub use error_body::{assert_error_body_from_parts, assert_error_body_from_service_response};
