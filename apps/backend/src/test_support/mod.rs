//! Helpers for HTTP-level tests: an initialized actix test service and
//! deterministic collaborators.

pub mod app_builder;
pub mod commentator;

pub use app_builder::{create_test_app, create_test_app_builder, TestAppBuilder};
pub use commentator::ScriptedCommentator;
