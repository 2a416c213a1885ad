//! Error handling for the word game backend.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, NotFoundKind, PreconditionKind};
pub use error_code::ErrorCode;
