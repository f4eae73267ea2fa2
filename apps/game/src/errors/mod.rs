//! Error handling for the nomination engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
