//! Error types for the domain layer

mod domain_error;

pub use domain_error::{CodeError, DomainError, DomainResult};
