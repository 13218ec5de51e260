//! Utility functions shared across layers

pub mod validation;

pub use validation::{is_valid_email, is_valid_password};
