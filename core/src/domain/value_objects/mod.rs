//! Small immutable value types used across the domain

pub mod purpose;

pub use purpose::Purpose;
