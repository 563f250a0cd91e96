//! Domain input handling

pub mod validator;

// Re-export main functionality
pub use validator::{DomainValidator, ValidatedDomain};
