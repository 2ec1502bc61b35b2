//! Error handling for the cipher dispatch ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error types and results
pub use types::{Error, PrimitiveError, PrimitiveResult, Result};
