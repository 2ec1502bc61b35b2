//! Public types and error definitions for the cipherwrap library
//!
//! This crate provides the vocabulary shared by every layer of the cipherwrap
//! workspace: cipher family and variant identities, the mode and direction
//! enums, and the error types returned by providers and by the dispatch layer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, PrimitiveError, PrimitiveResult, Result};
pub use types::*;
