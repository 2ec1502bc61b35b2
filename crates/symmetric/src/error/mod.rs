//! Error handling for the dispatch layer
//!
//! The dispatch layer never invents provider errors. It adds the two
//! conditions it can check on its own, a capability missing from the build
//! and a caller precondition violation, and forwards everything else.

pub use cipherwrap_api::error::{validate, Error, PrimitiveError, Result};

/// Error for a capability slot that has no routine behind it
#[inline]
pub(crate) const fn unavailable(capability: &'static str) -> Error {
    Error::unavailable(capability)
}

/// Error for a state handed to a table of a different family
#[inline]
pub(crate) const fn foreign_state() -> Error {
    Error::bad_input("context state belongs to another cipher family")
}

/// Error for a transform attempted before any key was set
#[inline]
pub(crate) const fn unkeyed() -> Error {
    Error::bad_input("cipher key has not been set")
}
