//! Error type definitions for cipher operations

use std::borrow::Cow;

/// Failure raised by a primitive provider
///
/// These describe conditions the algorithm itself rejects. The dispatch layer
/// never reinterprets them; they reach the caller wrapped in
/// [`Error::Primitive`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// The algorithm does not accept a key of this length
    #[error("{algorithm}: invalid key length ({bits} bits)")]
    InvalidKeyLength {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Requested key length in bits
        bits: u32,
    },

    /// A buffer had the wrong size for the operation
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Operation or buffer the length belongs to
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Authentication failure (AEAD tag verification)
    #[error("authentication failed for {algorithm}")]
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },
}

impl PrimitiveError {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        PrimitiveError::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Error returned by the dispatch layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The capability exists for this mode but was not compiled into the provider
    #[error("feature unavailable: {feature}")]
    FeatureUnavailable {
        /// Capability that was requested
        feature: &'static str,
    },

    /// Caller-supplied parameters violate a precondition
    #[error("bad input data: {context}")]
    BadInputData {
        /// Precondition that was violated
        context: &'static str,
    },

    /// Failure surfaced unmodified from the primitive provider
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

impl Error {
    /// Shorthand for a `FeatureUnavailable` error
    pub const fn unavailable(feature: &'static str) -> Self {
        Error::FeatureUnavailable { feature }
    }

    /// Shorthand for a `BadInputData` error
    pub const fn bad_input(context: &'static str) -> Self {
        Error::BadInputData { context }
    }

    /// Returns true if this error reports a capability missing from the build
    pub fn is_feature_unavailable(&self) -> bool {
        matches!(self, Error::FeatureUnavailable { .. })
    }

    /// Returns true if this error reports invalid caller input
    pub fn is_bad_input(&self) -> bool {
        matches!(self, Error::BadInputData { .. })
    }

    /// Returns the provider failure, if this error wraps one
    pub fn primitive(&self) -> Option<&PrimitiveError> {
        match self {
            Error::Primitive(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Result type for dispatch-layer operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for primitive provider operations
pub type PrimitiveResult<T> = core::result::Result<T, PrimitiveError>;
