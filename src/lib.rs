//! # cipherwrap
//!
//! A uniform dispatch layer over symmetric ciphers. Pick a variant by
//! identity, name or (family, key length, mode), allocate a context for it and
//! drive it through one operation-table contract, whatever the algorithm.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherwrap = "0.3"
//! ```
//!
//! ## Features
//!
//! - `cipher-mode-cfb` (default): CFB variants and table entries
//! - `cipher-mode-ctr` (default): CTR variants and table entries
//! - `gcm` (default): AES-GCM variants
//! - `null-cipher` (default): the NULL identity cipher
//! - `tracing` (default): context lifecycle events through `tracing`
//! - `serde`: serialization of identities and capability records
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`cipherwrap-api`]: identities, modes and error types
//! - [`cipherwrap-algorithms`]: primitive providers and mode routines
//! - [`cipherwrap-symmetric`]: operation tables, registry and contexts
//!
//! [`cipherwrap-api`]: api
//! [`cipherwrap-algorithms`]: algorithms
//! [`cipherwrap-symmetric`]: symmetric

#![forbid(unsafe_code)]

pub use cipherwrap_algorithms as algorithms;
pub use cipherwrap_api as api;
pub use cipherwrap_symmetric as symmetric;

/// Common imports for cipherwrap users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, PrimitiveError, Result};

    // Identities
    pub use crate::api::{CipherId, CipherMode, CipherType, Operation};

    // Dispatch layer
    #[cfg(feature = "gcm")]
    pub use crate::symmetric::AeadBase;
    pub use crate::symmetric::{
        find_by_family_and_keylen, find_by_id, find_by_name, supported_ciphers, Capabilities,
        CipherBase, CipherContext, CipherInfo,
    };
}
