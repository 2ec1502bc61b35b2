//! Uniform dispatch over symmetric ciphers for the cipherwrap library
//!
//! Callers pick a variant such as `AES-256-CTR` from the [`registry`], build a
//! [`CipherContext`] for it, key it and then call the transform matching the
//! variant's mode. The context reaches the algorithm through the variant's
//! operation table ([`CipherBase`] for block and stream families, [`AeadBase`]
//! for authenticated ones), so the call site never names the algorithm.
//!
//! ```
//! use cipherwrap_api::{CipherType, Operation};
//! use cipherwrap_symmetric::CipherContext;
//!
//! let mut ctx = CipherContext::from_type(CipherType::Aes128Cbc)?;
//! ctx.set_key(&[0x2b; 16], 128, Operation::Encrypt)?;
//!
//! let mut iv = [0u8; 16];
//! let mut ciphertext = [0u8; 32];
//! ctx.cbc(&mut iv, b"two blocks of plaintext, exactly", &mut ciphertext)?;
//! # Ok::<(), cipherwrap_api::Error>(())
//! ```
//!
//! Transforms whose mode is compiled out answer `FeatureUnavailable`; use
//! [`CipherInfo::supports`] to probe first.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "gcm")]
pub mod aead;
pub mod base;
pub mod context;
pub mod error;
pub mod info;
pub mod registry;

#[cfg(feature = "gcm")]
pub use aead::{AeadBase, AeadState};
pub use base::{Capabilities, CipherBase, CipherState};
pub use context::CipherContext;
pub use info::{CipherBaseRef, CipherInfo};
pub use registry::{find_by_family_and_keylen, find_by_id, find_by_name, supported_ciphers};

// Re-export the API error system
pub use cipherwrap_api::error::{validate, Error, Result};
