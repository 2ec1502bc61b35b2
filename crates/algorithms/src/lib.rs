//! Primitive cipher providers for the cipherwrap library
//!
//! This crate is the layer the dispatch tables call into. It exposes the raw
//! operations each algorithm family offers: single-block encryption and
//! decryption, the CBC, CFB and CTR mode routines operating on caller-owned
//! chaining state, the ARC4 keystream and AES-GCM sealing and opening.
//!
//! Round functions and key expansion for the block ciphers come from the
//! RustCrypto implementations; this crate adapts them to one [`BlockCipher`]
//! contract and implements the modes on top of it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes, BlockCipher, Blowfish, Camellia, Des, TdesEde2, TdesEde3};

// Stream cipher implementations
pub mod stream;
pub use stream::Arc4;

// AEAD cipher implementations
#[cfg(feature = "gcm")]
pub mod aead;
#[cfg(feature = "gcm")]
pub use aead::AesGcm;
