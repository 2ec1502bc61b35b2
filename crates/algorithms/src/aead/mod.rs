//! Authenticated Encryption with Associated Data (AEAD) providers
//!
//! Only AES-GCM is offered. Sealing and opening use a detached tag so the
//! ciphertext always has the same length as the plaintext.

pub mod gcm;

pub use gcm::{AesGcm, GCM_NONCE_SIZE, GCM_TAG_SIZE};
