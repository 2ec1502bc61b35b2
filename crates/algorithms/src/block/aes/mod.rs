//! AES block cipher provider
//!
//! Wraps the RustCrypto AES implementation (FIPS 197) behind the
//! [`BlockCipher`](super::BlockCipher) contract. One value holds the expanded
//! schedule for a 128, 192 or 256 bit key.

use core::fmt;

use cipher::KeyInit;

use super::impl_block_cipher;
use crate::error::{key_bytes, Error, Result};

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES keyed with one of the three standard key sizes
#[derive(Clone)]
pub enum Aes {
    /// 128-bit key, 10 rounds
    Aes128(aes::Aes128),
    /// 192-bit key, 12 rounds
    Aes192(aes::Aes192),
    /// 256-bit key, 14 rounds
    Aes256(aes::Aes256),
}

impl Aes {
    /// Expands `key_bits / 8` bytes of `key` into a key schedule
    pub fn new(key: &[u8], key_bits: u32) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { algorithm: "AES", bits: key_bits };
        let key = key_bytes("AES", "AES key", key, key_bits)?;
        let cipher = match key_bits {
            128 => Aes::Aes128(aes::Aes128::new_from_slice(key).map_err(|_| invalid())?),
            192 => Aes::Aes192(aes::Aes192::new_from_slice(key).map_err(|_| invalid())?),
            256 => Aes::Aes256(aes::Aes256::new_from_slice(key).map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(cipher)
    }

    /// Key length in bits
    pub fn key_bits(&self) -> u32 {
        match self {
            Aes::Aes128(_) => 128,
            Aes::Aes192(_) => 192,
            Aes::Aes256(_) => 256,
        }
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("key_bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}

impl_block_cipher!(Aes, "AES", AES_BLOCK_SIZE, [Aes128, Aes192, Aes256]);
