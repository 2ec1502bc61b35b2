//! Camellia block cipher provider (RFC 3713)

use core::fmt;

use cipher::KeyInit;

use super::impl_block_cipher;
use crate::error::{key_bytes, Error, Result};

/// Camellia block size in bytes
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Camellia keyed with a 128, 192 or 256 bit key
#[derive(Clone)]
pub enum Camellia {
    /// 128-bit key
    Camellia128(camellia::Camellia128),
    /// 192-bit key
    Camellia192(camellia::Camellia192),
    /// 256-bit key
    Camellia256(camellia::Camellia256),
}

impl Camellia {
    /// Expands `key_bits / 8` bytes of `key` into a key schedule
    pub fn new(key: &[u8], key_bits: u32) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { algorithm: "CAMELLIA", bits: key_bits };
        let key = key_bytes("CAMELLIA", "CAMELLIA key", key, key_bits)?;
        let cipher = match key_bits {
            128 => Camellia::Camellia128(
                camellia::Camellia128::new_from_slice(key).map_err(|_| invalid())?,
            ),
            192 => Camellia::Camellia192(
                camellia::Camellia192::new_from_slice(key).map_err(|_| invalid())?,
            ),
            256 => Camellia::Camellia256(
                camellia::Camellia256::new_from_slice(key).map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };
        Ok(cipher)
    }

    /// Key length in bits
    pub fn key_bits(&self) -> u32 {
        match self {
            Camellia::Camellia128(_) => 128,
            Camellia::Camellia192(_) => 192,
            Camellia::Camellia256(_) => 256,
        }
    }
}

impl fmt::Debug for Camellia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camellia")
            .field("key_bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}

impl_block_cipher!(
    Camellia,
    "CAMELLIA",
    CAMELLIA_BLOCK_SIZE,
    [Camellia128, Camellia192, Camellia256]
);
