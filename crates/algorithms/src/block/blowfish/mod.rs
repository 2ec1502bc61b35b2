//! Blowfish block cipher provider
//!
//! Blowfish accepts any key from 32 to 448 bits in whole bytes and uses the
//! same schedule for both directions.

use core::fmt;

use cipher::KeyInit;

use super::impl_block_cipher;
use crate::error::{key_bytes, Error, Result};

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// Shortest accepted Blowfish key in bits
pub const BLOWFISH_MIN_KEY_BITS: u32 = 32;

/// Longest accepted Blowfish key in bits
pub const BLOWFISH_MAX_KEY_BITS: u32 = 448;

/// Blowfish with a big-endian block layout
#[derive(Clone)]
pub struct Blowfish(blowfish::Blowfish);

impl Blowfish {
    /// Runs the Blowfish key schedule over `key_bits / 8` bytes of `key`
    pub fn new(key: &[u8], key_bits: u32) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { algorithm: "BLOWFISH", bits: key_bits };
        if !(BLOWFISH_MIN_KEY_BITS..=BLOWFISH_MAX_KEY_BITS).contains(&key_bits) {
            return Err(invalid());
        }
        let key = key_bytes("BLOWFISH", "BLOWFISH key", key, key_bits)?;
        blowfish::Blowfish::new_from_slice(key)
            .map(Blowfish)
            .map_err(|_| invalid())
    }
}

impl fmt::Debug for Blowfish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blowfish { .. }")
    }
}

impl_block_cipher!(Blowfish, "BLOWFISH", BLOWFISH_BLOCK_SIZE);
