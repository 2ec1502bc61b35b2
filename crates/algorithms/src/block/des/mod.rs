//! DES and triple-DES block cipher providers
//!
//! Key lengths follow the convention of counting parity bits: 64 bits for
//! DES, 128 for two-key EDE and 192 for three-key EDE. The providers take the
//! first 8, 16 or 24 bytes of the supplied buffer and ignore anything after.

use core::fmt;

use cipher::KeyInit;

use super::impl_block_cipher;
use crate::error::{validate, Error, Result};
use cipherwrap_api::{KEY_LENGTH_DES, KEY_LENGTH_DES_EDE, KEY_LENGTH_DES_EDE3};

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES key size in bytes
pub const DES_KEY_SIZE: usize = 8;

fn schedule<C: KeyInit>(
    algorithm: &'static str,
    context: &'static str,
    key: &[u8],
    key_bits: u32,
) -> Result<C> {
    let len = (key_bits / 8) as usize;
    validate::min_length(context, key.len(), len)?;
    C::new_from_slice(&key[..len]).map_err(|_| Error::InvalidKeyLength {
        algorithm,
        bits: key_bits,
    })
}

/// Single DES
#[derive(Clone)]
pub struct Des(des::Des);

impl Des {
    /// Builds the DES key schedule from the first 8 bytes of `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        schedule("DES", "DES key", key, KEY_LENGTH_DES).map(Des)
    }
}

/// Two-key triple DES (K1, K2, K1)
#[derive(Clone)]
pub struct TdesEde2(des::TdesEde2);

impl TdesEde2 {
    /// Builds the two-key EDE schedule from the first 16 bytes of `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        schedule("DES-EDE", "DES-EDE key", key, KEY_LENGTH_DES_EDE).map(TdesEde2)
    }
}

/// Three-key triple DES (K1, K2, K3)
#[derive(Clone)]
pub struct TdesEde3(des::TdesEde3);

impl TdesEde3 {
    /// Builds the three-key EDE schedule from the first 24 bytes of `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        schedule("DES-EDE3", "DES-EDE3 key", key, KEY_LENGTH_DES_EDE3).map(TdesEde3)
    }
}

impl fmt::Debug for Des {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Des { .. }")
    }
}

impl fmt::Debug for TdesEde2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TdesEde2 { .. }")
    }
}

impl fmt::Debug for TdesEde3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TdesEde3 { .. }")
    }
}

impl_block_cipher!(Des, "DES", DES_BLOCK_SIZE);
impl_block_cipher!(TdesEde2, "DES-EDE", DES_BLOCK_SIZE);
impl_block_cipher!(TdesEde3, "DES-EDE3", DES_BLOCK_SIZE);
