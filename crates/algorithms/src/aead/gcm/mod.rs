//! AES in Galois/Counter Mode
//!
//! GHASH and the counter keystream come from the `aes-gcm` crate. This module
//! selects the key size at runtime and fixes the nonce at 96 bits and the tag
//! at 128 bits (NIST SP 800-38D).

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};

use crate::error::{key_bytes, validate, Error, Result};

/// GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;
/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

const ALGORITHM: &str = "AES-GCM";

/// AES-GCM with a 128, 192 or 256-bit key
#[derive(Clone)]
pub enum AesGcm {
    /// 128-bit key
    Aes128(aes_gcm::Aes128Gcm),
    /// 192-bit key
    Aes192(aes_gcm::AesGcm<aes::Aes192, U12>),
    /// 256-bit key
    Aes256(aes_gcm::Aes256Gcm),
}

impl AesGcm {
    /// Keys GCM from the first `key_bits / 8` bytes of `key`
    pub fn new(key: &[u8], key_bits: u32) -> Result<Self> {
        let key = key_bytes(ALGORITHM, "AES-GCM key", key, key_bits)?;
        let invalid = |_| Error::InvalidKeyLength {
            algorithm: ALGORITHM,
            bits: key_bits,
        };
        match key_bits {
            128 => aes_gcm::Aes128Gcm::new_from_slice(key).map(AesGcm::Aes128).map_err(invalid),
            192 => aes_gcm::AesGcm::new_from_slice(key).map(AesGcm::Aes192).map_err(invalid),
            256 => aes_gcm::Aes256Gcm::new_from_slice(key).map(AesGcm::Aes256).map_err(invalid),
            bits => Err(Error::InvalidKeyLength {
                algorithm: ALGORITHM,
                bits,
            }),
        }
    }

    /// Key length in bits
    pub fn key_bits(&self) -> u32 {
        match self {
            AesGcm::Aes128(_) => 128,
            AesGcm::Aes192(_) => 192,
            AesGcm::Aes256(_) => 256,
        }
    }

    /// Encrypts `input` into `output` and writes the tag covering it and `aad`
    pub fn encrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &mut [u8],
    ) -> Result<()> {
        validate::length("GCM nonce", nonce.len(), GCM_NONCE_SIZE)?;
        validate::length("GCM tag", tag.len(), GCM_TAG_SIZE)?;
        let buffer = stage(input, output)?;

        let computed = match self {
            AesGcm::Aes128(inner) => seal(inner, nonce, aad, buffer)?,
            AesGcm::Aes192(inner) => seal(inner, nonce, aad, buffer)?,
            AesGcm::Aes256(inner) => seal(inner, nonce, aad, buffer)?,
        };
        tag.copy_from_slice(&computed);
        Ok(())
    }

    /// Verifies `tag` over `input` and `aad`, then decrypts into `output`
    ///
    /// On a tag mismatch `output` is zeroed and `Authentication` is returned.
    pub fn decrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        validate::length("GCM nonce", nonce.len(), GCM_NONCE_SIZE)?;
        validate::length("GCM tag", tag.len(), GCM_TAG_SIZE)?;
        let buffer = stage(input, output)?;

        let opened = match self {
            AesGcm::Aes128(inner) => open(inner, nonce, aad, buffer, tag),
            AesGcm::Aes192(inner) => open(inner, nonce, aad, buffer, tag),
            AesGcm::Aes256(inner) => open(inner, nonce, aad, buffer, tag),
        };
        if opened.is_err() {
            buffer.iter_mut().for_each(|b| *b = 0);
        }
        opened
    }
}

impl core::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesGcm")
            .field("key_bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}

fn stage<'a>(input: &[u8], output: &'a mut [u8]) -> Result<&'a mut [u8]> {
    validate::min_length("GCM output", output.len(), input.len())?;
    let buffer = &mut output[..input.len()];
    buffer.copy_from_slice(input);
    Ok(buffer)
}

fn seal<A: AeadInPlace>(
    aead: &A,
    nonce: &[u8],
    aad: &[u8],
    buffer: &mut [u8],
) -> Result<aes_gcm::aead::Tag<A>> {
    aead.encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, buffer)
        .map_err(|_| Error::param("input", "message too long for GCM"))
}

fn open<A: AeadInPlace>(
    aead: &A,
    nonce: &[u8],
    aad: &[u8],
    buffer: &mut [u8],
    tag: &[u8],
) -> Result<()> {
    aead.decrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        aad,
        buffer,
        GenericArray::from_slice(tag),
    )
    .map_err(|_| Error::Authentication {
        algorithm: ALGORITHM,
    })
}
