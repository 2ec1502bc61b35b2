//! Identity and shape enums shared across the cipherwrap workspace
//!
//! These are plain compile-time constants. [`CipherId`] names an algorithm
//! family, [`CipherType`] names one concrete variant (family, key length and
//! mode), and [`CipherMode`] describes the shape of the transform.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algorithm family identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherId {
    /// Identity cipher, no transformation
    Null,
    /// AES (Rijndael with 128-bit blocks)
    Aes,
    /// Single DES
    Des,
    /// Triple DES, two- or three-key EDE
    Des3,
    /// Camellia
    Camellia,
    /// Blowfish
    Blowfish,
    /// ARC4 keystream generator
    Arc4,
}

impl CipherId {
    /// Family name as used in variant display names
    pub const fn name(self) -> &'static str {
        match self {
            CipherId::Null => "NULL",
            CipherId::Aes => "AES",
            CipherId::Des => "DES",
            CipherId::Des3 => "DES-EDE",
            CipherId::Camellia => "CAMELLIA",
            CipherId::Blowfish => "BLOWFISH",
            CipherId::Arc4 => "ARC4",
        }
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of the transform, independent of the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherMode {
    /// Electronic codebook, one block at a time
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback, full-block feedback width
    Cfb,
    /// Counter mode
    Ctr,
    /// Authenticated Galois/counter mode
    Gcm,
    /// Raw keystream, no IV
    Stream,
}

impl CipherMode {
    /// Whether this mode is authenticated
    pub const fn is_aead(self) -> bool {
        matches!(self, CipherMode::Gcm)
    }

    /// Whether a variant in this mode consumes an IV or nonce
    pub const fn uses_iv(self) -> bool {
        !matches!(self, CipherMode::Ecb | CipherMode::Stream)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::Ecb => "ECB",
            CipherMode::Cbc => "CBC",
            CipherMode::Cfb => "CFB",
            CipherMode::Ctr => "CTR",
            CipherMode::Gcm => "GCM",
            CipherMode::Stream => "STREAM",
        };
        f.write_str(name)
    }
}

/// Direction of a transform or key schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// Encryption direction
    Encrypt,
    /// Decryption direction
    Decrypt,
}

/// Concrete cipher variant identity
///
/// Every registered descriptor carries exactly one of these. Variants whose
/// mode is compiled out of the provider are still named here but are absent
/// from the registry.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherType {
    /// NULL identity cipher
    Null,
    /// AES-128-ECB
    Aes128Ecb,
    /// AES-192-ECB
    Aes192Ecb,
    /// AES-256-ECB
    Aes256Ecb,
    /// AES-128-CBC
    Aes128Cbc,
    /// AES-192-CBC
    Aes192Cbc,
    /// AES-256-CBC
    Aes256Cbc,
    /// AES-128-CFB128
    Aes128Cfb128,
    /// AES-192-CFB128
    Aes192Cfb128,
    /// AES-256-CFB128
    Aes256Cfb128,
    /// AES-128-CTR
    Aes128Ctr,
    /// AES-192-CTR
    Aes192Ctr,
    /// AES-256-CTR
    Aes256Ctr,
    /// AES-128-GCM
    Aes128Gcm,
    /// AES-192-GCM
    Aes192Gcm,
    /// AES-256-GCM
    Aes256Gcm,
    /// CAMELLIA-128-ECB
    Camellia128Ecb,
    /// CAMELLIA-192-ECB
    Camellia192Ecb,
    /// CAMELLIA-256-ECB
    Camellia256Ecb,
    /// CAMELLIA-128-CBC
    Camellia128Cbc,
    /// CAMELLIA-192-CBC
    Camellia192Cbc,
    /// CAMELLIA-256-CBC
    Camellia256Cbc,
    /// CAMELLIA-128-CFB128
    Camellia128Cfb128,
    /// CAMELLIA-192-CFB128
    Camellia192Cfb128,
    /// CAMELLIA-256-CFB128
    Camellia256Cfb128,
    /// CAMELLIA-128-CTR
    Camellia128Ctr,
    /// CAMELLIA-192-CTR
    Camellia192Ctr,
    /// CAMELLIA-256-CTR
    Camellia256Ctr,
    /// DES-ECB
    DesEcb,
    /// DES-CBC
    DesCbc,
    /// DES-EDE-ECB (two-key triple DES)
    DesEdeEcb,
    /// DES-EDE-CBC (two-key triple DES)
    DesEdeCbc,
    /// DES-EDE3-ECB (three-key triple DES)
    DesEde3Ecb,
    /// DES-EDE3-CBC (three-key triple DES)
    DesEde3Cbc,
    /// BLOWFISH-ECB
    BlowfishEcb,
    /// BLOWFISH-CBC
    BlowfishCbc,
    /// BLOWFISH-CFB64
    BlowfishCfb64,
    /// BLOWFISH-CTR
    BlowfishCtr,
    /// ARC4-128
    Arc4_128,
}

/// DES key length in bits, parity bits included
pub const KEY_LENGTH_DES: u32 = 64;
/// Two-key triple DES key length in bits, parity bits included
pub const KEY_LENGTH_DES_EDE: u32 = 128;
/// Three-key triple DES key length in bits, parity bits included
pub const KEY_LENGTH_DES_EDE3: u32 = 192;

/// Largest block size of any registered family, in bytes
pub const MAX_BLOCK_LENGTH: usize = 16;
