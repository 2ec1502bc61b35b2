//! Variant descriptors
//!
//! A [`CipherInfo`] pairs the committed constants of one cipher variant (key
//! length, IV size, block size, display name) with the operation table that
//! implements it. Descriptors are immutable statics; callers only ever hold
//! `&'static` references obtained from the [registry](crate::registry).

use core::fmt;

use cipherwrap_api::{CipherId, CipherMode, CipherType};

#[cfg(feature = "gcm")]
use crate::aead::AeadBase;
use crate::base::{Capabilities, CipherBase};

pub(crate) mod definitions;

/// Reference to the table behind a variant
///
/// Symmetric and authenticated families expose different capability sets, so
/// a descriptor points at exactly one of the two interfaces.
#[derive(Clone, Copy)]
pub enum CipherBaseRef {
    /// Block or stream table
    Symmetric(&'static dyn CipherBase),
    /// Authenticated table
    #[cfg(feature = "gcm")]
    Aead(&'static dyn AeadBase),
}

impl CipherBaseRef {
    /// Family identity of the table
    pub fn id(&self) -> CipherId {
        match self {
            CipherBaseRef::Symmetric(base) => base.id(),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(base) => base.id(),
        }
    }

    /// Symmetric transform entries; none for an authenticated table
    pub fn capabilities(&self) -> Capabilities {
        match self {
            CipherBaseRef::Symmetric(base) => base.capabilities(),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(_) => Capabilities::NONE,
        }
    }

    /// The symmetric table, if this is one
    pub fn as_symmetric(&self) -> Option<&'static dyn CipherBase> {
        match *self {
            CipherBaseRef::Symmetric(base) => Some(base),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(_) => None,
        }
    }

    /// The authenticated table, if this is one
    #[cfg(feature = "gcm")]
    pub fn as_aead(&self) -> Option<&'static dyn AeadBase> {
        match *self {
            CipherBaseRef::Aead(base) => Some(base),
            CipherBaseRef::Symmetric(_) => None,
        }
    }
}

impl fmt::Debug for CipherBaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherBaseRef::Symmetric(base) => write!(f, "Symmetric({})", base.id()),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(base) => write!(f, "Aead({})", base.id()),
        }
    }
}

/// Static description of one cipher variant
#[derive(Debug)]
pub struct CipherInfo {
    cipher_type: CipherType,
    mode: CipherMode,
    key_bits: u32,
    name: &'static str,
    iv_size: usize,
    block_size: usize,
    is_aead: bool,
    variable_key_len: bool,
    base: CipherBaseRef,
}

impl CipherInfo {
    /// Descriptor for a symmetric variant with a fixed key length
    pub(crate) const fn symmetric(
        cipher_type: CipherType,
        mode: CipherMode,
        key_bits: u32,
        name: &'static str,
        iv_size: usize,
        block_size: usize,
        base: &'static dyn CipherBase,
    ) -> Self {
        Self {
            cipher_type,
            mode,
            key_bits,
            name,
            iv_size,
            block_size,
            is_aead: false,
            variable_key_len: false,
            base: CipherBaseRef::Symmetric(base),
        }
    }

    /// Descriptor for an authenticated variant
    #[cfg(feature = "gcm")]
    pub(crate) const fn aead(
        cipher_type: CipherType,
        key_bits: u32,
        name: &'static str,
        iv_size: usize,
        block_size: usize,
        base: &'static dyn AeadBase,
    ) -> Self {
        Self {
            cipher_type,
            mode: CipherMode::Gcm,
            key_bits,
            name,
            iv_size,
            block_size,
            is_aead: true,
            variable_key_len: false,
            base: CipherBaseRef::Aead(base),
        }
    }

    /// Marks `key_bits` as a nominal length the cipher may be keyed away from
    pub(crate) const fn with_variable_key_len(self) -> Self {
        Self {
            variable_key_len: true,
            ..self
        }
    }

    /// Variant identity
    pub fn cipher_type(&self) -> CipherType {
        self.cipher_type
    }

    /// Transform shape
    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Key length in bits; nominal when [`Self::has_variable_key_len`] is set
    pub fn key_bits(&self) -> u32 {
        self.key_bits
    }

    /// Display name, e.g. `AES-256-CBC`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// IV or nonce size in bytes, 0 when the variant takes none
    pub fn iv_size(&self) -> usize {
        self.iv_size
    }

    /// Block size in bytes, 1 for stream variants
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Whether the variant is an authenticated mode
    pub fn is_aead(&self) -> bool {
        self.is_aead
    }

    /// Whether the variant accepts keys other than [`Self::key_bits`] long
    pub fn has_variable_key_len(&self) -> bool {
        self.variable_key_len
    }

    /// Algorithm family
    pub fn family(&self) -> CipherId {
        self.base.id()
    }

    /// Table implementing the variant
    pub fn base(&self) -> CipherBaseRef {
        self.base
    }

    /// Whether the table has a routine for `mode`
    pub fn supports(&self, mode: CipherMode) -> bool {
        match self.base {
            CipherBaseRef::Symmetric(base) => base.capabilities().supports(mode),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(_) => mode == CipherMode::Gcm,
        }
    }
}

impl fmt::Display for CipherInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
