//! Context lifecycle
//!
//! [`CipherContext`] owns the state a variant's table allocated for it, keys
//! it, forwards transforms to the table and hands the state back to the table
//! when dropped. It checks what the descriptor lets it check cheaply (key and
//! IV lengths, single-block ECB) and forwards every other result untouched.
//!
//! A context is single-writer state. Share it between threads only behind
//! your own synchronization.

use core::{fmt, mem};

use cipherwrap_api::{CipherMode, CipherType, Operation};

#[cfg(feature = "gcm")]
use crate::aead::AeadState;
use crate::base::{CipherBase, CipherState};
use crate::error::{unavailable, unkeyed, validate, Error, Result};
use crate::info::{CipherBaseRef, CipherInfo};
use crate::registry;

enum ContextState {
    Symmetric(CipherState),
    #[cfg(feature = "gcm")]
    Aead(AeadState),
}

/// Keyed or unkeyed working state of one cipher variant
pub struct CipherContext {
    info: &'static CipherInfo,
    state: ContextState,
    keyed: Option<(Operation, u32)>,
}

impl CipherContext {
    /// Allocate an unkeyed context for `info`
    pub fn new(info: &'static CipherInfo) -> Self {
        let state = match info.base() {
            CipherBaseRef::Symmetric(base) => ContextState::Symmetric(base.ctx_alloc()),
            #[cfg(feature = "gcm")]
            CipherBaseRef::Aead(base) => ContextState::Aead(base.ctx_alloc()),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(cipher = info.name(), "cipher context allocated");

        Self {
            info,
            state,
            keyed: None,
        }
    }

    /// Allocate a context for a registered variant
    ///
    /// Fails with `FeatureUnavailable` when the variant is not compiled in.
    pub fn from_type(cipher_type: CipherType) -> Result<Self> {
        registry::find_by_id(cipher_type)
            .map(Self::new)
            .ok_or(Error::unavailable("cipher variant"))
    }

    /// Allocate a context for a variant named like `AES-128-CBC`
    pub fn from_name(name: &str) -> Result<Self> {
        registry::find_by_name(name)
            .map(Self::new)
            .ok_or(Error::bad_input("unknown cipher name"))
    }

    /// Release the state now instead of at the end of scope
    pub fn destroy(self) {
        drop(self);
    }

    /// Descriptor of the variant
    pub fn info(&self) -> &'static CipherInfo {
        self.info
    }

    /// Variant identity
    pub fn cipher_type(&self) -> CipherType {
        self.info.cipher_type()
    }

    /// Display name of the variant
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Transform shape of the variant
    pub fn mode(&self) -> CipherMode {
        self.info.mode()
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.info.block_size()
    }

    /// IV or nonce size in bytes
    pub fn iv_size(&self) -> usize {
        self.info.iv_size()
    }

    /// Direction of the last successful key setup
    pub fn operation(&self) -> Option<Operation> {
        self.keyed.map(|(operation, _)| operation)
    }

    /// Key length in bits of the last successful key setup
    pub fn key_bits(&self) -> Option<u32> {
        self.keyed.map(|(_, key_bits)| key_bits)
    }

    /// Key the context for `operation`
    ///
    /// `key_bits` must equal the variant's key length unless the variant has
    /// a variable key length. That check fails without touching the current
    /// key. Turning `key_bits` into a byte count is left to the table, and a
    /// key the table rejects leaves the context unkeyed.
    pub fn set_key(&mut self, key: &[u8], key_bits: u32, operation: Operation) -> Result<()> {
        if !self.info.has_variable_key_len() {
            validate::bad_input(
                key_bits == self.info.key_bits(),
                "key length does not match the cipher variant",
            )?;
        }

        self.keyed = None;
        match (&mut self.state, self.info.base()) {
            (ContextState::Symmetric(state), CipherBaseRef::Symmetric(base)) => match operation {
                Operation::Encrypt => base.set_key_enc(state, key, key_bits)?,
                Operation::Decrypt => base.set_key_dec(state, key, key_bits)?,
            },
            #[cfg(feature = "gcm")]
            (ContextState::Aead(state), CipherBaseRef::Aead(base)) => match operation {
                Operation::Encrypt => base.set_key_enc(state, key, key_bits)?,
                Operation::Decrypt => base.set_key_dec(state, key, key_bits)?,
            },
            #[cfg(feature = "gcm")]
            _ => return Err(crate::error::foreign_state()),
        }
        self.keyed = Some((operation, key_bits));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            cipher = self.info.name(),
            key_bits,
            ?operation,
            "cipher key set"
        );

        Ok(())
    }

    /// Transform exactly one block in the keyed direction
    pub fn ecb(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        let (base, state) = self.symmetric(CipherMode::Ecb)?;
        let operation = self.direction()?;
        let block_size = self.info.block_size();
        validate::bad_input(input.len() == block_size, "ECB input must be one block")?;
        validate::bad_input(output.len() >= block_size, "ECB output shorter than one block")?;
        base.ecb(state, operation, input, &mut output[..block_size])
    }

    /// Transform whole blocks in CBC mode in the keyed direction
    ///
    /// `iv` is left holding the chaining value for the next call.
    pub fn cbc(&self, iv: &mut [u8], input: &[u8], output: &mut [u8]) -> Result<()> {
        let (base, state) = self.symmetric(CipherMode::Cbc)?;
        let operation = self.direction()?;
        self.check_iv(iv)?;
        base.cbc(state, operation, iv, input, output)
    }

    /// Transform any length in CFB mode in the keyed direction
    pub fn cfb(
        &self,
        iv_off: &mut usize,
        iv: &mut [u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        let (base, state) = self.symmetric(CipherMode::Cfb)?;
        let operation = self.direction()?;
        self.check_iv(iv)?;
        base.cfb(state, operation, iv_off, iv, input, output)
    }

    /// Transform any length in CTR mode
    pub fn ctr(
        &self,
        nc_off: &mut usize,
        nonce_counter: &mut [u8],
        stream_block: &mut [u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        let (base, state) = self.symmetric(CipherMode::Ctr)?;
        self.check_iv(nonce_counter)?;
        validate::bad_input(
            stream_block.len() == self.info.block_size(),
            "CTR stream block must be one block",
        )?;
        base.ctr(state, nc_off, nonce_counter, stream_block, input, output)
    }

    /// Combine `input` with the running keystream
    pub fn stream(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        match (self.info.base(), &mut self.state) {
            (CipherBaseRef::Symmetric(base), ContextState::Symmetric(state))
                if base.capabilities().stream =>
            {
                base.stream(state, input, output)
            }
            _ => Err(unavailable(capability_name(CipherMode::Stream))),
        }
    }

    /// Seal `input` into `output` and write the detached tag
    #[cfg(feature = "gcm")]
    pub fn encrypt_and_tag(
        &self,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &mut [u8],
    ) -> Result<()> {
        match (self.info.base(), &self.state) {
            (CipherBaseRef::Aead(base), ContextState::Aead(state)) => {
                self.check_iv(nonce)?;
                base.encrypt_and_tag(state, nonce, aad, input, output, tag)
            }
            _ => Err(unavailable(capability_name(CipherMode::Gcm))),
        }
    }

    /// Verify `tag` and open `input` into `output`
    #[cfg(feature = "gcm")]
    pub fn auth_decrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        match (self.info.base(), &self.state) {
            (CipherBaseRef::Aead(base), ContextState::Aead(state)) => {
                self.check_iv(nonce)?;
                base.auth_decrypt(state, nonce, aad, input, output, tag)
            }
            _ => Err(unavailable(capability_name(CipherMode::Gcm))),
        }
    }

    /// Table and state, provided the table serves `mode`
    fn symmetric(&self, mode: CipherMode) -> Result<(&'static dyn CipherBase, &CipherState)> {
        match (self.info.base(), &self.state) {
            (CipherBaseRef::Symmetric(base), ContextState::Symmetric(state))
                if base.capabilities().supports(mode) =>
            {
                Ok((base, state))
            }
            _ => Err(unavailable(capability_name(mode))),
        }
    }

    fn direction(&self) -> Result<Operation> {
        self.operation().ok_or_else(unkeyed)
    }

    fn check_iv(&self, iv: &[u8]) -> Result<()> {
        validate::bad_input(
            iv.len() == self.info.iv_size(),
            "IV length does not match the cipher variant",
        )
    }
}

const fn capability_name(mode: CipherMode) -> &'static str {
    match mode {
        CipherMode::Ecb => "ECB",
        CipherMode::Cbc => "CBC",
        CipherMode::Cfb => "CFB",
        CipherMode::Ctr => "CTR",
        CipherMode::Stream => "STREAM",
        CipherMode::Gcm => "AEAD",
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        let state = mem::replace(&mut self.state, ContextState::Symmetric(CipherState::null()));
        match (self.info.base(), state) {
            (CipherBaseRef::Symmetric(base), ContextState::Symmetric(state)) => base.ctx_free(state),
            #[cfg(feature = "gcm")]
            (CipherBaseRef::Aead(base), ContextState::Aead(state)) => base.ctx_free(state),
            #[cfg(feature = "gcm")]
            _ => {}
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(cipher = self.info.name(), "cipher context released");
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("cipher", &self.info.name())
            .field("operation", &self.operation())
            .field("key_bits", &self.key_bits())
            .finish()
    }
}
