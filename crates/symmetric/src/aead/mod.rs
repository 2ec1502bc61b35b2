//! Authenticated cipher tables
//!
//! An authenticated family does not fit the symmetric table: it has no
//! block, chaining or keystream entry of its own, and sealing produces a tag
//! alongside the ciphertext. It gets its own capability interface instead,
//! with one key routine serving both directions.

use core::fmt;

use cipherwrap_algorithms::AesGcm;
use cipherwrap_api::CipherId;

use crate::error::{unkeyed, Result};

/// Capability table of an authenticated cipher family
pub trait AeadBase: Send + Sync + 'static {
    /// Algorithm family this table serves
    fn id(&self) -> CipherId;

    /// Allocate an unkeyed context state
    fn ctx_alloc(&self) -> AeadState;

    /// Release a state obtained from [`AeadBase::ctx_alloc`]
    fn ctx_free(&self, state: AeadState) {
        drop(state);
    }

    /// Key the state; sealing and opening share the schedule
    fn set_key(&self, state: &mut AeadState, key: &[u8], key_bits: u32) -> Result<()>;

    /// Encryption-direction key setup
    fn set_key_enc(&self, state: &mut AeadState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    /// Decryption-direction key setup
    fn set_key_dec(&self, state: &mut AeadState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    /// Encrypt `input` into `output` and write the detached tag
    fn encrypt_and_tag(
        &self,
        state: &AeadState,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &mut [u8],
    ) -> Result<()>;

    /// Check `tag` and decrypt `input` into `output`
    fn auth_decrypt(
        &self,
        state: &AeadState,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &[u8],
    ) -> Result<()>;
}

/// Opaque per-context state of an authenticated family
pub struct AeadState {
    gcm: Option<AesGcm>,
}

impl AeadState {
    /// Whether a key schedule is present
    pub fn is_keyed(&self) -> bool {
        self.gcm.is_some()
    }

    fn gcm(&self) -> Result<&AesGcm> {
        self.gcm.as_ref().ok_or_else(unkeyed)
    }
}

impl fmt::Debug for AeadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadState")
            .field("keyed", &self.is_keyed())
            .finish()
    }
}

/// AES-GCM table
pub(crate) struct GcmBase;

pub(crate) static GCM_BASE: GcmBase = GcmBase;

impl AeadBase for GcmBase {
    fn id(&self) -> CipherId {
        CipherId::Aes
    }

    fn ctx_alloc(&self) -> AeadState {
        AeadState { gcm: None }
    }

    fn set_key(&self, state: &mut AeadState, key: &[u8], key_bits: u32) -> Result<()> {
        state.gcm = None;
        state.gcm = Some(AesGcm::new(key, key_bits)?);
        Ok(())
    }

    fn encrypt_and_tag(
        &self,
        state: &AeadState,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &mut [u8],
    ) -> Result<()> {
        Ok(state.gcm()?.encrypt(nonce, aad, input, output, tag)?)
    }

    fn auth_decrypt(
        &self,
        state: &AeadState,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        Ok(state.gcm()?.decrypt(nonce, aad, input, output, tag)?)
    }
}
