//! Operation tables
//!
//! A [`CipherBase`] is the capability table of one algorithm family. It
//! allocates the family's context state, sets keys for either direction and
//! exposes one entry per transform shape. Entries a family cannot serve keep
//! their default body, which answers `FeatureUnavailable` instead of
//! misbehaving, so every slot is always safe to call.
//!
//! The tables are zero-sized statics shared by every variant of a family.

use cipherwrap_api::{CipherId, CipherMode, Operation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{unavailable, Result};

mod block;
#[cfg(feature = "null-cipher")]
mod null;
mod state;
mod stream;

pub use state::CipherState;

pub(crate) use block::{
    AES_BASE, BLOWFISH_BASE, CAMELLIA_BASE, DES_BASE, DES_EDE3_BASE, DES_EDE_BASE,
};
#[cfg(feature = "null-cipher")]
pub(crate) use null::NULL_BASE;
pub(crate) use state::State;
pub(crate) use stream::ARC4_BASE;

/// Which transform entries of a table have a routine behind them
///
/// Lets callers probe for a capability instead of calling and handling
/// `FeatureUnavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// Single-block ECB transform
    pub ecb: bool,
    /// CBC over whole blocks
    pub cbc: bool,
    /// CFB with a resumable feedback offset
    pub cfb: bool,
    /// CTR with a resumable keystream offset
    pub ctr: bool,
    /// Raw keystream transform
    pub stream: bool,
}

impl Capabilities {
    /// A table with no transform entries
    pub const NONE: Capabilities = Capabilities {
        ecb: false,
        cbc: false,
        cfb: false,
        ctr: false,
        stream: false,
    };

    /// A keystream-only table
    pub const STREAM: Capabilities = Capabilities {
        stream: true,
        ..Capabilities::NONE
    };

    /// Whether a table with these entries can transform data at all
    ///
    /// Every symmetric table must offer ECB or a raw keystream.
    pub const fn is_well_formed(&self) -> bool {
        self.ecb || self.stream
    }

    /// Whether the entry serving `mode` is present
    pub const fn supports(&self, mode: CipherMode) -> bool {
        match mode {
            CipherMode::Ecb => self.ecb,
            CipherMode::Cbc => self.cbc,
            CipherMode::Cfb => self.cfb,
            CipherMode::Ctr => self.ctr,
            CipherMode::Stream => self.stream,
            CipherMode::Gcm => false,
        }
    }
}

/// Capability table of a symmetric cipher family
///
/// Key setup and context allocation are required. The transform entries
/// default to `FeatureUnavailable`; a family overrides those it serves and
/// reports them through [`CipherBase::capabilities`].
///
/// IVs, offsets, counters and keystream blocks are owned by the caller and
/// updated in place, never copied into the context.
pub trait CipherBase: Send + Sync + 'static {
    /// Algorithm family this table serves
    fn id(&self) -> CipherId;

    /// Transform entries this table serves in the current build
    fn capabilities(&self) -> Capabilities;

    /// Allocate an unkeyed context state for this family
    fn ctx_alloc(&self) -> CipherState;

    /// Release a state obtained from [`CipherBase::ctx_alloc`]
    ///
    /// AES, DES, triple-DES, Blowfish and ARC4 schedules are wiped as they are
    /// dropped. Camellia schedules are released without wiping.
    fn ctx_free(&self, state: CipherState) {
        drop(state);
    }

    /// Set up the key schedule for encryption
    fn set_key_enc(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()>;

    /// Set up the key schedule for decryption
    fn set_key_dec(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()>;

    /// Transform exactly one block
    fn ecb(
        &self,
        _state: &CipherState,
        _operation: Operation,
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(unavailable("ECB"))
    }

    /// Transform whole blocks in CBC mode, leaving the last chaining value in `iv`
    fn cbc(
        &self,
        _state: &CipherState,
        _operation: Operation,
        _iv: &mut [u8],
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(unavailable("CBC"))
    }

    /// Transform any length in CFB mode, resuming at `iv_off` within `iv`
    fn cfb(
        &self,
        _state: &CipherState,
        _operation: Operation,
        _iv_off: &mut usize,
        _iv: &mut [u8],
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(unavailable("CFB"))
    }

    /// Transform any length in CTR mode, resuming at `nc_off` within `stream_block`
    fn ctr(
        &self,
        _state: &CipherState,
        _nc_off: &mut usize,
        _nonce_counter: &mut [u8],
        _stream_block: &mut [u8],
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(unavailable("CTR"))
    }

    /// Combine `input` with the running keystream held in the state
    fn stream(&self, _state: &mut CipherState, _input: &[u8], _output: &mut [u8]) -> Result<()> {
        Err(unavailable("STREAM"))
    }
}
