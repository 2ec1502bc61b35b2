//! Tables for the block cipher families
//!
//! One generic table serves every block family. The family marker supplies
//! the provider type, where its schedule lives in [`State`] and whether the
//! feedback modes exist for it at all.

use core::marker::PhantomData;

use cipherwrap_algorithms::block::modes;
use cipherwrap_algorithms::{Aes, BlockCipher, Blowfish, Camellia, Des, TdesEde2, TdesEde3};
use cipherwrap_api::{
    CipherId, Operation, PrimitiveError, PrimitiveResult, KEY_LENGTH_DES, KEY_LENGTH_DES_EDE,
    KEY_LENGTH_DES_EDE3,
};

use super::{Capabilities, CipherBase, CipherState, State};
use crate::error::{foreign_state, unkeyed, Result};
#[cfg(any(feature = "cipher-mode-cfb", feature = "cipher-mode-ctr"))]
use crate::error::unavailable;

/// Static description of a block cipher family
pub(crate) trait BlockFamily: 'static {
    /// Keyed provider
    type Cipher: BlockCipher + Send + Sync;

    /// Family identity
    const ID: CipherId;

    /// Whether CFB and CTR exist for this family when their features are on
    const FEEDBACK: bool;

    /// Unkeyed state for this family
    fn empty() -> State;

    /// Schedule slot inside a state of this family
    fn slot(state: &mut State) -> Option<&mut Option<Self::Cipher>>;

    /// Read-only view of the schedule slot
    fn slot_ref(state: &State) -> Option<&Option<Self::Cipher>>;

    /// Expand `key` into a provider schedule
    fn schedule(key: &[u8], key_bits: u32) -> PrimitiveResult<Self::Cipher>;
}

/// Operation table shared by all variants of block family `F`
pub(crate) struct BlockBase<F>(PhantomData<fn() -> F>);

impl<F: BlockFamily> BlockBase<F> {
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }

    /// Both directions use the same provider schedule
    fn set_key(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        let slot = F::slot(state.inner_mut()).ok_or_else(foreign_state)?;
        // a failed re-key must not leave the previous schedule in place
        *slot = None;
        *slot = Some(F::schedule(key, key_bits)?);
        Ok(())
    }

    fn keyed<'a>(&self, state: &'a CipherState) -> Result<&'a F::Cipher> {
        match F::slot_ref(state.inner()) {
            Some(Some(cipher)) => Ok(cipher),
            Some(None) => Err(unkeyed()),
            None => Err(foreign_state()),
        }
    }
}

impl<F: BlockFamily> CipherBase for BlockBase<F> {
    fn id(&self) -> CipherId {
        F::ID
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            ecb: true,
            cbc: true,
            cfb: F::FEEDBACK && cfg!(feature = "cipher-mode-cfb"),
            ctr: F::FEEDBACK && cfg!(feature = "cipher-mode-ctr"),
            stream: false,
        }
    }

    fn ctx_alloc(&self) -> CipherState {
        CipherState::new(F::empty())
    }

    fn set_key_enc(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    fn set_key_dec(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    fn ecb(
        &self,
        state: &CipherState,
        operation: Operation,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        modes::ecb(self.keyed(state)?, operation, input, output)?;
        Ok(())
    }

    fn cbc(
        &self,
        state: &CipherState,
        operation: Operation,
        iv: &mut [u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        modes::cbc::crypt(self.keyed(state)?, operation, iv, input, output)?;
        Ok(())
    }

    #[cfg(feature = "cipher-mode-cfb")]
    fn cfb(
        &self,
        state: &CipherState,
        operation: Operation,
        iv_off: &mut usize,
        iv: &mut [u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        if !F::FEEDBACK {
            return Err(unavailable("CFB"));
        }
        modes::cfb::crypt(self.keyed(state)?, operation, iv_off, iv, input, output)?;
        Ok(())
    }

    #[cfg(feature = "cipher-mode-ctr")]
    fn ctr(
        &self,
        state: &CipherState,
        nc_off: &mut usize,
        nonce_counter: &mut [u8],
        stream_block: &mut [u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<()> {
        if !F::FEEDBACK {
            return Err(unavailable("CTR"));
        }
        modes::ctr::crypt(
            self.keyed(state)?,
            nc_off,
            nonce_counter,
            stream_block,
            input,
            output,
        )?;
        Ok(())
    }
}

macro_rules! block_family {
    ($family:ident, $variant:ident, $cipher:ty, $id:expr, feedback: $feedback:expr, schedule: $schedule:path) => {
        pub(crate) enum $family {}

        impl BlockFamily for $family {
            type Cipher = $cipher;
            const ID: CipherId = $id;
            const FEEDBACK: bool = $feedback;

            fn empty() -> State {
                State::$variant(None)
            }

            fn slot(state: &mut State) -> Option<&mut Option<$cipher>> {
                match state {
                    State::$variant(slot) => Some(slot),
                    _ => None,
                }
            }

            fn slot_ref(state: &State) -> Option<&Option<$cipher>> {
                match state {
                    State::$variant(slot) => Some(slot),
                    _ => None,
                }
            }

            fn schedule(key: &[u8], key_bits: u32) -> PrimitiveResult<$cipher> {
                $schedule(key, key_bits)
            }
        }
    };
}

block_family!(AesFamily, Aes, Aes, CipherId::Aes, feedback: true, schedule: Aes::new);
block_family!(CamelliaFamily, Camellia, Camellia, CipherId::Camellia, feedback: true, schedule: Camellia::new);
block_family!(BlowfishFamily, Blowfish, Blowfish, CipherId::Blowfish, feedback: true, schedule: Blowfish::new);
block_family!(DesFamily, Des, Des, CipherId::Des, feedback: false, schedule: schedule_des);
block_family!(DesEdeFamily, DesEde, TdesEde2, CipherId::Des3, feedback: false, schedule: schedule_des_ede);
block_family!(DesEde3Family, DesEde3, TdesEde3, CipherId::Des3, feedback: false, schedule: schedule_des_ede3);

/// DES keys are fixed length, parity bits included
fn fixed_key_bits(algorithm: &'static str, key_bits: u32, expected: u32) -> PrimitiveResult<()> {
    if key_bits != expected {
        return Err(PrimitiveError::InvalidKeyLength {
            algorithm,
            bits: key_bits,
        });
    }
    Ok(())
}

fn schedule_des(key: &[u8], key_bits: u32) -> PrimitiveResult<Des> {
    fixed_key_bits("DES", key_bits, KEY_LENGTH_DES)?;
    Des::new(key)
}

fn schedule_des_ede(key: &[u8], key_bits: u32) -> PrimitiveResult<TdesEde2> {
    fixed_key_bits("DES-EDE", key_bits, KEY_LENGTH_DES_EDE)?;
    TdesEde2::new(key)
}

fn schedule_des_ede3(key: &[u8], key_bits: u32) -> PrimitiveResult<TdesEde3> {
    fixed_key_bits("DES-EDE3", key_bits, KEY_LENGTH_DES_EDE3)?;
    TdesEde3::new(key)
}

pub(crate) static AES_BASE: BlockBase<AesFamily> = BlockBase::new();
pub(crate) static CAMELLIA_BASE: BlockBase<CamelliaFamily> = BlockBase::new();
pub(crate) static BLOWFISH_BASE: BlockBase<BlowfishFamily> = BlockBase::new();
pub(crate) static DES_BASE: BlockBase<DesFamily> = BlockBase::new();
pub(crate) static DES_EDE_BASE: BlockBase<DesEdeFamily> = BlockBase::new();
pub(crate) static DES_EDE3_BASE: BlockBase<DesEde3Family> = BlockBase::new();
