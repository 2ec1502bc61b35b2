//! ARC4 table
//!
//! The registry counts key length in bits while ARC4 keys on a byte string.
//! The conversion happens here and nowhere else, and both key setup entries
//! share it because a keystream generator has no direction.

use cipherwrap_algorithms::Arc4;
use cipherwrap_api::CipherId;

use super::{Capabilities, CipherBase, CipherState, State};
use crate::error::{foreign_state, unkeyed, validate, Result};

pub(crate) struct Arc4Base;

pub(crate) static ARC4_BASE: Arc4Base = Arc4Base;

impl Arc4Base {
    fn set_key(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        validate::bad_input(
            key_bits % 8 == 0,
            "ARC4 key length must be a whole number of bytes",
        )?;
        let len = (key_bits / 8) as usize;
        validate::bad_input(
            key.len() >= len,
            "key buffer shorter than the requested key length",
        )?;

        let slot = match state.inner_mut() {
            State::Arc4(slot) => slot,
            _ => return Err(foreign_state()),
        };
        *slot = None;
        *slot = Some(Arc4::new(&key[..len])?);
        Ok(())
    }
}

impl CipherBase for Arc4Base {
    fn id(&self) -> CipherId {
        CipherId::Arc4
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::STREAM
    }

    fn ctx_alloc(&self) -> CipherState {
        CipherState::new(State::Arc4(None))
    }

    fn set_key_enc(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    fn set_key_dec(&self, state: &mut CipherState, key: &[u8], key_bits: u32) -> Result<()> {
        self.set_key(state, key, key_bits)
    }

    fn stream(&self, state: &mut CipherState, input: &[u8], output: &mut [u8]) -> Result<()> {
        match state.inner_mut() {
            State::Arc4(Some(cipher)) => Ok(cipher.process(input, output)?),
            State::Arc4(None) => Err(unkeyed()),
            _ => Err(foreign_state()),
        }
    }
}
