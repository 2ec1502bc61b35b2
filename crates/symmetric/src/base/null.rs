//! NULL cipher table
//!
//! Copies input to output and accepts any key. Its state is the
//! [`CipherState::null`] sentinel, which owns nothing.

use cipherwrap_api::CipherId;

use super::{Capabilities, CipherBase, CipherState, State};
use crate::error::{foreign_state, validate, Result};

pub(crate) struct NullBase;

pub(crate) static NULL_BASE: NullBase = NullBase;

impl CipherBase for NullBase {
    fn id(&self) -> CipherId {
        CipherId::Null
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::STREAM
    }

    fn ctx_alloc(&self) -> CipherState {
        CipherState::null()
    }

    // nothing to release
    fn ctx_free(&self, _state: CipherState) {}

    fn set_key_enc(&self, _state: &mut CipherState, _key: &[u8], _key_bits: u32) -> Result<()> {
        Ok(())
    }

    fn set_key_dec(&self, _state: &mut CipherState, _key: &[u8], _key_bits: u32) -> Result<()> {
        Ok(())
    }

    fn stream(&self, state: &mut CipherState, input: &[u8], output: &mut [u8]) -> Result<()> {
        if !matches!(state.inner(), State::Null) {
            return Err(foreign_state());
        }
        validate::min_length("NULL output", output.len(), input.len())?;
        output[..input.len()].copy_from_slice(input);
        Ok(())
    }
}
