//! Block cipher modes of operation
//!
//! Each routine is a free function over any [`BlockCipher`] and keeps no state
//! of its own: IVs, feedback offsets, counters and keystream blocks are owned
//! by the caller and updated in place, so a message can be processed across
//! any number of calls.
//!
//! CFB and CTR are optional and compiled in by the `cipher-mode-cfb` and
//! `cipher-mode-ctr` features.

use cipherwrap_api::Operation;

use super::BlockCipher;
use crate::error::{validate, Result};

pub mod cbc;
#[cfg(feature = "cipher-mode-cfb")]
pub mod cfb;
#[cfg(feature = "cipher-mode-ctr")]
pub mod ctr;

/// Transforms exactly one block from `input` into `output`
pub fn ecb<B: BlockCipher + ?Sized>(
    cipher: &B,
    operation: Operation,
    input: &[u8],
    output: &mut [u8],
) -> Result<()> {
    let block_size = cipher.block_size();
    validate::length("ECB input", input.len(), block_size)?;
    validate::length("ECB output", output.len(), block_size)?;

    output.copy_from_slice(input);
    match operation {
        Operation::Encrypt => cipher.encrypt_block(output),
        Operation::Decrypt => cipher.decrypt_block(output),
    }
}
