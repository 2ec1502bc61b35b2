//! Cipher Feedback (CFB) mode with full-block feedback
//!
//! This is CFB128 for 16-byte ciphers and CFB64 for 8-byte ciphers. The
//! feedback register lives in the caller's IV buffer and `iv_off` records how
//! many bytes of the current register have been consumed, so a message can be
//! split at any byte boundary (NIST SP 800-38A, 6.3).

use cipherwrap_api::Operation;

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Encrypts or decrypts `input` into `output` in CFB mode
///
/// * `iv_off` - offset into the feedback register, `0..block_size`
/// * `iv` - feedback register, one block long
///
/// Both are read and updated so the next call resumes mid-block.
pub fn crypt<B: BlockCipher + ?Sized>(
    cipher: &B,
    operation: Operation,
    iv_off: &mut usize,
    iv: &mut [u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<()> {
    let block_size = cipher.block_size();
    validate::length("CFB initialization vector", iv.len(), block_size)?;
    validate::min_length("CFB output", output.len(), input.len())?;
    validate::parameter(
        *iv_off < block_size,
        "iv_off",
        "offset must lie inside the feedback block",
    )?;

    let mut n = *iv_off;
    for (src, dst) in input.iter().zip(output.iter_mut()) {
        if n == 0 {
            cipher.encrypt_block(iv)?;
        }

        match operation {
            Operation::Encrypt => {
                let c = iv[n] ^ src;
                iv[n] = c;
                *dst = c;
            }
            Operation::Decrypt => {
                let c = *src;
                *dst = c ^ iv[n];
                iv[n] = c;
            }
        }

        n = (n + 1) % block_size;
    }

    *iv_off = n;
    Ok(())
}
