//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block uses the IV. On return the caller's IV buffer
//! holds the last ciphertext block, so consecutive calls chain exactly as if
//! the data had been passed in one call (NIST SP 800-38A, 6.2).

use zeroize::Zeroizing;

use cipherwrap_api::{Operation, MAX_BLOCK_LENGTH};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Encrypts or decrypts a whole number of blocks in CBC mode
///
/// * `iv` - chaining value, one block long; overwritten with the final
///   ciphertext block
/// * `input` - a multiple of the block size
/// * `output` - at least as long as `input`
pub fn crypt<B: BlockCipher + ?Sized>(
    cipher: &B,
    operation: Operation,
    iv: &mut [u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<()> {
    let block_size = cipher.block_size();
    validate::length("CBC initialization vector", iv.len(), block_size)?;
    validate::block_multiple("CBC input", input.len(), block_size)?;
    validate::min_length("CBC output", output.len(), input.len())?;

    let blocks = input
        .chunks_exact(block_size)
        .zip(output.chunks_exact_mut(block_size));

    match operation {
        Operation::Encrypt => {
            for (src, dst) in blocks {
                for ((d, s), v) in dst.iter_mut().zip(src).zip(iv.iter()) {
                    *d = s ^ v;
                }
                cipher.encrypt_block(dst)?;
                iv.copy_from_slice(dst);
            }
        }
        Operation::Decrypt => {
            let mut saved = Zeroizing::new([0u8; MAX_BLOCK_LENGTH]);
            for (src, dst) in blocks {
                saved[..block_size].copy_from_slice(src);
                dst.copy_from_slice(src);
                cipher.decrypt_block(dst)?;
                for (d, v) in dst.iter_mut().zip(iv.iter()) {
                    *d ^= v;
                }
                iv.copy_from_slice(&saved[..block_size]);
            }
        }
    }

    Ok(())
}
