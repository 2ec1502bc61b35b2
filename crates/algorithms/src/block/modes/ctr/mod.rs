//! Counter (CTR) mode
//!
//! The caller owns the full-block counter, the current keystream block and the
//! offset into it. The counter is treated as one big-endian integer spanning
//! the whole block and is incremented after each keystream block is produced
//! (NIST SP 800-38A, 6.5).

use byteorder::{BigEndian, ByteOrder};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Encrypts or decrypts `input` into `output` in CTR mode
///
/// * `nc_off` - offset into `stream_block`, `0..block_size`
/// * `nonce_counter` - counter block, one block long
/// * `stream_block` - scratch keystream block, one block long
///
/// All three are updated so the next call continues the same keystream.
pub fn crypt<B: BlockCipher + ?Sized>(
    cipher: &B,
    nc_off: &mut usize,
    nonce_counter: &mut [u8],
    stream_block: &mut [u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<()> {
    let block_size = cipher.block_size();
    validate::length("CTR nonce counter", nonce_counter.len(), block_size)?;
    validate::length("CTR stream block", stream_block.len(), block_size)?;
    validate::min_length("CTR output", output.len(), input.len())?;
    validate::parameter(
        *nc_off < block_size,
        "nc_off",
        "offset must lie inside the keystream block",
    )?;

    let mut n = *nc_off;
    for (src, dst) in input.iter().zip(output.iter_mut()) {
        if n == 0 {
            stream_block.copy_from_slice(nonce_counter);
            cipher.encrypt_block(stream_block)?;
            increment_counter(nonce_counter);
        }

        *dst = src ^ stream_block[n];
        n = (n + 1) % block_size;
    }

    *nc_off = n;
    Ok(())
}

/// Adds one to a big-endian counter block, wrapping on overflow
pub fn increment_counter(counter: &mut [u8]) {
    match counter.len() {
        16 => {
            let value = BigEndian::read_u128(counter);
            BigEndian::write_u128(counter, value.wrapping_add(1));
        }
        8 => {
            let value = BigEndian::read_u64(counter);
            BigEndian::write_u64(counter, value.wrapping_add(1));
        }
        _ => {
            for byte in counter.iter_mut().rev() {
                *byte = byte.wrapping_add(1);
                if *byte != 0 {
                    break;
                }
            }
        }
    }
}
