//! Error handling for cipher primitives
//!
//! Providers report failures with the shared [`PrimitiveError`] type so that
//! the dispatch layer can hand them to callers without translation.

pub use cipherwrap_api::error::validate;
pub use cipherwrap_api::error::{PrimitiveError as Error, PrimitiveResult as Result};

/// Slice `key_bits / 8` bytes out of a caller key buffer
///
/// Fails with `InvalidKeyLength` when the bit count is not byte aligned and
/// with `InvalidLength` when the buffer is too short.
pub(crate) fn key_bytes<'a>(
    algorithm: &'static str,
    context: &'static str,
    key: &'a [u8],
    key_bits: u32,
) -> Result<&'a [u8]> {
    if key_bits % 8 != 0 {
        return Err(Error::InvalidKeyLength { algorithm, bits: key_bits });
    }
    let len = (key_bits / 8) as usize;
    validate::min_length(context, key.len(), len)?;
    Ok(&key[..len])
}
