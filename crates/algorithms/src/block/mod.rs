//! Block cipher providers
//!
//! Every family is adapted to the object-safe [`BlockCipher`] trait so the
//! mode routines in [`modes`] can be written once. The key schedule held by
//! each provider serves both directions.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, BlockSizeUser};

use crate::error::{validate, Result};

pub mod aes;
pub mod blowfish;
pub mod camellia;
pub mod des;
pub mod modes;

// Re-exports
pub use self::aes::Aes;
pub use self::blowfish::Blowfish;
pub use self::camellia::Camellia;
pub use self::des::{Des, TdesEde2, TdesEde3};

/// Trait for keyed block ciphers
pub trait BlockCipher {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

/// Encrypt one block with a RustCrypto cipher after checking its length
#[inline]
pub(crate) fn encrypt_with<C: BlockEncrypt>(
    cipher: &C,
    context: &'static str,
    block: &mut [u8],
) -> Result<()> {
    validate::length(context, block.len(), <C as BlockSizeUser>::block_size())?;
    cipher.encrypt_block(GenericArray::from_mut_slice(block));
    Ok(())
}

/// Decrypt one block with a RustCrypto cipher after checking its length
#[inline]
pub(crate) fn decrypt_with<C: BlockDecrypt>(
    cipher: &C,
    context: &'static str,
    block: &mut [u8],
) -> Result<()> {
    validate::length(context, block.len(), <C as BlockSizeUser>::block_size())?;
    cipher.decrypt_block(GenericArray::from_mut_slice(block));
    Ok(())
}

/// Implements [`BlockCipher`] for a provider that wraps RustCrypto ciphers,
/// either as a newtype or as an enum with one variant per key size.
macro_rules! impl_block_cipher {
    ($ty:ident, $name:literal, $block:expr) => {
        impl $crate::block::BlockCipher for $ty {
            fn block_size(&self) -> usize {
                $block
            }

            fn encrypt_block(&self, block: &mut [u8]) -> $crate::error::Result<()> {
                $crate::block::encrypt_with(&self.0, concat!($name, " block"), block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> $crate::error::Result<()> {
                $crate::block::decrypt_with(&self.0, concat!($name, " block"), block)
            }
        }
    };
    ($ty:ident, $name:literal, $block:expr, [$($variant:ident),+ $(,)?]) => {
        impl $crate::block::BlockCipher for $ty {
            fn block_size(&self) -> usize {
                $block
            }

            fn encrypt_block(&self, block: &mut [u8]) -> $crate::error::Result<()> {
                match self {
                    $($ty::$variant(inner) => {
                        $crate::block::encrypt_with(inner, concat!($name, " block"), block)
                    })+
                }
            }

            fn decrypt_block(&self, block: &mut [u8]) -> $crate::error::Result<()> {
                match self {
                    $($ty::$variant(inner) => {
                        $crate::block::decrypt_with(inner, concat!($name, " block"), block)
                    })+
                }
            }
        }
    };
}

pub(crate) use impl_block_cipher;
