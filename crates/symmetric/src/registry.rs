//! Descriptor registry
//!
//! The registry is the fixed catalogue of variants compiled into this build.
//! Lookups are pure linear scans over a few dozen entries and report a miss
//! as `None`; there is no way to add or remove entries at runtime.

use cipherwrap_api::{CipherId, CipherMode, CipherType};

use crate::info::definitions::DEFINITIONS;
use crate::info::CipherInfo;

/// Every registered descriptor, in registry order
pub fn definitions() -> &'static [&'static CipherInfo] {
    DEFINITIONS
}

/// Identities of every registered variant, in registry order
pub fn supported_ciphers() -> Vec<CipherType> {
    DEFINITIONS.iter().map(|info| info.cipher_type()).collect()
}

/// Find the descriptor of a variant
///
/// Returns `None` for a variant whose mode is not compiled in.
pub fn find_by_id(cipher_type: CipherType) -> Option<&'static CipherInfo> {
    DEFINITIONS
        .iter()
        .copied()
        .find(|info| info.cipher_type() == cipher_type)
}

/// Find a descriptor by display name, ignoring ASCII case
pub fn find_by_name(name: &str) -> Option<&'static CipherInfo> {
    DEFINITIONS
        .iter()
        .copied()
        .find(|info| info.name().eq_ignore_ascii_case(name))
}

/// Find a descriptor by family, key length in bits and mode
///
/// A family and key length alone name several variants, one per mode, so
/// the mode is part of the key. Variable-length families match on their
/// nominal key length only.
pub fn find_by_family_and_keylen(
    family: CipherId,
    key_bits: u32,
    mode: CipherMode,
) -> Option<&'static CipherInfo> {
    DEFINITIONS.iter().copied().find(|info| {
        info.family() == family && info.key_bits() == key_bits && info.mode() == mode
    })
}
