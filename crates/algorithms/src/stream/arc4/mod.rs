//! ARC4 keystream generator
//!
//! Keys of 1 to 256 bytes are accepted. The permutation and both indices are
//! wiped when the state is dropped.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Shortest accepted key in bytes
pub const ARC4_MIN_KEY_SIZE: usize = 1;
/// Longest accepted key in bytes
pub const ARC4_MAX_KEY_SIZE: usize = 256;

/// ARC4 cipher state
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Arc4 {
    x: u8,
    y: u8,
    m: [u8; 256],
}

impl Arc4 {
    /// Runs the key schedule over `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        if !(ARC4_MIN_KEY_SIZE..=ARC4_MAX_KEY_SIZE).contains(&key.len()) {
            return Err(Error::param("key", "ARC4 keys must be 1 to 256 bytes"));
        }

        let mut m = [0u8; 256];
        for (i, slot) in m.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(m[i]).wrapping_add(key[i % key.len()]);
            m.swap(i, j as usize);
        }

        Ok(Self { x: 0, y: 0, m })
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        let a = self.m[self.x as usize];
        self.y = self.y.wrapping_add(a);
        let b = self.m[self.y as usize];
        self.m[self.x as usize] = b;
        self.m[self.y as usize] = a;
        self.m[a.wrapping_add(b) as usize]
    }

    /// XORs `input` with the keystream into `output`
    ///
    /// `output` must hold at least `input.len()` bytes.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::min_length("ARC4 output", output.len(), input.len())?;
        for (src, dst) in input.iter().zip(output.iter_mut()) {
            *dst = src ^ self.next_byte();
        }
        Ok(())
    }
}

impl core::fmt::Debug for Arc4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arc4").finish_non_exhaustive()
    }
}
