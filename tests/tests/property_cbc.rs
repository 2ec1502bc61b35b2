//! Property-based CBC round trips for every registered CBC variant

use cipherwrap::prelude::*;
use cipherwrap_tests::variants_in_mode;
use proptest::prelude::*;

/// A CBC variant with a key, an IV and block-aligned data sized for it
fn cbc_case() -> impl Strategy<Value = (&'static CipherInfo, Vec<u8>, Vec<u8>, Vec<u8>)> {
    let variants: Vec<_> = variants_in_mode(CipherMode::Cbc).collect();
    prop::sample::select(variants).prop_flat_map(|info| {
        let block_size = info.block_size();
        let key_len = (info.key_bits() / 8) as usize;
        (
            Just(info),
            prop::collection::vec(any::<u8>(), key_len),
            prop::collection::vec(any::<u8>(), block_size),
            (1usize..=16).prop_flat_map(move |blocks| {
                prop::collection::vec(any::<u8>(), blocks * block_size)
            }),
        )
    })
}

proptest! {
    #[test]
    fn cbc_roundtrip((info, key, iv, data) in cbc_case()) {
        let mut enc = CipherContext::new(info);
        enc.set_key(&key, info.key_bits(), Operation::Encrypt).unwrap();
        let mut chain = iv.clone();
        let mut ciphertext = vec![0u8; data.len()];
        enc.cbc(&mut chain, &data, &mut ciphertext).unwrap();

        // the chaining value left behind is the last ciphertext block
        prop_assert_eq!(&chain[..], &ciphertext[data.len() - info.block_size()..]);

        let mut dec = CipherContext::new(info);
        dec.set_key(&key, info.key_bits(), Operation::Decrypt).unwrap();
        let mut chain = iv.clone();
        let mut recovered = vec![0u8; data.len()];
        dec.cbc(&mut chain, &ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, data);
    }

    #[test]
    fn cbc_chains_across_calls(
        (info, key, iv, data) in cbc_case(),
        split in any::<prop::sample::Index>()
    ) {
        let block_size = info.block_size();
        let blocks = data.len() / block_size;
        let at = split.index(blocks + 1) * block_size;

        let mut ctx = CipherContext::new(info);
        ctx.set_key(&key, info.key_bits(), Operation::Encrypt).unwrap();

        let mut chain = iv.clone();
        let mut whole = vec![0u8; data.len()];
        ctx.cbc(&mut chain, &data, &mut whole).unwrap();

        let mut chain = iv.clone();
        let mut pieces = vec![0u8; data.len()];
        let (head, tail) = pieces.split_at_mut(at);
        ctx.cbc(&mut chain, &data[..at], head).unwrap();
        ctx.cbc(&mut chain, &data[at..], tail).unwrap();

        prop_assert_eq!(pieces, whole);
    }
}
