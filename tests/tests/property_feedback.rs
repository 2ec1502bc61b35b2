//! Property-based resumability for the CFB and CTR variants
//!
//! Splitting a message anywhere and threading the IV, offset and keystream
//! state between two calls must give the same bytes as one call.

#![cfg(any(feature = "cipher-mode-cfb", feature = "cipher-mode-ctr"))]

use cipherwrap::prelude::*;
use cipherwrap_tests::variants_in_mode;
use proptest::prelude::*;

type Case = (&'static CipherInfo, Vec<u8>, Vec<u8>, Vec<u8>, usize);

fn feedback_case(mode: CipherMode) -> impl Strategy<Value = Case> {
    let variants: Vec<_> = variants_in_mode(mode).collect();
    prop::sample::select(variants).prop_flat_map(|info| {
        let key_len = (info.key_bits() / 8) as usize;
        (
            Just(info),
            prop::collection::vec(any::<u8>(), key_len),
            prop::collection::vec(any::<u8>(), info.iv_size()),
            prop::collection::vec(any::<u8>(), 0..200),
        )
            .prop_flat_map(|(info, key, iv, data)| {
                let len = data.len();
                (Just(info), Just(key), Just(iv), Just(data), 0..=len)
            })
    })
}

#[cfg(feature = "cipher-mode-cfb")]
fn cfb(ctx: &CipherContext, iv: &[u8], data: &[u8], split: usize) -> (Vec<u8>, Vec<u8>) {
    let mut register = iv.to_vec();
    let mut iv_off = 0;
    let mut whole = vec![0u8; data.len()];
    ctx.cfb(&mut iv_off, &mut register, data, &mut whole).unwrap();

    let mut register = iv.to_vec();
    let mut iv_off = 0;
    let mut pieces = vec![0u8; data.len()];
    let (head, tail) = pieces.split_at_mut(split);
    ctx.cfb(&mut iv_off, &mut register, &data[..split], head).unwrap();
    ctx.cfb(&mut iv_off, &mut register, &data[split..], tail).unwrap();

    (whole, pieces)
}

#[cfg(feature = "cipher-mode-ctr")]
fn ctr(ctx: &CipherContext, counter: &[u8], data: &[u8], split: usize) -> (Vec<u8>, Vec<u8>) {
    let block_size = ctx.block_size();

    let mut nonce_counter = counter.to_vec();
    let mut stream_block = vec![0u8; block_size];
    let mut nc_off = 0;
    let mut whole = vec![0u8; data.len()];
    ctx.ctr(&mut nc_off, &mut nonce_counter, &mut stream_block, data, &mut whole)
        .unwrap();

    let mut nonce_counter = counter.to_vec();
    let mut stream_block = vec![0u8; block_size];
    let mut nc_off = 0;
    let mut pieces = vec![0u8; data.len()];
    let (head, tail) = pieces.split_at_mut(split);
    ctx.ctr(&mut nc_off, &mut nonce_counter, &mut stream_block, &data[..split], head)
        .unwrap();
    ctx.ctr(&mut nc_off, &mut nonce_counter, &mut stream_block, &data[split..], tail)
        .unwrap();

    (whole, pieces)
}

proptest! {
    #[cfg(feature = "cipher-mode-cfb")]
    #[test]
    fn cfb_split_matches_single_call(
        (info, key, iv, data, split) in feedback_case(CipherMode::Cfb)
    ) {
        let mut enc = CipherContext::new(info);
        enc.set_key(&key, info.key_bits(), Operation::Encrypt).unwrap();
        let (whole, pieces) = cfb(&enc, &iv, &data, split);
        prop_assert_eq!(&pieces, &whole);

        let mut dec = CipherContext::new(info);
        dec.set_key(&key, info.key_bits(), Operation::Decrypt).unwrap();
        let (recovered, recovered_pieces) = cfb(&dec, &iv, &whole, split);
        prop_assert_eq!(&recovered, &data);
        prop_assert_eq!(&recovered_pieces, &data);
    }

    #[cfg(feature = "cipher-mode-ctr")]
    #[test]
    fn ctr_split_matches_single_call(
        (info, key, counter, data, split) in feedback_case(CipherMode::Ctr)
    ) {
        let mut ctx = CipherContext::new(info);
        ctx.set_key(&key, info.key_bits(), Operation::Encrypt).unwrap();
        let (whole, pieces) = ctr(&ctx, &counter, &data, split);
        prop_assert_eq!(&pieces, &whole);

        let (recovered, _) = ctr(&ctx, &counter, &whole, split);
        prop_assert_eq!(&recovered, &data);
    }
}
