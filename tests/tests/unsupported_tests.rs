//! Capabilities a variant does not have, and inputs a table refuses

use cipherwrap::prelude::*;
#[cfg(feature = "gcm")]
use cipherwrap::symmetric::CipherBaseRef;

fn symmetric_base(cipher_type: CipherType) -> &'static dyn CipherBase {
    find_by_id(cipher_type)
        .and_then(|info| info.base().as_symmetric())
        .unwrap()
}

#[test]
fn des_tables_have_no_feedback_modes() {
    for cipher_type in [CipherType::DesCbc, CipherType::DesEdeCbc, CipherType::DesEde3Cbc] {
        let base = symmetric_base(cipher_type);
        assert!(!base.capabilities().cfb);
        assert!(!base.capabilities().ctr);

        let info = find_by_id(cipher_type).unwrap();
        let mut state = base.ctx_alloc();
        let key = vec![0x5au8; (info.key_bits() / 8) as usize];
        base.set_key_enc(&mut state, &key, info.key_bits()).unwrap();

        let mut iv = [0u8; 8];
        let mut off = 0;
        let mut out = [0u8; 8];
        assert_eq!(
            base.cfb(&state, Operation::Encrypt, &mut off, &mut iv, &[0u8; 8], &mut out),
            Err(Error::FeatureUnavailable { feature: "CFB" })
        );

        let mut stream_block = [0u8; 8];
        assert_eq!(
            base.ctr(&state, &mut off, &mut iv, &mut stream_block, &[0u8; 8], &mut out),
            Err(Error::FeatureUnavailable { feature: "CTR" })
        );
        base.ctx_free(state);
    }
}

#[test]
fn block_contexts_refuse_the_keystream_interface() {
    let mut ctx = CipherContext::from_type(CipherType::Aes128Cbc).unwrap();
    ctx.set_key(&[0u8; 16], 128, Operation::Encrypt).unwrap();
    let mut out = [0u8; 4];
    assert_eq!(
        ctx.stream(&[1, 2, 3, 4], &mut out),
        Err(Error::FeatureUnavailable { feature: "STREAM" })
    );
}

#[test]
fn stream_contexts_refuse_block_modes() {
    let mut ctx = CipherContext::from_type(CipherType::Arc4_128).unwrap();
    ctx.set_key(&[7u8; 16], 128, Operation::Encrypt).unwrap();
    let mut out = [0u8; 16];
    assert_eq!(
        ctx.ecb(&[0u8; 1], &mut out),
        Err(Error::FeatureUnavailable { feature: "ECB" })
    );
    let mut iv = [0u8; 16];
    assert_eq!(
        ctx.cbc(&mut iv, &[0u8; 16], &mut out),
        Err(Error::FeatureUnavailable { feature: "CBC" })
    );
}

#[test]
fn arc4_table_needs_whole_bytes() {
    let base = symmetric_base(CipherType::Arc4_128);
    let mut state = base.ctx_alloc();

    assert!(matches!(
        base.set_key_enc(&mut state, &[1u8; 16], 100),
        Err(Error::BadInputData { .. })
    ));
    assert!(matches!(
        base.set_key_enc(&mut state, &[1u8; 4], 128),
        Err(Error::BadInputData { .. })
    ));
    assert!(matches!(
        base.set_key_enc(&mut state, &[], 0),
        Err(Error::Primitive(PrimitiveError::Parameter { .. }))
    ));
    base.set_key_enc(&mut state, &[1u8; 5], 40).unwrap();
}

#[cfg(feature = "gcm")]
#[test]
fn aead_and_symmetric_interfaces_do_not_mix() {
    let info = find_by_id(CipherType::Aes128Gcm).unwrap();
    assert!(info.is_aead());
    assert!(matches!(info.base(), CipherBaseRef::Aead(_)));
    assert!(info.base().as_symmetric().is_none());

    let mut gcm = CipherContext::new(info);
    gcm.set_key(&[0u8; 16], 128, Operation::Encrypt).unwrap();
    let mut out = [0u8; 16];
    let mut iv = [0u8; 12];
    assert_eq!(
        gcm.cbc(&mut iv, &[0u8; 16], &mut out),
        Err(Error::FeatureUnavailable { feature: "CBC" })
    );

    let mut cbc = CipherContext::from_type(CipherType::Aes128Cbc).unwrap();
    cbc.set_key(&[0u8; 16], 128, Operation::Encrypt).unwrap();
    let mut tag = [0u8; 16];
    assert_eq!(
        cbc.encrypt_and_tag(&[0u8; 16], &[], &[], &mut [], &mut tag),
        Err(Error::FeatureUnavailable { feature: "AEAD" })
    );
}

#[test]
fn providers_reject_bad_keys_unchanged() {
    let base = symmetric_base(CipherType::Aes128Ecb);
    let mut state = base.ctx_alloc();
    assert_eq!(
        base.set_key_enc(&mut state, &[0u8; 32], 136),
        Err(Error::Primitive(PrimitiveError::InvalidKeyLength {
            algorithm: "AES",
            bits: 136,
        }))
    );
}

#[cfg(not(feature = "cipher-mode-cfb"))]
#[test]
fn compiled_out_cfb_is_unavailable_through_the_context() {
    assert_eq!(
        CipherContext::from_type(CipherType::Aes256Cfb128).unwrap_err(),
        Error::FeatureUnavailable { feature: "cipher variant" }
    );

    let mut ctx = CipherContext::from_type(CipherType::Camellia128Ecb).unwrap();
    ctx.set_key(&[0u8; 16], 128, Operation::Encrypt).unwrap();
    let mut iv = [0u8; 16];
    let mut iv_off = 0;
    let mut out = [0u8; 16];
    assert_eq!(
        ctx.cfb(&mut iv_off, &mut iv, &[0u8; 16], &mut out),
        Err(Error::FeatureUnavailable { feature: "CFB" })
    );
}

#[cfg(not(feature = "cipher-mode-ctr"))]
#[test]
fn compiled_out_ctr_is_unavailable_through_the_context() {
    assert_eq!(
        CipherContext::from_type(CipherType::BlowfishCtr).unwrap_err(),
        Error::FeatureUnavailable { feature: "cipher variant" }
    );
}
