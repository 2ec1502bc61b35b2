//! Known-answer tests run through the registry and context

use cipherwrap::prelude::*;
use cipherwrap_tests::vectors::{BlockVector, ARC4_VECTORS, BLOCK_VECTORS};

fn transform(
    info: &'static CipherInfo,
    key: &[u8],
    operation: Operation,
    iv: &[u8],
    input: &[u8],
) -> Vec<u8> {
    let mut ctx = CipherContext::new(info);
    ctx.set_key(key, key.len() as u32 * 8, operation).unwrap();

    let block_size = info.block_size();
    let mut iv = iv.to_vec();
    let mut output = vec![0u8; input.len()];
    match info.mode() {
        CipherMode::Ecb => {
            for (src, dst) in input.chunks(block_size).zip(output.chunks_mut(block_size)) {
                ctx.ecb(src, dst).unwrap();
            }
        }
        CipherMode::Cbc => ctx.cbc(&mut iv, input, &mut output).unwrap(),
        CipherMode::Cfb => {
            let mut iv_off = 0;
            ctx.cfb(&mut iv_off, &mut iv, input, &mut output).unwrap();
        }
        CipherMode::Ctr => {
            let mut nc_off = 0;
            let mut stream_block = vec![0u8; block_size];
            ctx.ctr(&mut nc_off, &mut iv, &mut stream_block, input, &mut output)
                .unwrap();
        }
        other => panic!("{info}: no block transform for {other}"),
    }
    output
}

fn check(vector: &BlockVector) {
    // variants compiled out of this build have nothing to check
    let Some(info) = find_by_id(vector.cipher) else {
        return;
    };
    let key = hex::decode(vector.key).unwrap();
    let iv = hex::decode(vector.iv).unwrap();
    let plaintext = hex::decode(vector.plaintext).unwrap();
    let ciphertext = hex::decode(vector.ciphertext).unwrap();

    let encrypted = transform(info, &key, Operation::Encrypt, &iv, &plaintext);
    assert_eq!(hex::encode(&encrypted), vector.ciphertext, "{info} encrypt");

    let decrypted = transform(info, &key, Operation::Decrypt, &iv, &ciphertext);
    assert_eq!(decrypted, plaintext, "{info} decrypt");
}

#[test]
fn block_vectors() {
    for vector in BLOCK_VECTORS {
        check(vector);
    }
}

#[test]
fn arc4_vectors() {
    let info = find_by_id(CipherType::Arc4_128).unwrap();
    for vector in ARC4_VECTORS {
        let mut ctx = CipherContext::new(info);
        ctx.set_key(vector.key, vector.key.len() as u32 * 8, Operation::Encrypt)
            .unwrap();
        let mut output = vec![0u8; vector.plaintext.len()];
        ctx.stream(vector.plaintext, &mut output).unwrap();
        assert_eq!(hex::encode(&output), vector.ciphertext);
    }
}

#[test]
fn arc4_split_stream_matches_single_pass() {
    let info = find_by_id(CipherType::Arc4_128).unwrap();
    let message = b"Attack at dawn";

    let mut ctx = CipherContext::new(info);
    ctx.set_key(b"Secret", 48, Operation::Encrypt).unwrap();
    let mut output = [0u8; 14];
    let (head, tail) = output.split_at_mut(4);
    ctx.stream(&message[..4], head).unwrap();
    ctx.stream(&message[4..], tail).unwrap();
    assert_eq!(hex::encode(output), "45a01f645fc35b383552544b9bf5");
}

#[cfg(feature = "null-cipher")]
#[test]
fn null_cipher_is_identity() {
    let info = find_by_id(CipherType::Null).unwrap();
    let mut ctx = CipherContext::new(info);
    ctx.set_key(&[0xde, 0xad], 13, Operation::Encrypt).unwrap();

    let input: Vec<u8> = (0..=255).collect();
    let mut output = vec![0u8; input.len()];
    ctx.stream(&input, &mut output).unwrap();
    assert_eq!(output, input);
}

// McGrew & Viega test cases 2 and 3
#[cfg(feature = "gcm")]
#[test]
fn gcm_vectors() {
    let info = find_by_id(CipherType::Aes128Gcm).unwrap();
    let mut ctx = CipherContext::new(info);
    ctx.set_key(&[0u8; 16], 128, Operation::Encrypt).unwrap();

    let mut ciphertext = [0u8; 16];
    let mut tag = [0u8; 16];
    ctx.encrypt_and_tag(&[0u8; 12], &[], &[0u8; 16], &mut ciphertext, &mut tag)
        .unwrap();
    assert_eq!(hex::encode(ciphertext), "0388dace60b6a392f328c2b971b2fe78");
    assert_eq!(hex::encode(tag), "ab6e47d42cec13bdf53a67b21257bddf");

    let key = hex::decode("feffe9928665731c6d6a8f9467308308").unwrap();
    let nonce = hex::decode("cafebabefacedbaddecaf888").unwrap();
    let plaintext = hex::decode(
        "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72\
         1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b391aafd255",
    )
    .unwrap();

    let mut ctx = CipherContext::new(info);
    ctx.set_key(&key, 128, Operation::Encrypt).unwrap();
    let mut ciphertext = vec![0u8; plaintext.len()];
    ctx.encrypt_and_tag(&nonce, &[], &plaintext, &mut ciphertext, &mut tag)
        .unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e2329aca12e\
         21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac973d58e091473f5985"
    );
    assert_eq!(hex::encode(tag), "4d5c2af327cd64a62cf35abd2ba6fab4");

    let mut opened = vec![0u8; ciphertext.len()];
    ctx.auth_decrypt(&nonce, &[], &ciphertext, &mut opened, &tag)
        .unwrap();
    assert_eq!(opened, plaintext);
}
