//! Published known-answer vectors, hex encoded

use cipherwrap_api::CipherType;

/// One block-mode vector
///
/// `iv` is the IV, or the initial counter block for CTR, and is empty for ECB.
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    pub cipher: CipherType,
    pub key: &'static str,
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// One keystream vector
#[derive(Debug, Clone, Copy)]
pub struct StreamVector {
    pub key: &'static [u8],
    pub plaintext: &'static [u8],
    pub ciphertext: &'static str,
}

const SP800_38A_KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const SP800_38A_KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const SP800_38A_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP800_38A_PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

/// NIST SP 800-38A, FIPS-197, RFC 3713 and the classic DES and Blowfish vectors
pub const BLOCK_VECTORS: &[BlockVector] = &[
    // SP 800-38A F.1.1
    BlockVector {
        cipher: CipherType::Aes128Ecb,
        key: SP800_38A_KEY_128,
        iv: "",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    // FIPS-197 C.3
    BlockVector {
        cipher: CipherType::Aes256Ecb,
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        iv: "",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    // SP 800-38A F.2.1
    BlockVector {
        cipher: CipherType::Aes128Cbc,
        key: SP800_38A_KEY_128,
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
    },
    // SP 800-38A F.2.5
    BlockVector {
        cipher: CipherType::Aes256Cbc,
        key: SP800_38A_KEY_256,
        iv: SP800_38A_IV,
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
    },
    // SP 800-38A F.3.13
    BlockVector {
        cipher: CipherType::Aes128Cfb128,
        key: SP800_38A_KEY_128,
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "3b3fd92eb72dad20333449f8e83cfb4ac8a64537a0b3a93fcde3cdad9f1ce58b",
    },
    // SP 800-38A F.5.1
    BlockVector {
        cipher: CipherType::Aes128Ctr,
        key: SP800_38A_KEY_128,
        iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff",
    },
    // RFC 3713 appendix A
    BlockVector {
        cipher: CipherType::Camellia128Ecb,
        key: "0123456789abcdeffedcba9876543210",
        iv: "",
        plaintext: "0123456789abcdeffedcba9876543210",
        ciphertext: "67673138549669730857065648eabe43",
    },
    BlockVector {
        cipher: CipherType::Camellia256Ecb,
        key: "0123456789abcdeffedcba987654321000112233445566778899aabbccddeeff",
        iv: "",
        plaintext: "0123456789abcdeffedcba9876543210",
        ciphertext: "9acc237dff16d76c20ef7c919e3a7509",
    },
    BlockVector {
        cipher: CipherType::DesEcb,
        key: "133457799bbcdff1",
        iv: "",
        plaintext: "0123456789abcdef",
        ciphertext: "85e813540f0ab405",
    },
    // two-key EDE with K1 == K2 collapses to single DES
    BlockVector {
        cipher: CipherType::DesEdeEcb,
        key: "133457799bbcdff1133457799bbcdff1",
        iv: "",
        plaintext: "0123456789abcdef",
        ciphertext: "85e813540f0ab405",
    },
    // Eric Young's Blowfish set
    BlockVector {
        cipher: CipherType::BlowfishEcb,
        key: "0123456789abcdef",
        iv: "",
        plaintext: "1111111111111111",
        ciphertext: "61f9c3802281b096",
    },
];

/// ARC4 vectors from the original RC4 posting
pub const ARC4_VECTORS: &[StreamVector] = &[
    StreamVector {
        key: b"Key",
        plaintext: b"Plaintext",
        ciphertext: "bbf316e8d940af0ad3",
    },
    StreamVector {
        key: b"Wiki",
        plaintext: b"pedia",
        ciphertext: "1021bf0420",
    },
    StreamVector {
        key: b"Secret",
        plaintext: b"Attack at dawn",
        ciphertext: "45a01f645fc35b383552544b9bf5",
    },
];
