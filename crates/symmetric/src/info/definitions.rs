//! The static variant catalogue
//!
//! Order here is registry order. Variants whose mode is compiled out of the
//! provider are left out of the catalogue entirely.

use cipherwrap_api::{
    CipherMode, CipherType, KEY_LENGTH_DES, KEY_LENGTH_DES_EDE, KEY_LENGTH_DES_EDE3,
};

#[cfg(feature = "gcm")]
use crate::aead::GCM_BASE;
#[cfg(feature = "null-cipher")]
use crate::base::NULL_BASE;
use crate::base::{
    AES_BASE, ARC4_BASE, BLOWFISH_BASE, CAMELLIA_BASE, DES_BASE, DES_EDE3_BASE, DES_EDE_BASE,
};

use super::CipherInfo;

const AES_BLOCK_SIZE: usize = 16;
const CAMELLIA_BLOCK_SIZE: usize = 16;
const DES_BLOCK_SIZE: usize = 8;
const BLOWFISH_BLOCK_SIZE: usize = 8;
const GCM_IV_SIZE: usize = 12;

// AES

static AES_128_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes128Ecb,
    CipherMode::Ecb,
    128,
    "AES-128-ECB",
    0,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

static AES_192_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes192Ecb,
    CipherMode::Ecb,
    192,
    "AES-192-ECB",
    0,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

static AES_256_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes256Ecb,
    CipherMode::Ecb,
    256,
    "AES-256-ECB",
    0,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

static AES_128_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes128Cbc,
    CipherMode::Cbc,
    128,
    "AES-128-CBC",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

static AES_192_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes192Cbc,
    CipherMode::Cbc,
    192,
    "AES-192-CBC",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

static AES_256_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes256Cbc,
    CipherMode::Cbc,
    256,
    "AES-256-CBC",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static AES_128_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes128Cfb128,
    CipherMode::Cfb,
    128,
    "AES-128-CFB128",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static AES_192_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes192Cfb128,
    CipherMode::Cfb,
    192,
    "AES-192-CFB128",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static AES_256_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes256Cfb128,
    CipherMode::Cfb,
    256,
    "AES-256-CFB128",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static AES_128_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes128Ctr,
    CipherMode::Ctr,
    128,
    "AES-128-CTR",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static AES_192_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes192Ctr,
    CipherMode::Ctr,
    192,
    "AES-192-CTR",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static AES_256_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Aes256Ctr,
    CipherMode::Ctr,
    256,
    "AES-256-CTR",
    AES_BLOCK_SIZE,
    AES_BLOCK_SIZE,
    &AES_BASE,
);

#[cfg(feature = "gcm")]
static AES_128_GCM_INFO: CipherInfo = CipherInfo::aead(
    CipherType::Aes128Gcm,
    128,
    "AES-128-GCM",
    GCM_IV_SIZE,
    AES_BLOCK_SIZE,
    &GCM_BASE,
);

#[cfg(feature = "gcm")]
static AES_192_GCM_INFO: CipherInfo = CipherInfo::aead(
    CipherType::Aes192Gcm,
    192,
    "AES-192-GCM",
    GCM_IV_SIZE,
    AES_BLOCK_SIZE,
    &GCM_BASE,
);

#[cfg(feature = "gcm")]
static AES_256_GCM_INFO: CipherInfo = CipherInfo::aead(
    CipherType::Aes256Gcm,
    256,
    "AES-256-GCM",
    GCM_IV_SIZE,
    AES_BLOCK_SIZE,
    &GCM_BASE,
);

// CAMELLIA

static CAMELLIA_128_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia128Ecb,
    CipherMode::Ecb,
    128,
    "CAMELLIA-128-ECB",
    0,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

static CAMELLIA_192_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia192Ecb,
    CipherMode::Ecb,
    192,
    "CAMELLIA-192-ECB",
    0,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

static CAMELLIA_256_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia256Ecb,
    CipherMode::Ecb,
    256,
    "CAMELLIA-256-ECB",
    0,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

static CAMELLIA_128_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia128Cbc,
    CipherMode::Cbc,
    128,
    "CAMELLIA-128-CBC",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

static CAMELLIA_192_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia192Cbc,
    CipherMode::Cbc,
    192,
    "CAMELLIA-192-CBC",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

static CAMELLIA_256_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia256Cbc,
    CipherMode::Cbc,
    256,
    "CAMELLIA-256-CBC",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static CAMELLIA_128_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia128Cfb128,
    CipherMode::Cfb,
    128,
    "CAMELLIA-128-CFB128",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static CAMELLIA_192_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia192Cfb128,
    CipherMode::Cfb,
    192,
    "CAMELLIA-192-CFB128",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-cfb")]
static CAMELLIA_256_CFB128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia256Cfb128,
    CipherMode::Cfb,
    256,
    "CAMELLIA-256-CFB128",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static CAMELLIA_128_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia128Ctr,
    CipherMode::Ctr,
    128,
    "CAMELLIA-128-CTR",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static CAMELLIA_192_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia192Ctr,
    CipherMode::Ctr,
    192,
    "CAMELLIA-192-CTR",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

#[cfg(feature = "cipher-mode-ctr")]
static CAMELLIA_256_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Camellia256Ctr,
    CipherMode::Ctr,
    256,
    "CAMELLIA-256-CTR",
    CAMELLIA_BLOCK_SIZE,
    CAMELLIA_BLOCK_SIZE,
    &CAMELLIA_BASE,
);

// DES

static DES_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesEcb,
    CipherMode::Ecb,
    KEY_LENGTH_DES,
    "DES-ECB",
    0,
    DES_BLOCK_SIZE,
    &DES_BASE,
);

static DES_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesCbc,
    CipherMode::Cbc,
    KEY_LENGTH_DES,
    "DES-CBC",
    DES_BLOCK_SIZE,
    DES_BLOCK_SIZE,
    &DES_BASE,
);

static DES_EDE_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesEdeEcb,
    CipherMode::Ecb,
    KEY_LENGTH_DES_EDE,
    "DES-EDE-ECB",
    0,
    DES_BLOCK_SIZE,
    &DES_EDE_BASE,
);

static DES_EDE_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesEdeCbc,
    CipherMode::Cbc,
    KEY_LENGTH_DES_EDE,
    "DES-EDE-CBC",
    DES_BLOCK_SIZE,
    DES_BLOCK_SIZE,
    &DES_EDE_BASE,
);

static DES_EDE3_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesEde3Ecb,
    CipherMode::Ecb,
    KEY_LENGTH_DES_EDE3,
    "DES-EDE3-ECB",
    0,
    DES_BLOCK_SIZE,
    &DES_EDE3_BASE,
);

static DES_EDE3_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::DesEde3Cbc,
    CipherMode::Cbc,
    KEY_LENGTH_DES_EDE3,
    "DES-EDE3-CBC",
    DES_BLOCK_SIZE,
    DES_BLOCK_SIZE,
    &DES_EDE3_BASE,
);

// Blowfish, keyed anywhere from 32 to 448 bits

static BLOWFISH_ECB_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::BlowfishEcb,
    CipherMode::Ecb,
    128,
    "BLOWFISH-ECB",
    0,
    BLOWFISH_BLOCK_SIZE,
    &BLOWFISH_BASE,
).with_variable_key_len();

static BLOWFISH_CBC_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::BlowfishCbc,
    CipherMode::Cbc,
    128,
    "BLOWFISH-CBC",
    BLOWFISH_BLOCK_SIZE,
    BLOWFISH_BLOCK_SIZE,
    &BLOWFISH_BASE,
).with_variable_key_len();

#[cfg(feature = "cipher-mode-cfb")]
static BLOWFISH_CFB64_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::BlowfishCfb64,
    CipherMode::Cfb,
    128,
    "BLOWFISH-CFB64",
    BLOWFISH_BLOCK_SIZE,
    BLOWFISH_BLOCK_SIZE,
    &BLOWFISH_BASE,
).with_variable_key_len();

#[cfg(feature = "cipher-mode-ctr")]
static BLOWFISH_CTR_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::BlowfishCtr,
    CipherMode::Ctr,
    128,
    "BLOWFISH-CTR",
    BLOWFISH_BLOCK_SIZE,
    BLOWFISH_BLOCK_SIZE,
    &BLOWFISH_BASE,
).with_variable_key_len();

// Stream

static ARC4_128_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Arc4_128,
    CipherMode::Stream,
    128,
    "ARC4-128",
    0,
    1,
    &ARC4_BASE,
).with_variable_key_len();

#[cfg(feature = "null-cipher")]
static NULL_INFO: CipherInfo = CipherInfo::symmetric(
    CipherType::Null,
    CipherMode::Stream,
    0,
    "NULL",
    0,
    1,
    &NULL_BASE,
).with_variable_key_len();

/// Every registered variant, in registry order
pub(crate) static DEFINITIONS: &[&CipherInfo] = &[
    &AES_128_ECB_INFO,
    &AES_192_ECB_INFO,
    &AES_256_ECB_INFO,
    &AES_128_CBC_INFO,
    &AES_192_CBC_INFO,
    &AES_256_CBC_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &AES_128_CFB128_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &AES_192_CFB128_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &AES_256_CFB128_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &AES_128_CTR_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &AES_192_CTR_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &AES_256_CTR_INFO,
    #[cfg(feature = "gcm")]
    &AES_128_GCM_INFO,
    #[cfg(feature = "gcm")]
    &AES_192_GCM_INFO,
    #[cfg(feature = "gcm")]
    &AES_256_GCM_INFO,
    &CAMELLIA_128_ECB_INFO,
    &CAMELLIA_192_ECB_INFO,
    &CAMELLIA_256_ECB_INFO,
    &CAMELLIA_128_CBC_INFO,
    &CAMELLIA_192_CBC_INFO,
    &CAMELLIA_256_CBC_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &CAMELLIA_128_CFB128_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &CAMELLIA_192_CFB128_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &CAMELLIA_256_CFB128_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &CAMELLIA_128_CTR_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &CAMELLIA_192_CTR_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &CAMELLIA_256_CTR_INFO,
    &DES_ECB_INFO,
    &DES_CBC_INFO,
    &DES_EDE_ECB_INFO,
    &DES_EDE_CBC_INFO,
    &DES_EDE3_ECB_INFO,
    &DES_EDE3_CBC_INFO,
    &BLOWFISH_ECB_INFO,
    &BLOWFISH_CBC_INFO,
    #[cfg(feature = "cipher-mode-cfb")]
    &BLOWFISH_CFB64_INFO,
    #[cfg(feature = "cipher-mode-ctr")]
    &BLOWFISH_CTR_INFO,
    &ARC4_128_INFO,
    #[cfg(feature = "null-cipher")]
    &NULL_INFO,
];
