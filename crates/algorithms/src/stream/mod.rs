//! Stream cipher implementations
//!
//! Stream ciphers combine the message with a keystream one byte at a time, so
//! encryption and decryption are the same operation and any input length is
//! accepted.
//!
//! # Available Stream Ciphers
//!
//! - ARC4: the alleged RC4 keystream generator, kept for legacy protocols
//!
//! # Security Considerations
//!
//! ARC4 has well known keystream biases. Never reuse a key, and do not pick it
//! for new designs.

pub mod arc4;

pub use arc4::Arc4;
