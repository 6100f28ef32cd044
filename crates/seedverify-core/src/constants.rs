//! Protocol constants for BIP-39 mnemonics and the fixed BIP-32 comparison path.

/// Number of entries in the wordlist.
pub const WORD_COUNT: usize = 2048;

/// Sentinel returned by [`index_of`](crate::wordlist::index_of) when a word is
/// not in the wordlist. Never a stored index.
pub const NOT_FOUND: u16 = WORD_COUNT as u16;

/// Shortest word in the wordlist.
pub const WORD_LEN_MIN: usize = 3;

/// Longest word in the wordlist. A prefix this long can not be extended.
pub const WORD_LEN_MAX: usize = 8;

/// Width of one packed word index.
pub const BITS_PER_WORD: usize = 11;

/// Capacity of the packed mnemonic buffer: 24 words of 11 bits.
pub const PACKED_LEN: usize = 33;

/// Mnemonics longer than this are pre-hashed with SHA-512 before stretching.
pub const MNEMONIC_PREHASH_THRESHOLD: usize = 128;

/// PBKDF2 salt for a mnemonic with an empty passphrase.
pub const PBKDF2_SALT: &[u8] = b"mnemonic";

/// PBKDF2-HMAC-SHA512 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a stretched BIP-39 seed.
pub const SEED_LEN: usize = 64;

/// HMAC key for BIP-32 master node generation.
pub const BIP32_SEED_KEY: &[u8] = b"Bitcoin seed";

/// Index offset marking a BIP-32 child as hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// The node compared against the device: m/6516080'.
///
/// # Examples
///
/// ```
/// use seedverify_core::constants::{COMPARE_PATH, HARDENED_OFFSET};
/// assert_eq!(COMPARE_PATH, HARDENED_OFFSET + 6_516_080);
/// ```
pub const COMPARE_PATH: u32 = 0x8063_6D70;

/// Upper bound on hardened derivation retries. Each retry has a chance of
/// roughly 2^-127 of being needed, so hitting this means broken primitives.
pub const MAX_DERIVE_ATTEMPTS: usize = 64;
