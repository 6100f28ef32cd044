//! BIP-39 seed stretching.
//!
//! The mnemonic text (with an empty passphrase) is stretched into a 64-byte
//! seed with PBKDF2-HMAC-SHA512. Mnemonics longer than one SHA-512 block are
//! first compressed to their SHA-512 digest, which is exactly what HMAC does
//! to an over-long key, so the result matches every standard implementation.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use seedverify_core::Phrase;
use seedverify_core::constants::{
    MNEMONIC_PREHASH_THRESHOLD, PBKDF2_ROUNDS, PBKDF2_SALT, SEED_LEN,
};

/// A 64-byte BIP-39 seed, the input to BIP-32 master key generation.
///
/// Secret material is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Stretch a mnemonic into its seed. The phrase is consumed and wiped.
    pub fn from_phrase(phrase: Phrase) -> Self {
        let mut key = Zeroizing::new(Vec::with_capacity(SEED_LEN));
        if phrase.len() > MNEMONIC_PREHASH_THRESHOLD {
            key.extend_from_slice(&Sha512::digest(phrase.as_bytes()));
        } else {
            key.extend_from_slice(phrase.as_bytes());
        }
        drop(phrase);

        let mut bytes = [0u8; SEED_LEN];
        pbkdf2_hmac::<Sha512>(&key, PBKDF2_SALT, PBKDF2_ROUNDS, &mut bytes);
        Self { bytes }
    }

    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
