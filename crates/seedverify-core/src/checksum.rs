//! BIP-39 checksum validation.
//!
//! A mnemonic of N words packs into 11·N bits: the entropy followed by a
//! checksum made of the leading bits of SHA-256(entropy). Layout inside the
//! 33-byte buffer:
//!
//! | words | entropy bits | checksum bits | zero padding |
//! |-------|--------------|---------------|--------------|
//! | 12    | 0..128       | 128..132      | 132..264     |
//! | 18    | 0..192       | 192..198      | 198..264     |
//! | 24    | 0..256       | 256..264      | none         |

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::bits;
use crate::constants::{BITS_PER_WORD, PACKED_LEN};
use crate::error::{BitsError, ChecksumError};
use crate::wordlist;

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MnemonicLength {
    Words12,
    Words18,
    Words24,
}

impl MnemonicLength {
    pub const ALL: [Self; 3] = [Self::Words12, Self::Words18, Self::Words24];

    /// Length for a word count, if supported.
    pub fn from_word_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(Self::Words12),
            18 => Some(Self::Words18),
            24 => Some(Self::Words24),
            _ => None,
        }
    }

    pub fn word_count(self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words18 => 18,
            Self::Words24 => 24,
        }
    }

    pub fn entropy_bits(self) -> usize {
        self.word_count() * BITS_PER_WORD - self.checksum_bits()
    }

    /// One checksum bit per 32 bits of entropy.
    pub fn checksum_bits(self) -> usize {
        self.word_count() / 3
    }

    pub fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Mask selecting the checksum bits from the first digest byte.
    pub fn checksum_mask(self) -> u8 {
        0xFFu8 << (8 - self.checksum_bits())
    }
}

/// A mnemonic packed into its entropy and checksum bits.
///
/// The buffer is zeroized on drop.
pub struct PackedMnemonic {
    length: MnemonicLength,
    bytes: Zeroizing<[u8; PACKED_LEN]>,
}

impl PackedMnemonic {
    /// Pack word indices. The caller supplies exactly 12, 18 or 24 indices,
    /// each below 2048.
    pub fn from_indices(indices: &[u16]) -> Result<Self, ChecksumError> {
        let length = MnemonicLength::from_word_count(indices.len())
            .ok_or(ChecksumError::WordCount(indices.len()))?;
        let mut bytes = Zeroizing::new([0u8; PACKED_LEN]);
        bits::pack_indices(&mut bytes[..], indices)?;
        Ok(Self { length, bytes })
    }

    pub fn length(&self) -> MnemonicLength {
        self.length
    }

    /// The entropy bytes, without checksum.
    pub fn entropy(&self) -> &[u8] {
        &self.bytes[..self.length.entropy_bytes()]
    }

    /// The checksum bits as stored, left-aligned in one byte.
    pub fn stored_checksum(&self) -> u8 {
        self.bytes[self.length.entropy_bytes()]
    }

    /// The checksum the entropy calls for, left-aligned in one byte.
    pub fn expected_checksum(&self) -> u8 {
        let digest = Sha256::digest(self.entropy());
        digest[0] & self.length.checksum_mask()
    }

    /// Whether the stored checksum matches the entropy.
    pub fn checksum_matches(&self) -> bool {
        self.stored_checksum() == self.expected_checksum()
    }

    /// The word indices this buffer was packed from.
    pub fn indices(&self) -> Result<Vec<u16>, BitsError> {
        bits::unpack_indices(&self.bytes[..], self.length.word_count())
    }
}

impl fmt::Debug for PackedMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedMnemonic")
            .field("length", &self.length)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Split a mnemonic on single spaces and resolve every word.
fn resolve_words(mnemonic: &str) -> Result<Vec<u16>, ChecksumError> {
    let words: Vec<&str> = mnemonic.split(' ').collect();
    if MnemonicLength::from_word_count(words.len()).is_none() {
        return Err(ChecksumError::WordCount(words.len()));
    }
    words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            wordlist::find(word).ok_or(ChecksumError::UnknownWord { position })
        })
        .collect()
}

/// Validate a space-delimited mnemonic, returning its packed form.
pub fn check_mnemonic(mnemonic: &str) -> Result<PackedMnemonic, ChecksumError> {
    let indices = Zeroizing::new(resolve_words(mnemonic)?);
    let packed = PackedMnemonic::from_indices(&indices)?;
    if !packed.checksum_matches() {
        return Err(ChecksumError::Mismatch);
    }
    Ok(packed)
}

/// Whether `mnemonic` has a supported word count, only known words, and a
/// correct checksum.
///
/// # Examples
///
/// ```
/// use seedverify_core::checksum::valid_checksum;
/// let phrase = "abandon abandon abandon abandon abandon abandon \
///               abandon abandon abandon abandon abandon about";
/// assert!(valid_checksum(phrase));
/// assert!(!valid_checksum("abandon abandon"));
/// ```
pub fn valid_checksum(mnemonic: &str) -> bool {
    match check_mnemonic(mnemonic) {
        Ok(_) => true,
        Err(e) => {
            debug!(reason = %e, "checksum: mnemonic rejected");
            false
        }
    }
}
