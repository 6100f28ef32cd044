//! Error types for SeedVerify.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    #[error("word index out of range: {0} >= 2048")] OutOfRange(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("bit field {offset}+{width} exceeds buffer of {capacity} bits")] OutOfBounds { offset: usize, width: usize, capacity: usize },
    #[error("bit width {0} not supported (max 16)")] UnsupportedWidth(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("unsupported word count: {0} (expected 12, 18 or 24)")] WordCount(usize),
    #[error("word {position} is not in the wordlist")] UnknownWord { position: usize },
    #[error("checksum mismatch")] Mismatch,
    #[error(transparent)] Bits(#[from] BitsError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("parent private key is zero or not below the curve order")] InvalidParentKey,
    #[error("index {0:#010x} is not hardened")] NonHardenedIndex(u32),
    #[error("no valid child key after {0} attempts")] RetryLimit(usize),
    #[error("invalid HMAC key length")] HmacKey,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("device derivation failed: {0}")] Derivation(#[from] DeriveError),
    #[error("device unavailable: {0}")] Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_word_count() {
        let e = ChecksumError::WordCount(13);
        assert_eq!(e.to_string(), "unsupported word count: 13 (expected 12, 18 or 24)");
    }

    #[test]
    fn display_out_of_range() {
        assert_eq!(
            WordlistError::OutOfRange(4096).to_string(),
            "word index out of range: 4096 >= 2048"
        );
    }

    #[test]
    fn display_non_hardened() {
        let e = DeriveError::NonHardenedIndex(5);
        assert_eq!(e.to_string(), "index 0x00000005 is not hardened");
    }

    #[test]
    fn from_bits_error() {
        let bits = BitsError::UnsupportedWidth(20);
        let e: ChecksumError = bits.clone().into();
        assert_eq!(e, ChecksumError::Bits(bits));
    }

    #[test]
    fn from_derive_error() {
        let e: DeviceError = DeriveError::RetryLimit(64).into();
        assert_eq!(e, DeviceError::Derivation(DeriveError::RetryLimit(64)));
    }
}
