//! Backup verification error types.

use seedverify_core::error::{ChecksumError, DeriveError, DeviceError, WordlistError};
use thiserror::Error;

/// Errors that can occur while verifying a backup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackupError {
    /// Local key derivation from the mnemonic failed.
    #[error(transparent)]
    Derive(#[from] DeriveError),

    /// The device could not derive its node.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Mnemonic failed validation.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    /// Backup entry was incomplete or inconsistent.
    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Errors from the headless backup entry session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Letter can not extend the current prefix to any word.
    #[error("letter {0:?} does not continue any word")]
    InvalidLetter(char),

    /// Typed prefix is not a complete word.
    #[error("\"{0}\" is not a complete word")]
    NotAWord(String),

    /// No unique prediction to accept.
    #[error("no unique prediction")]
    NoPrediction,

    /// Slot index past the end of the backup.
    #[error("word slot {slot} out of range (backup has {len} words)")]
    SlotOutOfRange { slot: usize, len: usize },

    /// Not every slot has a word yet.
    #[error("{missing} word(s) not entered")]
    Incomplete { missing: usize },

    /// Word index is not in the wordlist.
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
}
