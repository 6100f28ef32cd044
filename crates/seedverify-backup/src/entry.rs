//! Headless word-by-word backup entry.
//!
//! [`WordInput`] holds the letters typed for the current word and only
//! accepts letters that keep the prefix on the wordlist. [`BackupEntry`]
//! collects the resolved word indices slot by slot and assembles the final
//! [`Phrase`] once every slot is filled. A front end drives both and renders
//! whatever it likes; nothing here touches a screen or a keypad.

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use seedverify_core::checksum::MnemonicLength;
use seedverify_core::constants::WORD_LEN_MAX;
use seedverify_core::predict::{Prediction, next_letters};
use seedverify_core::{Phrase, wordlist};

use crate::error::EntryError;

/// Letters typed so far for one word.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct WordInput {
    typed: String,
}

impl WordInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn is_empty(&self) -> bool {
        self.typed.is_empty()
    }

    pub fn prediction(&self) -> Prediction {
        next_letters(&self.typed)
    }

    /// Append a letter. Returns the unique completion, if the new prefix has one.
    pub fn push(&mut self, letter: char) -> Result<Option<u16>, EntryError> {
        let allowed = letter.is_ascii_lowercase()
            && self.typed.len() < WORD_LEN_MAX
            && self.prediction().letters.contains(letter as u8);
        if !allowed {
            return Err(EntryError::InvalidLetter(letter));
        }
        self.typed.push(letter);
        Ok(self.prediction().unique)
    }

    /// Remove the last letter.
    pub fn pop(&mut self) -> Option<char> {
        self.typed.pop()
    }

    pub fn clear(&mut self) {
        self.typed.zeroize();
    }

    /// Whether [`submit`](Self::submit) would succeed.
    pub fn ready(&self) -> bool {
        self.typed.is_empty() || self.prediction().complete
    }

    /// Resolve the typed letters as an exact word and reset.
    ///
    /// Returns `None` when nothing was typed.
    pub fn submit(&mut self) -> Result<Option<u16>, EntryError> {
        if self.typed.is_empty() {
            return Ok(None);
        }
        let index = wordlist::find(&self.typed)
            .ok_or_else(|| EntryError::NotAWord(self.typed.clone()))?;
        self.clear();
        Ok(Some(index))
    }

    /// Take the unique completion of the typed prefix and reset.
    pub fn accept_prediction(&mut self) -> Result<u16, EntryError> {
        let index = self.prediction().unique.ok_or(EntryError::NoPrediction)?;
        self.clear();
        Ok(index)
    }
}

impl std::fmt::Debug for WordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordInput")
            .field("typed", &self.typed.len())
            .finish()
    }
}

/// Word slots of a backup being entered.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct BackupEntry {
    #[zeroize(skip)]
    length: MnemonicLength,
    slots: Vec<Option<u16>>,
}

impl BackupEntry {
    pub fn new(length: MnemonicLength) -> Self {
        Self {
            length,
            slots: vec![None; length.word_count()],
        }
    }

    pub fn length(&self) -> MnemonicLength {
        self.length
    }

    fn check_slot(&self, slot: usize) -> Result<(), EntryError> {
        if slot >= self.slots.len() {
            return Err(EntryError::SlotOutOfRange {
                slot,
                len: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Word in `slot`, if one was entered.
    pub fn word(&self, slot: usize) -> Result<Option<&'static str>, EntryError> {
        self.check_slot(slot)?;
        match self.slots[slot] {
            Some(index) => Ok(Some(wordlist::word_at(index as usize)?)),
            None => Ok(None),
        }
    }

    pub fn set_word(&mut self, slot: usize, index: u16) -> Result<(), EntryError> {
        self.check_slot(slot)?;
        wordlist::word_at(index as usize)?;
        self.slots[slot] = Some(index);
        debug!(slot, missing = self.missing(), "entry: word set");
        Ok(())
    }

    pub fn clear_word(&mut self, slot: usize) -> Result<(), EntryError> {
        self.check_slot(slot)?;
        self.slots[slot] = None;
        Ok(())
    }

    /// First slot without a word.
    pub fn next_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn missing(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    /// Assemble the space-delimited phrase, consuming the entry.
    pub fn into_phrase(self) -> Result<Phrase, EntryError> {
        let missing = self.missing();
        if missing > 0 {
            return Err(EntryError::Incomplete { missing });
        }
        let mut text = String::with_capacity(self.slots.len() * (WORD_LEN_MAX + 1));
        for (i, index) in self.slots.iter().flatten().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(wordlist::word_at(*index as usize)?);
        }
        Ok(Phrase::from(text))
    }
}

impl std::fmt::Debug for BackupEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackupEntry")
            .field("length", &self.length)
            .field("missing", &self.missing())
            .finish()
    }
}
