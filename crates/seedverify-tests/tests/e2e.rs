//! End-to-end: provision a software device, type a backup letter by letter,
//! and verify it.

use seedverify_backup::{
    BackupEntry, EntryError, SeedComparator, SoftwareDevice, VerifyOutcome, WordInput,
};
use seedverify_core::{MnemonicLength, Phrase};
use seedverify_tests::helpers::*;

/// Type each word with as few letters as a unique prediction allows.
fn type_backup(phrase: &str, length: MnemonicLength) -> Phrase {
    let mut entry = BackupEntry::new(length);
    let mut input = WordInput::new();
    for (slot, word) in phrase.split(' ').enumerate() {
        let mut predicted = false;
        for letter in word.chars() {
            if input.push(letter).unwrap().is_some() {
                predicted = true;
                break;
            }
        }
        let index = if predicted {
            input.accept_prediction().unwrap()
        } else {
            input.submit().unwrap().unwrap()
        };
        entry.set_word(slot, index).unwrap();
    }
    entry.into_phrase().unwrap()
}

#[test]
fn typed_backup_matches_device() {
    for (vector, length) in COMPARE_VECTORS.iter().zip([
        MnemonicLength::Words12,
        MnemonicLength::Words12,
        MnemonicLength::Words24,
        MnemonicLength::Words24,
    ]) {
        let device = SoftwareDevice::from_phrase(Phrase::from(vector.phrase)).unwrap();
        let phrase = type_backup(vector.phrase, length);
        assert_eq!(phrase.as_str(), vector.phrase);
        let outcome = SeedComparator::new(device).verify(phrase).unwrap();
        assert_eq!(outcome, VerifyOutcome::Match, "{}", vector.phrase);
    }
}

#[test]
fn typed_backup_for_other_device_mismatches() {
    let device = SoftwareDevice::from_phrase(Phrase::from(LEGAL_WINNER)).unwrap();
    let phrase = type_backup(ABANDON_ABOUT, MnemonicLength::Words12);
    assert_eq!(
        SeedComparator::new(device).verify(phrase).unwrap(),
        VerifyOutcome::Mismatch
    );
}

#[test]
fn mistyped_last_word_is_checksum_invalid() {
    let device = SoftwareDevice::from_phrase(Phrase::from(ABANDON_ABOUT)).unwrap();
    let typo = replace_word(ABANDON_ABOUT, 11, "above");
    let phrase = type_backup(&typo, MnemonicLength::Words12);
    assert_eq!(
        SeedComparator::new(device).verify(phrase).unwrap(),
        VerifyOutcome::ChecksumInvalid
    );
}

#[test]
fn unfinished_backup_cannot_be_verified() {
    let mut entry = BackupEntry::new(MnemonicLength::Words18);
    for slot in 0..17 {
        entry.set_word(slot, 2047).unwrap();
    }
    assert_eq!(entry.missing(), 1);
    assert_eq!(
        entry.into_phrase().unwrap_err(),
        EntryError::Incomplete { missing: 1 }
    );
}
