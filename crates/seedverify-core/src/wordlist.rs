//! Read-only access to the BIP-39 English wordlist.
//!
//! Words are stored in strict lexicographic order, so a word's position in
//! the table is its BIP-39 index. Lookups are exact and case-sensitive; the
//! table only holds lowercase ASCII.

use crate::constants::{NOT_FOUND, WORD_COUNT, WORD_LEN_MAX, WORD_LEN_MIN};
use crate::english::WORDS;
use crate::error::WordlistError;

/// The word at `index`.
///
/// # Examples
///
/// ```
/// use seedverify_core::wordlist::word_at;
/// assert_eq!(word_at(0).unwrap(), "abandon");
/// assert_eq!(word_at(2047).unwrap(), "zoo");
/// assert!(word_at(2048).is_err());
/// ```
pub fn word_at(index: usize) -> Result<&'static str, WordlistError> {
    WORDS
        .get(index)
        .copied()
        .ok_or(WordlistError::OutOfRange(index))
}

/// Index of `word`, or [`NOT_FOUND`] if it is not in the wordlist.
///
/// Words outside the 3..=8 length range short-circuit to `NOT_FOUND`.
pub fn index_of(word: &str) -> u16 {
    find(word).unwrap_or(NOT_FOUND)
}

/// Index of `word`, if present.
pub fn find(word: &str) -> Option<u16> {
    if !(WORD_LEN_MIN..=WORD_LEN_MAX).contains(&word.len()) {
        return None;
    }
    WORDS
        .binary_search(&word)
        .ok()
        .map(|index| index as u16)
}

/// Iterate `(index, word)` pairs in index order.
pub fn iter() -> impl Iterator<Item = (u16, &'static str)> {
    WORDS.iter().enumerate().map(|(i, w)| (i as u16, *w))
}

/// Whether `index` names a stored word (the sentinel does not).
pub fn is_valid_index(index: u16) -> bool {
    (index as usize) < WORD_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_index() {
        for i in 0..WORD_COUNT {
            let word = word_at(i).unwrap();
            assert_eq!(index_of(word) as usize, i, "round trip failed for {word}");
        }
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(word_at(WORD_COUNT), Err(WordlistError::OutOfRange(WORD_COUNT)));
        assert_eq!(word_at(usize::MAX), Err(WordlistError::OutOfRange(usize::MAX)));
    }

    #[test]
    fn known_indices() {
        assert_eq!(index_of("abandon"), 0);
        assert_eq!(index_of("about"), 3);
        assert_eq!(index_of("act"), 19);
        assert_eq!(index_of("legal"), 1019);
        assert_eq!(index_of("zoo"), 2047);
    }

    #[test]
    fn unknown_word_is_sentinel() {
        assert_eq!(index_of("bitcoin"), NOT_FOUND);
        assert_eq!(index_of("Abandon"), NOT_FOUND);
        assert!(!is_valid_index(index_of("zzz")));
    }

    #[test]
    fn length_bounds_short_circuit() {
        assert_eq!(index_of(""), NOT_FOUND);
        assert_eq!(index_of("ab"), NOT_FOUND);
        assert_eq!(index_of("abandoned"), NOT_FOUND);
    }

    #[test]
    fn prefix_is_not_a_match() {
        // "aband" is a prefix of "abandon" but not a word itself
        assert_eq!(find("aband"), None);
    }

    #[test]
    fn table_is_sorted_and_well_formed() {
        let words: Vec<_> = iter().map(|(_, w)| w).collect();
        assert_eq!(words.len(), WORD_COUNT);
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        for w in words {
            assert!((WORD_LEN_MIN..=WORD_LEN_MAX).contains(&w.len()));
            assert!(w.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
}
