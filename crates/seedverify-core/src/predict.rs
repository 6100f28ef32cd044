//! Incremental prediction over the wordlist while a word is being typed.
//!
//! Given a partial word, [`next_letters`] reports which letters can legally
//! follow, whether the prefix is already a complete word, and whether exactly
//! one word starts with it (so the rest can be filled in automatically).

use std::fmt;

use crate::constants::WORD_LEN_MAX;
use crate::wordlist;

/// Set of lowercase ASCII letters, iterated in alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters.
    pub const EMPTY: Self = Self(0);

    /// Every letter that starts at least one word. No word starts with 'x'.
    pub const STARTING: Self = Self(0x03ff_ffff & !(1 << (b'x' - b'a')));

    /// Add a letter. Anything other than `a..=z` is ignored.
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter - b'a');
        }
    }

    /// Whether `letter` is in the set.
    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&c| self.contains(c))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

/// Result of [`next_letters`]. Computed fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Letters that extend the prefix towards at least one word.
    pub letters: LetterSet,
    /// The prefix is itself a word.
    pub complete: bool,
    /// Index of the only word starting with the prefix, if exactly one does.
    pub unique: Option<u16>,
}

impl Prediction {
    const NONE: Self = Self {
        letters: LetterSet::EMPTY,
        complete: false,
        unique: None,
    };
}

/// Letters, completion and unique prediction for a typed `prefix`.
///
/// A word equal to the prefix counts towards the unique prediction, so a
/// complete word that is not the prefix of any longer word predicts itself.
///
/// # Examples
///
/// ```
/// use seedverify_core::predict::next_letters;
/// let p = next_letters("act");
/// assert!(p.complete);
/// assert_eq!(p.letters.to_string(), "ioru");
/// assert_eq!(p.unique, None);
///
/// assert_eq!(next_letters("zon").unique, Some(2046));
/// ```
pub fn next_letters(prefix: &str) -> Prediction {
    if prefix.is_empty() {
        return Prediction {
            letters: LetterSet::STARTING,
            ..Prediction::NONE
        };
    }
    if prefix.len() >= WORD_LEN_MAX {
        return Prediction::NONE;
    }

    let prefix = prefix.as_bytes();
    let mut letters = LetterSet::EMPTY;
    let mut complete = false;
    let mut matches = 0usize;
    let mut last_match = 0u16;

    for (index, word) in wordlist::iter() {
        let word = word.as_bytes();
        if word.len() < prefix.len() || (complete && word.len() == prefix.len()) {
            continue;
        }
        if &word[..prefix.len()] != prefix {
            continue;
        }
        matches += 1;
        last_match = index;
        match word.get(prefix.len()) {
            Some(&next) => letters.insert(next),
            None => complete = true,
        }
    }

    Prediction {
        letters,
        complete,
        unique: (matches == 1).then_some(last_match),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::{index_of, word_at};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn empty_prefix_offers_starting_letters() {
        let p = next_letters("");
        assert_eq!(p.letters.len(), 25);
        assert!(!p.letters.contains(b'x'));
        assert_eq!(p.letters.to_string(), "abcdefghijklmnopqrstuvwyz");
        assert!(!p.complete);
        assert_eq!(p.unique, None);
    }

    #[test]
    fn starting_set_matches_wordlist() {
        let from_words: LetterSet = wordlist::iter().map(|(_, w)| w.as_bytes()[0]).collect();
        assert_eq!(from_words, LetterSet::STARTING);
    }

    #[test]
    fn max_length_prefix_is_dead_end() {
        let p = next_letters("abstract");
        assert_eq!(p, Prediction::NONE);
        assert_eq!(next_letters("abcdefghij"), Prediction::NONE);
    }

    #[test]
    fn complete_word_with_extensions() {
        let p = next_letters("act");
        assert!(p.complete);
        assert_eq!(p.letters.to_string(), "ioru");
        assert_eq!(p.unique, None);
    }

    #[test]
    fn unique_prefix_predicts() {
        let p = next_letters("zon");
        assert_eq!(p.unique, Some(index_of("zone")));
        assert_eq!(p.letters.to_string(), "e");
        assert!(!p.complete);
    }

    #[test]
    fn complete_leaf_word_predicts_itself() {
        let p = next_letters("zoo");
        assert!(p.complete);
        assert!(p.letters.is_empty());
        assert_eq!(p.unique, Some(2047));
    }

    #[test]
    fn two_candidates_no_prediction() {
        let p = next_letters("zo");
        assert_eq!(p.letters.to_string(), "no");
        assert_eq!(p.unique, None);
    }

    #[test]
    fn impossible_prefix() {
        let p = next_letters("xq");
        assert!(p.letters.is_empty());
        assert!(!p.complete);
        assert_eq!(p.unique, None);
    }

    #[test]
    fn non_letters_never_match() {
        assert_eq!(next_letters("AB").letters, LetterSet::EMPTY);
        assert_eq!(next_letters("a b").letters, LetterSet::EMPTY);
    }

    /// Straight definition: every word starting with `prefix`.
    fn brute_force(prefix: &str) -> Prediction {
        let mut letters = LetterSet::EMPTY;
        let mut complete = false;
        let mut hits = Vec::new();
        for (index, word) in wordlist::iter().filter(|(_, w)| w.starts_with(prefix)) {
            hits.push(index);
            match word.as_bytes().get(prefix.len()) {
                Some(&next) => letters.insert(next),
                None => complete = true,
            }
        }
        Prediction {
            letters,
            complete,
            unique: (hits.len() == 1).then(|| hits[0]),
        }
    }

    #[test]
    fn matches_brute_force_on_word_prefixes() {
        let prefixes: BTreeSet<String> = wordlist::iter()
            .flat_map(|(_, w)| (1..=w.len().min(WORD_LEN_MAX - 1)).map(move |cut| w[..cut].to_string()))
            .collect();
        // Short prefixes also get every one-letter extension, dead ends included.
        let extended: BTreeSet<String> = prefixes
            .iter()
            .filter(|p| p.len() <= 3)
            .flat_map(|p| (b'a'..=b'z').map(move |c| format!("{p}{}", c as char)))
            .collect();

        for prefix in prefixes.union(&extended) {
            assert_eq!(next_letters(prefix), brute_force(prefix), "prefix {prefix:?}");
        }
    }

    #[test]
    fn every_word_reports_complete() {
        for i in 0..crate::constants::WORD_COUNT {
            let word = word_at(i).unwrap();
            if word.len() < WORD_LEN_MAX {
                assert!(next_letters(word).complete, "{word} should be complete");
            }
        }
    }

    #[test]
    fn letter_set_basics() {
        let mut s = LetterSet::EMPTY;
        s.insert(b'c');
        s.insert(b'a');
        s.insert(b'c');
        s.insert(b'!');
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![b'a', b'c']);
        assert!(s.contains(b'a'));
        assert!(!s.contains(b'b'));
        assert!(!s.contains(b'A'));
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn every_prefix_of_a_word_can_continue(index in 0usize..2048) {
            let word = word_at(index).unwrap();
            for cut in 0..word.len() {
                let next = word.as_bytes()[cut];
                prop_assert!(
                    next_letters(&word[..cut]).letters.contains(next),
                    "{:?} missing after {:?}", next as char, &word[..cut]
                );
            }
        }

        #[test]
        fn unique_prediction_extends_prefix(prefix in "[a-z]{1,7}") {
            if let Some(i) = next_letters(&prefix).unique {
                prop_assert!(word_at(i as usize).unwrap().starts_with(prefix.as_str()));
            }
        }
    }
}
