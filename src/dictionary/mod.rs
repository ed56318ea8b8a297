//! The dictionary of playable words
//!
//! An ordered list of unique words sharing one length, with a hash set beside
//! it for membership tests. Built once and never modified.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use crate::error::WordleError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    ///
    /// Later duplicates are dropped so the first occurrence keeps its place.
    ///
    /// # Errors
    /// - `WordleError::InvalidLength` if a word is not `word_length` letters
    /// - `WordleError::EmptyDictionary` if no words are given
    pub fn from_words(
        words: impl IntoIterator<Item = Word>,
        word_length: usize,
    ) -> Result<Self, WordleError> {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();

        for word in words {
            if word.len() != word_length {
                return Err(WordleError::InvalidLength {
                    expected: word_length,
                    found: word.len(),
                });
            }
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }

        Ok(Self {
            words: ordered,
            index,
            word_length,
        })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only if the embedded list is malformed, which the tests rule out.
    pub fn embedded() -> Result<Self, WordleError> {
        loader::parse_lines(DICTIONARY.iter().copied(), DEFAULT_WORD_LENGTH)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Turn user text into a dictionary word
    ///
    /// # Errors
    /// - `WordleError::InvalidWord` if the text is not a word of the right length
    /// - `WordleError::UnknownWord` if it is a word but not in the dictionary
    pub fn lookup(&self, text: &str) -> Result<Word, WordleError> {
        let word = Word::with_length(text.trim(), self.word_length).map_err(|source| {
            WordleError::InvalidWord {
                text: text.to_string(),
                source,
            }
        })?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(WordleError::UnknownWord(word.to_string()))
        }
    }

    /// Pick one word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // never empty: from_words refuses empty input
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// Pick `amount` distinct words at random, in dictionary order
    pub fn sample<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<Word> {
        let mut picked: Vec<usize> =
            rand::seq::index::sample(rng, self.words.len(), amount.min(self.words.len()))
                .into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| self.words[i].clone()).collect()
    }
}
