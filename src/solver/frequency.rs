//! Letter-frequency strategy
//!
//! Counts how often each letter appears across the remaining candidates and
//! guesses the candidate whose distinct letters cover the most of that count.
//! Letters already ruled out contribute nothing.

use super::strategy::{Strategy, TurnContext};
use crate::core::{LetterPossibility, Word};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

/// Letter occurrence counts over `candidates`, zeroed for ruled-out letters
#[must_use]
pub fn letter_frequencies(candidates: &[Word], letters: &LetterPossibility) -> [usize; 26] {
    let mut freq = [0usize; 26];
    for word in candidates {
        for &letter in word.letters() {
            freq[usize::from(letter - b'a')] += 1;
        }
    }
    for (letter, count) in (b'a'..=b'z').zip(freq.iter_mut()) {
        if !letters.is_possible(letter) {
            *count = 0;
        }
    }
    freq
}

/// Sum of frequencies over the distinct letters of `word`
///
/// Repeated letters score once.
#[must_use]
pub fn frequency_score(word: &Word, freq: &[usize; 26]) -> usize {
    let mut seen = 0u32;
    let mut score = 0;
    for &letter in word.letters() {
        let index = usize::from(letter - b'a');
        if seen & (1 << index) == 0 {
            seen |= 1 << index;
            score += freq[index];
        }
    }
    score
}

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn next_guess(
        &self,
        _all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        let freq = letter_frequencies(candidates, ctx.letters);

        // min_by_key keeps the first of equal scores
        candidates
            .iter()
            .min_by_key(|word| Reverse(frequency_score(word, &freq)))
            .cloned()
    }
}
