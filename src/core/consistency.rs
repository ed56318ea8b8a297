//! Candidate consistency check
//!
//! Decides whether a candidate could still be the hidden answer after one
//! guess came back with a given grade, by replaying the grader's accounting
//! from the candidate's side.

use super::{GuessResult, Mark, Word};

/// Could `candidate` be the answer that produced `result`?
///
/// Works on a private set of consumption markers over the candidate's letters:
/// 1. Exact: the candidate must hold the guessed letter there; consume it.
/// 2. Present: the candidate must not hold the guessed letter there (that
///    would have been Exact) but must hold it at some unconsumed position;
///    consume the first such position.
/// 3. Absent: the candidate must not hold the guessed letter there, nor at any
///    position left unconsumed by steps 1 and 2.
///
/// Exact runs first, and every Present consumption runs before any Absent
/// scan, so a repeated letter graded Present once and Absent once is only
/// accepted when the candidate holds exactly the credited number of copies.
///
/// For grades produced by [`grade`](super::grade) this accepts exactly the
/// candidates that would reproduce the same grade. A candidate whose length
/// differs from the guess is never consistent.
///
/// # Examples
/// ```
/// use wordle_autoplay::core::{GuessResult, Word, is_consistent};
///
/// let result: GuessResult = "lares:01110".parse().unwrap();
/// assert!(is_consistent(&Word::new("crane").unwrap(), &result));
/// assert!(!is_consistent(&Word::new("crone").unwrap(), &result));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, result: &GuessResult) -> bool {
    let letters = candidate.letters();
    let guess = result.guess().letters();
    let marks = result.grade().marks();

    if letters.len() != guess.len() {
        return false;
    }

    let free = |consumed: u32, j: usize| consumed & (1 << j) == 0;
    let mut consumed = 0u32;

    for (i, &mark) in marks.iter().enumerate() {
        if mark == Mark::Exact {
            if letters[i] != guess[i] {
                return false;
            }
            consumed |= 1 << i;
        }
    }

    for (i, &mark) in marks.iter().enumerate() {
        if mark != Mark::Present {
            continue;
        }
        if letters[i] == guess[i] {
            return false;
        }
        match (0..letters.len()).find(|&j| free(consumed, j) && letters[j] == guess[i]) {
            Some(j) => consumed |= 1 << j,
            None => return false,
        }
    }

    for (i, &mark) in marks.iter().enumerate() {
        if mark != Mark::Absent {
            continue;
        }
        // an in-place copy would have been Exact even if its count is spent
        if letters[i] == guess[i] {
            return false;
        }
        if (0..letters.len()).any(|j| free(consumed, j) && letters[j] == guess[i]) {
            return false;
        }
    }

    // the guess itself only survives a perfect grade
    letters != guess || result.is_solved()
}
