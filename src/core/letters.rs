//! Letters that may still appear in the answer

use super::{GuessResult, Mark};

/// 26 flags, one per letter, cleared as grades rule letters out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPossibility([bool; 26]);

impl Default for LetterPossibility {
    fn default() -> Self {
        Self([true; 26])
    }
}

impl LetterPossibility {
    /// Every letter still possible
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_possible(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0[usize::from(letter - b'a')]
    }

    /// Fold one result in
    ///
    /// A letter is ruled out when it is graded Absent somewhere in the guess
    /// and graded neither Exact nor Present anywhere else in that same guess.
    /// An Absent copy of a letter that is credited elsewhere only caps its
    /// count, so the letter stays possible.
    pub fn update(&mut self, result: &GuessResult) {
        let letters = result.guess().letters();
        let marks = result.grade().marks();

        let mut credited = [false; 26];
        for (&letter, &mark) in letters.iter().zip(marks) {
            if mark != Mark::Absent {
                credited[usize::from(letter - b'a')] = true;
            }
        }

        for (&letter, &mark) in letters.iter().zip(marks) {
            let index = usize::from(letter - b'a');
            if mark == Mark::Absent && !credited[index] {
                self.0[index] = false;
            }
        }
    }

    /// Letters ruled out so far, alphabetically
    #[must_use]
    pub fn ruled_out(&self) -> Vec<char> {
        (b'a'..=b'z')
            .filter(|&letter| !self.is_possible(letter))
            .map(char::from)
            .collect()
    }
}
