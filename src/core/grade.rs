//! Grades and the grader
//!
//! A grade holds one [`Mark`] per letter of a guess. The canonical text form
//! uses one symbol per position:
//! - `2` = Exact (right letter, right position)
//! - `1` = Present (letter elsewhere in the answer)
//! - `0` = Absent (no unmatched occurrence left in the answer)

use super::Word;
use crate::error::WordleError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Canonical grade-string symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '2',
            Self::Present => '1',
            Self::Absent => '0',
        }
    }

    /// Parse one position of a grade string
    ///
    /// Accepts the canonical digits, `G`/`Y`/`-` letters and the emoji squares.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grade(Vec<Mark>);

impl Grade {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The all-Exact grade for words of `length` letters
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![Mark::Exact; length])
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse a grade string like `01120`, `-YG--` or `⬜🟨🟩⬜⬜`
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::Grade;
    ///
    /// let a = Grade::parse("01120").unwrap();
    /// let b = Grade::parse("-YG--").unwrap();
    /// assert_eq!(a.to_string(), "01120");
    /// assert_eq!(b.to_string(), "01200");
    /// assert!(Grade::parse("01x20").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<Vec<_>>>()?;
        if marks.is_empty() {
            None
        } else {
            Some(Self(marks))
        }
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Grade {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| WordleError::InvalidGrade(s.to_string()))
    }
}

/// Grade `guess` against `answer`
///
/// Two passes, so repeated letters are never over-credited:
/// 1. Exact matches consume the letter on both sides.
/// 2. Each remaining guess position, left to right, takes the first unconsumed
///    matching answer letter (Present) or gets Absent.
///
/// # Errors
/// Returns `WordleError::InvalidLength` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_autoplay::core::{Word, grade};
///
/// let answer = Word::new("abbey").unwrap();
/// let guess = Word::new("bbbbb").unwrap();
/// assert_eq!(grade(&answer, &guess).unwrap().to_string(), "02200");
/// ```
pub fn grade(answer: &Word, guess: &Word) -> Result<Grade, WordleError> {
    if answer.len() != guess.len() {
        return Err(WordleError::InvalidLength {
            expected: answer.len(),
            found: guess.len(),
        });
    }

    let answer = answer.letters();
    let guess = guess.letters();
    let mut marks = vec![Mark::Absent; guess.len()];
    let mut consumed = 0u32;

    for (i, (&a, &g)) in answer.iter().zip(guess).enumerate() {
        if a == g {
            marks[i] = Mark::Exact;
            consumed |= 1 << i;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        if let Some(j) = (0..answer.len()).find(|&j| consumed & (1 << j) == 0 && answer[j] == g) {
            marks[i] = Mark::Present;
            consumed |= 1 << j;
        }
    }

    Ok(Grade(marks))
}

/// A guessed word together with the grade it earned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    guess: Word,
    grade: Grade,
}

impl GuessResult {
    /// Pair a guess with an externally observed grade
    ///
    /// # Errors
    /// Returns `WordleError::InvalidLength` if the grade does not have one mark
    /// per letter.
    pub fn new(guess: Word, grade: Grade) -> Result<Self, WordleError> {
        if guess.len() != grade.len() {
            return Err(WordleError::InvalidLength {
                expected: guess.len(),
                found: grade.len(),
            });
        }
        Ok(Self { guess, grade })
    }

    /// Grade `guess` against a known answer
    ///
    /// # Errors
    /// Returns `WordleError::InvalidLength` if the words differ in length.
    pub fn score(answer: &Word, guess: &Word) -> Result<Self, WordleError> {
        Ok(Self {
            grade: grade(answer, guess)?,
            guess: guess.clone(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn grade(&self) -> &Grade {
        &self.grade
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grade.is_solved()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.grade)
    }
}

/// Parses `guess:grade`, e.g. `lares:01110`
impl std::str::FromStr for GuessResult {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, grade) = s
            .split_once(':')
            .ok_or_else(|| WordleError::InvalidGrade(s.to_string()))?;
        let guess = Word::new(guess.trim()).map_err(|source| WordleError::InvalidWord {
            text: guess.to_string(),
            source,
        })?;
        Self::new(guess, grade.trim().parse()?)
    }
}
