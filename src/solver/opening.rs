//! Opening-book strategy
//!
//! Plays a precomputed opener, answers the troublesome `_a_es`-shaped grades
//! with a precomputed follow-up, then falls back to random or exhaustive
//! guessing depending on how many candidates remain.

use super::exhaustive::ExhaustiveStrategy;
use super::random::RandomStrategy;
use super::strategy::{Strategy, TurnContext};
use crate::core::{GuessResult, Mark, Word};

/// Opening strategy
///
/// Decision order for each turn:
/// ```text
/// turn 1, opener in dictionary          → opener
/// candidates < direct_below             → first candidate
/// turn 2, opener grade matches a pattern → follow_up
/// candidates > random_above             → Random
/// otherwise                             → Exhaustive
/// ```
#[derive(Debug, Clone)]
pub struct OpeningStrategy {
    /// First guess of every game (default: "lares")
    pub opener: &'static str,

    /// Second guess after a hard opener grade (default: "compt")
    pub follow_up: &'static str,

    /// Position sets that make an opener grade hard when all are Exact
    pub hard_patterns: &'static [&'static [usize]],

    /// Candidates > this are guessed at random (default: 100)
    pub random_above: usize,

    /// Candidates < this are guessed directly (default: 3)
    pub direct_below: usize,
}

impl Default for OpeningStrategy {
    fn default() -> Self {
        Self {
            opener: "lares",
            follow_up: "compt",
            hard_patterns: &[&[1, 4], &[3, 4]],
            random_above: 100,
            direct_below: 3,
        }
    }
}

impl OpeningStrategy {
    /// True when the grade has Exact marks at every position of some hard pattern
    #[must_use]
    pub fn is_hard(&self, result: &GuessResult) -> bool {
        let marks = result.grade().marks();
        self.hard_patterns.iter().any(|pattern| {
            pattern
                .iter()
                .all(|&i| marks.get(i) == Some(&Mark::Exact))
        })
    }

    fn find<'a>(all_words: &'a [Word], text: &str) -> Option<&'a Word> {
        all_words.iter().find(|w| w.text() == text)
    }
}

impl Strategy for OpeningStrategy {
    fn name(&self) -> &'static str {
        "opening"
    }

    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        if ctx.turn == 1 {
            if let Some(opener) = Self::find(all_words, self.opener) {
                return Some(opener.clone());
            }
        }

        if candidates.len() < self.direct_below {
            return candidates.first().cloned();
        }

        if let [first] = ctx.history {
            if ctx.turn == 2 && first.guess().text() == self.opener && self.is_hard(first) {
                if let Some(follow_up) = Self::find(all_words, self.follow_up) {
                    log::debug!("hard opener grade {}, playing {}", first.grade(), self.follow_up);
                    return Some(follow_up.clone());
                }
            }
        }

        if candidates.len() > self.random_above {
            RandomStrategy.next_guess(all_words, candidates, ctx)
        } else {
            ExhaustiveStrategy.next_guess(all_words, candidates, ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::strategy::test_support::{with_context, words};

    fn opener_result(answer: &str) -> GuessResult {
        GuessResult::score(&Word::new(answer).unwrap(), &Word::new("lares").unwrap()).unwrap()
    }

    #[test]
    fn opens_with_the_opener() {
        let all = words(&["crane", "lares", "trace", "crone"]);
        let guess = with_context(1, &[], |ctx| OpeningStrategy::default().next_guess(&all, &all, ctx));
        assert_eq!(guess.unwrap().text(), "lares");
    }

    #[test]
    fn missing_opener_falls_through() {
        let all = words(&["crane", "trace"]);
        let guess = with_context(1, &[], |ctx| OpeningStrategy::default().next_guess(&all, &all, ctx));
        assert_eq!(guess.unwrap().text(), "crane");
    }

    #[test]
    fn hard_patterns() {
        let strategy = OpeningStrategy::default();
        // games vs lares: 02022
        assert!(strategy.is_hard(&opener_result("games")));
        // bakes vs lares: 02022
        assert!(strategy.is_hard(&opener_result("bakes")));
        // crane vs lares: 01110
        assert!(!strategy.is_hard(&opener_result("crane")));
        // cares vs lares: 02222, positions 1 and 4
        assert!(strategy.is_hard(&opener_result("cares")));
        // loses vs lares: 20022, positions 3 and 4
        assert!(strategy.is_hard(&opener_result("loses")));
    }

    #[test]
    fn follow_up_after_hard_grade() {
        let all = words(&["lares", "compt", "games", "james", "names", "tames"]);
        let candidates = words(&["games", "james", "names", "tames"]);
        let history = [opener_result("games")];

        let guess = with_context(2, &history, |ctx| {
            OpeningStrategy::default().next_guess(&all, &candidates, ctx)
        });
        assert_eq!(guess.unwrap().text(), "compt");
    }

    #[test]
    fn few_candidates_win_over_follow_up() {
        let all = words(&["lares", "compt", "games", "james"]);
        let candidates = words(&["games", "james"]);
        let history = [opener_result("games")];

        let guess = with_context(2, &history, |ctx| {
            OpeningStrategy::default().next_guess(&all, &candidates, ctx)
        });
        assert_eq!(guess.unwrap().text(), "games");
    }

    #[test]
    fn no_follow_up_on_later_turns() {
        let candidates = words(&["bills", "fills", "hills", "mills"]);
        let mut all = candidates.clone();
        all.extend(words(&["bhmzz", "compt"]));
        let history = [opener_result("games")];

        let guess = with_context(3, &history, |ctx| {
            OpeningStrategy::default().next_guess(&all, &candidates, ctx)
        });
        assert_eq!(guess.unwrap().text(), "bhmzz");
    }

    #[test]
    fn many_candidates_guess_at_random() {
        let dictionary = Dictionary::embedded().unwrap();
        let candidates = &dictionary.words()[..150];

        let guess = with_context(2, &[], |ctx| {
            OpeningStrategy::default().next_guess(dictionary.words(), candidates, ctx)
        });
        assert!(candidates.contains(&guess.unwrap()));
    }
}
