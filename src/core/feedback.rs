//! Per-letter feedback for a guess
//!
//! Each guessed letter is classified against the secret as:
//! - Absent (letter not in word, or every occurrence already accounted for)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)
//!
//! The variants are ordered `Absent < Present < Correct`; that order is the
//! precedence used by the letter-status memory.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterClassification {
    #[default]
    Absent,
    Present,
    Correct,
}

impl LetterClassification {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        })
    }
}

/// Feedback for a whole guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([LetterClassification; WORD_LEN]);

impl Classification {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterClassification::Correct; WORD_LEN]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Handles duplicate letters: a letter is never reported `Present` more
    /// times than it occurs in the secret once exact matches are removed.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (correct) and remove them from the
    ///    secret's remaining letter counts
    /// 2. Second pass: left to right, mark a letter present if the secret still
    ///    has an unmatched copy of it (consuming that copy), absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let guess = Word::new("boors").unwrap();
    /// let feedback = Classification::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨🟩🟨🟨⬜");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result: [Option<LetterClassification>; WORD_LEN] = [None; WORD_LEN];
        let mut secret_remaining = secret.char_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = secret.char_at(i);
            if guess.char_at(i) == letter {
                *slot = Some(LetterClassification::Correct);
                if let Some(count) = secret_remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unmatched copy exists
        let mut marks = [LetterClassification::Absent; WORD_LEN];
        for (i, slot) in result.iter().enumerate() {
            marks[i] = match slot {
                Some(mark) => *mark,
                None => match secret_remaining.get_mut(&guess.char_at(i)) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        LetterClassification::Present
                    }
                    _ => LetterClassification::Absent,
                },
            };
        }

        let classification = Self(marks);
        log::debug!(
            "classified {guess} against secret: {}",
            classification.to_emoji()
        );
        classification
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterClassification; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}
