//! Best-known status of every letter played in a round

use super::feedback::{Classification, LetterClassification};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Letter → strongest classification seen so far this round
///
/// Updates merge with `max` under `Absent < Present < Correct`, so a letter
/// never loses status within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMemory {
    letters: FxHashMap<u8, LetterClassification>,
}

impl LetterStatusMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the memory
    pub fn update(&mut self, guess: &Word, classification: &Classification) {
        for (&letter, &mark) in guess.chars().iter().zip(classification.marks()) {
            self.letters
                .entry(letter)
                .and_modify(|known| *known = (*known).max(mark))
                .or_insert(mark);
        }
    }

    /// Status of a letter, if it has been played this round
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterClassification> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Every letter a-z with its status, in alphabetical order
    ///
    /// Unplayed letters yield `None`; used to draw the keyboard legend.
    pub fn alphabet(&self) -> impl Iterator<Item = (char, Option<LetterClassification>)> + '_ {
        (b'a'..=b'z').map(|letter| (char::from(letter), self.get(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::LetterClassification::{Absent, Correct, Present};
    use super::*;

    fn play(memory: &mut LetterStatusMemory, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        let feedback = Classification::calculate(&guess, &secret);
        memory.update(&guess, &feedback);
    }

    #[test]
    fn starts_empty() {
        let memory = LetterStatusMemory::new();
        assert!(memory.alphabet().all(|(_, status)| status.is_none()));
    }

    #[test]
    fn records_each_played_letter() {
        let mut memory = LetterStatusMemory::new();
        play(&mut memory, "crane", "slate");

        let played = memory.alphabet().filter(|(_, status)| status.is_some()).count();
        assert_eq!(played, 5);
        assert_eq!(memory.get(b'a'), Some(Correct));
        assert_eq!(memory.get(b'e'), Some(Correct));
        assert_eq!(memory.get(b'c'), Some(Absent));
        assert_eq!(memory.get(b'z'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut memory = LetterStatusMemory::new();
        play(&mut memory, "crane", "slate");
        // 'a' is now in the wrong spot and 'e' appears twice
        play(&mut memory, "aeree", "slate");

        assert_eq!(memory.get(b'a'), Some(Correct));
        assert_eq!(memory.get(b'e'), Some(Correct));
    }

    #[test]
    fn present_is_kept_over_surplus_duplicate() {
        let mut memory = LetterStatusMemory::new();
        // first 'e' present, second 'e' absent in the same guess
        play(&mut memory, "speed", "abide");
        assert_eq!(memory.get(b'e'), Some(Present));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut memory = LetterStatusMemory::new();
        play(&mut memory, "later", "slate");
        assert_eq!(memory.get(b'l'), Some(Present));

        play(&mut memory, "slate", "slate");
        assert_eq!(memory.get(b'l'), Some(Correct));
    }

    #[test]
    fn alphabet_covers_every_letter() {
        let mut memory = LetterStatusMemory::new();
        play(&mut memory, "crane", "slate");

        let legend: Vec<_> = memory.alphabet().collect();
        assert_eq!(legend.len(), 26);
        assert_eq!(legend[0], ('a', Some(Correct)));
        assert_eq!(legend[1], ('b', None));
        assert_eq!(legend[2], ('c', Some(Absent)));
    }
}
