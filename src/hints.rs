use std::fmt::Display;

use rand::{seq::SliceRandom, Rng};

/// A nudge towards one unfound word: how long it is and how it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    /// Number of letters in the word.
    pub word_length: usize,

    /// The word's first letter.
    pub first_letter: char,
}

impl Hint {
    /// Describes `word`, or returns `None` for an empty word.
    pub fn for_word(word: &str) -> Option<Self> {
        let first_letter = word.chars().next()?;

        Some(Self {
            word_length: word.chars().count(),
            first_letter,
        })
    }

    /// Describes a uniformly random word out of `unfound`, or returns `None` when there is none left.
    pub fn random<R: Rng + ?Sized>(unfound: &[&str], rng: &mut R) -> Option<Self> {
        unfound.choose(rng).and_then(|word| Self::for_word(word))
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Look for a {}-letter word starting with \"{}\"",
            self.word_length, self.first_letter
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::Hint;

    #[test]
    fn hint_text() {
        let hint = Hint::for_word("HOUSE").unwrap();
        assert_eq!(hint.to_string(), "Look for a 5-letter word starting with \"H\"");
        assert_eq!(Hint::for_word(""), None);
    }

    #[test]
    fn random_hint_describes_an_unfound_word() {
        let mut rng = StdRng::seed_from_u64(6);
        let unfound = ["KITE", "MOON"];

        for _ in 0..20 {
            let hint = Hint::random(&unfound, &mut rng).unwrap();
            assert_eq!(hint.word_length, 4);
            assert!(hint.first_letter == 'K' || hint.first_letter == 'M');
        }

        assert_eq!(Hint::random(&[], &mut rng), None);
    }
}
