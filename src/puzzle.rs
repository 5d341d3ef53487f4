use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// A generated word search: the letter grid, the words hidden in it, and the inputs it was generated from.
///
/// A puzzle never changes after generation. It serializes as
/// `{ "grid": [["A", ...], ...], "words": [...], "category": ..., "difficulty": ..., "level": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The complete letter grid.
    pub grid: Grid,

    /// The hidden words, in the order they were placed.
    pub words: Vec<String>,

    /// Category name the words were drawn from.
    pub category: String,

    /// Difficulty name the grid size was derived from.
    pub difficulty: String,

    /// Level the word count was derived from.
    pub level: u32,
}

impl Puzzle {
    /// Whether `word` is one of the hidden words.
    pub fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of hidden words.
    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.words.iter();

        for row in self.grid.rows() {
            for ch in row {
                write!(f, "{} ", ch)?;
            }

            writeln!(f, "| {}", words_iter.next().map_or("", String::as_str))?;
        }

        // more words than rows only happens with an unusually small grid
        for word in words_iter {
            writeln!(f, "{:width$}| {}", "", word, width = self.grid.size() * 2)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Puzzle;
    use crate::grid::Grid;

    fn small_puzzle() -> Puzzle {
        let rows = vec![
            vec!['C', 'A', 'T'],
            vec!['X', 'Y', 'Z'],
            vec!['D', 'O', 'G'],
        ];

        Puzzle {
            grid: Grid::try_from(rows).unwrap(),
            words: vec![String::from("CAT"), String::from("DOG")],
            category: String::from("kids"),
            difficulty: String::from("tiny"),
            level: 1,
        }
    }

    #[test]
    fn descriptor_shape() {
        let json = serde_json::to_value(small_puzzle()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "grid": [["C", "A", "T"], ["X", "Y", "Z"], ["D", "O", "G"]],
                "words": ["CAT", "DOG"],
                "category": "kids",
                "difficulty": "tiny",
                "level": 1
            })
        );
    }

    #[test]
    fn descriptor_round_trip() {
        let puzzle = small_puzzle();
        let text = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&text).unwrap();
        assert_eq!(back, puzzle);
    }

    #[test]
    fn descriptor_rejects_bad_grid() {
        let ragged = r#"{"grid": [["C", "A"], ["T"]], "words": [], "category": "kids", "difficulty": "easy", "level": 1}"#;
        assert!(serde_json::from_str::<Puzzle>(ragged).is_err());

        let lowercase = r#"{"grid": [["c"]], "words": [], "category": "kids", "difficulty": "easy", "level": 1}"#;
        assert!(serde_json::from_str::<Puzzle>(lowercase).is_err());

        let two_letters = r#"{"grid": [["CA"]], "words": [], "category": "kids", "difficulty": "easy", "level": 1}"#;
        assert!(serde_json::from_str::<Puzzle>(two_letters).is_err());
    }

    #[test]
    fn display_lists_words_beside_rows() {
        let text = small_puzzle().to_string();
        assert_eq!(text, "C A T | CAT\nX Y Z | DOG\nD O G | \n");
        assert!(small_puzzle().has_word("DOG"));
        assert!(!small_puzzle().has_word("GOD"));
    }
}
