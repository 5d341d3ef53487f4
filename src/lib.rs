#![warn(missing_docs)]

//! # Word search puzzles
//!
//! Generates category word search puzzles and checks the player's selections against them.
//!
//! ```
//! use word_search_puzzle::{Generator, MatchEngine};
//!
//! let puzzle = Generator::with_seed(1).generate("kids", "easy", 1).unwrap();
//! assert_eq!(puzzle.grid.size(), 10);
//! assert_eq!(puzzle.words.len(), 10);
//!
//! let word = puzzle.words[0].clone();
//! let path = puzzle.grid.find_word(&word).unwrap();
//!
//! let mut engine = MatchEngine::new(puzzle);
//! engine.on_gesture_start(path[0]);
//! engine.on_gesture_move(path[path.len() - 1]);
//! assert_eq!(engine.on_gesture_end().map(|found| found.word), Some(word));
//! assert_eq!(engine.found_count(), 1);
//! ```

mod error;
pub mod generator;
pub mod grid;
mod hints;
pub mod placement;
mod puzzle;
pub mod selection;
pub mod word_bank;

pub use error::Error;
pub use generator::{generate_puzzle, Generator, GeneratorConfig};
pub use grid::{CellId, Difficulty, Grid};
pub use hints::Hint;
pub use puzzle::Puzzle;
pub use selection::{MatchEngine, WordFound};
pub use word_bank::Category;
