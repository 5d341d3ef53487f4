//! Puzzle generation: word selection, placement and filler.

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    grid::{fill_empty, grid_size_for, DraftGrid},
    placement::place_word,
    word_bank::select_words,
    Error, Puzzle,
};

/// Default number of random anchor/direction draws per word before giving up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Tuning for [Generator].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many random anchor/direction pairs are tried for one word before
    /// [Error::PlacementFailed] is returned.
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Builds puzzles from a category, a difficulty and a level.
///
/// All randomness (word shuffle, placement, filler) comes from one [StdRng], so a generator created with
/// [Generator::with_seed] produces the same sequence of puzzles every time.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator with the default configuration, seeded from system entropy.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// A generator with a custom configuration, seeded from system entropy.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator with the default configuration and a fixed seed, for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the configuration, keeping the random state.
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a puzzle.
    ///
    /// The grid is `grid_size_for(difficulty)` cells square and every cell holds an uppercase letter. Every
    /// returned word lies on a straight line of the grid. An unknown category gives a puzzle with no words,
    /// which callers should report as a configuration error.
    ///
    /// # Errors
    ///
    /// [Error::WordTooLong] or [Error::PlacementFailed] if a word can't be placed. No partially built
    /// puzzle is returned in that case.
    pub fn generate(&mut self, category: &str, difficulty: &str, level: u32) -> Result<Puzzle, Error> {
        let words = select_words(category, level, &mut self.rng);
        let size = grid_size_for(difficulty);

        if words.is_empty() {
            warn!("Generating a {}x{} puzzle with no words", size, size);
        }

        let mut draft = DraftGrid::empty(size);

        for word in &words {
            place_word(
                &mut draft,
                word,
                &mut self.rng,
                self.config.max_placement_attempts,
            )?;
        }

        debug!(
            "{} word(s) placed, {} filler cell(s) left",
            words.len(),
            draft.empty_cells()
        );

        let grid = fill_empty(draft, &mut self.rng);

        info!(
            "Generated {} {} level {} puzzle: {}x{} grid, {} words",
            category,
            difficulty,
            level,
            size,
            size,
            words.len()
        );

        Ok(Puzzle {
            grid,
            words,
            category: category.to_owned(),
            difficulty: difficulty.to_owned(),
            level,
        })
    }
}

/// Generates a puzzle with a fresh entropy-seeded [Generator]. See [Generator::generate].
pub fn generate_puzzle(category: &str, difficulty: &str, level: u32) -> Result<Puzzle, Error> {
    Generator::new().generate(category, difficulty, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_bank::{word_count, Category};

    fn assert_complete(puzzle: &Puzzle) {
        let size = grid_size_for(&puzzle.difficulty);
        let rows = puzzle.grid.rows();

        assert_eq!(rows.len(), size);
        for row in &rows {
            assert_eq!(row.len(), size);
            assert!(row.iter().all(|ch| ch.is_ascii_uppercase()));
        }

        for word in &puzzle.words {
            let cells = puzzle
                .grid
                .find_word(word)
                .unwrap_or_else(|| panic!("{} is not in the grid", word));
            assert_eq!(cells.len(), word.len());
        }
    }

    #[test]
    fn kids_easy_level_one() {
        let puzzle = Generator::with_seed(1).generate("kids", "easy", 1).unwrap();

        assert_eq!(puzzle.grid.size(), 10);
        assert_eq!(puzzle.words.len(), 10);
        assert_eq!(puzzle.category, "kids");
        assert_eq!(puzzle.difficulty, "easy");
        assert_eq!(puzzle.level, 1);
        assert_complete(&puzzle);
    }

    #[test]
    fn every_category_on_hard() {
        let mut generator = Generator::with_seed(2024);

        for category in Category::ALL {
            for level in [1, 25, 150] {
                let puzzle = generator.generate(category.name(), "hard", level).unwrap();
                assert_complete(&puzzle);
                assert_eq!(
                    puzzle.words.len(),
                    word_count(level, category.words().len())
                );
            }
        }
    }

    #[test]
    fn kids_on_smaller_grids() {
        let mut generator = Generator::with_seed(77);

        for (difficulty, size) in [("easy", 10), ("medium", 15), ("custom", 12)] {
            let puzzle = generator.generate("kids", difficulty, 5).unwrap();
            assert_eq!(puzzle.grid.size(), size);
            assert_complete(&puzzle);
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let first = Generator::with_seed(99).generate("adults", "medium", 12);
        let second = Generator::with_seed(99).generate("adults", "medium", 12);
        assert_eq!(first, second);

        let other = Generator::with_seed(100).generate("adults", "medium", 12);
        assert_ne!(first, other);
    }

    #[test]
    fn unknown_category_fills_grid_without_words() {
        let puzzle = Generator::with_seed(3).generate("pirates", "hard", 1).unwrap();
        assert!(puzzle.words.is_empty());
        assert_eq!(puzzle.grid.size(), 20);
        assert_complete(&puzzle);
    }

    #[test]
    fn placement_failure_is_reported() {
        let mut generator = Generator::with_seed(4).config(GeneratorConfig {
            max_placement_attempts: 0,
        });

        let result = generator.generate("kids", "easy", 1);
        assert!(matches!(result, Err(Error::PlacementFailed { attempts: 0, .. })));
    }

    #[test]
    fn free_function_generates() {
        let puzzle = generate_puzzle("teenagers", "hard", 40).unwrap();
        assert_eq!(puzzle.words.len(), 14);
        assert_complete(&puzzle);
    }
}
