//! Random placement of words into a [DraftGrid].

use log::debug;
use rand::Rng;

use crate::{
    grid::{CellId, DraftGrid},
    Error,
};

/// The direction a word is written in, read from its first letter.
///
/// Words are only written forward; players still find them backward because selections match in both
/// directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordDirection {
    /// Left to right along a row.
    Right,

    /// Top to bottom along a column.
    Down,

    /// Diagonally towards the bottom right.
    DiagonalDownRight,

    /// Diagonally towards the top right.
    DiagonalUpRight,
}

impl WordDirection {
    /// Every placement direction.
    pub const ALL: [WordDirection; 4] = [
        WordDirection::Right,
        WordDirection::Down,
        WordDirection::DiagonalDownRight,
        WordDirection::DiagonalUpRight,
    ];

    /// Returns a uniformly random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The `(row, column)` step between consecutive letters.
    pub fn delta(&self) -> (isize, isize) {
        use WordDirection::*;

        match self {
            Right => (0, 1),
            Down => (1, 0),
            DiagonalDownRight => (1, 1),
            DiagonalUpRight => (-1, 1),
        }
    }
}

/// Where one word's letters go: an anchor for the first letter and a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The placed word.
    pub word: String,

    /// Cell of the first letter.
    pub anchor: CellId,

    /// The direction the rest of the word follows.
    pub direction: WordDirection,
}

impl Placement {
    /// Creates a placement. Nothing is checked until [Placement::fits] or [Placement::cells].
    pub fn new(word: &str, anchor: CellId, direction: WordDirection) -> Self {
        Self {
            word: word.to_owned(),
            anchor,
            direction,
        }
    }

    /// The cells the word spans in a `size`x`size` grid, first letter first, or `None` if any of them falls
    /// outside the grid.
    pub fn cells(&self, size: usize) -> Option<Vec<CellId>> {
        let (row_step, col_step) = self.direction.delta();

        (0..self.word.chars().count())
            .map(|i| self.anchor.offset(row_step, col_step, i, size))
            .collect()
    }

    /// Returns whether the word stays inside the grid and every cell it crosses is empty or already holds the
    /// same letter.
    pub fn fits(&self, draft: &DraftGrid) -> bool {
        self.cells(draft.size())
            .is_some_and(|cells| self.letters_agree(draft, &cells))
    }

    fn letters_agree(&self, draft: &DraftGrid, cells: &[CellId]) -> bool {
        self.word
            .chars()
            .zip(cells)
            .all(|(letter, cell)| draft.get(*cell).map_or(true, |existing| existing == letter))
    }

    fn commit(&self, draft: &mut DraftGrid, cells: &[CellId]) {
        for (letter, cell) in self.word.chars().zip(cells) {
            draft.set(*cell, letter);
        }
    }
}

/// Places `word` at a random feasible anchor and direction, writing its letters into `draft`.
///
/// Each attempt draws a direction and an anchor anywhere in the grid. Later words may cross earlier ones on
/// matching letters but never overwrite a different letter. After `max_attempts` failed draws the draft is
/// left untouched and [Error::PlacementFailed] is returned.
pub fn place_word<R: Rng + ?Sized>(
    draft: &mut DraftGrid,
    word: &str,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Placement, Error> {
    let size = draft.size();

    if size == 0 || word.chars().count() > size {
        return Err(Error::WordTooLong {
            word: word.to_owned(),
            grid_size: size,
        });
    }

    for attempt in 1..=max_attempts {
        let direction = WordDirection::random(rng);
        let anchor = CellId::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let placement = Placement::new(word, anchor, direction);

        let Some(cells) = placement.cells(size) else {
            continue;
        };

        if placement.letters_agree(draft, &cells) {
            placement.commit(draft, &cells);
            debug!(
                "Placed {} at {} going {:?} after {} attempt(s)",
                word, anchor, direction, attempt
            );
            return Ok(placement);
        }
    }

    Err(Error::PlacementFailed {
        word: word.to_owned(),
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn cells_follow_direction() {
        let up_right = Placement::new("CAT", CellId::new(2, 0), WordDirection::DiagonalUpRight);
        assert_eq!(
            up_right.cells(3),
            Some(vec![CellId::new(2, 0), CellId::new(1, 1), CellId::new(0, 2)])
        );

        let down = Placement::new("CAT", CellId::new(0, 4), WordDirection::Down);
        assert_eq!(
            down.cells(5),
            Some(vec![CellId::new(0, 4), CellId::new(1, 4), CellId::new(2, 4)])
        );
    }

    #[test]
    fn out_of_bounds_does_not_fit() {
        let draft = DraftGrid::empty(5);

        assert!(!Placement::new("HOUSE", CellId::new(0, 1), WordDirection::Right).fits(&draft));
        assert!(!Placement::new("CAT", CellId::new(1, 0), WordDirection::DiagonalUpRight).fits(&draft));
        assert!(!Placement::new("CAT", CellId::new(3, 3), WordDirection::DiagonalDownRight).fits(&draft));
        assert!(Placement::new("HOUSE", CellId::new(0, 0), WordDirection::Right).fits(&draft));
        assert!(Placement::new("CAT", CellId::new(2, 0), WordDirection::DiagonalUpRight).fits(&draft));
    }

    #[test]
    fn crossing_needs_same_letter() {
        let mut draft = DraftGrid::empty(5);
        draft.set(CellId::new(0, 2), 'T');

        // "CAT" ends on the existing T
        assert!(Placement::new("CAT", CellId::new(0, 0), WordDirection::Right).fits(&draft));
        // "DOG" would overwrite it
        assert!(!Placement::new("DOG", CellId::new(0, 0), WordDirection::Right).fits(&draft));
        // "TOP" starts on it going down
        assert!(Placement::new("TOP", CellId::new(0, 2), WordDirection::Down).fits(&draft));
    }

    #[test]
    fn placed_word_is_readable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut draft = DraftGrid::empty(6);

        for word in ["APPLE", "HOUSE", "KITE", "FROG"] {
            let placement = place_word(&mut draft, word, &mut rng, 10_000).unwrap();
            let cells = placement.cells(draft.size()).unwrap();
            let spelled: String = cells.iter().filter_map(|cell| draft.get(*cell)).collect();
            assert_eq!(spelled, word);
        }
    }

    #[test]
    fn word_longer_than_grid() {
        let mut draft = DraftGrid::empty(5);
        let result = place_word(&mut draft, "TECHNOLOGY", &mut StdRng::seed_from_u64(0), 100);

        assert_eq!(
            result,
            Err(Error::WordTooLong {
                word: String::from("TECHNOLOGY"),
                grid_size: 5,
            })
        );
    }

    #[test]
    fn exhausted_attempts() {
        let mut draft = DraftGrid::empty(3);
        for row in 0..3 {
            for col in 0..3 {
                draft.set(CellId::new(row, col), 'X');
            }
        }
        let before = draft.clone();

        let result = place_word(&mut draft, "CAT", &mut StdRng::seed_from_u64(5), 50);

        assert_eq!(
            result,
            Err(Error::PlacementFailed {
                word: String::from("CAT"),
                attempts: 50,
            })
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn full_width_word_fits() {
        let mut draft = DraftGrid::empty(5);
        let placement = place_word(&mut draft, "APPLE", &mut StdRng::seed_from_u64(9), 10_000).unwrap();
        assert_eq!(placement.cells(5).map(|cells| cells.len()), Some(5));
        assert_eq!(draft.empty_cells(), 20);
    }

    #[test]
    fn random_direction_covers_all() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(WordDirection::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
