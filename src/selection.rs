//! Turning drag gestures into word matches.
//!
//! A [MatchEngine] owns one [Puzzle] and is fed the pointer events of the player, in the order they happen:
//!
//! * [MatchEngine::on_gesture_start] when the pointer goes down on a cell,
//! * [MatchEngine::on_gesture_move] whenever it enters another cell,
//! * [MatchEngine::on_gesture_end] when it is released (or [MatchEngine::on_pointer_leave] when it leaves the
//!   grid mid-drag).
//!
//! While dragging, the selection is always the straight line from the starting cell to the current one. On
//! release the selected letters are read in row-major order; if they spell an unfound word forward or
//! backward, the word is marked found and returned as a [WordFound].

use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;

use crate::{grid::CellId, hints::Hint, Puzzle};

/// A word the player just found, with the cells it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFound {
    /// The word as listed in the puzzle.
    pub word: String,

    /// Its cells in row-major order.
    pub cells: Vec<CellId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gesture {
    Idle,
    Selecting { anchor: CellId, last: CellId },
}

/// The straight line of cells from `anchor` to `target`, both included, or `None` when the two cells are not
/// on the same row, column or diagonal.
pub fn straight_path(anchor: CellId, target: CellId) -> Option<Vec<CellId>> {
    let row_diff = target.row as isize - anchor.row as isize;
    let col_diff = target.col as isize - anchor.col as isize;

    let steps = if row_diff.abs() == col_diff.abs() || row_diff == 0 || col_diff == 0 {
        row_diff.unsigned_abs().max(col_diff.unsigned_abs())
    } else {
        return None;
    };

    let (row_step, col_step) = (row_diff.signum(), col_diff.signum());

    (0..=steps)
        .map(|i| {
            let i = i as isize;
            let row = usize::try_from(anchor.row as isize + row_step * i).ok()?;
            let col = usize::try_from(anchor.col as isize + col_step * i).ok()?;
            Some(CellId::new(row, col))
        })
        .collect()
}

/// Selection and match state for one puzzle being played.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    puzzle: Puzzle,
    gesture: Gesture,
    selection: BTreeSet<CellId>,
    found: Vec<String>,
    highlighted: BTreeSet<CellId>,
}

impl MatchEngine {
    /// Starts playing `puzzle` with nothing selected or found.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            gesture: Gesture::Idle,
            selection: BTreeSet::new(),
            found: Vec::new(),
            highlighted: BTreeSet::new(),
        }
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The pointer went down on `cell`. Starts a new selection containing only that cell.
    ///
    /// Cells outside the grid are ignored.
    pub fn on_gesture_start(&mut self, cell: CellId) {
        if !self.puzzle.grid.contains(cell) {
            debug!("Ignoring gesture start outside the grid at {}", cell);
            return;
        }

        self.gesture = Gesture::Selecting {
            anchor: cell,
            last: cell,
        };
        self.selection = BTreeSet::from([cell]);
    }

    /// The pointer entered `cell` while dragging.
    ///
    /// The selection becomes the straight line from the starting cell to `cell`. When `cell` isn't on a
    /// straight line from the start, the previous selection stays as it is. Does nothing when no gesture is
    /// in progress.
    pub fn on_gesture_move(&mut self, cell: CellId) {
        let Gesture::Selecting { anchor, last } = self.gesture else {
            return;
        };

        if cell == last || !self.puzzle.grid.contains(cell) {
            return;
        }

        if let Some(path) = straight_path(anchor, cell) {
            self.selection = path.into_iter().collect();
        }

        self.gesture = Gesture::Selecting { anchor, last: cell };
    }

    /// The pointer was released. Returns the word found by the selection, if any.
    ///
    /// The selection is cleared whether or not it matched. Does nothing when no gesture is in progress.
    pub fn on_gesture_end(&mut self) -> Option<WordFound> {
        if self.gesture == Gesture::Idle {
            return None;
        }

        self.gesture = Gesture::Idle;
        let selection = std::mem::take(&mut self.selection);

        let spelled = self.puzzle.grid.spell(&selection);
        let reversed: String = spelled.chars().rev().collect();

        let word = [spelled, reversed]
            .into_iter()
            .find(|candidate| self.puzzle.has_word(candidate) && !self.is_found(candidate))?;

        self.highlighted.extend(selection.iter().copied());
        self.found.push(word.clone());

        info!(
            "Found {} ({}/{})",
            word,
            self.found_count(),
            self.total_words()
        );
        if self.is_complete() {
            info!("All {} words found", self.total_words());
        }

        Some(WordFound {
            word,
            cells: selection.into_iter().collect(),
        })
    }

    /// The pointer left the grid. Ends the gesture exactly like [MatchEngine::on_gesture_end].
    pub fn on_pointer_leave(&mut self) -> Option<WordFound> {
        self.on_gesture_end()
    }

    /// Whether a drag is in progress.
    pub fn is_selecting(&self) -> bool {
        matches!(self.gesture, Gesture::Selecting { .. })
    }

    /// The cells currently selected, in row-major order. Empty when no drag is in progress.
    pub fn selection(&self) -> &BTreeSet<CellId> {
        &self.selection
    }

    /// Cells of every word found so far.
    pub fn highlighted(&self) -> &BTreeSet<CellId> {
        &self.highlighted
    }

    /// The words found so far, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Whether `word` has been found.
    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    /// Number of words found so far.
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Number of words in the puzzle.
    pub fn total_words(&self) -> usize {
        self.puzzle.total_words()
    }

    /// Whether every word has been found.
    pub fn is_complete(&self) -> bool {
        self.found_count() == self.total_words()
    }

    /// The listed words not found yet, in puzzle order.
    pub fn unfound_words(&self) -> impl Iterator<Item = &str> {
        self.puzzle
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| !self.is_found(word))
    }

    /// A hint about a random unfound word, or `None` once every word is found.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        let unfound: Vec<&str> = self.unfound_words().collect();
        Hint::random(&unfound, rng)
    }
}
