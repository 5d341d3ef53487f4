//! Letter grids: the draft filled in by the placement engine, the filler pass, and the finished [Grid].

use std::{fmt::Display, ops::Index, str::FromStr};

use array2d::Array2D;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{placement::WordDirection, Error};

/// Letters used for filler cells.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Grid side used for a difficulty name that isn't recognized.
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Puzzle difficulty. Only decides how large the grid is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 10x10 grid.
    Easy,

    /// 15x15 grid.
    Medium,

    /// 20x20 grid.
    Hard,

    /// Any other name; 12x12 grid.
    Other,
}

impl Difficulty {
    /// Number of rows and columns of the puzzle grid.
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
            Difficulty::Other => DEFAULT_GRID_SIZE,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        match name {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }
}

/// Grid side for a difficulty name, e.g. `grid_size_for("medium") == 15`.
pub fn grid_size_for(difficulty: &str) -> usize {
    Difficulty::from(difficulty).grid_size()
}

/// A cell coordinate. Displays and parses as `row-col`.
///
/// Ordering is row-major, which is the order selected letters are read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    /// Zero-based row, top to bottom.
    pub row: usize,

    /// Zero-based column, left to right.
    pub col: usize,
}

impl CellId {
    /// Creates a cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells away along `(row_step, col_step)`, if it lies inside a `size`x`size` grid.
    pub fn offset(&self, row_step: isize, col_step: isize, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row as isize + row_step * steps;
        let col = self.col as isize + col_step * steps;

        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }

        Some(Self::new(row as usize, col as usize))
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCellId(s.to_owned());

        let (row, col) = s.trim().split_once('-').ok_or_else(invalid)?;
        let row = row.parse().map_err(|_| invalid())?;
        let col = col.parse().map_err(|_| invalid())?;

        Ok(Self::new(row, col))
    }
}

impl From<(usize, usize)> for CellId {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A square grid under construction. `None` marks a cell no word has claimed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftGrid {
    cells: Array2D<Option<char>>,
}

impl DraftGrid {
    /// A `size`x`size` grid with every cell empty.
    pub fn empty(size: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, size, size),
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// The letter at `cell`, or `None` when the cell is empty or out of bounds.
    pub fn get(&self, cell: CellId) -> Option<char> {
        self.cells.get(cell.row, cell.col).copied().flatten()
    }

    /// Writes a letter into `cell`. Out of bounds cells are ignored.
    pub fn set(&mut self, cell: CellId, letter: char) {
        if let Some(slot) = self.cells.get_mut(cell.row, cell.col) {
            *slot = Some(letter);
        }
    }

    /// Number of cells that still hold no letter.
    pub fn empty_cells(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|cell| cell.is_none())
            .count()
    }
}

/// Turns a draft into a finished grid, writing a uniformly random letter from [ALPHABET] into each empty cell.
///
/// This must run after every word is placed: placement may cross a cell only when it already holds the
/// same letter, so filler written earlier would be mistaken for part of a word.
pub fn fill_empty<R: Rng + ?Sized>(draft: DraftGrid, rng: &mut R) -> Grid {
    let size = draft.size();
    let mut placed = draft.cells.elements_row_major_iter();

    let cells = Array2D::filled_by_row_major(
        || match placed.next() {
            Some(Some(letter)) => *letter,
            _ => ALPHABET[rng.gen_range(0..ALPHABET.len())],
        },
        size,
        size,
    );

    Grid { cells }
}

/// A finished square puzzle grid. Every cell holds one uppercase letter.
///
/// Serializes as an array of rows, each cell a one-letter string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<char>>", try_from = "Vec<Vec<char>>")]
pub struct Grid {
    cells: Array2D<char>,
}

impl Grid {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// The letter at `cell`, or `None` when it is out of bounds.
    pub fn get(&self, cell: CellId) -> Option<char> {
        self.cells.get(cell.row, cell.col).copied()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.size() && cell.col < self.size()
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells.as_rows()
    }

    /// Concatenates the letters at `cells` in iteration order, skipping cells outside the grid.
    pub fn spell<'a>(&self, cells: impl IntoIterator<Item = &'a CellId>) -> String {
        cells.into_iter().filter_map(|cell| self.get(*cell)).collect()
    }

    /// Finds `word` along any of the eight straight directions and returns its cells, first letter first.
    pub fn find_word(&self, word: &str) -> Option<Vec<CellId>> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;
        let size = self.size();

        let steps = WordDirection::ALL.iter().flat_map(|direction| {
            let (row_step, col_step) = direction.delta();
            [(row_step, col_step), (-row_step, -col_step)]
        });
        let steps: Vec<(isize, isize)> = steps.collect();

        for row in 0..size {
            for col in 0..size {
                let start = CellId::new(row, col);
                if self.get(start) != Some(first) {
                    continue;
                }

                for &(row_step, col_step) in &steps {
                    let path: Option<Vec<CellId>> = (0..letters.len())
                        .map(|i| start.offset(row_step, col_step, i, size))
                        .collect();

                    if let Some(path) = path {
                        if path
                            .iter()
                            .zip(&letters)
                            .all(|(cell, letter)| self.get(*cell) == Some(*letter))
                        {
                            return Some(path);
                        }
                    }
                }
            }
        }

        None
    }
}

impl Index<CellId> for Grid {
    type Output = char;

    fn index(&self, cell: CellId) -> &Self::Output {
        &self.cells[(cell.row, cell.col)]
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        grid.cells.as_rows()
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err(Error::InvalidGrid(String::from("grid has no rows")));
        }

        let size = rows.len();
        if let Some(row) = rows.iter().position(|row| row.len() != size) {
            return Err(Error::InvalidGrid(format!(
                "row {} has {} cells, expected {}",
                row,
                rows[row].len(),
                size
            )));
        }

        if let Some(letter) = rows.iter().flatten().find(|ch| !ch.is_ascii_uppercase()) {
            return Err(Error::InvalidGrid(format!(
                "cell {:?} is not an uppercase letter",
                letter
            )));
        }

        let cells = Array2D::from_rows(&rows).map_err(|e| Error::InvalidGrid(format!("{:?}", e)))?;

        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            let line: Vec<String> = row.map(|ch| ch.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}
