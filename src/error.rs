use std::fmt::Display;

/// An error that happened while generating a puzzle or reading one back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The word is longer than the side of the grid, so it can't fit in any direction.
    WordTooLong {
        /// The word that was being placed.
        word: String,

        /// The number of rows (and columns) of the grid.
        grid_size: usize,
    },

    /// No feasible anchor and direction was found for the word within the configured number of attempts.
    /// Retrying with a larger grid or fewer words may succeed.
    PlacementFailed {
        /// The word that could not be placed.
        word: String,

        /// How many random anchor/direction pairs were tried.
        attempts: usize,
    },

    /// A grid read from outside the generator breaks the grid invariants.
    InvalidGrid(String),

    /// A cell label that isn't of the form `row-col`.
    InvalidCellId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::WordTooLong { word, grid_size } => {
                write!(
                    f,
                    "Word {:?} ({} letters) does not fit in a {}x{} grid",
                    word,
                    word.chars().count(),
                    grid_size,
                    grid_size
                )
            }
            Error::PlacementFailed { word, attempts } => {
                write!(f, "Could not place word {:?} after {} attempts", word, attempts)
            }
            Error::InvalidGrid(reason) => write!(f, "Invalid grid: {}", reason),
            Error::InvalidCellId(label) => {
                write!(f, "Invalid cell id {:?}, expected \"row-col\"", label)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_messages() {
        let too_long = Error::WordTooLong {
            word: String::from("TECHNOLOGY"),
            grid_size: 5,
        };
        assert_eq!(
            too_long.to_string(),
            "Word \"TECHNOLOGY\" (10 letters) does not fit in a 5x5 grid"
        );

        let failed = Error::PlacementFailed {
            word: String::from("CAT"),
            attempts: 3,
        };
        assert_eq!(failed.to_string(), "Could not place word \"CAT\" after 3 attempts");

        assert_eq!(
            Error::InvalidCellId(String::from("x")).to_string(),
            "Invalid cell id \"x\", expected \"row-col\""
        );
    }
}
