//! Crossword puzzle model: the grid of cells and the across/down clue tables.
//!
//! A [`Puzzle`] is built once from a JSON document (see [`crate::file_io`]) and is read-only
//! afterwards. The grid view owns it and queries it for rendering, word navigation and answer
//! checking.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::file_io::{self, PuzzleDocument};
use crate::state::{CellPosition, Direction};

/// Errors produced while building or querying a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed puzzle document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bundled puzzle {0:?} is missing")]
    MissingAsset(String),
    #[error("active cell needs a single alphabetic letter, got {letter:?}")]
    InvalidLetter { letter: Option<String> },
    #[error("grid rows have inconsistent number of columns: row {row} has {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{direction} clue number {key:?} is not an integer")]
    InvalidClueNumber { direction: Direction, key: String },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub is_active: bool,
    /// Uppercase solution letter; always `None` for inactive cells.
    pub correct_letter: Option<char>,
    /// Clue number printed in the corner when a word starts here.
    pub number: Option<i64>,
}

impl Cell {
    /// Build a cell. Active cells must carry exactly one alphabetic character, which is stored
    /// uppercased; inactive cells drop whatever letter they were given.
    pub fn new(is_active: bool, letter: Option<&str>, number: Option<i64>) -> Result<Self, PuzzleError> {
        let correct_letter = if is_active {
            Some(validate_letter(letter)?)
        } else {
            None
        };
        Ok(Self {
            is_active,
            correct_letter,
            number,
        })
    }

    pub fn active(letter: &str, number: Option<i64>) -> Result<Self, PuzzleError> {
        Self::new(true, Some(letter), number)
    }

    pub fn inactive(number: Option<i64>) -> Self {
        Self {
            is_active: false,
            correct_letter: None,
            number,
        }
    }
}

fn validate_letter(letter: Option<&str>) -> Result<char, PuzzleError> {
    let invalid = || PuzzleError::InvalidLetter {
        letter: letter.map(str::to_string),
    };

    let mut chars = letter.ok_or_else(invalid)?.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(invalid());
    };
    if !ch.is_alphabetic() {
        return Err(invalid());
    }

    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) if upper.is_alphabetic() => Ok(upper),
        _ => Err(invalid()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    grid: Vec<Vec<Cell>>,
    across_clues: BTreeMap<i64, String>,
    down_clues: BTreeMap<i64, String>,
}

impl Puzzle {
    /// Load a puzzle from a JSON file.
    ///
    /// The document looks like:
    ///
    /// ```json
    /// {
    ///   "grid": [[{"letter": "A", "number": 1}, {"letter": null, "number": null}]],
    ///   "across_clues": {"1": "Clue text"},
    ///   "down_clues": {"1": "Clue text"}
    /// }
    /// ```
    ///
    /// A `null` letter marks an inactive (black) cell. Any failure aborts the whole load.
    pub fn load_from_file(path: &Path) -> Result<Self, PuzzleError> {
        let document = file_io::read_document(path)?;
        let puzzle = Self::from_document(document)?;
        tracing::info!(
            path = %path.display(),
            rows = puzzle.rows(),
            cols = puzzle.cols(),
            "loaded puzzle"
        );
        Ok(puzzle)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, PuzzleError> {
        Self::from_document(file_io::parse_document(bytes)?)
    }

    pub fn from_document(document: PuzzleDocument) -> Result<Self, PuzzleError> {
        let grid = document
            .grid
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|entry| match entry.letter {
                        None => Ok(Cell::inactive(entry.number)),
                        Some(letter) => Cell::active(&letter, entry.number),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = grid.first() {
            let expected = first.len();
            if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(PuzzleError::RaggedRows {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            grid,
            across_clues: file_io::parse_clue_keys(document.across_clues, Direction::Across)?,
            down_clues: file_io::parse_clue_keys(document.down_clues, Direction::Down)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<&Cell, PuzzleError> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .ok_or(PuzzleError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    pub fn cell(&self, pos: CellPosition) -> Option<&Cell> {
        self.grid.get(pos.row)?.get(pos.col)
    }

    pub fn is_active(&self, pos: CellPosition) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_active)
    }

    /// Look up clue text by number and direction name (`"across"` or `"down"`).
    /// Unknown numbers and unknown directions both yield `None`.
    pub fn get_clue(&self, number: i64, direction: &str) -> Option<&str> {
        let direction = direction.parse::<Direction>().ok()?;
        self.clue(number, direction)
    }

    pub fn clue(&self, number: i64, direction: Direction) -> Option<&str> {
        self.clues(direction).get(&number).map(String::as_str)
    }

    pub fn clues(&self, direction: Direction) -> &BTreeMap<i64, String> {
        match direction {
            Direction::Across => &self.across_clues,
            Direction::Down => &self.down_clues,
        }
    }

    /// Positions of every active cell, row by row.
    pub fn active_cells(&self) -> impl Iterator<Item = CellPosition> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_active)
                .map(move |(col, _)| CellPosition::new(row, col))
        })
    }

    pub fn first_active(&self) -> Option<CellPosition> {
        self.active_cells().next()
    }

    /// Active cell carrying clue `number`.
    pub fn find_number(&self, number: i64) -> Option<CellPosition> {
        self.active_cells()
            .find(|pos| self.cell(*pos).and_then(|cell| cell.number) == Some(number))
    }

    /// Nearest active cell past `pos` along `direction`, jumping over blocks.
    pub fn next_active(&self, pos: CellPosition, direction: Direction, forward: bool) -> Option<CellPosition> {
        let mut current = pos.step(direction, forward)?;
        while current.row < self.rows() && current.col < self.cols() {
            if self.is_active(current) {
                return Some(current);
            }
            current = current.step(direction, forward)?;
        }
        None
    }

    /// The maximal run of active cells through `pos` along `direction`.
    pub fn word_cells(&self, pos: CellPosition, direction: Direction) -> Vec<CellPosition> {
        if !self.is_active(pos) {
            return Vec::new();
        }

        let mut start = pos;
        while let Some(prev) = start.step(direction, false).filter(|p| self.is_active(*p)) {
            start = prev;
        }

        let mut cells = vec![start];
        let mut current = start;
        while let Some(next) = current.step(direction, true).filter(|p| self.is_active(*p)) {
            cells.push(next);
            current = next;
        }
        cells
    }

    /// Clue number of the word through `pos`, taken from the word's first cell.
    pub fn clue_number_at(&self, pos: CellPosition, direction: Direction) -> Option<i64> {
        let start = *self.word_cells(pos, direction).first()?;
        self.cell(start)?.number
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const TWO_BY_TWO: &str = r#"{
        "grid": [
            [{"letter": "A", "number": 1}, {"letter": "B", "number": null}],
            [{"letter": null, "number": null}, {"letter": "C", "number": 2}]
        ],
        "across_clues": {"1": "Test across"},
        "down_clues": {"1": "Test down"}
    }"#;

    #[test]
    fn active_cell_uppercases_letter() {
        let cell = Cell::active("q", Some(3)).unwrap();
        assert!(cell.is_active);
        assert_eq!(cell.correct_letter, Some('Q'));
        assert_eq!(cell.number, Some(3));

        assert_eq!(Cell::active("é", None).unwrap().correct_letter, Some('É'));
    }

    #[test]
    fn active_cell_rejects_bad_letters() {
        for letter in ["", "AB", "7", "-", " "] {
            assert!(
                matches!(Cell::active(letter, None), Err(PuzzleError::InvalidLetter { .. })),
                "{letter:?} should be rejected"
            );
        }
        assert!(matches!(
            Cell::new(true, None, None),
            Err(PuzzleError::InvalidLetter { letter: None })
        ));
        // Uppercases to two characters.
        assert!(Cell::active("ß", None).is_err());
    }

    #[test]
    fn inactive_cell_drops_letter() {
        let cell = Cell::new(false, Some("Z"), Some(4)).unwrap();
        assert!(!cell.is_active);
        assert_eq!(cell.correct_letter, None);
        assert_eq!(cell.number, Some(4));

        assert_eq!(Cell::new(false, Some("not a letter"), None).unwrap().correct_letter, None);
    }

    #[test]
    fn empty_puzzle_has_no_dimensions() {
        let puzzle = Puzzle::default();
        assert_eq!(puzzle.rows(), 0);
        assert_eq!(puzzle.cols(), 0);
        assert!(matches!(puzzle.get_cell(0, 0), Err(PuzzleError::OutOfBounds { .. })));
    }

    #[test]
    fn loads_two_by_two_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.json");
        fs::write(&path, TWO_BY_TWO).unwrap();

        let puzzle = Puzzle::load_from_file(&path).unwrap();
        assert_eq!(puzzle.rows(), 2);
        assert_eq!(puzzle.cols(), 2);
        assert_eq!(puzzle.get_cell(0, 0).unwrap().correct_letter, Some('A'));
        assert_eq!(puzzle.get_cell(0, 0).unwrap().number, Some(1));
        assert!(!puzzle.get_cell(1, 0).unwrap().is_active);
        assert_eq!(puzzle.get_cell(1, 1).unwrap().number, Some(2));
        assert_eq!(puzzle.get_clue(1, "across"), Some("Test across"));
        assert_eq!(puzzle.get_clue(1, "down"), Some("Test down"));
    }

    #[test]
    fn clue_lookup_misses_are_silent() {
        let puzzle = Puzzle::from_slice(TWO_BY_TWO.as_bytes()).unwrap();
        assert_eq!(puzzle.get_clue(999, "across"), None);
        assert_eq!(puzzle.get_clue(1, "diagonal"), None);
        assert_eq!(puzzle.get_clue(1, "ACROSS"), None);
        assert_eq!(puzzle.clue(1, Direction::Down), Some("Test down"));
    }

    #[test]
    fn get_cell_out_of_bounds() {
        let puzzle = Puzzle::from_slice(TWO_BY_TWO.as_bytes()).unwrap();
        let err = puzzle.get_cell(0, 2).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::OutOfBounds { row: 0, col: 2, rows: 2, cols: 2 }
        ));
        assert!(puzzle.get_cell(5, 0).is_err());
        assert!(puzzle.cell(CellPosition::new(2, 0)).is_none());
    }

    #[test]
    fn ragged_rows_fail_validation() {
        let json = r#"{
            "grid": [
                [{"letter": "A", "number": 1}, {"letter": "B", "number": null}],
                [{"letter": "C", "number": null}]
            ],
            "across_clues": {},
            "down_clues": {}
        }"#;
        assert!(matches!(
            Puzzle::from_slice(json.as_bytes()),
            Err(PuzzleError::RaggedRows { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn invalid_letter_in_document_fails_load() {
        let json = r#"{
            "grid": [[{"letter": "AB", "number": 1}]],
            "across_clues": {},
            "down_clues": {}
        }"#;
        assert!(matches!(
            Puzzle::from_slice(json.as_bytes()),
            Err(PuzzleError::InvalidLetter { .. })
        ));

        let numeric = r#"{"grid": [[{"letter": 5, "number": 1}]], "across_clues": {}, "down_clues": {}}"#;
        assert!(matches!(Puzzle::from_slice(numeric.as_bytes()), Err(PuzzleError::Parse(_))));
    }

    #[test]
    fn non_numeric_clue_key_fails_load() {
        let json = r#"{"grid": [], "across_clues": {}, "down_clues": {"x": "Bad"}}"#;
        assert!(matches!(
            Puzzle::from_slice(json.as_bytes()),
            Err(PuzzleError::InvalidClueNumber { direction: Direction::Down, .. })
        ));
    }

    #[test]
    fn negative_numbers_load() {
        let json = r#"{
            "grid": [[{"letter": "A", "number": -1}, {"letter": "B", "number": null}]],
            "across_clues": {"-1": "Counts down"},
            "down_clues": {}
        }"#;
        let puzzle = Puzzle::from_slice(json.as_bytes()).unwrap();
        assert_eq!(puzzle.get_cell(0, 0).unwrap().number, Some(-1));
        assert_eq!(puzzle.get_clue(-1, "across"), Some("Counts down"));
        assert_eq!(puzzle.find_number(-1), Some(CellPosition::new(0, 0)));
        assert_eq!(puzzle.clue_number_at(CellPosition::new(0, 1), Direction::Across), Some(-1));
    }

    #[test]
    fn word_navigation() {
        // H I # T O
        // E # O # N
        let json = r#"{
            "grid": [
                [{"letter": "H", "number": 1}, {"letter": "I", "number": null}, {"letter": null, "number": null},
                 {"letter": "T", "number": 2}, {"letter": "O", "number": 3}],
                [{"letter": "E", "number": null}, {"letter": null, "number": null}, {"letter": "O", "number": 4},
                 {"letter": null, "number": null}, {"letter": "N", "number": null}]
            ],
            "across_clues": {"1": "Greeting", "2": "Toward"},
            "down_clues": {"1": "That man", "3": "Running"}
        }"#;
        let puzzle = Puzzle::from_slice(json.as_bytes()).unwrap();

        assert_eq!(
            puzzle.word_cells(CellPosition::new(0, 1), Direction::Across),
            vec![CellPosition::new(0, 0), CellPosition::new(0, 1)]
        );
        assert_eq!(
            puzzle.word_cells(CellPosition::new(1, 4), Direction::Down),
            vec![CellPosition::new(0, 4), CellPosition::new(1, 4)]
        );
        assert!(puzzle.word_cells(CellPosition::new(0, 2), Direction::Across).is_empty());

        assert_eq!(puzzle.clue_number_at(CellPosition::new(0, 4), Direction::Across), Some(2));
        assert_eq!(puzzle.clue_number_at(CellPosition::new(1, 4), Direction::Down), Some(3));
        assert_eq!(puzzle.clue_number_at(CellPosition::new(1, 0), Direction::Down), Some(1));
        // A lone cell with no number of its own.
        assert_eq!(puzzle.clue_number_at(CellPosition::new(0, 1), Direction::Down), None);

        assert_eq!(puzzle.active_cells().count(), 7);
        assert_eq!(puzzle.first_active(), Some(CellPosition::new(0, 0)));
        assert_eq!(puzzle.find_number(4), Some(CellPosition::new(1, 2)));
        assert_eq!(puzzle.find_number(9), None);
    }

    #[test]
    fn next_active_skips_blocks() {
        let json = r#"{
            "grid": [[{"letter": "A", "number": 1}, {"letter": null, "number": null},
                      {"letter": null, "number": null}, {"letter": "B", "number": 2}]],
            "across_clues": {},
            "down_clues": {}
        }"#;
        let puzzle = Puzzle::from_slice(json.as_bytes()).unwrap();
        let start = CellPosition::new(0, 0);
        let end = CellPosition::new(0, 3);

        assert_eq!(puzzle.next_active(start, Direction::Across, true), Some(end));
        assert_eq!(puzzle.next_active(end, Direction::Across, false), Some(start));
        assert_eq!(puzzle.next_active(end, Direction::Across, true), None);
        assert_eq!(puzzle.next_active(start, Direction::Down, true), None);
        assert_eq!(Puzzle::default().first_active(), None);
    }
}
