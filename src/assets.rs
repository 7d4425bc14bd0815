use gpui::AssetSource;
use rust_embed::RustEmbed;

use crate::puzzle::{Puzzle, PuzzleError};

/// Puzzles bundled into the binary.
#[derive(RustEmbed)]
#[folder = "puzzles/"]
pub struct Assets;

impl Assets {
    pub const SAMPLE_PUZZLE: &'static str = "sample.json";

    /// The puzzle shown when no file is given on the command line.
    pub fn sample_puzzle() -> Result<Puzzle, PuzzleError> {
        let file = Self::get(Self::SAMPLE_PUZZLE)
            .ok_or_else(|| PuzzleError::MissingAsset(Self::SAMPLE_PUZZLE.to_string()))?;
        Puzzle::from_slice(&file.data)
    }
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        Ok(Self::get(path).map(|f| f.data))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<gpui::SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(Into::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CellPosition, Direction};

    #[test]
    fn sample_puzzle_loads() {
        let puzzle = Assets::sample_puzzle().unwrap();
        assert_eq!(puzzle.rows(), 5);
        assert_eq!(puzzle.cols(), 5);
        assert_eq!(puzzle.get_clue(1, "across"), Some("Casual greeting"));
        assert_eq!(puzzle.get_clue(4, "down"), Some("Mined mineral"));
        assert!(!puzzle.get_cell(0, 2).unwrap().is_active);
    }

    #[test]
    fn sample_clues_start_words() {
        let puzzle = Assets::sample_puzzle().unwrap();
        for direction in [Direction::Across, Direction::Down] {
            for &number in puzzle.clues(direction).keys() {
                let start = puzzle
                    .find_number(number)
                    .unwrap_or_else(|| panic!("no cell numbered {number}"));
                let word = puzzle.word_cells(start, direction);
                assert_eq!(word.first(), Some(&start), "{number}{} starts mid-word", direction.suffix());
                assert!(word.len() > 1, "{number}{} is a single cell", direction.suffix());
            }
        }
        assert_eq!(puzzle.clue_number_at(CellPosition::new(3, 2), Direction::Down), Some(4));
    }
}
