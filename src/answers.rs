//! Letters entered by the player, and checking them against the puzzle.

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::puzzle::Puzzle;
use crate::state::CellPosition;

/// Reduce raw input text to the letter a cell should hold.
///
/// The last alphabetic grapheme typed wins and is uppercased. Graphemes that are not a single
/// letter (digits, punctuation, combining sequences) are skipped.
pub fn normalize_entry(text: &str) -> Option<char> {
    text.graphemes(true).rev().find_map(single_letter)
}

fn single_letter(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if !ch.is_alphabetic() {
        return None;
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => Some(upper),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: BTreeMap<CellPosition, char>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a text change from the cell at `pos`. Returns the letter now stored there.
    ///
    /// Empty text clears the cell. Text with no letters in it is filtered out and leaves the
    /// current entry alone.
    pub fn on_text_changed(&mut self, pos: CellPosition, value: &str) -> Option<char> {
        if value.is_empty() {
            self.entries.remove(&pos);
            return None;
        }
        match normalize_entry(value) {
            Some(letter) => {
                self.entries.insert(pos, letter);
                Some(letter)
            }
            None => self.get(pos),
        }
    }

    pub fn set(&mut self, pos: CellPosition, letter: char) {
        self.on_text_changed(pos, letter.encode_utf8(&mut [0; 4]));
    }

    pub fn clear(&mut self, pos: CellPosition) -> bool {
        self.entries.remove(&pos).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, pos: CellPosition) -> Option<char> {
        self.entries.get(&pos).copied()
    }

    /// Every entered letter, keyed by position. Only filled positions appear.
    pub fn entries(&self) -> &BTreeMap<CellPosition, char> {
        &self.entries
    }

    /// The player's answer for every active cell of `puzzle`, `None` where it is blank.
    /// Inactive cells never appear, even if something was entered there.
    pub fn answers(&self, puzzle: &Puzzle) -> BTreeMap<CellPosition, Option<char>> {
        puzzle.active_cells().map(|pos| (pos, self.get(pos))).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that sit on active cells of `puzzle`.
    pub fn filled_count(&self, puzzle: &Puzzle) -> usize {
        self.entries.keys().filter(|pos| puzzle.is_active(**pos)).count()
    }

    /// Compare every active cell against its solution letter.
    ///
    /// Comparison ignores case. Blank cells are reported as empty rather than wrong, and entries
    /// on positions that are not active cells are ignored.
    pub fn check(&self, puzzle: &Puzzle) -> CheckReport {
        let mut report = CheckReport::default();

        for pos in puzzle.active_cells() {
            report.total += 1;
            let expected = puzzle.cell(pos).and_then(|cell| cell.correct_letter);
            match (self.get(pos), expected) {
                (None, _) => report.empty.push(pos),
                (Some(entered), Some(expected)) if entered.to_uppercase().eq(expected.to_uppercase()) => {
                    report.correct += 1;
                }
                (Some(_), _) => report.incorrect.push(pos),
            }
        }

        tracing::debug!(
            total = report.total,
            correct = report.correct,
            incorrect = report.incorrect.len(),
            empty = report.empty.len(),
            "checked answers"
        );
        report
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub correct: usize,
    pub incorrect: Vec<CellPosition>,
    pub empty: Vec<CellPosition>,
}

impl CheckReport {
    pub fn is_solved(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    pub fn is_incorrect(&self, pos: CellPosition) -> bool {
        self.incorrect.binary_search(&pos).is_ok()
    }

    pub fn summary(&self) -> String {
        if self.is_solved() {
            return "Solved!".to_string();
        }
        let mut summary = format!("{}/{} correct", self.correct, self.total);
        if !self.incorrect.is_empty() {
            summary.push_str(&format!(", {} wrong", self.incorrect.len()));
        }
        if !self.empty.is_empty() {
            summary.push_str(&format!(", {} empty", self.empty.len()));
        }
        summary
    }
}
