//! Play state of one puzzle: cursor, entries and the last check, kept apart from gpui so the
//! grid view only forwards events here and re-renders.

use std::path::PathBuf;

use crate::answers::{normalize_entry, AnswerSheet, CheckReport};
use crate::file_state::FileState;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::state::{CellPosition, Direction};

type TextChangedHandler = Box<dyn Fn(CellPosition, Option<char>) + 'static>;

/// An entry that changed, with the letter now stored there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryChange {
    pub pos: CellPosition,
    pub letter: Option<char>,
}

pub struct PuzzleSession {
    puzzle: Puzzle,
    answers: AnswerSheet,
    selected: CellPosition,
    direction: Direction,
    file_state: FileState,
    report: Option<CheckReport>,
    on_text_changed: Option<TextChangedHandler>,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle, path: Option<PathBuf>) -> Self {
        Self {
            selected: puzzle.first_active().unwrap_or(CellPosition::new(0, 0)),
            puzzle,
            answers: AnswerSheet::new(),
            direction: Direction::Across,
            file_state: FileState::new(path),
            report: None,
            on_text_changed: None,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn selected(&self) -> CellPosition {
        self.selected
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn file_state(&self) -> &FileState {
        &self.file_state
    }

    /// Result of the last check, until an entry changes.
    pub fn report(&self) -> Option<&CheckReport> {
        self.report.as_ref()
    }

    /// Register a callback run synchronously after every entry change.
    pub fn set_text_changed_handler<F>(&mut self, handler: F)
    where
        F: Fn(CellPosition, Option<char>) + 'static,
    {
        self.on_text_changed = Some(Box::new(handler));
    }

    /// Move to the nearest active cell along `direction`, which also becomes the typing direction.
    pub fn move_selection(&mut self, direction: Direction, forward: bool) {
        self.direction = direction;
        if let Some(next) = self.puzzle.next_active(self.selected, direction, forward) {
            self.selected = next;
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Select an active cell. Selecting the cell that is already selected flips the direction.
    /// Returns `false` for blocks and positions outside the grid.
    pub fn select(&mut self, pos: CellPosition) -> bool {
        if !self.puzzle.is_active(pos) {
            return false;
        }
        if pos == self.selected {
            self.toggle_direction();
        } else {
            self.selected = pos;
        }
        true
    }

    /// Jump to the start of clue `number` in `direction`.
    pub fn select_clue(&mut self, number: i64, direction: Direction) -> bool {
        let Some(pos) = self.puzzle.find_number(number) else {
            return false;
        };
        self.selected = pos;
        self.direction = direction;
        true
    }

    pub fn current_clue_number(&self, direction: Direction) -> Option<i64> {
        self.puzzle.clue_number_at(self.selected, direction)
    }

    /// Enter typed text into the selected cell, then advance within the current word.
    ///
    /// Text without a letter in it, or a selection on a block, changes nothing.
    pub fn type_letter(&mut self, text: &str) -> Option<EntryChange> {
        if normalize_entry(text).is_none() || !self.puzzle.is_active(self.selected) {
            return None;
        }

        let pos = self.selected;
        let letter = self.answers.on_text_changed(pos, text);
        if let Some(next) = pos
            .step(self.direction, true)
            .filter(|next| self.puzzle.is_active(*next))
        {
            self.selected = next;
        }
        Some(self.entry_changed(pos, letter))
    }

    /// Clear the selected cell. On an empty cell, step back within the word and clear that one.
    pub fn backspace(&mut self) -> Option<EntryChange> {
        if self.answers.get(self.selected).is_none() {
            let prev = self
                .selected
                .step(self.direction, false)
                .filter(|prev| self.puzzle.is_active(*prev))?;
            self.selected = prev;
        }
        self.clear_selected()
    }

    pub fn delete(&mut self) -> Option<EntryChange> {
        self.clear_selected()
    }

    fn clear_selected(&mut self) -> Option<EntryChange> {
        let pos = self.selected;
        if !self.answers.clear(pos) {
            return None;
        }
        Some(self.entry_changed(pos, None))
    }

    fn entry_changed(&mut self, pos: CellPosition, letter: Option<char>) -> EntryChange {
        self.file_state.mark_dirty();
        // Marks from the last check no longer describe the grid
        self.report = None;

        if let Some(handler) = &self.on_text_changed {
            handler(pos, letter);
        }
        EntryChange { pos, letter }
    }

    pub fn check(&mut self) -> &CheckReport {
        let report = self.answers.check(&self.puzzle);
        tracing::info!(result = %report.summary(), "checked answers");
        self.file_state.mark_clean();
        self.report.insert(report)
    }

    pub fn clear(&mut self) {
        self.answers.clear_all();
        self.report = None;
        self.file_state.mark_clean();
    }

    /// Load the puzzle at `path` and start over on it. On failure the current puzzle and its
    /// entries are left untouched.
    pub fn open(&mut self, path: PathBuf) -> Result<(), PuzzleError> {
        let puzzle = Puzzle::load_from_file(&path)?;
        self.replace_puzzle(puzzle, Some(path));
        Ok(())
    }

    pub fn replace_puzzle(&mut self, puzzle: Puzzle, path: Option<PathBuf>) {
        if !self.answers.is_empty() {
            tracing::info!(
                entries = self.answers.entries().len(),
                "discarding entries from previous puzzle"
            );
        }
        self.selected = puzzle.first_active().unwrap_or(CellPosition::new(0, 0));
        self.direction = Direction::Across;
        self.puzzle = puzzle;
        self.answers.clear_all();
        self.report = None;
        self.file_state = FileState::new(path);
    }
}
