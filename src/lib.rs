//! Crossword puzzle player built on gpui.
//!
//! The puzzle model ([`puzzle`], [`file_io`]) and the answer sheet ([`answers`]) carry no UI
//! dependencies. [`session`] tracks the cursor and entries for one puzzle; [`grid`] renders it
//! and forwards key presses and clicks to it.

pub mod answers;
pub mod assets;
pub mod config;
pub mod file_io;
pub mod file_state;
pub mod grid;
pub mod logging;
pub mod menu;
pub mod puzzle;
pub mod session;
pub mod state;
pub mod theme;

pub use answers::{AnswerSheet, CheckReport};
pub use puzzle::{Cell, Puzzle, PuzzleError};
pub use session::{EntryChange, PuzzleSession};
pub use state::{CellPosition, Direction};
pub use theme::Theme;
