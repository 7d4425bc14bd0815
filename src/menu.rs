use gpui::*;

use crate::grid::{CheckAnswers, ClearAnswers, OpenPuzzle, Quit, ToggleDirection};

/// Set up the application menu bar
pub fn setup_menu(cx: &mut App) {
    cx.set_menus(vec![
        Menu {
            name: "Crossword".into(),
            items: vec![
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: vec![
                MenuItem::action("Open Puzzle...", OpenPuzzle),
            ],
        },
        Menu {
            name: "Puzzle".into(),
            items: vec![
                MenuItem::action("Check Answers", CheckAnswers),
                MenuItem::action("Clear Answers", ClearAnswers),
                MenuItem::separator(),
                MenuItem::action("Toggle Direction", ToggleDirection),
            ],
        },
    ]);
}
