use gpui::*;

use crossword::assets::Assets;
use crossword::config::LaunchConfig;
use crossword::grid::*;
use crossword::{logging, menu, Puzzle, PuzzleError, Theme};

fn load_puzzle(config: &LaunchConfig) -> Result<Puzzle, PuzzleError> {
    match &config.puzzle_path {
        Some(path) => Puzzle::load_from_file(path),
        None => Assets::sample_puzzle(),
    }
}

fn main() {
    logging::init();

    let config = LaunchConfig::from_env();
    let puzzle = match load_puzzle(&config) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            tracing::error!(error = %e, "failed to load puzzle");
            std::process::exit(1);
        }
    };

    Application::new()
        .with_assets(Assets)
        .run(move |cx| {
            // Initialize theme
            Theme::init(cx);

            // Set up menu bar
            menu::setup_menu(cx);

            // Register keybindings
            cx.bind_keys([
                // Navigation
                KeyBinding::new("up", MoveUp, Some("Crossword")),
                KeyBinding::new("down", MoveDown, Some("Crossword")),
                KeyBinding::new("left", MoveLeft, Some("Crossword")),
                KeyBinding::new("right", MoveRight, Some("Crossword")),
                KeyBinding::new("space", ToggleDirection, Some("Crossword")),
                KeyBinding::new("tab", ToggleDirection, Some("Crossword")),

                // Entry
                KeyBinding::new("backspace", Backspace, Some("Crossword")),
                KeyBinding::new("delete", Delete, Some("Crossword")),

                // Puzzle
                KeyBinding::new("cmd-enter", CheckAnswers, Some("Crossword")),
                KeyBinding::new("ctrl-enter", CheckAnswers, Some("Crossword")),
                KeyBinding::new("cmd-shift-backspace", ClearAnswers, Some("Crossword")),
                KeyBinding::new("cmd-o", OpenPuzzle, Some("Crossword")),

                // Global
                KeyBinding::new("cmd-q", Quit, None),
            ]);

            // Register quit action
            cx.on_action::<Quit>(|_, cx| {
                cx.quit();
            });

            let (width, height) = window_size(puzzle.rows(), puzzle.cols());
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    size(px(width), px(height)),
                    cx,
                ))),
                titlebar: Some(TitlebarOptions {
                    title: Some("Crossword Puzzle".into()),
                    appears_transparent: false,
                    ..Default::default()
                }),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                ..Default::default()
            };

            let path = config.puzzle_path.clone();
            let opened = cx.open_window(window_options, |window, cx| {
                cx.new(|cx| CrosswordApp::new(puzzle, path, window, cx))
            });
            if let Err(e) = opened {
                tracing::error!(error = %e, "failed to open window");
                cx.quit();
            }
        });
}
