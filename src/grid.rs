use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::answers::AnswerSheet;
use crate::puzzle::Puzzle;
use crate::session::PuzzleSession;
use crate::state::{CellPosition, Direction};
use crate::Theme;

pub const CELL_SIZE: f32 = 48.0;
pub const GRID_PADDING: f32 = 12.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const CLUE_BAR_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const FOOTER_HEIGHT: f32 = 24.0;
pub const CLUE_PANEL_WIDTH: f32 = 240.0;

// A phone-sized window is the smallest we open
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

// Cursor movement
actions!(
    navigation,
    [
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        ToggleDirection,
    ]
);

// Editing the selected square
actions!(entry, [Backspace, Delete]);

actions!(
    crossword,
    [
        CheckAnswers,
        ClearAnswers,
        OpenPuzzle,
        Quit,
    ]
);

/// Window size that fits the grid, the clue panel and the bars around them.
pub fn window_size(rows: usize, cols: usize) -> (f32, f32) {
    let width = GRID_PADDING * 2.0 + cols as f32 * CELL_SIZE + CLUE_PANEL_WIDTH;
    let height = HEADER_HEIGHT
        + CLUE_BAR_HEIGHT
        + GRID_PADDING * 3.0
        + rows as f32 * CELL_SIZE
        + BUTTON_HEIGHT
        + FOOTER_HEIGHT;
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

/// Root view of the crossword window
pub struct CrosswordApp {
    grid: Entity<CrosswordGrid>,
}

impl CrosswordApp {
    pub fn new(puzzle: Puzzle, path: Option<PathBuf>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let grid = cx.new(|cx| CrosswordGrid::new(puzzle, path, cx));
        grid.update(cx, |grid, _cx| {
            grid.set_text_changed_handler(|pos, letter| {
                tracing::debug!(%pos, ?letter, "entry changed");
            });
        });

        let focus_handle = grid.focus_handle(cx);
        focus_handle.focus(window);
        Self { grid }
    }
}

impl Render for CrosswordApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.base)
            .text_color(theme.text)
            .child(self.grid.clone())
    }
}

/// The crossword grid with its clue bar, clue lists and check button
pub struct CrosswordGrid {
    focus_handle: FocusHandle,
    session: PuzzleSession,
}

impl CrosswordGrid {
    pub fn new(puzzle: Puzzle, path: Option<PathBuf>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            session: PuzzleSession::new(puzzle, path),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.session.puzzle()
    }

    /// Letters entered so far, keyed by position.
    pub fn answers(&self) -> &AnswerSheet {
        self.session.answers()
    }

    /// Register a callback run after every entry change.
    pub fn set_text_changed_handler<F>(&mut self, handler: F)
    where
        F: Fn(CellPosition, Option<char>) + 'static,
    {
        self.session.set_text_changed_handler(handler);
    }

    fn move_up(&mut self, _: &MoveUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.move_selection(Direction::Down, false);
        cx.notify();
    }

    fn move_down(&mut self, _: &MoveDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.move_selection(Direction::Down, true);
        cx.notify();
    }

    fn move_left(&mut self, _: &MoveLeft, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.move_selection(Direction::Across, false);
        cx.notify();
    }

    fn move_right(&mut self, _: &MoveRight, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.move_selection(Direction::Across, true);
        cx.notify();
    }

    fn toggle_direction(&mut self, _: &ToggleDirection, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.toggle_direction();
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let modifiers = &event.keystroke.modifiers;
        if modifiers.control || modifiers.platform || modifiers.alt {
            return;
        }
        // Named keys (arrows, backspace) carry no key_char
        let Some(text) = event.keystroke.key_char.as_deref() else {
            return;
        };
        if self.session.type_letter(text).is_some() {
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn backspace(&mut self, _: &Backspace, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.backspace();
        cx.notify();
    }

    fn delete(&mut self, _: &Delete, _window: &mut Window, cx: &mut Context<Self>) {
        if self.session.delete().is_some() {
            cx.notify();
        }
    }

    fn check_answers(&mut self, _: &CheckAnswers, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.check();
        cx.notify();
    }

    fn clear_answers(&mut self, _: &ClearAnswers, _window: &mut Window, cx: &mut Context<Self>) {
        self.session.clear();
        cx.notify();
    }

    fn open_puzzle(&mut self, _: &OpenPuzzle, window: &mut Window, cx: &mut Context<Self>) {
        let path = rfd::FileDialog::new()
            .add_filter("Crossword Puzzle", &["json"])
            .add_filter("All Files", &["*"])
            .pick_file();

        if let Some(path) = path {
            self.load_puzzle(path, cx);
        }

        self.focus_handle.focus(window);
    }

    fn load_puzzle(&mut self, path: PathBuf, cx: &mut Context<Self>) {
        let display_path = path.display().to_string();
        match self.session.open(path) {
            Ok(()) => cx.notify(),
            Err(e) => {
                tracing::error!(path = %display_path, error = %e, "failed to open puzzle");
            }
        }
    }

    fn on_cell_click(&mut self, pos: CellPosition, window: &mut Window, cx: &mut Context<Self>) {
        if !self.session.select(pos) {
            return;
        }
        self.focus_handle.focus(window);
        cx.notify();
    }

    fn on_clue_click(&mut self, number: i64, direction: Direction, window: &mut Window, cx: &mut Context<Self>) {
        self.session.select_clue(number, direction);
        self.focus_handle.focus(window);
        cx.notify();
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let dirty_indicator = if self.session.file_state().is_dirty { " [+]" } else { "" };

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(HEADER_HEIGHT))
            .bg(theme.mantle)
            .border_b_1()
            .border_color(theme.border)
            .items_center()
            .justify_between()
            .px(px(8.))
            .child(
                div()
                    .text_size(px(16.))
                    .font_weight(FontWeight::BOLD)
                    .child("Crossword Puzzle")
            )
            .child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.subtext)
                    .child(format!("{}{}", self.session.file_state().file_name(), dirty_indicator))
            )
    }

    fn render_clue_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let direction = self.session.direction();
        let clue = self.session.current_clue_number(direction).map(|number| {
            let text = self.session.puzzle().clue(number, direction).unwrap_or("");
            format!("{}{}  {}", number, direction.suffix(), text)
        });

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(CLUE_BAR_HEIGHT))
            .bg(theme.word_highlight)
            .border_b_1()
            .border_color(theme.border)
            .items_center()
            .px(px(8.))
            .text_size(px(14.))
            .overflow_hidden()
            .child(clue.unwrap_or_default())
    }

    fn render_grid(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let cx: &Context<Self> = cx;
        let word = self.session.puzzle().word_cells(self.session.selected(), self.session.direction());

        div()
            .flex()
            .flex_col()
            .flex_none()
            .p(px(GRID_PADDING))
            .children((0..self.session.puzzle().rows()).map(|row| {
                div()
                    .flex()
                    .flex_row()
                    .children(
                        (0..self.session.puzzle().cols())
                            .map(|col| self.render_cell(CellPosition::new(row, col), &word, cx)),
                    )
            }))
    }

    fn render_cell(&self, pos: CellPosition, word: &[CellPosition], cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let cell = self.session.puzzle().cell(pos);
        let is_active = cell.is_some_and(|c| c.is_active);
        let number = cell.and_then(|c| c.number);
        let is_selected = is_active && pos == self.session.selected();
        let is_wrong = self.session.report().is_some_and(|r| r.is_incorrect(pos));
        let entry = self.session.answers().get(pos).filter(|_| is_active);

        let background = if !is_active {
            theme.block
        } else if word.contains(&pos) {
            theme.word_highlight
        } else {
            theme.paper
        };

        div()
            .id(ElementId::Name(format!("cell-{}-{}", pos.row, pos.col).into()))
            .relative()
            .w(px(CELL_SIZE))
            .h(px(CELL_SIZE))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .bg(background)
            .border_1()
            .border_color(theme.border)
            .when(is_selected, |d| d.border_2().border_color(theme.accent))
            .when_some(number, |d, number| {
                d.child(
                    div()
                        .absolute()
                        .top(px(2.))
                        .left(px(3.))
                        .text_size(px(10.))
                        .text_color(if is_active { theme.ink } else { theme.paper })
                        .child(number.to_string())
                )
            })
            .when_some(entry, |d, letter| {
                d.child(
                    div()
                        .text_size(px(24.))
                        .font_weight(FontWeight::BOLD)
                        .text_color(if is_wrong { theme.error } else { theme.ink })
                        .child(letter.to_string())
                )
            })
            .on_mouse_down(MouseButton::Left, {
                let entity = cx.entity().clone();
                move |_, window, app| {
                    entity.update(app, |this, cx| {
                        this.on_cell_click(pos, window, cx);
                    });
                }
            })
    }

    fn render_clue_lists(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let cx: &Context<Self> = cx;
        let theme = cx.global::<Theme>();

        div()
            .id("clue-lists")
            .flex()
            .flex_col()
            .flex_1()
            .min_w(px(CLUE_PANEL_WIDTH))
            .p(px(GRID_PADDING))
            .gap(px(12.))
            .overflow_y_scroll()
            .text_size(px(13.))
            .children([Direction::Across, Direction::Down].into_iter().map(|direction| {
                let current = self.session.current_clue_number(direction);
                let is_current_direction = direction == self.session.direction();

                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.))
                    .child(
                        div()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.subtext)
                            .child(match direction {
                                Direction::Across => "Across",
                                Direction::Down => "Down",
                            })
                    )
                    .children(self.session.puzzle().clues(direction).iter().map(|(&number, text)| {
                        let is_current = current == Some(number);

                        div()
                            .id(ElementId::Name(format!("clue-{}-{}", direction, number).into()))
                            .flex()
                            .flex_row()
                            .gap(px(6.))
                            .px(px(4.))
                            .rounded(px(3.))
                            .cursor_pointer()
                            .when(is_current, |d| {
                                d.bg(if is_current_direction { theme.word_highlight } else { theme.mantle })
                            })
                            .on_mouse_down(MouseButton::Left, {
                                let entity = cx.entity().clone();
                                move |_, window, app| {
                                    entity.update(app, |this, cx| {
                                        this.on_clue_click(number, direction, window, cx);
                                    });
                                }
                            })
                            .child(
                                div()
                                    .font_weight(FontWeight::BOLD)
                                    .child(number.to_string())
                            )
                            .child(text.clone())
                    }))
            }))
    }

    fn render_check_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_row()
            .w_full()
            .px(px(GRID_PADDING))
            .pb(px(GRID_PADDING))
            .child(
                div()
                    .id("check-answers")
                    .flex()
                    .flex_1()
                    .h(px(BUTTON_HEIGHT))
                    .items_center()
                    .justify_center()
                    .bg(theme.accent)
                    .text_color(theme.paper)
                    .rounded(px(4.))
                    .cursor_pointer()
                    .font_weight(FontWeight::BOLD)
                    .on_mouse_down(MouseButton::Left, |_, window, app| {
                        window.dispatch_action(Box::new(CheckAnswers), app);
                    })
                    .child("Check Answers")
            )
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let direction_text = match self.session.direction() {
            Direction::Across => "-- ACROSS --",
            Direction::Down => "-- DOWN --",
        };
        let puzzle = self.session.puzzle();
        let total = puzzle.active_cells().count();
        let progress = format!("{}/{} filled", self.session.answers().filled_count(puzzle), total);

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(FOOTER_HEIGHT))
            .bg(theme.mantle)
            .border_t_1()
            .border_color(theme.border)
            .items_center()
            .justify_between()
            .px(px(8.))
            .text_size(px(12.))
            .text_color(theme.subtext)
            .child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .child(direction_text)
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(8.))
                    .when_some(self.session.report(), |d, report| {
                        d.child(
                            div()
                                .text_color(if report.is_solved() { theme.success } else { theme.error })
                                .child(report.summary())
                        )
                    })
                    .child(progress)
            )
    }
}

impl Render for CrosswordGrid {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .key_context("Crossword")
            .track_focus(&self.focus_handle)
            // Navigation
            .on_action(cx.listener(Self::move_up))
            .on_action(cx.listener(Self::move_down))
            .on_action(cx.listener(Self::move_left))
            .on_action(cx.listener(Self::move_right))
            .on_action(cx.listener(Self::toggle_direction))
            // Entry
            .on_action(cx.listener(Self::backspace))
            .on_action(cx.listener(Self::delete))
            .on_key_down(cx.listener(Self::on_key_down))
            // Puzzle
            .on_action(cx.listener(Self::check_answers))
            .on_action(cx.listener(Self::clear_answers))
            .on_action(cx.listener(Self::open_puzzle))
            .child(self.render_header(cx))
            .child(self.render_clue_bar(cx))
            .child(
                // Scrolls when an opened puzzle outgrows the window
                div()
                    .id("puzzle-area")
                    .flex()
                    .flex_row()
                    .flex_1()
                    .overflow_scroll()
                    .child(self.render_grid(cx))
                    .child(self.render_clue_lists(cx))
            )
            .child(self.render_check_button(cx))
            .child(self.render_footer(cx))
    }
}

impl Focusable for CrosswordGrid {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
