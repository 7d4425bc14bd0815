use gpui::*;

#[cfg(target_os = "macos")]
use objc2::rc::Retained;
#[cfg(target_os = "macos")]
use objc2_app_kit::NSColor;

/// Colours for the crossword window.
pub struct Theme {
    /// Window background and bars.
    pub base: Rgba,
    pub mantle: Rgba,
    pub border: Rgba,
    /// Foreground text on bars and clue lists.
    pub text: Rgba,
    pub subtext: Rgba,
    /// Letter squares.
    pub paper: Rgba,
    pub ink: Rgba,
    pub block: Rgba,
    /// Cells of the word under the cursor.
    pub word_highlight: Rgba,
    /// Letters marked wrong by the last check.
    pub error: Rgba,
    pub success: Rgba,
    pub accent: Rgba,
}

impl Global for Theme {}

/// Get the system accent color on macOS
#[cfg(target_os = "macos")]
fn get_system_accent_color() -> Rgba {
    let accent_color: Retained<NSColor> = NSColor::controlAccentColor();
    if let Some(rgb_color) = accent_color.colorUsingColorSpace(objc2_app_kit::NSColorSpace::sRGBColorSpace().as_ref()) {
        let r = rgb_color.redComponent() as f32;
        let g = rgb_color.greenComponent() as f32;
        let b = rgb_color.blueComponent() as f32;
        let a = rgb_color.alphaComponent() as f32;
        return rgba(
            ((r * 255.0) as u32) << 24
                | ((g * 255.0) as u32) << 16
                | ((b * 255.0) as u32) << 8
                | (a * 255.0) as u32,
        );
    }
    rgb(0x1e66f5)
}

#[cfg(not(target_os = "macos"))]
fn get_system_accent_color() -> Rgba {
    rgb(0x1e66f5)
}

impl Theme {
    pub fn init(app: &mut App) {
        app.set_global(Theme::get_newsprint());
    }

    // Black squares on white paper, Catppuccin Latte accents
    pub fn get_newsprint() -> Theme {
        Theme {
            base: rgb(0xeff1f5),
            mantle: rgb(0xe6e9ef),
            border: rgb(0x9ca0b0),
            text: rgb(0x4c4f69),
            subtext: rgb(0x6c6f85),
            paper: rgb(0xffffff),
            ink: rgb(0x11111b),
            block: rgb(0x11111b),
            word_highlight: rgb(0xdce6fb),
            error: rgb(0xd20f39),
            success: rgb(0x40a02b),
            accent: get_system_accent_color(),
        }
    }
}
