pub mod diff_utils;
pub mod footer;
pub mod highlight_line;
pub mod render_ui;
pub mod side_by_side_diff;
pub mod unified_diff;

use ratatui::style::Color;

pub const ADDED_BG: Color = Color::Rgb(0, 100, 0);
pub const ADDED_HIGHLIGHT_BG: Color = Color::Rgb(0, 60, 0);
pub const REMOVED_BG: Color = Color::Rgb(139, 0, 0);
pub const REMOVED_HIGHLIGHT_BG: Color = Color::Rgb(80, 0, 0);
pub const MODIFIED_BG: Color = Color::Rgb(110, 90, 0);
pub const MODIFIED_HIGHLIGHT_BG: Color = Color::Rgb(160, 130, 0);
pub const FILLER_BG: Color = Color::Rgb(40, 40, 40);
