//! Color theme constants.

use ratatui::style::Color;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Selected row and focused input
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text (author, date, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Connected banner background
pub const COLOR_CONNECTED: Color = Color::Rgb(4, 181, 117);

/// Disconnected banner background and error text
pub const COLOR_ERROR: Color = Color::Red;

/// Links in the detail sheet
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204);

/// Spinner while a search runs
pub const COLOR_SPINNER: Color = Color::LightGreen;
