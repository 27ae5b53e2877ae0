//! UI rendering.
//!
//! One screen, top to bottom: connectivity banner, search bar, results area,
//! key hints. The detail sheet draws over everything when open.

mod banner;
mod detail;
mod helpers;
mod results;
mod search_bar;
mod theme;

pub use banner::{banner_text, CONNECTED_TEXT, DISCONNECTED_TEXT};
pub use helpers::{centered_rect, truncate_to_width, SPINNER_FRAMES};
pub use results::{question_item, EMPTY_HINT, LOADING_TEXT};
pub use search_bar::{PLACEHOLDER, SEARCH_LABEL};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CONNECTED, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const HINTS: &str = "Enter search  ↑/↓ select  Tab details  Ctrl+C quit";

/// Draw the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let view = app.view();
    let [banner_area, search_area, results_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    banner::render_banner(frame, banner_area, view.connected);
    search_bar::render_search_bar(
        frame,
        search_area,
        &app.input,
        view.connected,
        app.detail.is_none(),
    );
    results::render_results(
        frame,
        results_area,
        view.display(),
        app.selected,
        app.spinner_frame(),
    );
    render_footer(frame, footer_area, app);

    if let Some(sheet) = &app.detail {
        detail::render_detail(frame, frame.area(), sheet);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::raw(notice.text.as_str())),
        None => Line::from(Span::styled(HINTS, Style::default().fg(theme::COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
