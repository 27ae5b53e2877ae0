//! Connectivity banner.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_CONNECTED, COLOR_ERROR};

pub const CONNECTED_TEXT: &str = "Connected";
pub const DISCONNECTED_TEXT: &str = "No Wifi Connection";

pub fn banner_text(connected: bool) -> &'static str {
    if connected {
        CONNECTED_TEXT
    } else {
        DISCONNECTED_TEXT
    }
}

pub fn render_banner(frame: &mut Frame, area: Rect, connected: bool) {
    let background = if connected { COLOR_CONNECTED } else { COLOR_ERROR };
    let banner = Paragraph::new(banner_text(connected))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(background)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(banner, area);
}
