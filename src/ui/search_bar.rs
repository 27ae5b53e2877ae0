//! Query input with its "Search" title.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::SearchInput;

pub const PLACEHOLDER: &str = "Search Stack Overflow...";
pub const SEARCH_LABEL: &str = "Search";

/// Draw the input. The cursor is shown only when typing is possible.
pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    input: &SearchInput,
    enabled: bool,
    focused: bool,
) {
    let border = if enabled && focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::bordered()
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", SEARCH_LABEL))
        .title_bottom(Line::from(" Enter ").right_aligned());

    let content = if input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let style = if enabled {
            Style::default()
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Line::from(Span::styled(input.text(), style))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if enabled && focused && inner.width > 0 {
        let column = input.cursor_column().min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + column, inner.y));
    }
}
