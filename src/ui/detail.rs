//! Modal sheet showing one question.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_LINK};
use crate::app::DetailSheet;

pub fn render_detail(frame: &mut Frame, area: Rect, sheet: &DetailSheet) {
    let width = (area.width / 5 * 4).max(40);
    let rect = centered_rect(area, width, 10);
    let question = &sheet.question;

    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(" Question ")
        .title_bottom(Line::from(" o/Enter: open in browser  Esc: close ").right_aligned());

    let lines = vec![
        Line::from(Span::styled(
            question.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Author : {}", question.owner_display_name())),
        Line::from(format!("Created : {}", question.created_on())),
        Line::default(),
        Line::from(Span::styled(
            question.link.clone(),
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            "Opens in your default browser",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
