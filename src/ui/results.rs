//! Results area: error, spinner or the question list.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SPINNER};
use crate::coordinator::Display;
use crate::models::Question;

pub const EMPTY_HINT: &str = "Type three or more characters and press Enter";
pub const LOADING_TEXT: &str = "Searching...";

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    display: Display<'_>,
    selected: Option<usize>,
    spinner_frame: usize,
) {
    match display {
        Display::Error(message) => render_error(frame, area, message),
        Display::Loading => render_loading(frame, area, spinner_frame),
        Display::Results([]) => render_empty(frame, area),
        Display::Results(questions) => render_list(frame, area, questions, selected),
    }
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(COLOR_ERROR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_rect(area, area.width, 3));
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let line = Line::from(vec![
        Span::styled(spinner(spinner_frame), Style::default().fg(COLOR_SPINNER)),
        Span::raw(" "),
        Span::raw(LOADING_TEXT),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_rect(area, area.width, 1),
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("⌕").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(EMPTY_HINT).style(Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area, area.width, 2),
    );
}

/// Three lines per question: title, author, creation date.
pub fn question_item(question: &Question, width: usize) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate_to_width(&question.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Author : {}", question.owner_display_name())),
        Line::from(Span::styled(
            format!("Created : {}", question.created_on()),
            Style::default().fg(COLOR_DIM),
        )),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, questions: &[Question], selected: Option<usize>) {
    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" Results ({}) ", questions.len()));
    let width = block.inner(area).width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = questions.iter().map(|q| question_item(q, width)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
