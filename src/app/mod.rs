//! Application state for the TUI.
//!
//! [`App`] owns the [`SearchCoordinator`] plus the purely visual state around
//! it: the query being typed, the selected result, the detail sheet and the
//! animation tick. It keeps a [`ViewState`] snapshot that the renderer reads,
//! refreshed after every coordinator write.

mod handlers;
mod input;
mod types;

pub use input::SearchInput;
pub use types::{DetailSheet, Notice};

use tracing::{info, warn};

use crate::connectivity::ConnectivityStatus;
use crate::coordinator::{SearchCoordinator, SearchOutcome, ViewState};
use crate::models::Question;

/// Opens a URL outside the terminal.
pub type LinkOpener = Box<dyn Fn(&str) -> std::io::Result<()> + Send>;

/// Ticks a notice stays visible (about three seconds at 16ms per tick).
const NOTICE_TICKS: u64 = 180;
/// Ticks per spinner frame.
const SPINNER_TICKS: u64 = 6;

pub struct App {
    coordinator: SearchCoordinator,
    view: ViewState,
    pub input: SearchInput,
    pub selected: Option<usize>,
    pub detail: Option<DetailSheet>,
    pub notice: Option<Notice>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
    pub should_quit: bool,
    open_link: LinkOpener,
}

impl App {
    /// App that opens links with the system browser.
    pub fn new(coordinator: SearchCoordinator) -> Self {
        Self::with_link_opener(coordinator, Box::new(|url: &str| open::that(url)))
    }

    pub fn with_link_opener(coordinator: SearchCoordinator, open_link: LinkOpener) -> Self {
        let view = coordinator.snapshot();
        Self {
            coordinator,
            view,
            input: SearchInput::new(),
            selected: None,
            detail: None,
            notice: None,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            open_link,
        }
    }

    /// State as of the last coordinator write.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn coordinator(&self) -> &SearchCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut SearchCoordinator {
        &mut self.coordinator
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Search for the current input. Ignored while disconnected.
    pub fn submit_search(&mut self) {
        if !self.view.connected {
            return;
        }
        let query = self.input.text().to_string();
        self.coordinator.search_questions(&query);
        self.refresh_view();
    }

    pub fn handle_outcome(&mut self, outcome: SearchOutcome) {
        self.coordinator.apply_outcome(outcome);
        self.refresh_view();
    }

    pub fn handle_connectivity(&mut self, status: ConnectivityStatus) {
        info!("Connectivity: {}", status);
        self.coordinator
            .set_connection_status(status.is_available());
        self.refresh_view();
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.selected.and_then(|i| self.view.results.get(i))
    }

    pub fn select_next(&mut self) {
        let len = self.view.results.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
        self.mark_dirty();
    }

    pub fn select_previous(&mut self) {
        if self.view.results.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        self.mark_dirty();
    }

    /// Show the selected question in the detail sheet.
    pub fn open_detail(&mut self) {
        if let Some(question) = self.selected_question().cloned() {
            self.detail = Some(DetailSheet::new(question));
            self.mark_dirty();
        }
    }

    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Hand the detail sheet's link to the browser.
    pub fn open_detail_link(&mut self) {
        let Some(link) = self.detail.as_ref().map(|d| d.question.link.clone()) else {
            return;
        };
        match (self.open_link)(&link) {
            Ok(()) => {
                info!("Opened {}", link);
                self.set_notice(format!("Opened {}", link));
            }
            Err(err) => {
                warn!("Failed to open {}: {}", link, err);
                self.set_notice(format!("Could not open link: {}", err));
            }
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: self.tick_count + NOTICE_TICKS,
        });
        self.mark_dirty();
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.view.loading && self.tick_count % SPINNER_TICKS == 0 {
            self.mark_dirty();
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|n| self.tick_count >= n.expires_at)
        {
            self.notice = None;
            self.mark_dirty();
        }
    }

    /// Spinner frame index for the current tick.
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS) as usize
    }

    /// Abort outstanding searches.
    pub fn shutdown(&mut self) {
        self.coordinator.shutdown();
    }

    fn refresh_view(&mut self) {
        let next = self.coordinator.snapshot();
        if next == self.view {
            return;
        }
        if next.results != self.view.results {
            self.selected = if next.results.is_empty() { None } else { Some(0) };
        }
        self.view = next;
        self.mark_dirty();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view)
            .field("input", &self.input)
            .field("selected", &self.selected)
            .field("detail", &self.detail)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockQuestionSearch, MockSearchResult};
    use crate::models::SearchResponse;
    use std::sync::{Arc, Mutex};

    fn questions() -> Vec<Question> {
        vec![
            Question::new("First", "alice", 1, "https://stackoverflow.com/q/1"),
            Question::new("Second", "bob", 2, "https://stackoverflow.com/q/2"),
        ]
    }

    fn app_with(search: &MockQuestionSearch) -> (App, Arc<Mutex<Vec<String>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let app = App::with_link_opener(
            SearchCoordinator::new(Arc::new(search.clone())),
            Box::new(move |url: &str| {
                sink.lock().unwrap().push(url.to_string());
                Ok(())
            }),
        );
        (app, opened)
    }

    async fn settle(app: &mut App) {
        let outcome = app.coordinator_mut().recv_outcome().await.unwrap();
        app.handle_outcome(outcome);
    }

    #[tokio::test]
    async fn test_results_select_first() {
        let search = MockQuestionSearch::new();
        search.set_default_result(MockSearchResult::Success(SearchResponse::new(questions())));
        let (mut app, _) = app_with(&search);

        app.input.insert_str("rust");
        app.submit_search();
        assert!(app.view().loading);

        settle(&mut app).await;
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.selected_question().unwrap().title, "First");
    }

    #[tokio::test]
    async fn test_selection_clamps() {
        let search = MockQuestionSearch::new();
        search.set_default_result(MockSearchResult::Success(SearchResponse::new(questions())));
        let (mut app, _) = app_with(&search);
        app.input.insert_str("rust");
        app.submit_search();
        settle(&mut app).await;

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, Some(1));
        app.select_previous();
        app.select_previous();
        assert_eq!(app.selected, Some(0));
    }

    #[tokio::test]
    async fn test_submit_ignored_while_disconnected() {
        let search = MockQuestionSearch::new();
        let (mut app, _) = app_with(&search);
        app.handle_connectivity(ConnectivityStatus::Lost);
        assert!(!app.view().connected);

        app.input.insert_str("rust");
        app.submit_search();
        tokio::task::yield_now().await;

        assert!(!app.view().loading);
        assert!(search.calls().is_empty());
    }

    #[tokio::test]
    async fn test_losing_counts_as_disconnected() {
        let (mut app, _) = app_with(&MockQuestionSearch::new());
        app.handle_connectivity(ConnectivityStatus::Losing);
        assert!(!app.view().connected);
        app.handle_connectivity(ConnectivityStatus::Available);
        assert!(app.view().connected);
    }

    #[tokio::test]
    async fn test_detail_opens_link() {
        let search = MockQuestionSearch::new();
        search.set_default_result(MockSearchResult::Success(SearchResponse::new(questions())));
        let (mut app, opened) = app_with(&search);
        app.input.insert_str("rust");
        app.submit_search();
        settle(&mut app).await;

        app.select_next();
        app.open_detail();
        assert_eq!(app.detail.as_ref().unwrap().question.title, "Second");

        app.open_detail_link();
        assert_eq!(
            *opened.lock().unwrap(),
            vec!["https://stackoverflow.com/q/2".to_string()]
        );

        app.close_detail();
        assert!(app.detail.is_none());
    }

    #[tokio::test]
    async fn test_failed_open_sets_notice() {
        let mut app = App::with_link_opener(
            SearchCoordinator::new(Arc::new(MockQuestionSearch::new())),
            Box::new(|_: &str| Err(std::io::Error::other("no browser"))),
        );
        app.detail = Some(DetailSheet::new(questions().remove(0)));

        app.open_detail_link();
        assert!(app.notice.as_ref().unwrap().text.contains("no browser"));

        for _ in 0..NOTICE_TICKS {
            app.tick();
        }
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_open_detail_without_selection() {
        let (mut app, _) = app_with(&MockQuestionSearch::new());
        app.open_detail();
        assert!(app.detail.is_none());
    }
}
