//! Search view-state coordinator.
//!
//! [`SearchCoordinator`] owns the four values the search screen renders
//! (`results`, `error_message`, `loading`, `connected`) and is the only thing
//! that writes them. Searches run as tokio tasks; their outcomes come back over
//! an outcome queue and are applied on the owner's loop, so every write happens
//! from one place.
//!
//! ```text
//! search_questions(q) ──validate──► rejected: error_message, results = []
//!        │
//!        ▼ loading = true
//!   tokio::spawn(search(q)) ──► SearchOutcome ──► apply_outcome
//!                                               ├─ Ok:  results, loading = false
//!                                               └─ Err: "Error: ..", results = [], loading = false
//! ```
//!
//! Overlapping searches are neither cancelled nor fenced: the outcome applied
//! last wins.

mod channel;
mod state;
mod validation;

pub use channel::Channel;
pub use state::{Display, ViewState};
pub use validation::{
    validate_query, EMPTY_QUERY_MESSAGE, MIN_QUERY_CHARS, ONE_CHAR_MESSAGE, TWO_CHAR_MESSAGE,
};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::SearchFailure;
use crate::models::{Question, SearchResponse};
use crate::traits::QuestionSearch;

/// Prefix put in front of a failure's message.
pub const ERROR_PREFIX: &str = "Error:";

/// A finished search, waiting to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub result: Result<SearchResponse, SearchFailure>,
}

/// Owner of the search screen's observable state.
pub struct SearchCoordinator {
    search: Arc<dyn QuestionSearch>,
    results: Channel<Vec<Question>>,
    error_message: Channel<String>,
    loading: Channel<bool>,
    connected: Channel<bool>,
    outcome_tx: Option<mpsc::UnboundedSender<SearchOutcome>>,
    outcome_rx: mpsc::UnboundedReceiver<SearchOutcome>,
    tasks: Vec<JoinHandle<()>>,
    shut_down: bool,
}

impl SearchCoordinator {
    pub fn new(search: Arc<dyn QuestionSearch>) -> Self {
        let defaults = ViewState::default();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            search,
            results: Channel::new(defaults.results),
            error_message: Channel::new(defaults.error_message),
            loading: Channel::new(defaults.loading),
            connected: Channel::new(defaults.connected),
            outcome_tx: Some(outcome_tx),
            outcome_rx,
            tasks: Vec::new(),
            shut_down: false,
        }
    }

    pub fn results(&self) -> &Channel<Vec<Question>> {
        &self.results
    }

    pub fn error_message(&self) -> &Channel<String> {
        &self.error_message
    }

    pub fn loading(&self) -> &Channel<bool> {
        &self.loading
    }

    pub fn connected(&self) -> &Channel<bool> {
        &self.connected
    }

    /// Copy of all four values.
    pub fn snapshot(&self) -> ViewState {
        ViewState {
            results: self.results.get(),
            error_message: self.error_message.get(),
            loading: self.loading.get(),
            connected: self.connected.get(),
        }
    }

    /// Validate `query` and, if long enough, start a search for it.
    ///
    /// Returns immediately. Must be called from within a tokio runtime.
    pub fn search_questions(&mut self, query: &str) {
        if self.shut_down {
            debug!("Ignoring search for {:?} after shutdown", query);
            return;
        }

        if let Err(message) = validate_query(query) {
            debug!("Rejected query {:?}: {}", query, message);
            self.error_message.set(message.to_string());
            self.results.set(Vec::new());
            return;
        }

        let Some(tx) = self.outcome_tx.clone() else {
            return;
        };

        self.loading.set(true);
        self.error_message.set(String::new());

        let search = Arc::clone(&self.search);
        let query = query.to_string();
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(async move {
            let result = search.search(&query).await;
            // The receiver is gone only after shutdown.
            let _ = tx.send(SearchOutcome { query, result });
        }));
    }

    /// Overwrite the connectivity flag.
    pub fn set_connection_status(&mut self, connected: bool) {
        if self.connected.set(connected) {
            info!("Connection status changed: connected={}", connected);
        }
    }

    /// Wait for the next finished search.
    ///
    /// Pends forever once shut down, so it can sit in a `select!` safely.
    pub async fn recv_outcome(&mut self) -> Option<SearchOutcome> {
        if self.shut_down {
            return std::future::pending().await;
        }
        self.outcome_rx.recv().await
    }

    /// Reduce a finished search into the channels.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) {
        if self.shut_down {
            debug!("Discarding outcome for {:?} after shutdown", outcome.query);
            return;
        }

        match outcome.result {
            Ok(response) => {
                debug!(
                    "Applying {} results for {:?}",
                    response.items.len(),
                    outcome.query
                );
                self.results.set(response.items);
                self.loading.set(false);
            }
            Err(failure) => {
                warn!(
                    code = failure.code(),
                    "Search for {:?} failed: {}", outcome.query, failure
                );
                self.error_message
                    .set(format!("{} {}", ERROR_PREFIX, failure.message()));
                self.loading.set(false);
                self.results.set(Vec::new());
            }
        }
    }

    /// Wait for the next finished search and apply it.
    ///
    /// Returns `false` when nothing more can arrive.
    pub async fn settle_next(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        match self.outcome_rx.recv().await {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Searches started but not yet finished.
    pub fn pending_searches(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Abort outstanding searches and stop accepting outcomes.
    ///
    /// Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        let aborted = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        self.outcome_tx = None;
        self.outcome_rx.close();
        info!("Search coordinator shut down ({} tasks aborted)", aborted);
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for SearchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCoordinator")
            .field("state", &self.snapshot())
            .field("tasks", &self.tasks.len())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}
