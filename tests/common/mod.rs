//! Shared fixtures for integration tests.

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use stackq::adapters::mock::{MockQuestionSearch, MockSearchResult};
use stackq::app::App;
use stackq::coordinator::SearchCoordinator;
use stackq::models::{Question, SearchResponse};

/// 2025-04-11T20:01:12Z
pub const SAMPLE_CREATION_DATE: i64 = 1_744_401_672;

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            "How do I cancel a tokio task?",
            "ferris",
            SAMPLE_CREATION_DATE,
            "https://stackoverflow.com/questions/1/cancel-tokio-task",
        ),
        Question::new(
            "Borrowed value does not live long enough",
            "crab",
            SAMPLE_CREATION_DATE - 86_400,
            "https://stackoverflow.com/questions/2/borrowed-value",
        ),
    ]
}

/// Mock search that answers every query with [`sample_questions`].
pub fn search_returning_samples() -> MockQuestionSearch {
    let search = MockQuestionSearch::new();
    search.set_default_result(MockSearchResult::Success(SearchResponse::new(
        sample_questions(),
    )));
    search
}

pub fn coordinator_for(search: &MockQuestionSearch) -> SearchCoordinator {
    SearchCoordinator::new(Arc::new(search.clone()))
}

/// App whose link opener does nothing.
pub fn app_for(search: &MockQuestionSearch) -> App {
    App::with_link_opener(coordinator_for(search), Box::new(|_: &str| Ok(())))
}
