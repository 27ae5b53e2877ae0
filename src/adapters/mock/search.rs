//! Mock question search for coordinator tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::SearchFailure;
use crate::models::SearchResponse;
use crate::traits::QuestionSearch;

/// Configured outcome for a query.
#[derive(Debug, Clone)]
pub enum MockSearchResult {
    Success(SearchResponse),
    Failure(String),
}

/// Mock [`QuestionSearch`].
///
/// Outcomes are configured per query with a fallback default. A query can be
/// held so its call does not complete until [`release`](Self::release) is
/// called, which lets tests control the order overlapping searches settle in.
#[derive(Debug, Clone, Default)]
pub struct MockQuestionSearch {
    results: Arc<Mutex<HashMap<String, MockSearchResult>>>,
    default_result: Arc<Mutex<Option<MockSearchResult>>>,
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockQuestionSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_result(&self, query: &str, result: MockSearchResult) {
        self.results
            .lock()
            .unwrap()
            .insert(query.to_string(), result);
    }

    pub fn set_default_result(&self, result: MockSearchResult) {
        *self.default_result.lock().unwrap() = Some(result);
    }

    /// Make searches for `query` wait until released.
    pub fn hold(&self, query: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(query.to_string(), Arc::new(Notify::new()));
    }

    /// Let one held search for `query` complete.
    pub fn release(&self, query: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(query) {
            gate.notify_one();
        }
    }

    /// Queries searched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn result_for(&self, query: &str) -> Option<MockSearchResult> {
        if let Some(result) = self.results.lock().unwrap().get(query) {
            return Some(result.clone());
        }
        self.default_result.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSearch for MockQuestionSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchFailure> {
        self.calls.lock().unwrap().push(query.to_string());

        let gate = self.gates.lock().unwrap().get(query).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.result_for(query) {
            Some(MockSearchResult::Success(response)) => Ok(response),
            Some(MockSearchResult::Failure(message)) => Err(SearchFailure::new(message)),
            None => Err(SearchFailure::new(format!(
                "No mock result for query: {}",
                query
            ))),
        }
    }
}
