//! Question search abstraction.

use async_trait::async_trait;

use crate::error::SearchFailure;
use crate::models::SearchResponse;

/// A remote question search.
///
/// One call produces at most one response or one failure. Implementations do
/// not retry, cache, or paginate.
#[async_trait]
pub trait QuestionSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchFailure>;
}
