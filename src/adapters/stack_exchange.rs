//! Stack Exchange API search client.
//!
//! Implements [`QuestionSearch`] on top of any [`HttpClient`] by calling
//! `GET {base}/search/advanced` with the query, the target site, and newest
//! first ordering.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::{NetworkError, SearchFailure};
use crate::models::SearchResponse;
use crate::traits::{Headers, HttpClient, QuestionSearch, Response};

/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.stackexchange.com/2.3";
/// Community searched when none is configured.
pub const DEFAULT_SITE: &str = "stackoverflow";

const SEARCH_PATH: &str = "search/advanced";
const ORDER: &str = "desc";
const SORT: &str = "creation";

/// Error body the API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_message: Option<String>,
    error_name: Option<String>,
}

/// Client for the Stack Exchange `search/advanced` endpoint.
#[derive(Debug, Clone)]
pub struct StackExchangeClient<C = ReqwestHttpClient> {
    http: C,
    base_url: String,
    site: String,
}

impl<C: HttpClient> StackExchangeClient<C> {
    /// Client against the public API and Stack Overflow.
    pub fn new(http: C) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            site: DEFAULT_SITE.to_string(),
        }
    }

    /// Override the API root (used against mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search a different Stack Exchange community.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    /// Full request URL for a query.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/{}?q={}&site={}&order={}&sort={}",
            self.base_url.trim_end_matches('/'),
            SEARCH_PATH,
            urlencoding::encode(query),
            urlencoding::encode(&self.site),
            ORDER,
            SORT
        )
    }

    async fn fetch(&self, query: &str) -> Result<SearchResponse, NetworkError> {
        let url = self.search_url(query);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(response.json::<SearchResponse>()?)
    }
}

/// Build the error for a non-2xx response, preferring the API's own message.
fn status_error(response: &Response) -> NetworkError {
    let body = response.text().unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api) => NetworkError::from_status(
            response.status,
            api.error_message.unwrap_or(body),
            api.error_name.as_deref(),
        ),
        Err(_) => {
            let message = if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body
            };
            NetworkError::from_status(response.status, message, None)
        }
    }
}

#[async_trait]
impl<C: HttpClient> QuestionSearch for StackExchangeClient<C> {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchFailure> {
        debug!(site = %self.site, "Searching questions for {:?}", query);

        match self.fetch(query).await {
            Ok(response) => {
                info!("Search for {:?} returned {} questions", query, response.items.len());
                Ok(response)
            }
            Err(err) => {
                warn!(code = err.error_code(), "Search for {:?} failed: {}", query, err);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    const BODY: &str = r#"{"items":[
        {"title":"First","owner":{"display_name":"a"},"creation_date":1,"link":"https://stackoverflow.com/q/1"},
        {"title":"Second","owner":{"display_name":"b"},"creation_date":2,"link":"https://stackoverflow.com/q/2"}
    ],"has_more":false}"#;

    fn client(http: &MockHttpClient) -> StackExchangeClient<MockHttpClient> {
        StackExchangeClient::new(http.clone())
    }

    #[test]
    fn test_search_url_defaults() {
        let client = client(&MockHttpClient::new());
        assert_eq!(
            client.search_url("tokio select"),
            "https://api.stackexchange.com/2.3/search/advanced?q=tokio%20select&site=stackoverflow&order=desc&sort=creation"
        );
    }

    #[test]
    fn test_search_url_custom_base_and_site() {
        let client = client(&MockHttpClient::new())
            .with_base_url("http://127.0.0.1:8080/")
            .with_site("superuser");
        assert_eq!(
            client.search_url("c++ & rust"),
            "http://127.0.0.1:8080/search/advanced?q=c%2B%2B%20%26%20rust&site=superuser&order=desc&sort=creation"
        );
    }

    #[tokio::test]
    async fn test_search_success_preserves_order() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, BODY));

        let response = client(&http).search("rust").await.unwrap();
        let titles: Vec<_> = response.items.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("q=rust"));
    }

    #[tokio::test]
    async fn test_search_status_error_uses_api_message() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(
            400,
            r#"{"error_id":400,"error_message":"site is required","error_name":"bad_parameter"}"#,
        ));

        let err = client(&http).search("rust").await.unwrap_err();
        assert_eq!(err.message(), "HTTP 400 error: site is required");
        assert_eq!(err.code(), "E_NET_HTTP");
    }

    #[tokio::test]
    async fn test_search_throttled() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(
            502,
            r#"{"error_id":502,"error_message":"too many requests from this IP","error_name":"throttle_violation"}"#,
        ));

        let err = client(&http).search("rust").await.unwrap_err();
        assert_eq!(err.code(), "E_NET_RATE");
    }

    #[tokio::test]
    async fn test_search_status_error_plain_body() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(503, ""));

        let err = client(&http).search("rust").await.unwrap_err();
        assert_eq!(err.message(), "HTTP 503 error: Unknown error");
    }

    #[tokio::test]
    async fn test_search_malformed_payload() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, "<html>oops</html>"));

        let err = client(&http).search("rust").await.unwrap_err();
        assert_eq!(err.code(), "E_NET_INVALID");
        assert!(err.message().starts_with("Invalid response: "));
    }

    #[tokio::test]
    async fn test_search_transport_error() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "connection refused".into(),
        )));

        let err = client(&http).search("rust").await.unwrap_err();
        assert_eq!(err.code(), "E_NET_CONN");
        assert!(err.message().contains("connection refused"));
    }
}
