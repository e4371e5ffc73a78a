//! Region-filtered user lookup and the result area it renders into.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::client::DirectoryClient;
use crate::constants::ALL_REGIONS_LABEL;
use crate::error::{DirectoryError, Result};
use crate::render::{self, DateFormat};
use crate::types::QueryResult;

/// Output container for directory searches.
///
/// Each search claims a generation when it starts; only the newest
/// generation may write, so a slow response never overwrites a later one.
#[derive(Debug, Default)]
pub struct ResultArea {
    generation: AtomicU64,
    html: Mutex<String>,
}

impl ResultArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup.
    pub fn html(&self) -> String {
        self.html.lock().map(|html| html.clone()).unwrap_or_default()
    }

    /// Clear the area and return the generation owned by the caller.
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.replace(String::new());
        generation
    }

    /// Replace the content if `generation` is still the newest.
    fn commit(&self, generation: u64, html: String) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        self.replace(html);
        true
    }

    fn replace(&self, html: String) {
        if let Ok(mut current) = self.html.lock() {
            *current = html;
        }
    }
}

/// What a search produced.
#[derive(Debug)]
pub enum SearchResult {
    Users { label: String, result: QueryResult },
    Empty(QueryResult),
    Failed(DirectoryError),
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub result: SearchResult,
    /// A newer search started before this one finished; its output was
    /// dropped.
    pub stale: bool,
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.result, SearchResult::Failed(_))
    }
}

pub struct DirectoryQuery<'a> {
    client: &'a DirectoryClient,
    dates: DateFormat,
    area: ResultArea,
}

impl<'a> DirectoryQuery<'a> {
    pub fn new(client: &'a DirectoryClient, dates: DateFormat) -> Self {
        Self {
            client,
            dates,
            area: ResultArea::new(),
        }
    }

    pub fn area(&self) -> &ResultArea {
        &self.area
    }

    pub fn dates(&self) -> &DateFormat {
        &self.dates
    }

    /// Unfiltered search run when the page first loads.
    pub async fn load(&self) -> SearchOutcome {
        self.search("").await
    }

    /// Fetch users in `region` (all users when empty) and render them.
    pub async fn search(&self, region: &str) -> SearchOutcome {
        let generation = self.area.begin();

        let mut result = match self.client.list_users(region).await {
            Ok(result) if result.users.is_empty() => SearchResult::Empty(result),
            Ok(result) => SearchResult::Users {
                label: effective_label(region).to_string(),
                result,
            },
            Err(err) => {
                tracing::error!(error = %err, region, "user search failed");
                SearchResult::Failed(err)
            }
        };

        let html = match self.render(&result) {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(error = %err, "failed to render search result");
                result = SearchResult::Failed(err);
                // The plain error block only fails to render if the
                // templates themselves are broken; leave the area cleared.
                self.render(&result).unwrap_or_default()
            }
        };

        let stale = !self.area.commit(generation, html);
        if stale {
            tracing::debug!(region, generation, "dropping stale search result");
        }
        SearchOutcome { result, stale }
    }

    fn render(&self, result: &SearchResult) -> Result<String> {
        let html = match result {
            SearchResult::Users { label, result } => {
                let rows = render::rows(&result.users, &self.dates);
                render::users_html(result.count, label, &rows)?
            }
            SearchResult::Empty(_) => render::empty_html()?,
            SearchResult::Failed(DirectoryError::Request { status, .. }) => {
                render::error_html(&status.to_string())?
            }
            SearchResult::Failed(err) => render::error_html(&err.to_string())?,
        };
        Ok(html)
    }
}

fn effective_label(region: &str) -> &str {
    if region.is_empty() {
        ALL_REGIONS_LABEL
    } else {
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::Locale;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::parse_base_url;

    fn client_for(server: &MockServer) -> DirectoryClient {
        DirectoryClient::new(parse_base_url(&server.url("/api")).unwrap())
    }

    fn dates() -> DateFormat {
        DateFormat::new(Locale::en_US, true)
    }

    #[tokio::test]
    async fn load_requests_unfiltered_endpoint() {
        let server = MockServer::start_async().await;
        let filtered = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param_exists("region");
                then.status(200).json_body(json!({"count": 0, "users": []}));
            })
            .await;
        let unfiltered = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!({"count": 0, "users": []}));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        query.load().await;

        unfiltered.assert_async().await;
        filtered.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn search_sends_region_filter() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param("region", "Seoul");
                then.status(200).json_body(json!({"count": 0, "region": "Seoul", "users": []}));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        query.search("Seoul").await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_result_renders_message_not_table() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!({"count": 0, "region": "Ulsan", "users": []}));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        let outcome = query.search("Ulsan").await;

        assert!(matches!(outcome.result, SearchResult::Empty(_)));
        let html = query.area().html();
        assert!(html.contains("No users registered in this region."));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn two_users_render_two_rows_in_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!({
                    "success": true,
                    "count": 2,
                    "region": "all",
                    "users": [
                        {"id": 5, "name": "Seo", "region": "Daegu", "email": "seo@example.com", "created_at": "2024-06-01T12:00:00"},
                        {"id": 4, "name": "Jung", "region": "Busan", "email": "jung@example.com", "created_at": "2024-02-10T03:15:00"}
                    ]
                }));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        let outcome = query.load().await;

        assert!(!outcome.stale);
        let SearchResult::Users { label, result } = &outcome.result else {
            panic!("expected users, got {:?}", outcome.result);
        };
        assert_eq!(label, "all");
        assert_eq!(result.users.len(), 2);

        let html = query.area().html();
        assert!(html.contains("Search results: 2 users (all)"));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.find("<td>Seo</td>").unwrap() < html.find("<td>Jung</td>").unwrap());
        assert!(html.contains("<td>Daegu</td>"));
        assert!(html.contains("<td>jung@example.com</td>"));
        let registered = dates().format(Some("2024-06-01T12:00:00"));
        assert!(registered.contains("2024"));
        assert!(html.contains(&format!("<td>{registered}</td>")));
    }

    #[tokio::test]
    async fn server_error_renders_status_inline() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(500).json_body(json!({"error": "Server error"}));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        let outcome = query.search("Seoul").await;

        assert!(outcome.is_failure());
        let html = query.area().html();
        assert!(html.contains("Error occurred:"));
        assert!(html.contains("500"));
    }

    #[tokio::test]
    async fn malformed_body_renders_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).body("not json");
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        let outcome = query.load().await;

        assert!(matches!(
            outcome.result,
            SearchResult::Failed(DirectoryError::Decode(_))
        ));
        assert!(query
            .area()
            .html()
            .contains("Failed to parse response body"));
    }

    #[tokio::test]
    async fn each_search_replaces_previous_output() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param("region", "Jeju");
                then.status(200).json_body(json!({"count": 0, "users": []}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param("region", "Sejong");
                then.status(503);
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        query.search("Jeju").await;
        assert!(query.area().html().contains("No users registered"));

        query.search("Sejong").await;
        let html = query.area().html();
        assert!(html.contains("503"));
        assert!(!html.contains("No users registered"));
    }

    #[tokio::test]
    async fn later_search_wins_over_slow_earlier_one() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param("region", "Seoul");
                then.status(200)
                    .delay(Duration::from_millis(300))
                    .json_body(json!({
                        "count": 1,
                        "users": [{"id": 1, "name": "Slow", "region": "Seoul", "email": "slow@example.com", "created_at": null}]
                    }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users").query_param("region", "Busan");
                then.status(200).json_body(json!({
                    "count": 1,
                    "users": [{"id": 2, "name": "Fast", "region": "Busan", "email": "fast@example.com", "created_at": null}]
                }));
            })
            .await;
        let client = client_for(&server);
        let query = DirectoryQuery::new(&client, dates());

        let (first, second) = tokio::join!(query.search("Seoul"), query.search("Busan"));

        assert!(first.stale);
        assert!(!second.stale);
        let html = query.area().html();
        assert!(html.contains("<td>Fast</td>"));
        assert!(!html.contains("<td>Slow</td>"));
    }
}
