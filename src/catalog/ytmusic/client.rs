//! YouTube Music HTTP client
//!
//! Talks to the InnerTube web API behind music.youtube.com as the anonymous
//! `WEB_REMIX` client. Only the two calls the search service needs are
//! implemented: `search` and album `browse`.

use std::time::Duration;

use serde_json::{Value, json};

use super::{filters, parser};
use crate::catalog::error::CatalogError;
use crate::catalog::raw::{RawAlbum, RawSearchResult};

/// Default InnerTube endpoint
pub const DEFAULT_BASE_URL: &str = "https://music.youtube.com/youtubei/v1";

/// Browser-like user agent; InnerTube serves a degraded layout to unknown agents
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

const ORIGIN: &str = "https://music.youtube.com";

/// Settings for the YouTube Music client
#[derive(Debug, Clone)]
pub struct YtMusicConfig {
    /// InnerTube base URL
    pub base_url: String,
    /// Interface language (`hl`)
    pub language: String,
    /// Content region (`gl`)
    pub location: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for YtMusicConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            location: "US".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// YouTube Music catalog client
pub struct YtMusicClient {
    http_client: reqwest::Client,
    config: YtMusicConfig,
}

impl YtMusicClient {
    /// Create a new client
    pub fn new(config: YtMusicConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Search the catalog.
    ///
    /// A positive `limit` pages through continuations until `limit` hits are
    /// collected or the results run out, then truncates to `limit`. Otherwise
    /// only the first page is returned.
    pub async fn search(
        &self,
        query: &str,
        filter: &str,
        limit: i64,
    ) -> Result<Vec<RawSearchResult>, CatalogError> {
        let mut body = json!({ "query": query });
        if let Some(params) = filters::search_params(filter)? {
            body["params"] = Value::String(params);
        }
        let result_type = filters::result_type(filter);
        let limit = usize::try_from(limit).ok().filter(|&limit| limit > 0);

        let response = self.post("search", body.clone(), &[]).await?;
        let mut page = parser::parse_search_response(&response, result_type.as_deref())?;
        let mut results = std::mem::take(&mut page.results);

        if let Some(limit) = limit {
            while results.len() < limit {
                let Some(token) = page.continuation.take() else {
                    break;
                };
                let paging = [
                    ("ctoken", token.as_str()),
                    ("continuation", token.as_str()),
                    ("type", "next"),
                ];
                let response = self.post("search", body.clone(), &paging).await?;
                page = parser::parse_continuation_response(&response, result_type.as_deref());
                if page.results.is_empty() {
                    break;
                }
                results.append(&mut page.results);
            }
            results.truncate(limit);
        }

        tracing::debug!(query, filter, count = results.len(), "search completed");
        Ok(results)
    }

    /// Fetch album details by album browse id (`MPRE...`).
    pub async fn get_album(&self, album_id: &str) -> Result<RawAlbum, CatalogError> {
        if !album_id.starts_with("MPRE") {
            return Err(CatalogError::InvalidAlbumId(album_id.to_string()));
        }

        let response = self.post("browse", json!({ "browseId": album_id }), &[]).await?;
        parser::parse_album_response(&response)
    }

    /// POST an InnerTube request with the client context attached
    async fn post(
        &self,
        endpoint: &str,
        mut body: Value,
        query: &[(&str, &str)],
    ) -> Result<Value, CatalogError> {
        body["context"] = self.context();
        let url = format!("{}/{}", self.config.base_url, endpoint);

        tracing::trace!(%url, "sending InnerTube request");

        let response = self
            .http_client
            .post(&url)
            .query(&[("prettyPrint", "false")])
            .query(query)
            .header(reqwest::header::ORIGIN, ORIGIN)
            .header(reqwest::header::REFERER, ORIGIN)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.pointer("/error/message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }

    fn context(&self) -> Value {
        json!({
            "client": {
                "clientName": "WEB_REMIX",
                "clientVersion": client_version(),
                "hl": self.config.language,
                "gl": self.config.location,
            },
            "user": {}
        })
    }
}

/// `WEB_REMIX` versions are date-stamped; today's date is always accepted.
fn client_version() -> String {
    format!("1.{}.01.00", chrono::Utc::now().format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::{Json, Router, routing::post};

    use super::*;
    use crate::catalog::ytmusic::parser::fixtures;

    #[test]
    fn test_client_creation() {
        let client = YtMusicClient::new(YtMusicConfig::default()).unwrap();
        assert_eq!(client.config.base_url, "https://music.youtube.com/youtubei/v1");
    }

    #[test]
    fn test_client_version_format() {
        let version = client_version();
        assert!(version.starts_with("1.20"));
        assert!(version.ends_with(".01.00"));
        assert_eq!(version.len(), "1.20250101.01.00".len());
    }

    /// One request seen by the fake endpoint
    struct Recorded {
        query: HashMap<String, String>,
        body: Value,
    }

    type Captured = Arc<Mutex<Vec<Recorded>>>;

    /// Serve a fake InnerTube endpoint on a random local port.
    async fn fake_innertube(status: StatusCode, reply: Value) -> (String, Captured) {
        fake_innertube_pages(status, vec![reply]).await
    }

    /// Like [`fake_innertube`], answering the n-th request with `replies[n]`
    /// and repeating the last reply after that.
    async fn fake_innertube_pages(status: StatusCode, replies: Vec<Value>) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let replies = Arc::new(replies);

        let handler = move |State(captured): State<Captured>,
                            Query(query): Query<HashMap<String, String>>,
                            Json(body): Json<Value>| {
            let replies = replies.clone();
            async move {
                let mut recorded = captured.lock().unwrap();
                recorded.push(Recorded { query, body });
                let reply = replies
                    .get(recorded.len() - 1)
                    .or(replies.last())
                    .cloned()
                    .unwrap_or_default();
                (status, Json(reply))
            }
        };
        let app = Router::new()
            .route("/search", post(handler.clone()))
            .route("/browse", post(handler))
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), captured)
    }

    fn client_for(base_url: String) -> YtMusicClient {
        YtMusicClient::new(YtMusicConfig {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_filter_params_and_truncates() {
        let reply = fixtures::search_response(vec![
            fixtures::song_item("a", "A", &["X"], ("MPREb_a", "AA")),
            fixtures::song_item("b", "B", &["Y"], ("MPREb_b", "BB")),
            fixtures::song_item("c", "C", &["Z"], ("MPREb_c", "CC")),
        ]);
        let (base_url, captured) = fake_innertube(StatusCode::OK, reply).await;

        let results = client_for(base_url)
            .search("example song", "songs", 2)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].video_id.as_deref(), Some("a"));
        assert_eq!(results[1].video_id.as_deref(), Some("b"));

        let recorded = captured.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        let body = &recorded[0].body;
        assert_eq!(recorded[0].query.get("prettyPrint").map(String::as_str), Some("false"));
        assert_eq!(body["query"], "example song");
        assert_eq!(body["params"], "EgWKAQIIAWoMEA4QChADEAQQCRAF");
        assert_eq!(body["context"]["client"]["clientName"], "WEB_REMIX");
        assert_eq!(body["context"]["client"]["hl"], "en");
    }

    #[tokio::test]
    async fn test_search_follows_continuations_up_to_limit() {
        let (base_url, captured) = fake_innertube_pages(
            StatusCode::OK,
            vec![
                fixtures::paged_search_response(
                    vec![
                        fixtures::song_item("a", "A", &["X"], ("MPREb_a", "AA")),
                        fixtures::song_item("b", "B", &["Y"], ("MPREb_b", "BB")),
                    ],
                    Some("page-2"),
                ),
                fixtures::continuation_response(
                    vec![
                        fixtures::song_item("c", "C", &["Z"], ("MPREb_c", "CC")),
                        fixtures::song_item("d", "D", &["W"], ("MPREb_d", "DD")),
                    ],
                    Some("page-3"),
                ),
            ],
        )
        .await;

        let results = client_for(base_url).search("q", "songs", 3).await.unwrap();

        let ids: Vec<_> = results.iter().map(|r| r.video_id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let recorded = captured.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        let paging = &recorded[1].query;
        assert_eq!(paging.get("ctoken").map(String::as_str), Some("page-2"));
        assert_eq!(paging.get("continuation").map(String::as_str), Some("page-2"));
        assert_eq!(paging.get("type").map(String::as_str), Some("next"));
        assert_eq!(recorded[1].body["params"], "EgWKAQIIAWoMEA4QChADEAQQCRAF");
    }

    #[tokio::test]
    async fn test_search_stops_when_pages_run_out() {
        let (base_url, captured) = fake_innertube_pages(
            StatusCode::OK,
            vec![
                fixtures::paged_search_response(
                    vec![fixtures::song_item("a", "A", &["X"], ("MPREb_a", "AA"))],
                    Some("page-2"),
                ),
                fixtures::continuation_response(
                    vec![fixtures::song_item("b", "B", &["Y"], ("MPREb_b", "BB"))],
                    None,
                ),
            ],
        )
        .await;

        let results = client_for(base_url).search("q", "songs", 50).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(captured.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_non_positive_limit_keeps_page() {
        let reply = fixtures::search_response(vec![
            fixtures::song_item("a", "A", &["X"], ("MPREb_a", "AA")),
            fixtures::song_item("b", "B", &["Y"], ("MPREb_b", "BB")),
        ]);
        let (base_url, _) = fake_innertube(StatusCode::OK, reply).await;
        let client = client_for(base_url);

        assert_eq!(client.search("q", "songs", 0).await.unwrap().len(), 2);
        assert_eq!(client.search("q", "songs", -3).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_unknown_filter_makes_no_request() {
        let (base_url, captured) = fake_innertube(StatusCode::OK, json!({})).await;

        let err = client_for(base_url)
            .search("q", "lyrics", 5)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::UnknownFilter(_)));
        assert!(captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (base_url, _) = fake_innertube(StatusCode::TOO_MANY_REQUESTS, json!({})).await;
        let err = client_for(base_url).search("q", "songs", 5).await.unwrap_err();
        assert!(matches!(err, CatalogError::RateLimited));
    }

    #[tokio::test]
    async fn test_api_error_message_is_kept() {
        let reply = json!({ "error": { "code": 400, "message": "Request contains an invalid argument." } });
        let (base_url, _) = fake_innertube(StatusCode::BAD_REQUEST, reply).await;

        let err = client_for(base_url).search("q", "songs", 5).await.unwrap_err();

        match err {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Request contains an invalid argument.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_parse_error() {
        let app = Router::new().route("/search", post(|| async { "<html>not json</html>" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let err = client_for(format!("http://{addr}"))
            .search("q", "songs", 5)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_get_album() {
        let reply = fixtures::album_response("Record", "https://img/record");
        let (base_url, captured) = fake_innertube(StatusCode::OK, reply).await;

        let album = client_for(base_url).get_album("MPREb_record").await.unwrap();

        assert_eq!(album.title.as_deref(), Some("Record"));
        assert_eq!(captured.lock().unwrap()[0].body["browseId"], "MPREb_record");
    }

    #[tokio::test]
    async fn test_get_album_rejects_non_album_id() {
        let client = client_for("http://127.0.0.1:9".to_string());
        let err = client.get_album("UC_artist").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAlbumId(id) if id == "UC_artist"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = client_for("http://127.0.0.1:9".to_string());
        let err = client.search("q", "songs", 5).await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }
}
