//! HTTP client for pilio.idv.tw.

use std::time::Duration;

use url::Url;

use crate::{
    query::{Game, HistoryQuery},
    types::HistoryResponse,
    Error,
};

/// Browser-like user agent sent with every request; the site turns away
/// clients that do not look like one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection attempts per request; linear backoff between them.
const CONNECT_ATTEMPTS: u32 = 3;
const BACKOFF_STEP: Duration = Duration::from_secs(1);

/// HTTP client for the pilio.idv.tw listing pages and JSON history endpoint.
///
/// The client is built once and reused for every request. Certificate
/// verification is disabled because the site serves a chain the default
/// verifier rejects. Connection-level failures are retried with a linear
/// backoff; HTTP error statuses and bad bodies are not.
pub struct Client {
    /// Base URL. Defaults to `https://www.pilio.idv.tw`.
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://www.pilio.idv.tw")
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetches the game's listing page and decodes it from Big5.
    pub async fn list_page(&self, game: Game) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, game.list_path());
        let resp = self
            .send_with_retry(|| {
                self.http
                    .get(&url)
                    .header("accept", "text/html,application/xhtml+xml")
            })
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        let (text, _, _) = encoding_rs::BIG5.decode(&bytes);

        if !status.is_success() {
            let snippet = truncate_body(&text);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(text.into_owned())
    }

    /// Fetches one page of draw history from the JSON endpoint.
    pub async fn history(&self, query: &HistoryQuery) -> Result<HistoryResponse, Error> {
        let url = self.history_url(query)?;
        let resp = self
            .send_with_retry(|| {
                self.http
                    .post(url.clone())
                    .header("accept", "application/json, text/plain, */*")
            })
            .await?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<HistoryResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse history response: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    fn history_url(&self, query: &HistoryQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/Json_ltonew.asp", self.base_url).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        Ok(query.add_to_url(&url))
    }

    async fn send_with_retry(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match build().send().await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_connect() && attempt < CONNECT_ATTEMPTS => {
                    tracing::warn!(
                        "Connection attempt {}/{} failed: {}",
                        attempt,
                        CONNECT_ATTEMPTS,
                        e
                    );
                    tokio::time::sleep(BACKOFF_STEP * attempt).await;
                }
                Err(e) => {
                    tracing::error!("Failed to get resource: {}", e);
                    return Err(Error::RequestFailed);
                }
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Decoded pages are multi-byte text; back off to a char boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
