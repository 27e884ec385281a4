//! Pure Instagram web API client.
//!
//! Fetches a single post's metadata from the private web GraphQL endpoint
//! and normalizes the response into a stable [`PostData`] record: author,
//! media items (image/video/carousel), caption, and music attribution.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_client::InstagramClient;
//!
//! let client = InstagramClient::new();
//!
//! let post = client.fetch_post("DKHRsO_tx_o").await?;
//! println!("@{}: {} media item(s)", post.author.username, post.media.len());
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod types;

pub use error::{InstagramError, Result};
pub use request::{RequestFingerprint, GRAPHQL_URL};
pub use types::{Author, Dimensions, ImageMedia, MediaItem, MusicInfo, PostData, VideoMedia};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use serde_json::Value;
use tracing::{debug, info};

/// Client for the Instagram web GraphQL endpoint.
///
/// Holds no session state; every fetch is a single independent request, so
/// callers may run any number of fetches concurrently.
pub struct InstagramClient {
    http_client: reqwest::Client,
    graphql_url: String,
    fingerprint: RequestFingerprint,
    extra_headers: HeaderMap,
}

impl Default for InstagramClient {
    fn default() -> Self {
        Self::new()
    }
}

impl InstagramClient {
    /// Create a client with the default transport and the known-good
    /// protocol tokens.
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            graphql_url: GRAPHQL_URL.to_string(),
            fingerprint: RequestFingerprint::default(),
            extra_headers: HeaderMap::new(),
        }
    }

    /// Use a custom HTTP client (timeouts, proxies, TLS settings).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    /// Point the post query at a different endpoint (for tests or relays).
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    /// Replace the protocol tokens, e.g. after the upstream build rotates.
    pub fn with_fingerprint(mut self, fingerprint: RequestFingerprint) -> Self {
        self.fingerprint = fingerprint;
        self
    }

    /// Add a request header, overriding the default set on collision.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let name: HeaderName = name.parse().expect("header name should parse correctly");
        let value: HeaderValue = value.parse().expect("header value should parse correctly");
        self.extra_headers.insert(name, value);
        self
    }

    /// Fetch the raw GraphQL document for a post, unprocessed.
    ///
    /// This is the capture-side entry point: fixture tooling persists the
    /// document exactly as the endpoint returned it. [`fetch_post`] runs
    /// the same request and then projects the document.
    ///
    /// [`fetch_post`]: InstagramClient::fetch_post
    pub async fn fetch_raw(&self, shortcode: &str) -> Result<Value> {
        debug!(shortcode, url = %self.graphql_url, "requesting post document");

        let response = self
            .http_client
            .post(&self.graphql_url)
            .headers(self.build_headers(shortcode))
            .form(&request::form_params(&self.fingerprint, shortcode))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstagramError::FetchFailed(status.to_string()));
        }

        let body = response.text().await?;
        let document: Value = serde_json::from_str(&body)?;
        Ok(document)
    }

    /// Fetch a post and normalize it into a [`PostData`] record.
    pub async fn fetch_post(&self, shortcode: &str) -> Result<PostData> {
        let document = self.fetch_raw(shortcode).await?;
        let post = extract::extract_post(shortcode, &document)?;
        info!(
            shortcode,
            media_items = post.media.len(),
            author = %post.author.username,
            "post extracted"
        );
        Ok(post)
    }

    /// Default header set, then the per-request `Referer`, then caller
    /// overrides last so they win.
    fn build_headers(&self, shortcode: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in request::header_pairs(&self.fingerprint) {
            let name: HeaderName = name.parse().expect("header name should parse correctly");
            let value: HeaderValue = value.parse().expect("header value should parse correctly");
            headers.insert(name, value);
        }
        let referer: HeaderValue = request::permalink(shortcode)
            .parse()
            .expect("referer value should parse correctly");
        headers.insert(REFERER, referer);
        for (name, value) in &self.extra_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}
