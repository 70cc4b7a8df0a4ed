//! HTTP client for the upstream fixtures endpoint.

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use url::Url;

use crate::config::{UpstreamConfig, API_HOST};
use crate::upstream::query::UpstreamQuery;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the fixed API host identifier.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Error type for upstream calls.
///
/// Variants carry full detail for logging. Callers must not expose it.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[source] reqwest::header::InvalidHeaderValue),

    #[error("request to upstream failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("failed to read upstream response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

/// A fully buffered upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client for `GET <base>/fixtures`.
///
/// Cheap to share: the inner `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct FixturesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FixturesClient {
    pub fn new(http: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build `<base>/fixtures?date=...[&status=...]`.
    pub fn fixtures_url(&self, query: &UpstreamQuery) -> Result<Url, UpstreamError> {
        let raw = format!("{}/fixtures", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|source| UpstreamError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        url.query_pairs_mut().extend_pairs(query.pairs());

        Ok(url)
    }

    fn auth_headers(&self) -> Result<HeaderMap, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key).map_err(UpstreamError::InvalidApiKey)?,
        );
        headers.insert(API_HOST_HEADER, HeaderValue::from_static(API_HOST));
        Ok(headers)
    }

    /// Issue a single GET and buffer the whole body.
    ///
    /// Non-success upstream statuses are returned as `Ok`; only transport
    /// failures are errors.
    pub async fn fetch(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.fixtures_url(query)?;
        let headers = self.auth_headers()?;

        tracing::debug!(url = %url, "Calling upstream");

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(UpstreamError::Send)?;

        let status = response.status();
        let body = response.bytes().await.map_err(UpstreamError::ReadBody)?;

        Ok(UpstreamResponse { status, body })
    }
}

impl std::fmt::Debug for FixturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixturesClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
