use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use url::Url;

use super::error::ApiError;
use super::ReviewsApi;
use crate::config::{build_auth_header, ApiConfig, AuthConfig, Config};
use crate::query::ReviewQuery;
use crate::review::Review;

/// Response header carrying the number of result pages.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// [`ReviewsApi`] over HTTP against a WordPress-style REST endpoint.
pub struct HttpReviewsApi {
    client: Client,
    resource_url: String,
    auth: AuthConfig,
}

impl HttpReviewsApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_parts(&config.api, config.auth.clone())
    }

    pub fn with_parts(api: &ApiConfig, auth: AuthConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(api.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        let resource_url = api.resource_url();
        Url::parse(&resource_url).map_err(|e| ApiError::InvalidUrl {
            url: resource_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            resource_url,
            auth,
        })
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// Resource URL with the query flattened into the query string.
    pub fn url_for(&self, query: &ReviewQuery) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.resource_url).map_err(|e| ApiError::InvalidUrl {
            url: self.resource_url.clone(),
            reason: e.to_string(),
        })?;
        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match build_auth_header(&self.auth) {
            Some((name, value)) => builder.header(name, value),
            None => builder,
        }
    }
}

#[async_trait]
impl ReviewsApi for HttpReviewsApi {
    async fn list(&self, query: &ReviewQuery) -> Result<Vec<Review>, ApiError> {
        let url = self.url_for(query)?;
        tracing::debug!(url = %url, "GET reviews");

        let request = self
            .authorize(self.client.get(url.clone()))
            .header("Accept", "application/json");
        let response = request.send().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status_message(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn total_pages(&self, query: &ReviewQuery) -> Result<u32, ApiError> {
        let url = self.url_for(query)?;
        tracing::debug!(url = %url, "HEAD reviews");

        let request = self
            .authorize(self.client.head(url.clone()))
            .header("Accept", "application/json");
        let response = request.send().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                "Page count request returned non-success status"
            );
        }

        let header = response
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|v| v.to_str().ok());
        Ok(parse_total_pages(header))
    }
}

/// Longest error body kept verbatim when it is not a REST error object.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Deserialize)]
struct RestError {
    code: Option<String>,
    message: Option<String>,
}

/// Short description of a non-success response body.
///
/// REST error objects (`{"code": ..., "message": ...}`) are reduced to
/// `code: message`; any other body is cut to a bounded prefix.
fn status_message(body: &[u8]) -> String {
    if let Ok(RestError { code, message }) = serde_json::from_slice::<RestError>(body) {
        match (code, message) {
            (Some(code), Some(message)) => return format!("{}: {}", code, message),
            (Some(text), None) | (None, Some(text)) => return text,
            (None, None) => {}
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Parse a page-count header value.
///
/// Leading digits are read the way a lenient integer parse would
/// (`"3 pages"` is 3). Missing, unparsable, or zero values mean one page.
pub fn parse_total_pages(value: Option<&str>) -> u32 {
    let Some(value) = value else {
        return 1;
    };
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(pages) if pages > 0 => pages,
        _ => 1,
    }
}
