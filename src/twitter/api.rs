//! Twitter API v2 client.
//!
//! This module contains the HTTP client for the three read operations the
//! engine consumes: single-tweet fetch, conversation search, and batch
//! fetch. All three request the same field and expansion set so every
//! response normalizes identically.
//!
//! The [`TweetSource`] trait is the seam between the resolver and the
//! network; tests implement it with canned payloads.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};

use crate::config::CredentialProvider;
use crate::error::ApiError;

use super::types::RawPayload;

/// Base URL for Twitter API v2 endpoints.
const API_BASE: &str = "https://api.x.com/2";

/// Tweet fields requested on every call.
const TWEET_FIELDS: &str =
    "id,text,created_at,author_id,conversation_id,referenced_tweets,public_metrics,entities";

/// User fields requested on every call.
const USER_FIELDS: &str = "id,username,name,profile_image_url,verified";

/// Expansions requested on every call.
const EXPANSIONS: &str = "author_id,referenced_tweets.id,referenced_tweets.id.author_id";

/// Maximum results per conversation search call and maximum IDs per batch
/// fetch, both capped by the API.
pub const MAX_RESULTS: u32 = 100;

/// A remote source of tweets.
///
/// The resolver only depends on this trait, never on the HTTP client
/// directly, so resolutions can be exercised against an in-memory source.
#[async_trait]
pub trait TweetSource {
    /// Fetches a single tweet by ID, with author and reference expansions.
    async fn fetch_tweet_by_id(&self, id: &str) -> Result<RawPayload, ApiError>;

    /// Fetches tweets belonging to a conversation.
    ///
    /// This is a best-effort, single-page recent-search query: it is not
    /// guaranteed to return every reply ever posted, and no pagination is
    /// performed beyond the first page.
    async fn fetch_conversation(
        &self,
        conversation_id: &str,
        max_results: u32,
    ) -> Result<RawPayload, ApiError>;

    /// Batch-fetches up to [`MAX_RESULTS`] tweets by ID.
    async fn fetch_tweets_by_ids(&self, ids: &[String]) -> Result<RawPayload, ApiError>;
}

/// HTTP client for the Twitter API v2.
pub struct TwitterApi {
    client: Client,
    bearer_token: String,
}

impl TwitterApi {
    /// Creates a client using the given credential provider's bearer token.
    pub fn new(credentials: &impl CredentialProvider) -> Self {
        Self {
            client: Client::new(),
            bearer_token: credentials.bearer_token().to_string(),
        }
    }

    /// Sends a GET request and decodes the response, mapping every failure
    /// onto the [`ApiError`] taxonomy.
    ///
    /// `not_found_id` is attached to 404 errors for user-facing context.
    async fn get_payload(
        &self,
        url: &str,
        operation_name: &str,
        not_found_id: Option<&str>,
    ) -> Result<RawPayload, ApiError> {
        info!("Sending GET request for operation: {}", operation_name);
        debug!("Request URL: {}", url);
        debug!("Request headers: Authorization: Bearer [REDACTED]");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        info!(
            "Received response with status: {} for operation: {}",
            status, operation_name
        );

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::Network)?;
            debug!(
                "Response summary for '{}': {} bytes received",
                operation_name,
                text.len()
            );
            return serde_json::from_str(&text).map_err(ApiError::Decode);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "Operation '{}' failed - Status: {}",
            operation_name, status
        );
        Err(error_for_status(status, &body, not_found_id))
    }
}

/// Maps a non-2xx response onto the error taxonomy, pulling the provider's
/// `detail`/`title` text out of the body when present.
fn error_for_status(status: StatusCode, body: &str, not_found_id: Option<&str>) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound {
            id: not_found_id.map(str::to_string),
        },
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => {
            let detail = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|json| {
                    json.get("detail")
                        .or_else(|| json.get("title"))
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "unexpected upstream error".to_string());
            ApiError::Upstream {
                status: status.as_u16(),
                detail,
            }
        }
    }
}

#[async_trait]
impl TweetSource for TwitterApi {
    async fn fetch_tweet_by_id(&self, id: &str) -> Result<RawPayload, ApiError> {
        let url = format!(
            "{}/tweets/{}?tweet.fields={}&user.fields={}&expansions={}",
            API_BASE, id, TWEET_FIELDS, USER_FIELDS, EXPANSIONS
        );
        self.get_payload(&url, "fetch_tweet", Some(id)).await
    }

    async fn fetch_conversation(
        &self,
        conversation_id: &str,
        max_results: u32,
    ) -> Result<RawPayload, ApiError> {
        let query = format!("conversation_id:{}", conversation_id);
        let url = format!(
            "{}/tweets/search/recent?query={}&max_results={}&tweet.fields={}&user.fields={}&expansions={}",
            API_BASE,
            urlencoding::encode(&query),
            max_results.min(MAX_RESULTS),
            TWEET_FIELDS,
            USER_FIELDS,
            EXPANSIONS
        );
        self.get_payload(&url, "fetch_conversation", Some(conversation_id))
            .await
    }

    async fn fetch_tweets_by_ids(&self, ids: &[String]) -> Result<RawPayload, ApiError> {
        debug_assert!(ids.len() as u32 <= MAX_RESULTS, "caller must chunk id batches");
        let joined = ids.join(",");
        let url = format!(
            "{}/tweets?ids={}&tweet.fields={}&user.fields={}&expansions={}",
            API_BASE, joined, TWEET_FIELDS, USER_FIELDS, EXPANSIONS
        );
        self.get_payload(&url, "fetch_tweets_batch", None).await
    }
}
