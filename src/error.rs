//! Error types for the thread-resolution engine.
//!
//! Two layers: [`ApiError`] is the transport-level taxonomy surfaced by the
//! Twitter API client, and [`ResolveError`] wraps it with the resolution step
//! that failed. Error messages are user-presentable and never contain the
//! bearer token.

use thiserror::Error;

/// Failures surfaced by the remote tweet source.
///
/// Every non-2xx response and every transport failure maps onto exactly one
/// of these variants so callers can present a specific, human-readable
/// message without inspecting status codes themselves.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the bearer token is missing, malformed, or expired.
    #[error("invalid API token - please check your Twitter API bearer token")]
    Unauthorized,

    /// 403: the token is valid but lacks the required permissions.
    #[error("access denied - your token may not have the required permissions")]
    Forbidden,

    /// 404: the requested tweet does not exist or is not accessible.
    #[error("tweet not found{} - it may be deleted, private, or the id is invalid", display_id(.id))]
    NotFound {
        /// The tweet or conversation ID the request was for, when known.
        id: Option<String>,
    },

    /// 429: the remote service's own rate limit, distinct from the local
    /// rate gate.
    #[error("Twitter API rate limit exceeded - please try again later (this is the remote limit, not the client-side gate)")]
    RateLimited,

    /// No response was received at all.
    #[error("no response from the Twitter API - please check your internet connection")]
    Network(#[source] reqwest::Error),

    /// Any other non-2xx response, carrying the provider-supplied detail
    /// text when the body included one.
    #[error("Twitter API error ({status}): {detail}")]
    Upstream {
        /// HTTP status code of the response.
        status: u16,
        /// Provider-supplied `detail`/`title` text, or a generic message.
        detail: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("unexpected response from the Twitter API: {0}")]
    Decode(#[source] serde_json::Error),
}

fn display_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (id: {})", id),
        None => String::new(),
    }
}

/// The resolution step a failure occurred in, used for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    /// Fetching the seed tweet the resolution starts from.
    FetchSeed,
    /// Fetching the conversation the seed tweet belongs to.
    FetchConversation,
    /// Batch-fetching quoted tweets missing from the working set.
    FetchQuoted,
}

impl std::fmt::Display for ResolveStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            Self::FetchSeed => "fetching the requested tweet",
            Self::FetchConversation => "fetching the conversation",
            Self::FetchQuoted => "fetching quoted tweets",
        };
        f.write_str(step)
    }
}

/// Failures of a full thread resolution.
///
/// A resolution either completes fully or fails with one of these; no
/// partial thread is ever returned.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The seed tweet is missing or inaccessible.
    #[error("tweet {id} not found - it may be deleted, private, or the id is invalid")]
    NotFound {
        /// The seed tweet ID the resolution started from.
        id: String,
    },

    /// A lower-level fetch failed; the resolution was aborted immediately.
    #[error("failed to resolve thread while {step}: {source}")]
    Upstream {
        /// Which resolution step the failure occurred in.
        step: ResolveStep,
        /// The underlying API failure.
        #[source]
        source: ApiError,
    },
}

/// Failures loading the Twitter API configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bearer token environment variable is not set.
    #[error("missing {0} environment variable - set it to your Twitter API bearer token")]
    MissingToken(&'static str),

    /// The token is present but empty or contains whitespace.
    #[error("invalid bearer token format - the token must be a non-empty string without whitespace")]
    InvalidToken,
}
