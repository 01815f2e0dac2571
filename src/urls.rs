//! Tweet URL parsing utilities.
//!
//! Accepts the URL formats users actually paste: `twitter.com`, `x.com` and
//! `mobile.twitter.com` status links, with or without a scheme or `www.`
//! prefix, plus bare numeric tweet IDs.

use url::Url;

/// Domains recognized as Twitter/X.
const VALID_DOMAINS: [&str; 3] = ["twitter.com", "x.com", "mobile.twitter.com"];

/// Extracts a tweet ID from a Twitter/X status URL.
///
/// Supported formats:
/// - `https://twitter.com/username/status/1234567890`
/// - `https://x.com/username/status/1234567890`
/// - `https://mobile.twitter.com/username/status/1234567890`
/// - `twitter.com/username/status/1234567890` (without scheme)
///
/// # Returns
///
/// - `Some(id)`: The numeric tweet ID from the `/status/` path segment
/// - `None`: If the input is not a recognizable Twitter/X status URL
pub fn extract_tweet_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.");
    if !VALID_DOMAINS.contains(&host) {
        return None;
    }

    // Path shape: /username/status/1234567890
    let mut segments = parsed.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "status" {
            let id = segments.next()?;
            if is_valid_tweet_id(id) {
                return Some(id.to_string());
            }
            return None;
        }
    }

    None
}

/// Resolves user input that may be either a status URL or a bare tweet ID.
pub fn tweet_id_from_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if is_valid_tweet_id(trimmed) {
        return Some(trimmed.to_string());
    }
    extract_tweet_id(trimmed)
}

/// Returns true if the string looks like a tweet ID.
///
/// Tweet IDs are numeric strings, typically 18-19 digits; anything from 10
/// to 20 digits is accepted.
pub fn is_valid_tweet_id(tweet_id: &str) -> bool {
    let len = tweet_id.len();
    (10..=20).contains(&len) && tweet_id.bytes().all(|b| b.is_ascii_digit())
}

/// Builds a canonical tweet URL from an ID.
///
/// The username defaults to `i`, which X redirects to the real author.
pub fn build_tweet_url(tweet_id: &str, username: Option<&str>) -> String {
    format!("https://x.com/{}/status/{}", username.unwrap_or("i"), tweet_id)
}
