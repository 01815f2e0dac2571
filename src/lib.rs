//! # Threadview Library
//!
//! A Rust library for resolving Twitter/X conversation threads into ordered,
//! chat-style transcripts using the Twitter API v2.
//!
//! ## Features
//!
//! - Thread resolution: one tweet ID in, a complete, deduplicated,
//!   chronologically ordered conversation out
//! - Quoted tweets resolved inline, even across conversations
//! - Typed error taxonomy distinguishing auth, permission, not-found,
//!   rate-limit, network and generic upstream failures
//! - Injected credential and rate-gate dependencies for deterministic tests
//! - Tweet URL parsing and chat-style display formatting
//!
//! ## Configuration
//!
//! The following configuration is required:
//! - `TWITTER_BEARER_TOKEN`: Twitter API v2 app-only bearer token
//!
//! ## Example
//!
//! ```rust,no_run
//! use threadview::{ThreadResolver, TwitterApi, TwitterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = TwitterConfig::from_env().expect("missing bearer token");
//!     let resolver = ThreadResolver::new(TwitterApi::new(&config));
//!     match resolver.resolve("1234567890123456789").await {
//!         Ok(thread) => println!("{} tweets in thread", thread.tweet_count),
//!         Err(e) => eprintln!("Failed to resolve thread: {}", e),
//!     }
//! }
//! ```
//!
//! ## Known limitations
//!
//! The conversation fetch is a single-page, best-effort recent-search query.
//! Provider search indexing lag means a resolved thread is not guaranteed to
//! contain every reply ever posted; the engine deliberately does not
//! paginate past the first page.

pub mod config;
pub mod error;
pub mod format;
pub mod rate_gate;
pub mod twitter;
pub mod urls;

// Re-export commonly used types and functions
pub use config::{CredentialProvider, TwitterConfig, BEARER_TOKEN_VAR};
pub use error::{ApiError, ConfigError, ResolveError, ResolveStep};
pub use rate_gate::{format_reset_time, RateGate, RateStatus, SlidingWindowGate};
pub use twitter::{
    build_reply_chain, find_root_tweet, Author, Thread, ThreadResolver, Tweet, TweetSource,
    TwitterApi,
};
pub use urls::{build_tweet_url, extract_tweet_id, is_valid_tweet_id, tweet_id_from_input};
