//! Twitter/X API integration module.
//!
//! This module contains the thread-resolution engine and its collaborators:
//! the API v2 client ([`api`]), the response normalizer ([`normalize`]),
//! the relationship enricher ([`enrich`]), the thread resolver
//! ([`resolve`]) and the shared data model ([`types`]).

pub mod api;
pub mod enrich;
pub mod normalize;
pub mod resolve;
pub mod types;

// Re-export the public API
pub use api::{TweetSource, TwitterApi, MAX_RESULTS};
pub use enrich::{build_reply_chain, enrich as enrich_tweets, find_root_tweet};
pub use normalize::{normalize as normalize_payload, TweetMap};
pub use resolve::ThreadResolver;
pub use types::{
    Author, PublicMetrics, RawPayload, ReferenceKind, Thread, Tweet, TweetId, TweetReference,
};
