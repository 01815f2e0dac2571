//! Thread resolution.
//!
//! Orchestrates the fetch, normalize, merge and enrich steps that turn a
//! single tweet ID into a complete, ordered conversation thread. The
//! resolver holds no state across calls: every resolution re-fetches from
//! scratch, and a failure at any step aborts the whole resolution - no
//! partial thread is ever returned. Dropping the returned future cancels
//! any in-flight request.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::error::{ApiError, ResolveError, ResolveStep};

use super::api::{TweetSource, MAX_RESULTS};
use super::enrich::enrich;
use super::normalize::{merge_preferring_existing, merge_preferring_new, normalize, TweetMap};
use super::types::{ReferenceKind, Thread, TweetId};

/// Resolves conversation threads against a [`TweetSource`].
pub struct ThreadResolver<S> {
    source: S,
    max_conversation_results: u32,
}

impl<S: TweetSource> ThreadResolver<S> {
    /// Creates a resolver fetching up to the API cap of conversation
    /// results per resolution.
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_conversation_results: MAX_RESULTS,
        }
    }

    /// Overrides how many conversation results are requested (capped at
    /// the API maximum of 100 by the source).
    pub fn with_max_conversation_results(mut self, max_results: u32) -> Self {
        self.max_conversation_results = max_results;
        self
    }

    /// Resolves the full conversation thread containing `seed_tweet_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Thread)`: The deduplicated, chronologically ordered thread
    /// - `Err(ResolveError::NotFound)`: If the seed tweet does not exist
    ///   or is inaccessible
    /// - `Err(ResolveError::Upstream)`: If any fetch failed; the error
    ///   names the step and carries the underlying failure
    ///
    /// The conversation fetch is a best-effort single-page search, so the
    /// thread is not guaranteed to contain every reply ever posted.
    pub async fn resolve(&self, seed_tweet_id: &str) -> Result<Thread, ResolveError> {
        info!("Resolving thread for tweet {}", seed_tweet_id);

        // 1. Fetch the seed tweet.
        let seed_payload = self
            .source
            .fetch_tweet_by_id(seed_tweet_id)
            .await
            .map_err(|e| wrap(ResolveStep::FetchSeed, seed_tweet_id, e))?;
        let seed_tweets = normalize(seed_payload);

        let Some(seed_tweet) = seed_tweets.get(seed_tweet_id) else {
            return Err(ResolveError::NotFound {
                id: seed_tweet_id.to_string(),
            });
        };

        // 2. Conversation ID, defaulting to the seed's own ID for a
        // single-tweet self-conversation.
        let conversation_id = seed_tweet.effective_conversation_id().to_string();
        debug!(
            "Seed tweet {} belongs to conversation {}",
            seed_tweet_id, conversation_id
        );

        // 3. Fetch the conversation (best-effort, single page).
        let conversation_payload = self
            .source
            .fetch_conversation(&conversation_id, self.max_conversation_results)
            .await
            .map_err(|e| wrap(ResolveStep::FetchConversation, seed_tweet_id, e))?;

        // 4. Merge; the seed fetch carried full expansions for that tweet
        // and wins over the conversation copy.
        let mut universe = normalize(conversation_payload);
        merge_preferring_new(&mut universe, seed_tweets);
        debug!("Working set holds {} tweets after merge", universe.len());

        // 5-7. Batch-fetch quoted tweets not already present.
        let missing = missing_quoted_ids(&universe);
        if !missing.is_empty() {
            info!("Fetching {} missing quoted tweet(s)", missing.len());
            let ids: Vec<TweetId> = missing.into_iter().collect();
            for chunk in ids.chunks(MAX_RESULTS as usize) {
                let quoted_payload = self
                    .source
                    .fetch_tweets_by_ids(chunk)
                    .await
                    .map_err(|e| wrap(ResolveStep::FetchQuoted, seed_tweet_id, e))?;
                // Conversation and seed copies keep precedence over
                // quoted-only fetches.
                merge_preferring_existing(&mut universe, normalize(quoted_payload));
            }
        }

        // 8-9. Membership filter, enrichment and ordering.
        let tweets = enrich(&universe, &conversation_id);
        info!(
            "Resolved conversation {} with {} tweet(s)",
            conversation_id,
            tweets.len()
        );

        // 10. Package.
        Ok(Thread {
            tweet_count: tweets.len(),
            tweets,
            root_tweet_id: conversation_id.clone(),
            conversation_id,
            focus_tweet_id: seed_tweet_id.to_string(),
        })
    }
}

/// Collects the deduplicated set of `quoted` reference targets that are
/// not present in the working set.
fn missing_quoted_ids(universe: &TweetMap) -> BTreeSet<TweetId> {
    universe
        .values()
        .flat_map(|t| t.referenced_tweets.iter())
        .filter(|r| r.kind == ReferenceKind::Quoted)
        .filter(|r| !universe.contains_key(&r.id))
        .map(|r| r.id.clone())
        .collect()
}

/// Wraps a lower-level failure with resolution context. A 404 on the seed
/// fetch is the seed tweet being missing, which has its own variant.
fn wrap(step: ResolveStep, seed_tweet_id: &str, error: ApiError) -> ResolveError {
    if step == ResolveStep::FetchSeed {
        if let ApiError::NotFound { .. } = error {
            return ResolveError::NotFound {
                id: seed_tweet_id.to_string(),
            };
        }
    }
    ResolveError::Upstream {
        step,
        source: error,
    }
}
