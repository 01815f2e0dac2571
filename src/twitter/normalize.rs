//! Response normalization.
//!
//! Flattens a raw API response (primary tweets + included tweets + included
//! users) into a uniform mapping from tweet ID to tweet-with-embedded-author.
//! Normalization is purely a projection: it performs no filtering and no
//! sorting, and the only deduplication is the natural key-overwrite of the
//! mapping.
//!
//! The working set is a `BTreeMap` keyed by tweet ID, so iteration order is
//! ID-ascending and identical between runs. Merging across fetches is done
//! through the two explicit functions below rather than implicit overwrite
//! order: seed results take precedence over conversation results, which take
//! precedence over quoted-batch results.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use super::types::{Author, RawPayload, RawTweet, Tweet, TweetData, TweetId};

/// The intermediate working set used during resolution.
pub type TweetMap = BTreeMap<TweetId, Tweet>;

/// Flattens a raw API payload into a tweet map with embedded authors.
///
/// Every tweet object in the payload is included, whether it appeared as
/// the primary result (single or array) or as an included/expanded tweet.
/// A tweet whose `author_id` has no matching included user is kept with
/// `author: None`; a missing author never fails normalization.
pub fn normalize(payload: RawPayload) -> TweetMap {
    let mut authors: HashMap<String, Author> = HashMap::new();
    if let Some(includes) = &payload.includes {
        for user in &includes.users {
            authors.insert(user.id.clone(), user.clone().into());
        }
    }

    if let Some(errors) = &payload.errors {
        if !errors.is_empty() {
            debug!(
                "Payload carried {} partial error(s) for unavailable resources",
                errors.len()
            );
        }
    }

    let mut tweets = TweetMap::new();

    // Included (referenced/expanded) tweets first, primary results second:
    // a tweet appearing as both keeps the primary copy.
    if let Some(includes) = payload.includes {
        for raw in includes.tweets {
            insert_with_author(&mut tweets, raw, &authors);
        }
    }

    match payload.data {
        Some(TweetData::Single(raw)) => insert_with_author(&mut tweets, *raw, &authors),
        Some(TweetData::Many(raws)) => {
            for raw in raws {
                insert_with_author(&mut tweets, raw, &authors);
            }
        }
        None => {}
    }

    tweets
}

fn insert_with_author(tweets: &mut TweetMap, raw: RawTweet, authors: &HashMap<String, Author>) {
    let author = authors.get(&raw.author_id).cloned();
    if author.is_none() {
        warn!(
            "No included user for author_id {} of tweet {} - embedding no author",
            raw.author_id, raw.id
        );
    }

    let tweet = Tweet {
        id: raw.id.clone(),
        text: raw.text,
        created_at: raw.created_at,
        author_id: raw.author_id,
        conversation_id: raw.conversation_id,
        referenced_tweets: raw.referenced_tweets,
        public_metrics: raw.public_metrics.unwrap_or_default(),
        author,
        is_reply: false,
        is_quote: false,
        is_retweet: false,
        reply_to_id: None,
        quoted_tweet_id: None,
        quoted_tweet: None,
    };
    tweets.insert(raw.id, tweet);
}

/// Merges `overlay` into `base`, letting `overlay` win on key collisions.
///
/// Used when the seed-tweet fetch is merged over the conversation fetch:
/// the seed copy was fetched with full expansions for that specific tweet
/// and is considered the fresher one.
pub fn merge_preferring_new(base: &mut TweetMap, overlay: TweetMap) {
    for (id, tweet) in overlay {
        base.insert(id, tweet);
    }
}

/// Merges `extra` into `base`, keeping the existing entry on collisions.
///
/// Used when quoted-batch results join the working set: a tweet that is
/// both part of the conversation and quoted by another must keep its
/// conversation copy.
pub fn merge_preferring_existing(base: &mut TweetMap, extra: TweetMap) {
    for (id, tweet) in extra {
        base.entry(id).or_insert(tweet);
    }
}
