//! Relationship enrichment and ordering.
//!
//! Takes the merged tweet universe, keeps the tweets belonging to the
//! target conversation, annotates each with its reply/quote/retweet
//! relationships, resolves quoted-tweet snapshots, and sorts the result
//! chronologically.

use std::collections::HashSet;

use super::normalize::TweetMap;
use super::types::{ReferenceKind, Tweet, TweetId};

/// Enriches and orders the tweets of one conversation.
///
/// `universe` is the full pre-filter working set; quoted-tweet snapshots
/// are looked up against it because a quoted tweet legitimately belongs to
/// a different conversation. The returned sequence contains only tweets
/// whose effective conversation ID equals `conversation_id`, sorted
/// ascending by creation time. The sort is stable, so tweets with equal
/// second-resolution timestamps keep the universe's ID-ascending order.
pub fn enrich(universe: &TweetMap, conversation_id: &str) -> Vec<Tweet> {
    let mut tweets: Vec<Tweet> = universe
        .values()
        .filter(|t| t.effective_conversation_id() == conversation_id)
        .map(|t| annotate(t.clone(), universe))
        .collect();

    tweets.sort_by_key(|t| t.created_at);
    tweets
}

/// Fills in the relationship annotations of a single tweet.
fn annotate(mut tweet: Tweet, universe: &TweetMap) -> Tweet {
    tweet.is_reply = has_reference(&tweet, ReferenceKind::RepliedTo);
    tweet.is_quote = has_reference(&tweet, ReferenceKind::Quoted);
    tweet.is_retweet = has_reference(&tweet, ReferenceKind::Retweeted);
    tweet.reply_to_id = first_reference(&tweet, ReferenceKind::RepliedTo);
    tweet.quoted_tweet_id = first_reference(&tweet, ReferenceKind::Quoted);
    tweet.quoted_tweet = tweet
        .quoted_tweet_id
        .as_ref()
        .and_then(|id| universe.get(id))
        .map(|quoted| Box::new(snapshot(quoted)));
    tweet
}

fn has_reference(tweet: &Tweet, kind: ReferenceKind) -> bool {
    tweet.referenced_tweets.iter().any(|r| r.kind == kind)
}

fn first_reference(tweet: &Tweet, kind: ReferenceKind) -> Option<TweetId> {
    tweet
        .referenced_tweets
        .iter()
        .find(|r| r.kind == kind)
        .map(|r| r.id.clone())
}

/// A shallow, read-only copy for embedding: the snapshot never carries a
/// further nested quote.
fn snapshot(tweet: &Tweet) -> Tweet {
    let mut copy = tweet.clone();
    copy.quoted_tweet = None;
    copy
}

/// Finds the root tweet of an enriched sequence: the first non-reply, or
/// the first tweet when every tweet is a reply.
pub fn find_root_tweet(tweets: &[Tweet]) -> Option<&Tweet> {
    tweets.iter().find(|t| !t.is_reply).or_else(|| tweets.first())
}

/// Walks `reply_to_id` backwards from `tweet_id` and returns the
/// root-to-leaf chain ending at that tweet.
///
/// The walk terminates on a tweet with no reply target, on a target with
/// no match in `tweets`, or on any ID encountered twice - the reply graph
/// is assumed to be a tree, but a cycle or self-reference must not hang.
pub fn build_reply_chain(tweet_id: &str, tweets: &[Tweet]) -> Vec<Tweet> {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current_id = Some(tweet_id);

    while let Some(id) = current_id {
        if !visited.insert(id) {
            break;
        }
        let Some(tweet) = tweets.iter().find(|t| t.id == id) else {
            break;
        };
        chain.push(tweet.clone());
        current_id = tweet.reply_to_id.as_deref();
    }

    chain.reverse();
    chain
}
