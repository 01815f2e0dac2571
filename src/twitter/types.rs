//! Data model for tweets, authors and resolved threads.
//!
//! Two layers live here: the raw payload shapes deserialized from the
//! Twitter API v2 (`RawPayload` and friends), and the domain model the
//! engine produces (`Tweet`, `Author`, `Thread`). Raw shapes stay private to
//! the fetch/normalize path; the domain model derives `Serialize` so
//! downstream consumers (the CLI, a UI layer) can emit it as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tweet identifier: a numeric string, typically 18-19 digits.
pub type TweetId = String;

/// The type of a reference from one tweet to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// The tweet is a reply to the referenced tweet.
    RepliedTo,
    /// The tweet quotes the referenced tweet.
    Quoted,
    /// The tweet is a retweet of the referenced tweet.
    Retweeted,
}

/// A typed link from one tweet to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetReference {
    /// Reference type: reply, quote, or retweet.
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    /// ID of the referenced tweet.
    pub id: TweetId,
}

/// Public engagement counts attached to a tweet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetrics {
    /// Number of impressions.
    #[serde(default)]
    pub impression_count: u64,
    /// Number of likes.
    #[serde(default)]
    pub like_count: u64,
    /// Number of replies.
    #[serde(default)]
    pub reply_count: u64,
    /// Number of retweets.
    #[serde(default)]
    pub retweet_count: u64,
}

/// A tweet author, embedded denormalized into each tweet during
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique user ID.
    pub id: String,
    /// Handle without the leading `@`.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar URL, when the API returned one.
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Verified flag.
    #[serde(default)]
    pub verified: bool,
}

/// A tweet with its author embedded and, after enrichment, its relationship
/// annotations filled in.
///
/// Instances are created by normalization, enriched exactly once by the
/// relationship enricher, and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    /// Unique tweet ID.
    pub id: TweetId,
    /// Text body.
    pub text: String,
    /// Creation timestamp (second resolution in the source data).
    pub created_at: DateTime<Utc>,
    /// ID of the posting user.
    pub author_id: String,
    /// Conversation this tweet belongs to. Absent for some payloads; the
    /// engine then treats the tweet as its own conversation root.
    pub conversation_id: Option<TweetId>,
    /// Typed references to other tweets.
    pub referenced_tweets: Vec<TweetReference>,
    /// Public engagement counts.
    pub public_metrics: PublicMetrics,
    /// Embedded author, or `None` when the payload had no matching
    /// included user (rendered downstream as an unknown author).
    pub author: Option<Author>,

    /// True iff any reference is of type `replied_to`.
    pub is_reply: bool,
    /// True iff any reference is of type `quoted`.
    pub is_quote: bool,
    /// True iff any reference is of type `retweeted`.
    pub is_retweet: bool,
    /// ID from the first `replied_to` reference.
    pub reply_to_id: Option<TweetId>,
    /// ID from the first `quoted` reference.
    pub quoted_tweet_id: Option<TweetId>,
    /// Embedded read-only snapshot of the quoted tweet, when it could be
    /// resolved. The snapshot itself never embeds a further quote.
    pub quoted_tweet: Option<Box<Tweet>>,
}

impl Tweet {
    /// The conversation this tweet effectively belongs to: its
    /// `conversation_id`, or its own ID when the field is absent.
    pub fn effective_conversation_id(&self) -> &str {
        self.conversation_id.as_deref().unwrap_or(&self.id)
    }
}

/// A fully resolved, ordered conversation thread.
#[derive(Debug, Clone, Serialize)]
pub struct Thread {
    /// Enriched tweets in ascending `created_at` order.
    pub tweets: Vec<Tweet>,
    /// Conversation ID shared by every tweet in `tweets`.
    pub conversation_id: TweetId,
    /// Root tweet ID (equal to the conversation ID).
    pub root_tweet_id: TweetId,
    /// The tweet ID the resolution was started from.
    pub focus_tweet_id: TweetId,
    /// Number of tweets in the thread.
    pub tweet_count: usize,
}

// ---------------------------------------------------------------------------
// Raw API payload shapes

/// A raw Twitter API v2 response: primary data plus expansion includes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPayload {
    /// Primary result: a single tweet or an array depending on endpoint.
    #[serde(default)]
    pub data: Option<TweetData>,
    /// Expanded objects referenced by the primary result.
    #[serde(default)]
    pub includes: Option<Includes>,
    /// Partial errors (e.g. deleted tweets in a batch fetch).
    #[serde(default)]
    pub errors: Option<Vec<serde_json::Value>>,
}

/// Primary `data` member: single object for `/tweets/:id`, array for
/// search and batch endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TweetData {
    /// Single-tweet response.
    Single(Box<RawTweet>),
    /// Multi-tweet response.
    Many(Vec<RawTweet>),
}

/// Expansion objects included alongside the primary result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    /// Users referenced by `author_id` expansions.
    #[serde(default)]
    pub users: Vec<RawUser>,
    /// Tweets referenced by `referenced_tweets.id` expansions.
    #[serde(default)]
    pub tweets: Vec<RawTweet>,
}

/// A tweet object as returned by the API, before author embedding.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    /// Tweet ID.
    pub id: TweetId,
    /// Text body.
    pub text: String,
    /// RFC 3339 creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Posting user's ID.
    pub author_id: String,
    /// Conversation ID, when the field was requested and present.
    #[serde(default)]
    pub conversation_id: Option<TweetId>,
    /// Typed references to other tweets.
    #[serde(default)]
    pub referenced_tweets: Vec<TweetReference>,
    /// Engagement counts.
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

/// A user object as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    /// User ID.
    pub id: String,
    /// Handle without the leading `@`.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Verified flag.
    #[serde(default)]
    pub verified: bool,
}

impl From<RawUser> for Author {
    fn from(user: RawUser) -> Self {
        Author {
            id: user.id,
            username: user.username,
            name: user.name,
            profile_image_url: user.profile_image_url,
            verified: user.verified,
        }
    }
}
