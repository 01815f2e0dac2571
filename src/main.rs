//! # Threadview
//!
//! A command line viewer for Twitter/X conversation threads. Takes a tweet
//! URL or ID, resolves the full conversation through the Twitter API v2,
//! and prints it as a chat-style transcript.
//!
//! ## Environment Variables
//!
//! - `TWITTER_BEARER_TOKEN`: Twitter API v2 app-only bearer token (required)
//! - `RUST_LOG`: log level filter for `env_logger` (optional)
//!
//! ## Example Usage
//!
//! ```bash
//! # Resolve a thread from a tweet URL
//! threadview https://x.com/someone/status/1234567890123456789
//!
//! # Resolve from a bare tweet id, printing JSON for other tooling
//! threadview 1234567890123456789 --json
//! ```

use clap::Parser;
use log::info;

use threadview::format::{chat_timestamp_now, format_metric};
use threadview::rate_gate::{format_reset_time, RateGate, SlidingWindowGate};
use threadview::twitter::{Thread, Tweet};
use threadview::{tweet_id_from_input, ThreadResolver, TwitterApi, TwitterConfig};

/// View a Twitter/X conversation thread as a chat-style transcript.
#[derive(Debug, Parser)]
#[command(name = "threadview", version, about)]
struct Args {
    /// Tweet URL or numeric tweet ID to resolve
    tweet: String,

    /// Maximum conversation results to request (capped at 100 by the API)
    #[arg(long, default_value_t = 100)]
    max_results: u32,

    /// Print the resolved thread as JSON instead of a transcript
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(message) = run(args).await {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let tweet_id = tweet_id_from_input(&args.tweet)
        .ok_or_else(|| format!("'{}' is not a tweet URL or tweet id", args.tweet))?;

    let config = TwitterConfig::from_env().map_err(|e| e.to_string())?;

    // Pre-flight: the engine itself performs no rate bookkeeping.
    let gate = SlidingWindowGate::default();
    let status = gate.check();
    if !status.allowed {
        let reset = status
            .reset_in_minutes
            .map(format_reset_time)
            .unwrap_or_else(|| "a while".to_string());
        return Err(format!(
            "local rate limit reached - try again in {}",
            reset
        ));
    }
    info!(
        "Rate gate allows the request ({} remaining in window)",
        status.remaining
    );

    let resolver = ThreadResolver::new(TwitterApi::new(&config))
        .with_max_conversation_results(args.max_results);
    let thread = resolver
        .resolve(&tweet_id)
        .await
        .map_err(|e| e.to_string())?;
    gate.record();

    if args.json {
        let json = serde_json::to_string_pretty(&thread).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        print!("{}", render_transcript(&thread));
    }
    Ok(())
}

/// Renders a resolved thread as a chat-style transcript.
fn render_transcript(thread: &Thread) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Conversation {} - {} tweet(s)\n\n",
        thread.conversation_id, thread.tweet_count
    ));
    for tweet in &thread.tweets {
        render_tweet(&mut out, tweet, thread);
    }
    out
}

fn render_tweet(out: &mut String, tweet: &Tweet, thread: &Thread) {
    let focus_marker = if tweet.id == thread.focus_tweet_id {
        "> "
    } else {
        "  "
    };
    out.push_str(&format!(
        "{}{} - {}\n",
        focus_marker,
        author_line(tweet),
        chat_timestamp_now(tweet.created_at)
    ));
    for line in tweet.text.lines() {
        out.push_str(&format!("    {}\n", line));
    }
    if let Some(quoted) = &tweet.quoted_tweet {
        out.push_str(&format!("    | quoting {}:\n", author_line(quoted)));
        for line in quoted.text.lines() {
            out.push_str(&format!("    | {}\n", line));
        }
    }
    let metrics = &tweet.public_metrics;
    out.push_str(&format!(
        "    likes {}  retweets {}  replies {}\n\n",
        format_metric(metrics.like_count),
        format_metric(metrics.retweet_count),
        format_metric(metrics.reply_count)
    ));
}

fn author_line(tweet: &Tweet) -> String {
    match &tweet.author {
        Some(author) if author.verified => format!("@{} ({}) [verified]", author.username, author.name),
        Some(author) => format!("@{} ({})", author.username, author.name),
        None => "unknown author".to_string(),
    }
}
