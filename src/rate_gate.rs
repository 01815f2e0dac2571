//! Client-side rate gate consulted before starting a thread resolution.
//!
//! This is a pre-flight check only: the resolver itself performs no
//! bookkeeping. The caller asks the gate whether a resolution may start and
//! records the request after it succeeds. The gate is an injected dependency
//! so tests can run against a permissive or deterministic implementation.
//!
//! Note this gate is local and advisory; the remote service enforces its own
//! limits, surfaced as `ApiError::RateLimited`.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Default number of resolutions allowed per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 10;

/// Default window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60 * 60);

/// Result of a pre-flight rate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateStatus {
    /// Whether a new request may be started now.
    pub allowed: bool,
    /// How many requests remain in the current window.
    pub remaining: u32,
    /// Minutes until a slot frees up, when `allowed` is false.
    pub reset_in_minutes: Option<u64>,
}

/// Pre-flight gate for outbound resolutions.
pub trait RateGate {
    /// Checks whether a new request may be started.
    fn check(&self) -> RateStatus;

    /// Records a completed request. Call this only after the request
    /// actually succeeded.
    fn record(&self);
}

/// In-memory sliding-window gate: at most `max_requests` requests per
/// `window`, measured from each recorded request.
#[derive(Debug)]
pub struct SlidingWindowGate {
    max_requests: u32,
    window: Duration,
    history: Mutex<Vec<Instant>>,
}

impl SlidingWindowGate {
    /// Creates a gate with an explicit limit and window.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Drops history entries older than the window.
    fn prune(&self, history: &mut Vec<Instant>) {
        let now = Instant::now();
        history.retain(|t| now.duration_since(*t) < self.window);
    }

    // A poisoned lock only means another thread panicked mid-push; the
    // history is still usable.
    fn history(&self) -> MutexGuard<'_, Vec<Instant>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SlidingWindowGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateGate for SlidingWindowGate {
    fn check(&self) -> RateStatus {
        let mut history = self.history();
        self.prune(&mut history);

        let used = history.len() as u32;
        if used >= self.max_requests {
            // Full window: the oldest entry determines when a slot frees up.
            let oldest = history.iter().min().copied().unwrap_or_else(Instant::now);
            let elapsed = Instant::now().duration_since(oldest);
            let reset_in = self.window.saturating_sub(elapsed);
            let reset_minutes = (reset_in.as_secs() + 59) / 60;
            return RateStatus {
                allowed: false,
                remaining: 0,
                reset_in_minutes: Some(reset_minutes),
            };
        }

        RateStatus {
            allowed: true,
            remaining: self.max_requests - used,
            reset_in_minutes: None,
        }
    }

    fn record(&self) {
        let mut history = self.history();
        self.prune(&mut history);
        history.push(Instant::now());
    }
}

/// Formats a minutes-until-reset value as user-facing text.
///
/// Examples: `0` -> "less than a minute", `1` -> "1 minute",
/// `15` -> "15 minutes", `70` -> "about an hour".
pub fn format_reset_time(minutes: u64) -> String {
    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 60 => format!("{} minutes", m),
        _ => "about an hour".to_string(),
    }
}
