//! Session clock.
//!
//! Elapsed time is derived lazily at submission; nothing ticks in the
//! background. Uses `tokio::time::Instant` so tests can pause and advance time.

use tokio::time::Instant;

/// Record the instant a question set finished loading.
pub fn start() -> Instant {
    Instant::now()
}

/// Whole seconds elapsed since `since`, or 0 when the session never started.
pub fn elapsed_seconds(since: Option<Instant>) -> u64 {
    elapsed_seconds_at(since, Instant::now())
}

/// Like [`elapsed_seconds`] with an explicit `now`.
///
/// Truncates toward zero. A `now` earlier than `since` yields 0.
pub fn elapsed_seconds_at(since: Option<Instant>, now: Instant) -> u64 {
    since
        .map(|since| now.saturating_duration_since(since).as_secs())
        .unwrap_or(0)
}
