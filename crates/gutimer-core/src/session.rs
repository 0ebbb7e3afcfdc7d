//! Elapsed-time accounting for one timing session.

use std::time::Duration;

use tokio::time::Instant;

/// Clock state owned by the timing loop.
///
/// While running, elapsed time is `now - start`. Pausing freezes the elapsed
/// value; resuming moves `start` forward by the length of the pause, so the
/// elapsed value picks up exactly where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    start: Instant,
    paused_at: Option<Duration>,
}

impl Session {
    /// Starts a running session at `now`.
    #[must_use]
    pub const fn start(now: Instant) -> Self {
        Self {
            start: now,
            paused_at: None,
        }
    }

    /// Returns `true` while the session is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Elapsed time at `now`, or the frozen value while paused.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.paused_at
            .unwrap_or_else(|| now.saturating_duration_since(self.start))
    }

    /// Freezes the elapsed value. No-op if already paused.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now.saturating_duration_since(self.start));
        }
    }

    /// Continues counting from the frozen value. No-op if running.
    pub fn resume(&mut self, now: Instant) {
        if let Some(elapsed) = self.paused_at.take() {
            self.start = now.checked_sub(elapsed).unwrap_or(now);
        }
    }

    /// Flips between running and paused, returning the new paused state.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        if self.is_paused() {
            self.resume(now);
        } else {
            self.pause(now);
        }
        self.is_paused()
    }
}
