//! Timed cosmetic transitions: the success dim and the validation notice

use std::time::{Duration, Instant};

/// Dims the form after a successful submit and eases it back
#[derive(Debug, Clone)]
pub struct SuccessPulse {
    /// When the pulse started
    pub start_time: Instant,
    duration: Duration,
}

impl SuccessPulse {
    /// Strongest dim applied at the start of the pulse
    pub const MAX_DIM: f32 = 0.2;

    pub fn new(duration: Duration) -> Self {
        Self::started_at(Instant::now(), duration)
    }

    pub fn started_at(start_time: Instant, duration: Duration) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Dim factor at `now`, from MAX_DIM down to 0.0
    pub fn dim_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        // Hold the dim, then release with ease-in so the recovery is quick at the end
        Self::MAX_DIM * (1.0 - simple_easing::cubic_in(progress))
    }

    pub fn dim(&self) -> f32 {
        self.dim_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.duration
    }
}

/// Temporary text that replaces the submit button label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
