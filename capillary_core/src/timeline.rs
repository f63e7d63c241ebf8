// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar animation timelines.
//!
//! A [`Timeline`] is plain state (start time, optional delay, duration,
//! endpoints, easing) plus a pure sampling function from host time to the
//! interpolated value. Nothing here schedules anything: the host's animation
//! driver decides when to sample, and completion is detected by the caller
//! via [`Timeline::is_finished`]. This keeps every animated value in the kit
//! (ripple scale, mask alpha, tab activation, background and page fades)
//! deterministic under a scripted clock.

use crate::time::{Duration, HostTime};

/// Interpolation curve applied to a timeline's linear progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-rate interpolation. Used by the mask fade and page fades.
    #[default]
    Linear,
    /// Cubic ease-out, `1 - (1 - t)³`. Used by the ripple expand, which
    /// starts fast and settles.
    EaseOut,
}

impl Easing {
    /// Applies the curve to a clamped progress value in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// A scalar value animating between two endpoints over a fixed interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    start: HostTime,
    delay: Duration,
    duration: Duration,
    from: f64,
    to: f64,
    easing: Easing,
}

impl Timeline {
    /// Creates a timeline starting at `start` with no delay.
    #[must_use]
    pub fn new(start: HostTime, duration: Duration, from: f64, to: f64, easing: Easing) -> Self {
        Self {
            start,
            delay: Duration::ZERO,
            duration,
            from,
            to,
            easing,
        }
    }

    /// Returns this timeline with a delay before interpolation begins.
    ///
    /// Sampling inside the delay window returns `from`.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The value this timeline settles at.
    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now`, after the delay window.
    ///
    /// A zero-length duration snaps to 1 as soon as the delay has elapsed,
    /// so degenerate timelines settle instead of dividing by zero.
    #[must_use]
    pub fn progress(&self, now: HostTime) -> f64 {
        let begin = self.start + self.delay;
        let elapsed = now.saturating_duration_since(begin);
        if self.duration == Duration::ZERO {
            return if now < begin { 0.0 } else { 1.0 };
        }
        // Animation intervals stay far below 2^52 ticks, so the u64 to f64
        // conversions are lossless.
        let t = elapsed.ticks() as f64 / self.duration.ticks() as f64;
        t.clamp(0.0, 1.0)
    }

    /// The eased value at `now`.
    #[inline]
    #[must_use]
    pub fn sample(&self, now: HostTime) -> f64 {
        let t = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the timeline has run to completion at `now`.
    #[inline]
    #[must_use]
    pub fn is_finished(&self, now: HostTime) -> bool {
        now.saturating_duration_since(self.start + self.delay) >= self.duration
    }
}
