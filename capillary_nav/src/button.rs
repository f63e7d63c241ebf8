// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressable button with ripple feedback.
//!
//! [`NavButton`] wraps one [`RippleFeedback`] with the option surface a
//! button exposes to its parent: a corner radius quoted as a percentage and
//! a single duration that drives both the expand and the fade. The tab bar
//! builds one per tab; the type also works standalone.

use capillary_core::color::Rgba;
use capillary_core::feedback::{CycleEdges, FeedbackFrame, RippleFeedback, RippleStyle};
use capillary_core::geometry::{CornerRadius, RippleLocation};
use capillary_core::time::{HostTime, Timebase};
use capillary_core::touch::{TouchEvent, TouchPhase};
use kurbo::{Point, Size};

/// Option surface for building a [`NavButton`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonOptions {
    /// Feedback mask color.
    pub mask_color: Rgba,
    /// Feedback circle color.
    pub ripple_color: Rgba,
    /// Mask corner radius as a percentage of the short side; `None` keeps
    /// the stock fixed rounding.
    pub corner_percent: Option<f64>,
    /// Duration for the expand and, locked to it, the fade.
    pub ripple_duration_ms: u64,
    /// Where the circle expands from.
    pub location: RippleLocation,
    /// Forwarded to [`RippleStyle::center_radius_clamp`].
    pub center_radius_clamp: bool,
    /// Whether presses are reported.
    pub enabled: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        let base = RippleStyle::default();
        Self {
            mask_color: base.mask_color,
            ripple_color: base.ripple_color,
            corner_percent: None,
            ripple_duration_ms: base.ripple_duration_ms,
            location: RippleLocation::TapLocation,
            center_radius_clamp: false,
            enabled: true,
        }
    }
}

/// A pressable region with ripple feedback.
///
/// Feedback runs for every touch, enabled or not; enablement only gates
/// press reporting. Outcome resolution (which page, scroll-to-top) is the
/// parent's concern.
#[derive(Clone, Debug)]
pub struct NavButton {
    feedback: RippleFeedback,
    enabled: bool,
}

impl NavButton {
    /// Builds the button, locking the fade duration to the expand duration.
    #[must_use]
    pub fn new(options: ButtonOptions, timebase: Timebase) -> Self {
        let base = RippleStyle::default();
        let style = RippleStyle {
            mask_color: options.mask_color,
            ripple_color: options.ripple_color,
            corner_radius: match options.corner_percent {
                Some(pct) => CornerRadius::Percent(pct),
                None => base.corner_radius,
            },
            ripple_duration_ms: options.ripple_duration_ms,
            mask_duration_ms: options.ripple_duration_ms,
            location: options.location,
            center_radius_clamp: options.center_radius_clamp,
            ..base
        };
        Self {
            feedback: RippleFeedback::new(style, timebase),
            enabled: options.enabled,
        }
    }

    /// Whether presses are reported.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables press reporting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Recomputes feedback geometry for a new box size.
    pub fn on_layout(&mut self, size: Size) {
        self.feedback.on_layout(size);
    }

    /// Records the button's frame origin in the parent's coordinate space.
    pub fn set_frame(&mut self, origin: Point) {
        self.feedback.set_frame(origin);
    }

    /// Routes a touch into the feedback and reports whether it was a press.
    ///
    /// A press is an Up while enabled. Cancel never presses.
    pub fn handle_touch(&mut self, event: TouchEvent, now: HostTime) -> bool {
        let pressed = event.phase == TouchPhase::Up && self.enabled;
        self.feedback.on_touch(event, now);
        pressed
    }

    /// Completes any feedback timelines that have run their course.
    pub fn advance(&mut self, now: HostTime) -> CycleEdges {
        self.feedback.advance(now)
    }

    /// Samples the feedback visuals at `now`.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> FeedbackFrame {
        self.feedback.sample(now)
    }

    /// The wrapped feedback instance.
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &RippleFeedback {
        &self.feedback
    }

    /// Mutable access for remote positioning and color overrides.
    #[inline]
    #[must_use]
    pub fn feedback_mut(&mut self) -> &mut RippleFeedback {
        &mut self.feedback
    }
}
