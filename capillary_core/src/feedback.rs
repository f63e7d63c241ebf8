// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple feedback state machine.
//!
//! [`RippleFeedback`] renders a mask layer and an expanding circle in
//! response to touch lifecycle events, and sequences their appearance and
//! disappearance so a rapid down→up touch never leaves a stuck or glitching
//! ripple. The cycle is:
//!
//! ```text
//!   Idle ──show──► Expanding ──expand done, pending──► Contracting ──► Idle
//!                      │                                    ▲
//!                      └──expand done, nothing pending──► Idle ──hide──┘
//! ```
//!
//! A hide request that arrives while the expand is still running is parked
//! in a single [`PendingContract`] slot and fired from [`advance`] when the
//! expand completes; a second show discards the slot and snaps the visual
//! state back to the start of a fresh cycle. At most one expand and one
//! parked contract exist at any time.
//!
//! All sequencing is driven by host time: the host calls
//! [`advance`](RippleFeedback::advance) from its animation driver, then
//! reads the sampled visual values via [`sample`](RippleFeedback::sample).
//! Nothing here schedules callbacks.

use kurbo::{Point, Rect, Size};

use crate::color::Rgba;
use crate::geometry::{CornerRadius, MaskGeometry, RippleGeometry, RippleLocation};
use crate::time::{Duration, HostTime, Timebase};
use crate::timeline::{Easing, Timeline};
use crate::touch::{TouchEvent, TouchPhase};

/// Scale the circle snaps to when a cycle starts.
const INITIAL_SCALE: f64 = 0.3;

/// Shadow y-offset at rest and fully expanded.
const SHADOW_REST: f64 = 1.0;
const SHADOW_RAISED: f64 = 1.5;

/// Configuration for one [`RippleFeedback`] instance.
///
/// Durations are quoted in milliseconds and resolved against the host
/// timebase at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleStyle {
    /// Color of the expanding circle.
    pub ripple_color: Rgba,
    /// Color of the mask layer behind the circle.
    pub mask_color: Rgba,
    /// Whether the mask clips the circle to its rounded rect.
    pub mask_enabled: bool,
    /// Corner rounding of the mask layer.
    pub corner_radius: CornerRadius,
    /// Expand duration in milliseconds.
    pub ripple_duration_ms: u64,
    /// Fade-out duration in milliseconds.
    pub mask_duration_ms: u64,
    /// Where the circle expands from.
    pub location: RippleLocation,
    /// Whether the shadow offset is raised in sync with the expand.
    pub shadow_animation: bool,
    /// Clamp the circle radius to the mask's corner radius when the hotspot
    /// is centered and the corner radius is percentage-based.
    ///
    /// This reproduces a platform workaround for unreliable clipping; it is
    /// off by default and enabled only by styles targeting that platform.
    pub center_radius_clamp: bool,
}

impl RippleStyle {
    /// Default circle color, a low-alpha white.
    pub const DEFAULT_RIPPLE_COLOR: Rgba = Rgba::from_rgb8(255, 255, 255, 0.2);

    /// Default mask color, a slightly fainter white.
    pub const DEFAULT_MASK_COLOR: Rgba = Rgba::from_rgb8(255, 255, 255, 0.15);
}

impl Default for RippleStyle {
    fn default() -> Self {
        Self {
            ripple_color: Self::DEFAULT_RIPPLE_COLOR,
            mask_color: Self::DEFAULT_MASK_COLOR,
            mask_enabled: true,
            corner_radius: CornerRadius::Fixed(2.0),
            ripple_duration_ms: 200,
            mask_duration_ms: 200,
            location: RippleLocation::TapLocation,
            shadow_animation: true,
            center_radius_clamp: false,
        }
    }
}

/// Coarse animation phase of a feedback instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackPhase {
    /// No animation running.
    Idle,
    /// The circle is expanding toward full scale.
    Expanding,
    /// The overlay is fading out.
    Contracting,
}

/// A parked fade-out request, fired when the in-flight expand completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingContract {
    /// Fade duration captured when the hide was requested.
    pub duration: Duration,
}

/// How a hide request was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideAction {
    /// The fade-out started immediately.
    Immediate,
    /// The fade-out was parked behind the in-flight expand.
    Deferred,
}

/// Completion edges crossed during one [`RippleFeedback::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleEdges {
    /// The expand timeline ran to completion.
    pub expand_finished: bool,
    /// A parked contract was released and its fade started.
    pub contract_started: bool,
    /// The fade ran to completion and the instance settled to idle.
    pub settled: bool,
}

impl CycleEdges {
    /// Whether no edge was crossed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.expand_finished || self.contract_started || self.settled)
    }
}

/// Sampled visual values for one feedback instance at one instant.
///
/// Rects are local to the instance's box; parents offset by the instance
/// frame (see [`RippleFeedback::measure`]) when composing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackFrame {
    /// Overlay opacity in `[0, 1]`, applied to mask and circle together.
    pub alpha: f64,
    /// The mask layer's rect (the instance box).
    pub mask_frame: Rect,
    /// The mask's resolved corner radius.
    pub mask_corner_radius: f64,
    /// The mask layer's color.
    pub mask_color: Rgba,
    /// Whether the host should clip the circle to the mask shape.
    pub mask_enabled: bool,
    /// The circle's unscaled bounding square.
    pub circle_frame: Rect,
    /// The circle's color.
    pub circle_color: Rgba,
    /// Scale applied to the circle about its center, in `[0, 1]`.
    pub circle_scale: f64,
    /// Shadow y-offset, raised from 1.0 to 1.5 across the expand when
    /// shadow animation is enabled, back at 1.0 once the fade starts.
    pub shadow_offset_y: f64,
}

/// Phase state with the timeline driving it, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
enum PhaseState {
    Idle,
    Expanding { scale: Timeline },
    Contracting { alpha: Timeline },
}

/// Touch feedback for one widget: an expanding circular reveal bounded by an
/// optional clipping mask.
///
/// Geometry is recomputed whenever the size changes or a new hotspot
/// arrives; animation state lives for the instance's lifetime and is only
/// mutated through the public methods. Parents may override colors and
/// coordinates remotely ([`set_colors`](Self::set_colors),
/// [`set_coordinates`](Self::set_coordinates)) to reuse one instance across
/// siblings.
#[derive(Clone, Debug)]
pub struct RippleFeedback {
    style: RippleStyle,
    timebase: Timebase,
    mask_color: Rgba,
    ripple_color: Rgba,
    size: Size,
    frame_origin: Point,
    hotspot: Option<Point>,
    mask: MaskGeometry,
    geometry: RippleGeometry,
    alpha: f64,
    scale: f64,
    phase: PhaseState,
    pending: Option<PendingContract>,
}

impl RippleFeedback {
    /// Creates an idle instance with the given style.
    #[must_use]
    pub fn new(style: RippleStyle, timebase: Timebase) -> Self {
        Self {
            style,
            timebase,
            mask_color: style.mask_color,
            ripple_color: style.ripple_color,
            size: Size::ZERO,
            frame_origin: Point::ZERO,
            hotspot: None,
            mask: MaskGeometry::default(),
            geometry: RippleGeometry::default(),
            alpha: 0.0,
            scale: 0.0,
            phase: PhaseState::Idle,
            pending: None,
        }
    }

    /// The style this instance was created with.
    #[inline]
    #[must_use]
    pub fn style(&self) -> &RippleStyle {
        &self.style
    }

    /// Current coarse phase.
    #[must_use]
    pub fn phase(&self) -> FeedbackPhase {
        match self.phase {
            PhaseState::Idle => FeedbackPhase::Idle,
            PhaseState::Expanding { .. } => FeedbackPhase::Expanding,
            PhaseState::Contracting { .. } => FeedbackPhase::Contracting,
        }
    }

    /// The parked contract, if a hide request is waiting on the expand.
    #[inline]
    #[must_use]
    pub fn pending_contract(&self) -> Option<PendingContract> {
        self.pending
    }

    /// Current ripple geometry (zero until a hotspot is known).
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> RippleGeometry {
        self.geometry
    }

    /// Current mask geometry.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> MaskGeometry {
        self.mask
    }

    // -- host surface -------------------------------------------------------

    /// Records the instance's frame origin in the parent's coordinate space.
    ///
    /// Stands in for the view-system measurement the widget would otherwise
    /// query; [`measure`](Self::measure) reads it back.
    pub fn set_frame(&mut self, origin: Point) {
        self.frame_origin = origin;
    }

    /// The instance's absolute frame, as last reported by the host.
    #[inline]
    #[must_use]
    pub fn measure(&self) -> Rect {
        Rect::from_origin_size(self.frame_origin, self.size)
    }

    /// Recomputes geometry for a new box size.
    ///
    /// The mask is always re-resolved; the ripple is re-resolved against the
    /// last known hotspot, so a ripple in progress rescales consistently if
    /// the view is resized. Pure recomputation, no animation change.
    pub fn on_layout(&mut self, size: Size) {
        self.size = size;
        self.mask = MaskGeometry::resolve(self.style.corner_radius, size);
        if self.hotspot.is_some() || self.style.location == RippleLocation::Center {
            self.recompute_ripple();
        }
    }

    /// Dispatches a touch lifecycle event.
    ///
    /// Down resolves the hotspot and starts a fresh cycle; Up and Cancel
    /// request the fade-out.
    pub fn on_touch(&mut self, event: TouchEvent, now: HostTime) {
        match event.phase {
            TouchPhase::Down => {
                self.hotspot = Some(event.position);
                self.recompute_ripple();
                self.show_ripple(now);
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                let _ = self.hide_ripple(now);
            }
        }
    }

    /// Starts a fresh reveal cycle.
    ///
    /// Snaps the overlay to full opacity and the circle to its initial
    /// scale, discards any parked contract, and begins the eased expand.
    pub fn show_ripple(&mut self, now: HostTime) {
        self.pending = None;
        self.alpha = 1.0;
        self.scale = INITIAL_SCALE;
        let duration = Duration::from_millis(self.style.ripple_duration_ms, self.timebase);
        self.phase = PhaseState::Expanding {
            scale: Timeline::new(now, duration, INITIAL_SCALE, 1.0, Easing::EaseOut),
        };
    }

    /// Requests the fade-out.
    ///
    /// If an expand is in flight the request is parked in the single
    /// pending slot (replacing any previous one) and fires when the expand
    /// completes; otherwise the fade starts immediately from the current
    /// opacity.
    pub fn hide_ripple(&mut self, now: HostTime) -> HideAction {
        let duration = Duration::from_millis(self.style.mask_duration_ms, self.timebase);
        if matches!(self.phase, PhaseState::Expanding { .. }) {
            self.pending = Some(PendingContract { duration });
            return HideAction::Deferred;
        }
        let from = self.current_alpha(now);
        self.alpha = from;
        self.phase = PhaseState::Contracting {
            alpha: Timeline::new(now, duration, from, 0.0, Easing::Linear),
        };
        HideAction::Immediate
    }

    /// Repositions the ripple for an externally supplied hotspot.
    ///
    /// Geometry only; animation state is untouched. Used when a sibling
    /// (e.g. a tab bar's shared ripple) positions this instance remotely.
    pub fn set_coordinates(&mut self, position: Point) {
        self.hotspot = Some(position);
        self.recompute_ripple();
    }

    /// Overrides both colors for subsequent cycles.
    pub fn set_colors(&mut self, mask: Rgba, ripple: Rgba) {
        self.mask_color = mask;
        self.ripple_color = ripple;
    }

    // -- frame driver -------------------------------------------------------

    /// Completes any timelines that have run their course by `now`.
    ///
    /// When the expand finishes, a parked contract is released and its fade
    /// starts from this call's `now`. When the fade finishes, the instance
    /// settles to idle at zero opacity. Returns the edges crossed.
    pub fn advance(&mut self, now: HostTime) -> CycleEdges {
        let mut edges = CycleEdges::default();

        if let PhaseState::Expanding { scale } = self.phase {
            if scale.is_finished(now) {
                self.scale = scale.to();
                edges.expand_finished = true;
                match self.pending.take() {
                    Some(contract) => {
                        self.phase = PhaseState::Contracting {
                            alpha: Timeline::new(
                                now,
                                contract.duration,
                                self.alpha,
                                0.0,
                                Easing::Linear,
                            ),
                        };
                        edges.contract_started = true;
                    }
                    None => self.phase = PhaseState::Idle,
                }
            }
        }

        if let PhaseState::Contracting { alpha } = self.phase {
            if alpha.is_finished(now) {
                self.alpha = alpha.to();
                self.phase = PhaseState::Idle;
                edges.settled = true;
            }
        }

        edges
    }

    /// Samples the visual values at `now`.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> FeedbackFrame {
        let alpha = self.current_alpha(now);
        let scale = self.current_scale(now);
        FeedbackFrame {
            alpha,
            mask_frame: Rect::from_origin_size(Point::ZERO, self.size),
            mask_corner_radius: self.mask.corner_radius,
            mask_color: self.mask_color,
            mask_enabled: self.style.mask_enabled,
            circle_frame: self.geometry.bounds(),
            circle_color: self.ripple_color,
            circle_scale: scale,
            shadow_offset_y: self.shadow_offset(scale),
        }
    }

    // -- internals ----------------------------------------------------------

    fn current_alpha(&self, now: HostTime) -> f64 {
        match self.phase {
            PhaseState::Contracting { alpha } => alpha.sample(now),
            _ => self.alpha,
        }
    }

    fn current_scale(&self, now: HostTime) -> f64 {
        match self.phase {
            PhaseState::Expanding { scale } => scale.sample(now),
            _ => self.scale,
        }
    }

    /// Shadow offset for a sampled `scale`.
    ///
    /// Raised across the expand, held while the overlay stays lit, and back
    /// at rest from the moment the fade starts.
    fn shadow_offset(&self, scale: f64) -> f64 {
        if !self.style.shadow_animation {
            return SHADOW_REST;
        }
        let resting = match self.phase {
            PhaseState::Contracting { .. } => true,
            PhaseState::Idle => self.alpha == 0.0,
            PhaseState::Expanding { .. } => false,
        };
        if resting {
            return SHADOW_REST;
        }
        let progress = ((scale - INITIAL_SCALE) / (1.0 - INITIAL_SCALE)).clamp(0.0, 1.0);
        SHADOW_REST + (SHADOW_RAISED - SHADOW_REST) * progress
    }

    /// Recomputes the circle from the resolved hotspot.
    ///
    /// The covering radius is the default; the center clamp pins the radius
    /// to the mask's corner radius when the style asks for it, the hotspot
    /// mode is centered, and the corner radius is a positive percentage.
    fn recompute_ripple(&mut self) {
        let touch = self.hotspot.unwrap_or(Point::ZERO);
        let hotspot = self.style.location.resolve(self.size, touch);
        let clamp = self.style.center_radius_clamp
            && self.style.location == RippleLocation::Center
            && self.style.corner_radius.is_positive_percent();
        self.geometry = if clamp {
            RippleGeometry::with_radius(self.mask.corner_radius, hotspot)
        } else {
            RippleGeometry::covering(self.size, hotspot)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timebase where one tick is one millisecond.
    const MS: Timebase = Timebase::new(1_000_000, 1);

    fn at(ms: u64) -> HostTime {
        HostTime(ms)
    }

    fn make_feedback(style: RippleStyle) -> RippleFeedback {
        let mut feedback = RippleFeedback::new(style, MS);
        feedback.on_layout(Size::new(200.0, 100.0));
        feedback
    }

    #[test]
    fn down_starts_expand_with_snap() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.on_touch(TouchEvent::down(10.0, 10.0), at(0));

        assert_eq!(feedback.phase(), FeedbackPhase::Expanding);
        let frame = feedback.sample(at(0));
        assert_eq!(frame.alpha, 1.0, "alpha snaps to 1");
        assert_eq!(frame.circle_scale, 0.3, "scale snaps to 0.3");
        assert!((feedback.geometry().radius - 44_200.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn expand_settles_at_full_scale() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));

        let edges = feedback.advance(at(199));
        assert!(edges.is_empty(), "still in flight one tick early");

        let edges = feedback.advance(at(200));
        assert!(edges.expand_finished);
        assert!(!edges.contract_started, "nothing was parked");
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
        assert_eq!(feedback.sample(at(200)).circle_scale, 1.0);
        assert_eq!(feedback.sample(at(200)).alpha, 1.0, "overlay stays lit");
    }

    #[test]
    fn hide_during_expand_is_deferred() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));

        assert_eq!(feedback.hide_ripple(at(50)), HideAction::Deferred);
        assert!(feedback.pending_contract().is_some());
        assert_eq!(feedback.sample(at(60)).alpha, 1.0, "fade has not started");

        let edges = feedback.advance(at(200));
        assert!(edges.expand_finished);
        assert!(edges.contract_started, "parked contract released");
        assert!(feedback.pending_contract().is_none());
        assert_eq!(feedback.phase(), FeedbackPhase::Contracting);

        // Fade runs from the expand-completion instant.
        assert_eq!(feedback.sample(at(300)).alpha, 0.5);
        let edges = feedback.advance(at(400));
        assert!(edges.settled);
        assert_eq!(feedback.sample(at(400)).alpha, 0.0);
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
    }

    #[test]
    fn hide_after_expand_fades_immediately() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        feedback.advance(at(200));

        assert_eq!(feedback.hide_ripple(at(250)), HideAction::Immediate);
        assert_eq!(feedback.phase(), FeedbackPhase::Contracting);
        assert_eq!(feedback.sample(at(350)).alpha, 0.5);
        assert_eq!(feedback.sample(at(450)).alpha, 0.0);
    }

    #[test]
    fn reshow_discards_pending_contract() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        feedback.hide_ripple(at(50));
        assert!(feedback.pending_contract().is_some());

        feedback.show_ripple(at(80));
        assert!(
            feedback.pending_contract().is_none(),
            "stale contract discarded on re-show"
        );
        let frame = feedback.sample(at(80));
        assert_eq!(frame.alpha, 1.0);
        assert_eq!(frame.circle_scale, 0.3);

        // The new expand completes with nothing parked.
        let edges = feedback.advance(at(280));
        assert!(edges.expand_finished);
        assert!(!edges.contract_started);
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
    }

    #[test]
    fn set_coordinates_touches_geometry_only() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        feedback.hide_ripple(at(50));

        let phase_before = feedback.phase();
        let pending_before = feedback.pending_contract();
        let alpha_before = feedback.sample(at(60)).alpha;
        let scale_before = feedback.sample(at(60)).circle_scale;

        feedback.set_coordinates(Point::new(100.0, 50.0));

        assert_eq!(feedback.phase(), phase_before);
        assert_eq!(feedback.pending_contract(), pending_before);
        assert_eq!(feedback.sample(at(60)).alpha, alpha_before);
        assert_eq!(feedback.sample(at(60)).circle_scale, scale_before);
        let hotspot = feedback.geometry().hotspot();
        assert!((hotspot.x - 100.0).abs() < 1e-9);
        assert!((hotspot.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn refade_restarts_from_current_alpha() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        feedback.advance(at(200));
        feedback.hide_ripple(at(200));

        // Halfway through the fade, a second hide restarts from 0.5.
        assert_eq!(feedback.sample(at(300)).alpha, 0.5);
        feedback.hide_ripple(at(300));
        assert_eq!(feedback.sample(at(400)).alpha, 0.25);
        assert_eq!(feedback.sample(at(500)).alpha, 0.0);
    }

    #[test]
    fn relayout_rescales_ripple_in_progress() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.on_touch(TouchEvent::down(10.0, 10.0), at(0));
        assert!((feedback.geometry().radius - 44_200.0_f64.sqrt()).abs() < 1e-9);

        feedback.on_layout(Size::new(100.0, 100.0));
        assert!(
            (feedback.geometry().radius - 16_200.0_f64.sqrt()).abs() < 1e-9,
            "geometry recomputed against the new box with the old hotspot"
        );
        assert_eq!(
            feedback.phase(),
            FeedbackPhase::Expanding,
            "layout does not disturb the animation"
        );
    }

    #[test]
    fn center_clamp_pins_radius_to_mask() {
        let style = RippleStyle {
            location: RippleLocation::Center,
            corner_radius: CornerRadius::Percent(50.0),
            center_radius_clamp: true,
            ..RippleStyle::default()
        };
        let mut feedback = RippleFeedback::new(style, MS);
        feedback.on_layout(Size::new(100.0, 100.0));
        feedback.on_touch(TouchEvent::down(10.0, 10.0), at(0));

        let geometry = feedback.geometry();
        assert!((geometry.radius - 50.0).abs() < 1e-9, "radius = mask corner");
        let hotspot = geometry.hotspot();
        assert!((hotspot.x - 50.0).abs() < 1e-9, "hotspot forced to center");
        assert!((hotspot.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_requires_all_three_conditions() {
        // Same style without the clamp flag falls back to the covering circle.
        let style = RippleStyle {
            location: RippleLocation::Center,
            corner_radius: CornerRadius::Percent(50.0),
            ..RippleStyle::default()
        };
        let mut feedback = RippleFeedback::new(style, MS);
        feedback.on_layout(Size::new(100.0, 100.0));
        feedback.on_touch(TouchEvent::down(0.0, 0.0), at(0));
        assert!((feedback.geometry().radius - 5_000.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn set_colors_overrides_sampled_colors() {
        let mut feedback = make_feedback(RippleStyle::default());
        let mask = Rgba::from_rgb8(33, 150, 243, 0.2);
        let ripple = Rgba::from_rgb8(33, 150, 243, 0.75);
        feedback.set_colors(mask, ripple);

        let frame = feedback.sample(at(0));
        assert_eq!(frame.mask_color, mask);
        assert_eq!(frame.circle_color, ripple);
    }

    #[test]
    fn up_without_show_settles_quietly() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.on_touch(TouchEvent::up(10.0, 10.0), at(0));
        assert_eq!(feedback.phase(), FeedbackPhase::Contracting);
        let edges = feedback.advance(at(200));
        assert!(edges.settled);
        assert_eq!(feedback.sample(at(200)).alpha, 0.0);
    }

    #[test]
    fn shadow_follows_expand_when_enabled() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        assert_eq!(feedback.sample(at(0)).shadow_offset_y, 1.0);
        feedback.advance(at(200));
        assert_eq!(feedback.sample(at(200)).shadow_offset_y, 1.5);

        let style = RippleStyle {
            shadow_animation: false,
            ..RippleStyle::default()
        };
        let mut flat = make_feedback(style);
        flat.show_ripple(at(0));
        flat.advance(at(200));
        assert_eq!(flat.sample(at(200)).shadow_offset_y, 1.0);
    }

    #[test]
    fn shadow_rests_once_the_fade_starts() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.show_ripple(at(0));
        feedback.advance(at(200));
        assert_eq!(feedback.sample(at(250)).shadow_offset_y, 1.5, "lit and raised");

        feedback.hide_ripple(at(250));
        assert_eq!(feedback.sample(at(260)).shadow_offset_y, 1.0, "drops at fade start");
        feedback.advance(at(450));
        assert_eq!(feedback.sample(at(500)).shadow_offset_y, 1.0, "settled at rest");
    }

    #[test]
    fn measure_reports_host_frame() {
        let mut feedback = make_feedback(RippleStyle::default());
        feedback.set_frame(Point::new(56.0, 512.0));
        let frame = feedback.measure();
        assert_eq!(frame.origin(), Point::new(56.0, 512.0));
        assert_eq!(frame.size(), Size::new(200.0, 100.0));
    }
}
