// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for feedback sequencing.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! widget drivers call as touches arrive, cycles progress, and evaluation
//! passes run. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! [`CycleSummaryBuilder`] collects the edge timestamps of one reveal cycle
//! (show → expand done → fade start → settle) and produces a
//! [`CycleSummary`] at the end.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates [`NodeChange`] records plus the
//!   corresponding `TraceSink` method.

use crate::feedback::HideAction;
use crate::time::HostTime;
use crate::touch::TouchPhase;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What a press on a tab resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressOutcome {
    /// The tab became the active page.
    Activated,
    /// The active tab was pressed again; the host should scroll to top.
    ScrollToTop,
    /// The tab is disabled; nothing happened.
    Disabled,
}

/// Which visual channel a node change belongs to.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Frame rect or corner radius.
    Geometry,
    /// Opacity.
    Opacity,
    /// Fill or tint color.
    Color,
    /// Label metrics (font size, label opacity).
    Label,
    /// Shadow offset.
    Shadow,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a touch lifecycle event is dispatched into a widget.
#[derive(Clone, Copy, Debug)]
pub struct TouchDispatchEvent {
    /// Host time at dispatch.
    pub timestamp: HostTime,
    /// Reported lifecycle phase.
    pub phase: TouchPhase,
    /// Surface-local x.
    pub x: f64,
    /// Surface-local y.
    pub y: f64,
    /// Index of the tab the touch landed on, if any.
    pub tab: Option<u32>,
}

/// Emitted when a reveal cycle starts (alpha and scale snap, expand begins).
#[derive(Clone, Copy, Debug)]
pub struct RippleShownEvent {
    /// Host time of the show.
    pub timestamp: HostTime,
    /// Resolved covering (or clamped) radius.
    pub radius: f64,
}

/// Emitted when a hide is requested.
#[derive(Clone, Copy, Debug)]
pub struct HideRequestEvent {
    /// Host time of the request.
    pub timestamp: HostTime,
    /// Whether the fade started now or was parked behind the expand.
    pub action: HideAction,
}

/// Emitted when the fade-out actually starts.
#[derive(Clone, Copy, Debug)]
pub struct ContractStartEvent {
    /// Host time the fade began.
    pub timestamp: HostTime,
    /// True when the fade was released from the pending slot rather than
    /// started directly by the hide request.
    pub deferred: bool,
}

/// Emitted when a cycle settles back to idle at zero opacity.
#[derive(Clone, Copy, Debug)]
pub struct CycleSettledEvent {
    /// Host time of the settle.
    pub timestamp: HostTime,
}

/// Emitted when a press on a tab is resolved.
#[derive(Clone, Copy, Debug)]
pub struct TabPressEvent {
    /// Host time of the press.
    pub timestamp: HostTime,
    /// Index of the pressed tab.
    pub tab: u32,
    /// What the press resolved to.
    pub outcome: PressOutcome,
}

/// Emitted when the paged host switches pages.
#[derive(Clone, Copy, Debug)]
pub struct PageChangeEvent {
    /// Host time of the switch.
    pub timestamp: HostTime,
    /// Page being left.
    pub from: u32,
    /// Page being entered.
    pub to: u32,
}

/// Per-evaluation summary of what an evaluate pass touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluateSummary {
    /// Monotonic evaluation counter.
    pub frame_index: u64,
    /// Host time the pass ran at.
    pub timestamp: HostTime,
    /// Nodes whose frame or corner radius changed.
    pub geometry_changes: u32,
    /// Nodes whose opacity changed.
    pub opacity_changes: u32,
    /// Nodes whose color changed.
    pub color_changes: u32,
    /// Nodes whose label metrics changed.
    pub label_changes: u32,
    /// Nodes whose shadow offset changed.
    pub shadow_changes: u32,
}

impl EvaluateSummary {
    /// Whether the pass changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry_changes == 0
            && self.opacity_changes == 0
            && self.color_changes == 0
            && self.label_changes == 0
            && self.shadow_changes == 0
    }
}

/// A per-evaluation node change record.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct NodeChange {
    /// Index of the node that changed.
    pub node_index: u32,
    /// Which channel changed.
    pub channel: ChannelKind,
}

/// Summary of one complete reveal cycle.
#[derive(Clone, Copy, Debug)]
pub struct CycleSummary {
    /// Host time the cycle started.
    pub shown_at: HostTime,
    /// Ticks spent expanding (0 if not observed).
    pub expand_ticks: u64,
    /// Ticks between expand completion and fade start (0 when the fade was
    /// deferred and fired immediately, or not observed).
    pub dwell_ticks: u64,
    /// Ticks spent fading (0 if not observed).
    pub fade_ticks: u64,
    /// Whether the fade was released from the pending slot.
    pub deferred: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from widget drivers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a touch is dispatched into a widget.
    fn on_touch(&mut self, e: &TouchDispatchEvent) {
        _ = e;
    }

    /// Called when a reveal cycle starts.
    fn on_ripple_shown(&mut self, e: &RippleShownEvent) {
        _ = e;
    }

    /// Called when a hide is requested.
    fn on_hide_request(&mut self, e: &HideRequestEvent) {
        _ = e;
    }

    /// Called when the fade-out starts.
    fn on_contract_start(&mut self, e: &ContractStartEvent) {
        _ = e;
    }

    /// Called when a cycle settles to idle.
    fn on_cycle_settled(&mut self, e: &CycleSettledEvent) {
        _ = e;
    }

    /// Called when a tab press resolves.
    fn on_tab_press(&mut self, e: &TabPressEvent) {
        _ = e;
    }

    /// Called when the paged host switches pages.
    fn on_page_change(&mut self, e: &PageChangeEvent) {
        _ = e;
    }

    /// Called with a summary after each evaluate pass.
    fn on_evaluate_summary(&mut self, s: &EvaluateSummary) {
        _ = s;
    }

    /// Called with a completed cycle summary.
    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        _ = s;
    }

    /// Called with per-evaluation node changes (requires `trace-rich`).
    #[cfg(feature = "trace-rich")]
    fn on_node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        _ = (frame_index, changes);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TouchDispatchEvent`].
    #[inline]
    pub fn touch(&mut self, e: &TouchDispatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_touch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RippleShownEvent`].
    #[inline]
    pub fn ripple_shown(&mut self, e: &RippleShownEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ripple_shown(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HideRequestEvent`].
    #[inline]
    pub fn hide_request(&mut self, e: &HideRequestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hide_request(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ContractStartEvent`].
    #[inline]
    pub fn contract_start(&mut self, e: &ContractStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_contract_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CycleSettledEvent`].
    #[inline]
    pub fn cycle_settled(&mut self, e: &CycleSettledEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cycle_settled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TabPressEvent`].
    #[inline]
    pub fn tab_press(&mut self, e: &TabPressEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tab_press(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PageChangeEvent`].
    #[inline]
    pub fn page_change(&mut self, e: &PageChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EvaluateSummary`].
    #[inline]
    pub fn evaluate_summary(&mut self, s: &EvaluateSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_evaluate_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits a [`CycleSummary`].
    #[inline]
    pub fn cycle_summary(&mut self, s: &CycleSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_cycle_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits node changes (requires `trace-rich`).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        if let Some(s) = &mut self.sink {
            s.on_node_changes(frame_index, changes);
        }
    }
}

// ---------------------------------------------------------------------------
// CycleSummaryBuilder
// ---------------------------------------------------------------------------

/// Collects edge timestamps of one reveal cycle and produces a
/// [`CycleSummary`].
#[derive(Debug)]
pub struct CycleSummaryBuilder {
    shown_at: HostTime,
    expand_done: Option<HostTime>,
    fade_start: Option<HostTime>,
    settled: Option<HostTime>,
    deferred: bool,
}

impl CycleSummaryBuilder {
    /// Starts a summary for a cycle shown at `shown_at`.
    #[must_use]
    pub fn new(shown_at: HostTime) -> Self {
        Self {
            shown_at,
            expand_done: None,
            fade_start: None,
            settled: None,
            deferred: false,
        }
    }

    /// Records the expand completion instant.
    pub fn expand_done(&mut self, t: HostTime) {
        self.expand_done = Some(t);
    }

    /// Records the fade start instant and whether it was deferred.
    pub fn fade_start(&mut self, t: HostTime, deferred: bool) {
        self.fade_start = Some(t);
        self.deferred = deferred;
    }

    /// Records the settle instant.
    pub fn settled(&mut self, t: HostTime) {
        self.settled = Some(t);
    }

    /// Consumes the builder and produces the summary.
    ///
    /// Unobserved edges yield zero durations.
    #[must_use]
    pub fn finish(self) -> CycleSummary {
        let expand_ticks = self
            .expand_done
            .map_or(0, |t| t.saturating_duration_since(self.shown_at).ticks());
        let dwell_ticks = match (self.expand_done, self.fade_start) {
            (Some(done), Some(start)) => start.saturating_duration_since(done).ticks(),
            _ => 0,
        };
        let fade_ticks = match (self.fade_start, self.settled) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).ticks(),
            _ => 0,
        };
        CycleSummary {
            shown_at: self.shown_at,
            expand_ticks,
            dwell_ticks,
            fade_ticks,
            deferred: self.deferred,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
