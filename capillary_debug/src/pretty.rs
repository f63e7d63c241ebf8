// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] prints one tagged line per trace event, with
//! timestamps rendered in microseconds through a [`Timebase`]. It writes to
//! any [`Write`](std::io::Write) destination and defaults to stderr so
//! traced demos keep stdout for their own output.

use std::io::Write;

use capillary_core::feedback::HideAction;
use capillary_core::time::Timebase;
use capillary_core::touch::TouchPhase;
use capillary_core::trace::{
    ContractStartEvent, CycleSettledEvent, CycleSummary, EvaluateSummary, HideRequestEvent,
    NodeChange, PageChangeEvent, PressOutcome, RippleShownEvent, TabPressEvent,
    TouchDispatchEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: capillary_core::time::HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

fn phase_name(phase: TouchPhase) -> &'static str {
    match phase {
        TouchPhase::Down => "down",
        TouchPhase::Up => "up",
        TouchPhase::Cancel => "cancel",
    }
}

fn action_name(action: HideAction) -> &'static str {
    match action {
        HideAction::Immediate => "immediate",
        HideAction::Deferred => "deferred",
    }
}

fn outcome_name(outcome: PressOutcome) -> &'static str {
    match outcome {
        PressOutcome::Activated => "activated",
        PressOutcome::ScrollToTop => "scroll-to-top",
        PressOutcome::Disabled => "disabled",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_touch(&mut self, e: &TouchDispatchEvent) {
        let tab = e.tab.map_or_else(|| "-".into(), |t| t.to_string());
        let _ = writeln!(
            self.writer,
            "[touch] {} ({:.1}, {:.1}) tab={tab} at {:.1}µs",
            phase_name(e.phase),
            e.x,
            e.y,
            self.host_us(e.timestamp),
        );
    }

    fn on_ripple_shown(&mut self, e: &RippleShownEvent) {
        let _ = writeln!(
            self.writer,
            "[show] radius={:.1} at {:.1}µs",
            e.radius,
            self.host_us(e.timestamp),
        );
    }

    fn on_hide_request(&mut self, e: &HideRequestEvent) {
        let _ = writeln!(
            self.writer,
            "[hide] {} at {:.1}µs",
            action_name(e.action),
            self.host_us(e.timestamp),
        );
    }

    fn on_contract_start(&mut self, e: &ContractStartEvent) {
        let _ = writeln!(
            self.writer,
            "[contract] deferred={} at {:.1}µs",
            e.deferred,
            self.host_us(e.timestamp),
        );
    }

    fn on_cycle_settled(&mut self, e: &CycleSettledEvent) {
        let _ = writeln!(
            self.writer,
            "[settle] at {:.1}µs",
            self.host_us(e.timestamp),
        );
    }

    fn on_tab_press(&mut self, e: &TabPressEvent) {
        let _ = writeln!(
            self.writer,
            "[press] tab={} {} at {:.1}µs",
            e.tab,
            outcome_name(e.outcome),
            self.host_us(e.timestamp),
        );
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[page] from={} to={} at {:.1}µs",
            e.from,
            e.to,
            self.host_us(e.timestamp),
        );
    }

    fn on_evaluate_summary(&mut self, s: &EvaluateSummary) {
        let _ = writeln!(
            self.writer,
            "[evaluate] frame={} geometry={} opacity={} color={} label={} shadow={} at {:.1}µs",
            s.frame_index,
            s.geometry_changes,
            s.opacity_changes,
            s.color_changes,
            s.label_changes,
            s.shadow_changes,
            self.host_us(s.timestamp),
        );
    }

    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        let _ = writeln!(
            self.writer,
            "[cycle] shown={:.1}µs expand={:.1}µs dwell={:.1}µs fade={:.1}µs deferred={}",
            self.host_us(s.shown_at),
            self.ticks_to_us(s.expand_ticks),
            self.ticks_to_us(s.dwell_ticks),
            self.ticks_to_us(s.fade_ticks),
            s.deferred,
        );
    }

    fn on_node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        let _ = writeln!(
            self.writer,
            "[nodes] frame={frame_index} changes={}",
            changes.len(),
        );
    }
}
