// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted touch sessions and sequencing checks for Capillary demos.
//!
//! A [`SessionScript`] lists touch events with host timestamps. [`run_script`]
//! replays the script against a [`RippleFeedback`], stepping it at a fixed
//! interval and recording one [`FeedbackSample`] per step. A
//! [`SequenceTracker`] then audits the recorded samples for the sequencing
//! rules a well-behaved feedback cycle obeys:
//!
//! - the circle never fades while the expand is still running,
//! - overlay opacity only rises when a press reveals the circle,
//! - a parked fade exists only during an expand, and is only released off one,
//! - a finished fade lands at zero opacity.
//!
//! The tracker assumes the step interval is shorter than the expand duration;
//! a whole expand hidden between two samples cannot be audited.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use capillary_core::feedback::{CycleEdges, FeedbackPhase, RippleFeedback};
use capillary_core::time::{Duration, HostTime};
use capillary_core::touch::TouchEvent;

/// One touch event scheduled at a host timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedTouch {
    /// Delivery time on the host clock.
    pub at: HostTime,
    /// The touch to deliver.
    pub event: TouchEvent,
}

/// A time-ordered list of touch events to replay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionScript {
    events: Vec<ScriptedTouch>,
}

impl SessionScript {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` at `at`. Events must be pushed in time order.
    pub fn push(&mut self, at: HostTime, event: TouchEvent) {
        if let Some(last) = self.events.last() {
            assert!(at >= last.at, "touch events must be scripted in time order");
        }
        self.events.push(ScriptedTouch { at, event });
    }

    /// Schedules a down/up pair at the same position.
    pub fn tap(&mut self, down_at: HostTime, up_at: HostTime, x: f64, y: f64) {
        self.push(down_at, TouchEvent::down(x, y));
        self.push(up_at, TouchEvent::up(x, y));
    }

    /// Returns the scheduled events in delivery order.
    #[must_use]
    pub fn events(&self) -> &[ScriptedTouch] {
        &self.events
    }

    /// Returns the number of scheduled events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Fixed-interval stepping window for [`run_script`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfig {
    /// First sampled instant.
    pub start: HostTime,
    /// Last sampled instant, inclusive.
    pub end: HostTime,
    /// Host-tick spacing between samples.
    pub interval: Duration,
}

/// Everything the audit needs to know about one step of a replay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackSample {
    /// When the step was taken.
    pub at: HostTime,
    /// Phase after advancing to `at`.
    pub phase: FeedbackPhase,
    /// Sampled overlay opacity.
    pub alpha: f64,
    /// Sampled circle scale.
    pub scale: f64,
    /// Whether a contract was parked behind the expand at this step.
    pub parked: bool,
    /// Edges crossed while advancing to `at`.
    pub edges: CycleEdges,
}

/// Replays `script` against `feedback`, stepping from `steps.start` to
/// `steps.end` inclusive.
///
/// Touch events are delivered with their scripted timestamps as soon as the
/// stepping clock passes them, so a touch keeps its sub-step timing. Events
/// scheduled after `steps.end` are never delivered.
pub fn run_script(
    feedback: &mut RippleFeedback,
    script: &SessionScript,
    steps: StepConfig,
) -> Vec<FeedbackSample> {
    assert!(
        steps.interval > Duration::ZERO,
        "step interval must be positive"
    );
    let mut samples = Vec::new();
    let mut pending = script.events().iter();
    let mut next = pending.next();
    let mut now = steps.start;
    while now <= steps.end {
        while let Some(touch) = next
            && touch.at <= now
        {
            feedback.on_touch(touch.event, touch.at);
            next = pending.next();
        }
        let edges = feedback.advance(now);
        let frame = feedback.sample(now);
        samples.push(FeedbackSample {
            at: now,
            phase: feedback.phase(),
            alpha: frame.alpha,
            scale: frame.circle_scale,
            parked: feedback.pending_contract().is_some(),
            edges,
        });
        now = now + steps.interval;
    }
    samples
}

/// A sequencing rule broken at a sampled step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Violation {
    /// Step at which the rule broke.
    pub at: HostTime,
    /// Which rule broke, with the offending values.
    pub kind: ViolationKind,
}

/// The sequencing rules [`SequenceTracker`] checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViolationKind {
    /// Overlay opacity fell below full while the expand was running.
    FadeDuringExpand { alpha: f64 },
    /// Opacity rose between steps without a reveal to explain it.
    RiseWithoutReveal { from: f64, to: f64 },
    /// A parked fade was released with no expand leading into it.
    ReleaseWithoutExpand,
    /// A parked fade was observed outside an expand.
    ParkedOutsideExpand,
    /// The fade completed above zero opacity.
    SettledAboveZero { alpha: f64 },
}

/// Aggregate verdict over one replayed session.
#[derive(Clone, Debug, PartialEq)]
pub struct SequencingReport {
    /// True when no rule was broken.
    pub clean: bool,
    /// Every broken rule, in replay order.
    pub violations: Vec<Violation>,
    /// Completed feedback cycles, counted at their settle edge.
    pub cycles: u32,
    /// Contracts that were parked behind an expand and released after it.
    pub deferred_hides: u32,
    /// Total steps audited.
    pub samples: usize,
}

/// Streaming auditor for [`FeedbackSample`]s.
///
/// Feed samples in replay order with [`observe`](Self::observe), then call
/// [`finish`](Self::finish) for the report.
#[derive(Clone, Debug, Default)]
pub struct SequenceTracker {
    previous: Option<FeedbackSample>,
    violations: Vec<Violation>,
    cycles: u32,
    deferred_hides: u32,
    samples: usize,
}

impl SequenceTracker {
    /// Creates a tracker with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks one sample against the rules and accumulates counters.
    pub fn observe(&mut self, sample: FeedbackSample) {
        self.samples += 1;
        if sample.phase == FeedbackPhase::Expanding && sample.alpha != 1.0 {
            self.flag(sample.at, ViolationKind::FadeDuringExpand { alpha: sample.alpha });
        }
        if sample.parked && sample.phase != FeedbackPhase::Expanding {
            self.flag(sample.at, ViolationKind::ParkedOutsideExpand);
        }
        if sample.edges.contract_started {
            self.deferred_hides += 1;
            let off_expand = self
                .previous
                .is_some_and(|p| p.phase == FeedbackPhase::Expanding);
            if !off_expand {
                self.flag(sample.at, ViolationKind::ReleaseWithoutExpand);
            }
        }
        if sample.edges.settled {
            self.cycles += 1;
            if sample.alpha != 0.0 {
                self.flag(sample.at, ViolationKind::SettledAboveZero { alpha: sample.alpha });
            }
        }
        if let Some(previous) = self.previous
            && sample.alpha > previous.alpha
            && sample.phase != FeedbackPhase::Expanding
        {
            self.flag(
                sample.at,
                ViolationKind::RiseWithoutReveal {
                    from: previous.alpha,
                    to: sample.alpha,
                },
            );
        }
        self.previous = Some(sample);
    }

    /// Consumes the tracker and returns the aggregate report.
    #[must_use]
    pub fn finish(self) -> SequencingReport {
        SequencingReport {
            clean: self.violations.is_empty(),
            violations: self.violations,
            cycles: self.cycles,
            deferred_hides: self.deferred_hides,
            samples: self.samples,
        }
    }

    fn flag(&mut self, at: HostTime, kind: ViolationKind) {
        self.violations.push(Violation { at, kind });
    }
}

/// Audits a full replay in one call.
#[must_use]
pub fn grade_session(samples: &[FeedbackSample]) -> SequencingReport {
    let mut tracker = SequenceTracker::new();
    for &sample in samples {
        tracker.observe(sample);
    }
    tracker.finish()
}
