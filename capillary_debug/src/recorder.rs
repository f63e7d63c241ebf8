// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Rich events ([`on_node_changes`](TraceSink::on_node_changes)) store only
//! the count.

use capillary_core::feedback::HideAction;
use capillary_core::time::HostTime;
use capillary_core::touch::TouchPhase;
use capillary_core::trace::{
    ContractStartEvent, CycleSettledEvent, CycleSummary, EvaluateSummary, HideRequestEvent,
    NodeChange, PageChangeEvent, PressOutcome, RippleShownEvent, TabPressEvent,
    TouchDispatchEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TOUCH: u8 = 1;
const TAG_RIPPLE_SHOWN: u8 = 2;
const TAG_HIDE_REQUEST: u8 = 3;
const TAG_CONTRACT_START: u8 = 4;
const TAG_CYCLE_SETTLED: u8 = 5;
const TAG_TAB_PRESS: u8 = 6;
const TAG_PAGE_CHANGE: u8 = 7;
const TAG_EVALUATE_SUMMARY: u8 = 8;
const TAG_CYCLE_SUMMARY: u8 = 9;
const TAG_NODE_CHANGES_COUNT: u8 = 10;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_option_u32(&mut self, v: Option<u32>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_u32(val);
            }
            None => {
                self.write_u8(0);
                self.write_u32(0);
            }
        }
    }

    fn write_touch_phase(&mut self, p: TouchPhase) {
        self.write_u8(match p {
            TouchPhase::Down => 0,
            TouchPhase::Up => 1,
            TouchPhase::Cancel => 2,
        });
    }

    fn write_hide_action(&mut self, a: HideAction) {
        self.write_u8(match a {
            HideAction::Immediate => 0,
            HideAction::Deferred => 1,
        });
    }

    fn write_outcome(&mut self, o: PressOutcome) {
        self.write_u8(match o {
            PressOutcome::Activated => 0,
            PressOutcome::ScrollToTop => 1,
            PressOutcome::Disabled => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_touch(&mut self, e: &TouchDispatchEvent) {
        self.write_u8(TAG_TOUCH);
        self.write_u64(e.timestamp.ticks());
        self.write_touch_phase(e.phase);
        self.write_f64(e.x);
        self.write_f64(e.y);
        self.write_option_u32(e.tab);
    }

    fn on_ripple_shown(&mut self, e: &RippleShownEvent) {
        self.write_u8(TAG_RIPPLE_SHOWN);
        self.write_u64(e.timestamp.ticks());
        self.write_f64(e.radius);
    }

    fn on_hide_request(&mut self, e: &HideRequestEvent) {
        self.write_u8(TAG_HIDE_REQUEST);
        self.write_u64(e.timestamp.ticks());
        self.write_hide_action(e.action);
    }

    fn on_contract_start(&mut self, e: &ContractStartEvent) {
        self.write_u8(TAG_CONTRACT_START);
        self.write_u64(e.timestamp.ticks());
        self.write_u8(u8::from(e.deferred));
    }

    fn on_cycle_settled(&mut self, e: &CycleSettledEvent) {
        self.write_u8(TAG_CYCLE_SETTLED);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_tab_press(&mut self, e: &TabPressEvent) {
        self.write_u8(TAG_TAB_PRESS);
        self.write_u64(e.timestamp.ticks());
        self.write_u32(e.tab);
        self.write_outcome(e.outcome);
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        self.write_u8(TAG_PAGE_CHANGE);
        self.write_u64(e.timestamp.ticks());
        self.write_u32(e.from);
        self.write_u32(e.to);
    }

    fn on_evaluate_summary(&mut self, s: &EvaluateSummary) {
        self.write_u8(TAG_EVALUATE_SUMMARY);
        self.write_u64(s.frame_index);
        self.write_u64(s.timestamp.ticks());
        self.write_u32(s.geometry_changes);
        self.write_u32(s.opacity_changes);
        self.write_u32(s.color_changes);
        self.write_u32(s.label_changes);
        self.write_u32(s.shadow_changes);
    }

    fn on_cycle_summary(&mut self, s: &CycleSummary) {
        self.write_u8(TAG_CYCLE_SUMMARY);
        self.write_u64(s.shown_at.ticks());
        self.write_u64(s.expand_ticks);
        self.write_u64(s.dwell_ticks);
        self.write_u64(s.fade_ticks);
        self.write_u8(u8::from(s.deferred));
    }

    fn on_node_changes(&mut self, frame_index: u64, changes: &[NodeChange]) {
        self.write_u8(TAG_NODE_CHANGES_COUNT);
        self.write_u64(frame_index);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "node change count capped at u32::MAX for recording"
        )]
        self.write_u32(changes.len().min(u32::MAX as usize) as u32);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`TouchDispatchEvent`].
    Touch(TouchDispatchEvent),
    /// A [`RippleShownEvent`].
    RippleShown(RippleShownEvent),
    /// A [`HideRequestEvent`].
    HideRequest(HideRequestEvent),
    /// A [`ContractStartEvent`].
    ContractStart(ContractStartEvent),
    /// A [`CycleSettledEvent`].
    CycleSettled(CycleSettledEvent),
    /// A [`TabPressEvent`].
    TabPress(TabPressEvent),
    /// A [`PageChangeEvent`].
    PageChange(PageChangeEvent),
    /// An [`EvaluateSummary`].
    EvaluateSummary(EvaluateSummary),
    /// A [`CycleSummary`].
    CycleSummary(CycleSummary),
    /// Node-change count for an evaluation pass.
    NodeChangesCount {
        /// Evaluation counter.
        frame_index: u64,
        /// Number of node changes.
        count: u32,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = f64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_option_u32(&mut self) -> Option<Option<u32>> {
        let present = self.read_u8()?;
        let val = self.read_u32()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_touch_phase(&mut self) -> Option<TouchPhase> {
        Some(match self.read_u8()? {
            0 => TouchPhase::Down,
            1 => TouchPhase::Up,
            _ => TouchPhase::Cancel,
        })
    }

    fn read_hide_action(&mut self) -> Option<HideAction> {
        Some(match self.read_u8()? {
            0 => HideAction::Immediate,
            _ => HideAction::Deferred,
        })
    }

    fn read_outcome(&mut self) -> Option<PressOutcome> {
        Some(match self.read_u8()? {
            0 => PressOutcome::Activated,
            1 => PressOutcome::ScrollToTop,
            _ => PressOutcome::Disabled,
        })
    }

    fn decode_touch(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Touch(TouchDispatchEvent {
            timestamp: HostTime(self.read_u64()?),
            phase: self.read_touch_phase()?,
            x: self.read_f64()?,
            y: self.read_f64()?,
            tab: self.read_option_u32()?,
        }))
    }

    fn decode_ripple_shown(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RippleShown(RippleShownEvent {
            timestamp: HostTime(self.read_u64()?),
            radius: self.read_f64()?,
        }))
    }

    fn decode_hide_request(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::HideRequest(HideRequestEvent {
            timestamp: HostTime(self.read_u64()?),
            action: self.read_hide_action()?,
        }))
    }

    fn decode_contract_start(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ContractStart(ContractStartEvent {
            timestamp: HostTime(self.read_u64()?),
            deferred: self.read_u8()? != 0,
        }))
    }

    fn decode_cycle_settled(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::CycleSettled(CycleSettledEvent {
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_tab_press(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TabPress(TabPressEvent {
            timestamp: HostTime(self.read_u64()?),
            tab: self.read_u32()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_page_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PageChange(PageChangeEvent {
            timestamp: HostTime(self.read_u64()?),
            from: self.read_u32()?,
            to: self.read_u32()?,
        }))
    }

    fn decode_evaluate_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::EvaluateSummary(EvaluateSummary {
            frame_index: self.read_u64()?,
            timestamp: HostTime(self.read_u64()?),
            geometry_changes: self.read_u32()?,
            opacity_changes: self.read_u32()?,
            color_changes: self.read_u32()?,
            label_changes: self.read_u32()?,
            shadow_changes: self.read_u32()?,
        }))
    }

    fn decode_cycle_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::CycleSummary(CycleSummary {
            shown_at: HostTime(self.read_u64()?),
            expand_ticks: self.read_u64()?,
            dwell_ticks: self.read_u64()?,
            fade_ticks: self.read_u64()?,
            deferred: self.read_u8()? != 0,
        }))
    }

    fn decode_node_changes_count(&mut self) -> Option<RecordedEvent> {
        let frame_index = self.read_u64()?;
        let count = self.read_u32()?;
        Some(RecordedEvent::NodeChangesCount { frame_index, count })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TOUCH => self.decode_touch(),
            TAG_RIPPLE_SHOWN => self.decode_ripple_shown(),
            TAG_HIDE_REQUEST => self.decode_hide_request(),
            TAG_CONTRACT_START => self.decode_contract_start(),
            TAG_CYCLE_SETTLED => self.decode_cycle_settled(),
            TAG_TAB_PRESS => self.decode_tab_press(),
            TAG_PAGE_CHANGE => self.decode_page_change(),
            TAG_EVALUATE_SUMMARY => self.decode_evaluate_summary(),
            TAG_CYCLE_SUMMARY => self.decode_cycle_summary(),
            TAG_NODE_CHANGES_COUNT => self.decode_node_changes_count(),
            _ => None, // unknown tag stops the iterator
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
