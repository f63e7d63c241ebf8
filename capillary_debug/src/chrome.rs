// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Reveal cycles become duration spans ("RippleCycle") running from the show
//! to the settle; everything else is an instant event.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use capillary_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Touch(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Touch",
                    "cat": "Input",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "phase": format!("{:?}", e.phase),
                        "x": e.x,
                        "y": e.y,
                        "tab": e.tab,
                    }
                }));
            }
            RecordedEvent::RippleShown(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": "RippleCycle",
                    "cat": "Feedback",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "radius": e.radius,
                    }
                }));
            }
            RecordedEvent::HideRequest(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "HideRequest",
                    "cat": "Feedback",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "action": format!("{:?}", e.action),
                    }
                }));
            }
            RecordedEvent::ContractStart(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ContractStart",
                    "cat": "Feedback",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "deferred": e.deferred,
                    }
                }));
            }
            RecordedEvent::CycleSettled(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "RippleCycle",
                    "cat": "Feedback",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "args": {}
                }));
            }
            RecordedEvent::TabPress(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "TabPress",
                    "cat": "Input",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "tab": e.tab,
                        "outcome": format!("{:?}", e.outcome),
                    }
                }));
            }
            RecordedEvent::PageChange(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "PageChange",
                    "cat": "Navigation",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "from": e.from,
                        "to": e.to,
                    }
                }));
            }
            RecordedEvent::EvaluateSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "EvaluateSummary",
                    "cat": "Evaluate",
                    "ts": ticks_to_us(s.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": s.frame_index,
                        "geometry": s.geometry_changes,
                        "opacity": s.opacity_changes,
                        "color": s.color_changes,
                        "label": s.label_changes,
                        "shadow": s.shadow_changes,
                    }
                }));
            }
            RecordedEvent::CycleSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "CycleSummary",
                    "cat": "Summary",
                    "ts": ticks_to_us(s.shown_at.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "expand_us": ticks_to_us(s.expand_ticks, timebase),
                        "dwell_us": ticks_to_us(s.dwell_ticks, timebase),
                        "fade_us": ticks_to_us(s.fade_ticks, timebase),
                        "deferred": s.deferred,
                    }
                }));
            }
            RecordedEvent::NodeChangesCount { frame_index, count } => {
                events.push(json!({
                    "ph": "i",
                    "name": "NodeChanges",
                    "cat": "Rich",
                    "ts": 0,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "frame_index": frame_index,
                        "count": count,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
