// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple feedback geometry, scalar timelines, and touch sequencing.
//!
//! `capillary_core` provides the animation state machine behind touch
//! feedback in navigation widgets: a covering circle that expands from the
//! touch point under an optional rounded mask, then fades out once released.
//! It is `no_std` compatible and allocation-free; all time is expressed in
//! host ticks against an explicit [`Timebase`](time::Timebase).
//!
//! # Architecture
//!
//! The crate is organized around a reveal cycle that turns touch lifecycle
//! events into per-frame visual state:
//!
//! ```text
//!   TouchEvent (down / up / cancel)
//!       │
//!       ▼
//!   RippleFeedback::on_touch() ──► show / hide (may park a PendingContract)
//!       │
//!       ▼
//!   RippleFeedback::advance(now) ──► CycleEdges
//!       │
//!       ▼
//!   RippleFeedback::sample(now) ──► FeedbackFrame
//! ```
//!
//! **[`feedback`]** — The reveal state machine: snap-on-press, eased expand,
//! linear fade, and the single-slot contract deferral that keeps a release
//! during the expand from cutting the animation short.
//!
//! **[`geometry`]** — Covering-circle solving (radius to the farthest corner
//! of the masked frame from the hotspot) and corner-radius resolution for
//! the mask, including percent-of-short-side radii.
//!
//! **[`timeline`]** — Clamped scalar interpolation over a host-time
//! interval, with optional start delay and easing.
//!
//! **[`time`]** — Host tick timestamps, durations, and rational timebase
//! conversion to and from nanoseconds and milliseconds.
//!
//! **[`touch`]** — Touch lifecycle events in surface-local coordinates.
//!
//! **[`color`]** — Minimal straight-alpha RGBA with linear interpolation.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! sequencing instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-node
//!   change events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod color;
pub mod feedback;
pub mod geometry;
pub mod time;
pub mod timeline;
pub mod touch;
pub mod trace;
