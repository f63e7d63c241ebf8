// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom-navigation widgets built on `capillary_core` touch feedback.
//!
//! `capillary_nav` provides the models for a bottom tab bar with animated
//! tab activation, per-tab and bar-wide ripple feedback, and a paged content
//! area. It is `no_std` compatible (with `alloc`). Rendering and input
//! capture stay in the host; the models turn host events into sampled
//! visual values and incremental change sets.
//!
//! # Architecture
//!
//! The crate is organized around a frame loop that turns host input and
//! display callbacks into incremental view updates:
//!
//! ```text
//!   Host (touch reporting, layout, animation driver)
//!       │
//!       ├── TouchEvent ──► NavModel::handle_touch() ──► NavResponse
//!       │                                                   │
//!       │                        page change / scroll-to-top NavEvent
//!       │
//!       └── frame tick ──► NavModel::evaluate() ──► NavChanges
//!                                                       │
//!                                                       ▼
//!                                              Presenter::apply()
//! ```
//!
//! **[`bar`]** — The tab bar model: width distribution and justify modes,
//! per-tab activation timelines, the background cross-fade, and the shared
//! bar-wide ripple with derived colors.
//!
//! **[`button`]** — One tab's touch target wrapping a
//! [`RippleFeedback`](capillary_core::feedback::RippleFeedback) with
//! tab-button styling.
//!
//! **[`pager`]** — The paged content model; switches fade the incoming page
//! in.
//!
//! **[`model`]** — [`NavModel`](model::NavModel) composes bar and pager,
//! diffs sampled snapshots into multi-channel dirty marks, and drains them
//! into [`NavChanges`](model::NavChanges) for a
//! [`Presenter`](model::Presenter).
//!
//! **[`dirty`]** — Dirty-tracking channel constants via `understory_dirty`.
//! All channels are local-only; the node set is flat.
//!
//! **[`tabs`]** — Tab descriptors and the label display policy.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod bar;
pub mod button;
pub mod dirty;
pub mod model;
pub mod pager;
pub mod tabs;
