// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The nav model uses multi-channel dirty tracking (via [`understory_dirty`])
//! so hosts only re-apply the visual properties that actually moved between
//! evaluations. Each channel is an independent category of change.
//!
//! The node set is flat (bar background, fade overlay, shared ripple layers,
//! three layers per tab, one page layer), so every channel is marked with the
//! default local-only policy; there is no parent-to-child propagation here.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`NavModel::evaluate`](crate::model::NavModel::evaluate) call drains all
//! channels and surfaces the results as
//! [`NavChanges`](crate::model::NavChanges), which hosts
//! [consume](crate::model::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Frame rect, corner radius, or circle scale changed.
pub const GEOMETRY: Channel = Channel::new(0);

/// Opacity changed.
pub const OPACITY: Channel = Channel::new(1);

/// Fill or tint color changed.
pub const COLOR: Channel = Channel::new(2);

/// Label metrics changed (font size, label opacity, bottom padding).
pub const LABEL: Channel = Channel::new(3);

/// Shadow offset changed.
pub const SHADOW: Channel = Channel::new(4);
