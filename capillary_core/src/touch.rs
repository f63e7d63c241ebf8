// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch lifecycle events reported by the host's hit surface.
//!
//! The contract mirrors what native touch-reporting views deliver: a down,
//! up, or cancel phase plus coordinates local to the reporting view. Touch
//! classification (taps vs drags, multi-touch) is a host concern; by the
//! time an event reaches a widget it is already one of these three phases.

use kurbo::Point;

/// Lifecycle phase of a touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger made contact.
    Down,
    /// The finger lifted inside the surface.
    Up,
    /// The interaction was taken over or aborted by the host.
    Cancel,
}

/// A touch lifecycle event with surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// Which lifecycle phase this event reports.
    pub phase: TouchPhase,
    /// Position local to the reporting surface.
    pub position: Point,
}

impl TouchEvent {
    /// Convenience constructor for a down event.
    #[inline]
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Down,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for an up event.
    #[inline]
    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Up,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a cancel event.
    #[inline]
    #[must_use]
    pub fn cancel(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            position: Point::new(x, y),
        }
    }
}
