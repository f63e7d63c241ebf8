// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paged content host.
//!
//! One page is visible at a time; switching pages restarts a short opacity
//! fade on the incoming page. The pager knows nothing about tabs — the bar
//! resolves presses and calls [`Pager::go_to_page`].

use capillary_core::time::{Duration, HostTime, Timebase};
use capillary_core::timeline::{Easing, Timeline};

/// Incoming-page fade duration.
pub const PAGE_FADE_MS: u64 = 200;

/// Sampled pager state at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageVisual {
    /// Index of the visible page.
    pub index: usize,
    /// Opacity of the visible page in `[0, 1]`.
    pub opacity: f64,
}

/// Tracks the visible page and its entry fade.
#[derive(Clone, Debug)]
pub struct Pager {
    page_count: usize,
    current: usize,
    fade: Timeline,
    animated_switch: bool,
    timebase: Timebase,
}

impl Pager {
    /// Creates a pager showing `initial_page` at full opacity.
    ///
    /// # Panics
    ///
    /// Panics if `page_count` is zero or `initial_page` is out of range.
    #[must_use]
    pub fn new(
        page_count: usize,
        initial_page: usize,
        animated_switch: bool,
        timebase: Timebase,
    ) -> Self {
        assert!(page_count > 0, "pager needs at least one page");
        assert!(
            initial_page < page_count,
            "page index {initial_page} out of range (page count {page_count})"
        );
        Self {
            page_count,
            current: initial_page,
            fade: Timeline::new(HostTime(0), Duration::ZERO, 1.0, 1.0, Easing::Linear),
            animated_switch,
            timebase,
        }
    }

    /// Number of pages.
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the visible page.
    #[inline]
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Switches to `index` and restarts the entry fade.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn go_to_page(&mut self, index: usize, now: HostTime) {
        assert!(
            index < self.page_count,
            "page index {index} out of range (page count {})",
            self.page_count
        );
        self.current = index;
        self.fade = if self.animated_switch {
            let duration = Duration::from_millis(PAGE_FADE_MS, self.timebase);
            Timeline::new(now, duration, 0.0, 1.0, Easing::Linear)
        } else {
            Timeline::new(now, Duration::ZERO, 1.0, 1.0, Easing::Linear)
        };
    }

    /// Samples the visible page and its opacity at `now`.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> PageVisual {
        PageVisual {
            index: self.current,
            opacity: self.fade.sample(now),
        }
    }
}
