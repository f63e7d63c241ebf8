// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab descriptions and label display policy.

use alloc::string::String;

use capillary_core::color::Rgba;

/// When tab labels are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayLabels {
    /// All labels for three or fewer tabs, active-only above that.
    #[default]
    Default,
    /// No labels, ever.
    Never,
    /// All labels regardless of tab count.
    Always,
    /// Only the active tab shows its label.
    ActiveTabOnly,
}

impl DisplayLabels {
    /// Whether labels are hidden entirely.
    #[must_use]
    pub fn hides_labels(self) -> bool {
        self == Self::Never
    }

    /// Whether every tab shows its label at full size.
    ///
    /// When this is false (and labels are not hidden), inactive labels
    /// collapse and only the active tab's label is legible.
    #[must_use]
    pub fn shows_all_labels(self, tab_count: usize) -> bool {
        (tab_count <= 3 && self != Self::ActiveTabOnly) || self == Self::Always
    }
}

/// Static description of one tab.
///
/// Color fields are optional; `None` falls back to the bar-level style (see
/// [`BarStyle`](crate::bar::BarStyle)).
#[derive(Clone, Debug, PartialEq)]
pub struct TabDescriptor {
    /// Label text.
    pub label: String,
    /// Whether presses switch to this tab. Disabled tabs still render.
    pub enabled: bool,
    /// Badge text, shown over the icon when set.
    pub badge: Option<String>,
    /// Tint for the icon and label while active.
    pub active_color: Option<Rgba>,
    /// Bar background while this tab is active.
    pub background_color: Option<Rgba>,
    /// Feedback mask color for this tab's button and the shared ripple.
    pub mask_color: Option<Rgba>,
    /// Feedback circle color for this tab's button and the shared ripple.
    pub ripple_color: Option<Rgba>,
}

impl TabDescriptor {
    /// Creates an enabled tab with the given label and no color overrides.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            badge: None,
            active_color: None,
            background_color: None,
            mask_color: None,
            ripple_color: None,
        }
    }
}

impl Default for TabDescriptor {
    fn default() -> Self {
        Self::new("")
    }
}
