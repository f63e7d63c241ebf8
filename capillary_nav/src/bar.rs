// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bottom tab bar model.
//!
//! [`TabBar`] owns the per-tab buttons, the per-tab activation timelines,
//! the background cross-fade, and one shared bar-wide ripple. It routes
//! touches to the right tab, resolves presses (page change, scroll-to-top,
//! or nothing for a disabled tab), and positions the shared ripple
//! explicitly: tab frames are computed here and passed into the feedback
//! via its remote-control surface, never read back from layout callbacks.
//!
//! Width distribution follows the bottom-navigation material metrics: up to
//! three tabs share the row evenly (capped at 168); above three, the active
//! tab is wider than its siblings and both are clamped to fixed bands. The
//! row is centered while it fits and switches to space-around when it
//! would overflow.

use alloc::vec::Vec;

use capillary_core::color::Rgba;
use capillary_core::feedback::{CycleEdges, HideAction, RippleFeedback, RippleStyle};
use capillary_core::geometry::RippleLocation;
use capillary_core::time::{Duration, HostTime, Timebase};
use capillary_core::timeline::{Easing, Timeline};
use capillary_core::touch::{TouchEvent, TouchPhase};
use capillary_core::trace::PressOutcome;
use kurbo::{Point, Rect, Size};

use crate::button::{ButtonOptions, NavButton};
use crate::tabs::{DisplayLabels, TabDescriptor};

/// Bar height.
pub const BAR_HEIGHT: f64 = 56.0;

// -- Width distribution bands --

const TAB_WIDTH_MAX: f64 = 168.0;
const ACTIVE_TAB_WIDTH_MIN: f64 = 96.0;
const INACTIVE_TAB_WIDTH_MAX: f64 = 96.0;
const INACTIVE_TAB_WIDTH_MIN: f64 = 56.0;
const ACTIVE_INACTIVE_RATIO: f64 = 1.75;

// -- Animation durations --

const ACTIVATION_MS: u64 = 150;
const BACKGROUND_FADE_DELAY_MS: u64 = 75;
const BACKGROUND_FADE_MS: u64 = 25;
const TAB_RIPPLE_MS: u64 = 100;
const BAR_RIPPLE_MS: u64 = 100;
const CROWDED_TAB_RIPPLE_MS: u64 = 50;

// -- Tab feedback styling --

const CROWDED_FEEDBACK_COLOR: Rgba = Rgba::from_rgb8(255, 255, 255, 0.055);
const CROWDED_CORNER_PERCENT: f64 = 50.0;

/// Alphas applied to a tab's background color when deriving the shared
/// ripple's mask and circle colors.
const MASK_FROM_BACKGROUND_ALPHA: f64 = 0.2;
const RIPPLE_FROM_BACKGROUND_ALPHA: f64 = 0.75;

// -- Label metrics --

/// Font size an inactive label collapses to when only the active tab's
/// label is legible.
const COLLAPSED_FONT_SIZE: f64 = 0.25;

/// Bottom padding under the icon and label stack: the value when the tab's
/// label is shown, and the inactive rest value when labels collapse.
const TAB_PADDING_SHOWN: f64 = 7.0;
const TAB_PADDING_COLLAPSED: f64 = 15.0;

/// Bar-level styling shared by all tabs.
///
/// Per-tab color overrides live on [`TabDescriptor`]; everything here is
/// the fallback. The two flavor constructors differ in the tab button's
/// corner rounding and in whether the centered-ripple radius clamp is
/// applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    /// Bar background under tabs without their own background color.
    pub background: Rgba,
    /// Icon and label tint for the active tab.
    pub active_color: Rgba,
    /// Icon and label tint for inactive tabs.
    pub inactive_color: Rgba,
    /// Default feedback mask color; falls back to `ripple_color` when unset.
    pub mask_color: Option<Rgba>,
    /// Default feedback circle color; falls back to `mask_color` when unset.
    pub ripple_color: Option<Rgba>,
    /// Label display policy.
    pub display_labels: DisplayLabels,
    /// Label font size on the active tab.
    pub active_font_size: f64,
    /// Label font size on inactive tabs when all labels are shown.
    pub inactive_font_size: f64,
    /// Tab button mask rounding, as a percentage of the short side.
    pub tab_corner_percent: f64,
    /// Forwarded to the tab buttons' radius clamp (see
    /// [`RippleStyle::center_radius_clamp`]).
    pub center_radius_clamp: bool,
}

impl BarStyle {
    /// The iOS flavor: lightly rounded tab feedback, no radius clamp.
    #[must_use]
    pub fn ios() -> Self {
        Self {
            background: Rgba::WHITE,
            active_color: Rgba::new(0.0, 0.0, 0.0, 1.0),
            inactive_color: Rgba::from_rgb8(128, 128, 128, 1.0),
            mask_color: None,
            ripple_color: None,
            display_labels: DisplayLabels::Default,
            active_font_size: 14.0,
            inactive_font_size: 12.0,
            tab_corner_percent: 25.0,
            center_radius_clamp: false,
        }
    }

    /// The Android flavor: circular tab feedback with the centered-ripple
    /// radius clamp enabled.
    #[must_use]
    pub fn android() -> Self {
        Self {
            tab_corner_percent: 100.0,
            center_radius_clamp: true,
            ..Self::ios()
        }
    }

    fn bar_mask_color(&self) -> Option<Rgba> {
        self.mask_color.or(self.ripple_color)
    }

    fn bar_ripple_color(&self) -> Option<Rgba> {
        self.ripple_color.or(self.mask_color)
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::ios()
    }
}

/// Resolved active and inactive tab widths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TabWidths {
    /// Width of the active tab.
    pub active: f64,
    /// Width of every other tab.
    pub inactive: f64,
}

/// How the tab row is distributed inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Justify {
    /// The row fits; pack it centered with no gaps.
    Center,
    /// The row would overflow; distribute the free space around each tab.
    SpaceAround,
}

/// Resolves tab widths for a container.
///
/// Up to three tabs (or any count when all labels are pinned visible) share
/// the row evenly, capped at 168. Above three, the active tab takes
/// `container / count` clamped to `[96, 168]` and inactive tabs take
/// `active / 1.75` clamped to `[56, 96]`.
#[must_use]
pub fn tab_widths(
    container_width: f64,
    tab_count: usize,
    display_labels: DisplayLabels,
) -> TabWidths {
    let count = tab_count as f64;
    if tab_count <= 3 || display_labels == DisplayLabels::Always {
        let width = (container_width / count).min(TAB_WIDTH_MAX);
        TabWidths {
            active: width,
            inactive: width,
        }
    } else {
        let active = (container_width / count).clamp(ACTIVE_TAB_WIDTH_MIN, TAB_WIDTH_MAX);
        let inactive =
            (active / ACTIVE_INACTIVE_RATIO).clamp(INACTIVE_TAB_WIDTH_MIN, INACTIVE_TAB_WIDTH_MAX);
        TabWidths { active, inactive }
    }
}

/// The widest row this many tabs can need, used to pick the justify mode.
#[must_use]
pub fn max_row_width(tab_count: usize) -> f64 {
    if tab_count <= 3 {
        3.0 * TAB_WIDTH_MAX
    } else {
        TAB_WIDTH_MAX + (tab_count - 1) as f64 * ACTIVE_TAB_WIDTH_MIN
    }
}

fn justify_for(container_width: f64, tab_count: usize) -> Justify {
    if max_row_width(tab_count) < container_width {
        Justify::Center
    } else {
        Justify::SpaceAround
    }
}

/// Sampled label metrics for one tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelVisual {
    /// Current font size.
    pub font_size: f64,
    /// Current label opacity.
    pub opacity: f64,
}

/// Sampled visual state for one tab at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabVisual {
    /// The tab's frame in bar coordinates.
    pub frame: Rect,
    /// Icon and label tint.
    pub tint: Rgba,
    /// Label metrics, or `None` when labels are hidden.
    pub label: Option<LabelVisual>,
    /// Bottom padding under the icon and label stack.
    pub padding_bottom: f64,
}

/// Sampled bar background state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarBackground {
    /// The static base background.
    pub base: Rgba,
    /// The cross-fade target drawn over the base.
    pub next: Rgba,
    /// Opacity of the cross-fade overlay in `[0, 1]`.
    pub fade_opacity: f64,
}

impl BarBackground {
    /// Collapses the base and cross-fade layers into one color.
    ///
    /// Presenters that draw the background as a single fill use this instead
    /// of stacking the `next` layer at `fade_opacity` over `base`.
    #[must_use]
    pub fn resolved(&self) -> Rgba {
        self.base.lerp(self.next, self.fade_opacity)
    }
}

/// A resolved press on a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabPress {
    /// Index of the pressed tab.
    pub tab: usize,
    /// What the press resolved to.
    pub outcome: PressOutcome,
}

/// What the shared bar ripple did in response to one touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarRippleEdge {
    /// A reveal cycle started with the given covering radius.
    Shown {
        /// Resolved covering radius.
        radius: f64,
    },
    /// A hide was requested.
    Hide(HideAction),
}

/// Everything one touch event did to the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarTouch {
    /// The tab the event was routed to, if any.
    pub tab: Option<usize>,
    /// The resolved press, present only for Up events on a captured tab.
    pub press: Option<TabPress>,
    /// What the shared ripple did.
    pub bar_ripple: Option<BarRippleEdge>,
}

/// Completion edges crossed during one [`TabBar::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarAdvance {
    /// Edges crossed by the shared bar ripple.
    pub bar_ripple: CycleEdges,
}

/// The bottom tab bar model.
#[derive(Clone, Debug)]
pub struct TabBar {
    style: BarStyle,
    tabs: Vec<TabDescriptor>,
    buttons: Vec<NavButton>,
    activation: Vec<Timeline>,
    widths: TabWidths,
    justify: Justify,
    container_width: f64,
    active_tab: usize,
    pressed_tab: Option<usize>,
    next_background: Rgba,
    background_fade: Timeline,
    bar_ripple: RippleFeedback,
    timebase: Timebase,
}

impl TabBar {
    /// Creates a bar with `initial_tab` active.
    ///
    /// The container width starts at zero; call
    /// [`set_container_width`](Self::set_container_width) once the host has
    /// measured the bar.
    ///
    /// # Panics
    ///
    /// Panics if `tabs` is empty or `initial_tab` is out of range.
    #[must_use]
    pub fn new(
        style: BarStyle,
        tabs: Vec<TabDescriptor>,
        initial_tab: usize,
        timebase: Timebase,
    ) -> Self {
        assert!(!tabs.is_empty(), "tab bar needs at least one tab");
        assert!(
            initial_tab < tabs.len(),
            "tab index {initial_tab} out of range (tab count {})",
            tabs.len()
        );

        let buttons = (0..tabs.len())
            .map(|i| NavButton::new(button_options(&style, &tabs, i), timebase))
            .collect();
        let activation = (0..tabs.len())
            .map(|i| {
                let rest = if i == initial_tab { 1.0 } else { 0.0 };
                Timeline::new(HostTime(0), Duration::ZERO, rest, rest, Easing::Linear)
            })
            .collect();
        let next_background = tabs[initial_tab]
            .background_color
            .unwrap_or(style.background);

        // The shared ripple reveals the incoming background; it is not a
        // raised surface, so the shadow stays put.
        let bar_ripple_style = RippleStyle {
            mask_color: style
                .bar_mask_color()
                .unwrap_or(RippleStyle::DEFAULT_MASK_COLOR),
            ripple_color: style
                .bar_ripple_color()
                .unwrap_or(RippleStyle::DEFAULT_RIPPLE_COLOR),
            ripple_duration_ms: BAR_RIPPLE_MS,
            shadow_animation: false,
            ..RippleStyle::default()
        };

        Self {
            tabs,
            buttons,
            activation,
            widths: TabWidths::default(),
            justify: Justify::SpaceAround,
            container_width: 0.0,
            active_tab: initial_tab,
            pressed_tab: None,
            next_background,
            background_fade: Timeline::new(
                HostTime(0),
                Duration::ZERO,
                1.0,
                1.0,
                Easing::Linear,
            ),
            bar_ripple: RippleFeedback::new(bar_ripple_style, timebase),
            style,
            timebase,
        }
    }

    /// Bar-level style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    /// Number of tabs.
    #[inline]
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Index of the active tab.
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Resolved tab widths for the current container.
    #[inline]
    #[must_use]
    pub fn widths(&self) -> TabWidths {
        self.widths
    }

    /// Container width the bar was last laid out against.
    #[inline]
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Current row distribution mode.
    #[inline]
    #[must_use]
    pub fn justify(&self) -> Justify {
        self.justify
    }

    /// The shared bar-wide ripple.
    #[inline]
    #[must_use]
    pub fn bar_ripple(&self) -> &RippleFeedback {
        &self.bar_ripple
    }

    /// The per-tab buttons, indexed like `tabs`.
    #[inline]
    #[must_use]
    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    /// Whether the bar has more than three tabs.
    ///
    /// Crowded bars collapse inactive tabs, use faint fixed feedback colors,
    /// and always show the shared ripple on press.
    #[must_use]
    pub fn is_crowded(&self) -> bool {
        self.tabs.len() > 3
    }

    // -- layout -------------------------------------------------------------

    /// Adopts a new container width, re-resolving widths, justify mode, and
    /// feedback geometry.
    pub fn set_container_width(&mut self, width: f64, now: HostTime) {
        self.container_width = width;
        self.widths = tab_widths(width, self.tabs.len(), self.style.display_labels);
        self.justify = justify_for(width, self.tabs.len());
        self.bar_ripple.on_layout(Size::new(width, BAR_HEIGHT));
        self.layout_buttons(now);
    }

    /// Computes every tab's frame at `now` from the sampled widths and the
    /// justify mode.
    #[must_use]
    pub fn tab_frames(&self, now: HostTime) -> Vec<Rect> {
        let widths: Vec<f64> = (0..self.tabs.len())
            .map(|i| self.tab_width(i, now))
            .collect();
        let total: f64 = widths.iter().sum();
        let free = self.container_width - total;

        let mut frames = Vec::with_capacity(widths.len());
        match self.justify {
            Justify::Center => {
                let mut x = free / 2.0;
                for width in widths {
                    frames.push(Rect::new(x, 0.0, x + width, BAR_HEIGHT));
                    x += width;
                }
            }
            Justify::SpaceAround => {
                let gap = free / self.tabs.len() as f64;
                let mut x = gap / 2.0;
                for width in widths {
                    frames.push(Rect::new(x, 0.0, x + width, BAR_HEIGHT));
                    x += width + gap;
                }
            }
        }
        frames
    }

    /// The tab under `position`, if any.
    #[must_use]
    pub fn tab_at(&self, position: Point, now: HostTime) -> Option<usize> {
        if position.y < 0.0 || position.y > BAR_HEIGHT {
            return None;
        }
        self.tab_frames(now)
            .iter()
            .position(|frame| position.x >= frame.x0 && position.x < frame.x1)
    }

    fn tab_width(&self, index: usize, now: HostTime) -> f64 {
        let progress = self.activation[index].sample(now);
        self.widths.inactive + (self.widths.active - self.widths.inactive) * progress
    }

    fn layout_buttons(&mut self, now: HostTime) {
        let frames = self.tab_frames(now);
        for (button, frame) in self.buttons.iter_mut().zip(&frames) {
            button.set_frame(frame.origin());
            button.on_layout(frame.size());
        }
    }

    // -- touch routing ------------------------------------------------------

    /// Routes a touch event to the tab under it and drives the shared ripple.
    ///
    /// Down captures the tab; Up and Cancel are routed to the captured tab
    /// regardless of position, and the press (Up only) is resolved against
    /// the active tab and enablement.
    pub fn handle_touch(&mut self, event: TouchEvent, now: HostTime) -> BarTouch {
        match event.phase {
            TouchPhase::Down => self.handle_down(event.position, now),
            TouchPhase::Up | TouchPhase::Cancel => self.handle_release(event, now),
        }
    }

    fn handle_down(&mut self, position: Point, now: HostTime) -> BarTouch {
        let Some(tab) = self.tab_at(position, now) else {
            return BarTouch::default();
        };

        // A second down replaces the capture; let the old tab's feedback go.
        if let Some(old) = self.pressed_tab.replace(tab)
            && old != tab
        {
            let _ = self.buttons[old].feedback_mut().hide_ripple(now);
        }

        let frame = self.tab_frames(now)[tab];
        let local = Point::new(position.x - frame.x0, position.y - frame.y0);
        self.buttons[tab].handle_touch(TouchEvent::down(local.x, local.y), now);

        let mut result = BarTouch {
            tab: Some(tab),
            ..BarTouch::default()
        };
        if self.should_show_bar_ripple(tab) {
            let (mask, ripple) = self.derived_feedback_colors(tab);
            self.bar_ripple.set_colors(mask, ripple);
            self.bar_ripple.set_coordinates(position);
            self.bar_ripple.show_ripple(now);
            result.bar_ripple = Some(BarRippleEdge::Shown {
                radius: self.bar_ripple.geometry().radius,
            });
        }
        result
    }

    fn handle_release(&mut self, event: TouchEvent, now: HostTime) -> BarTouch {
        let Some(tab) = self.pressed_tab.take() else {
            return BarTouch::default();
        };

        let frame = self.tab_frames(now)[tab];
        let local = Point::new(event.position.x - frame.x0, event.position.y - frame.y0);
        let released = TouchEvent {
            phase: event.phase,
            position: local,
        };
        self.buttons[tab].handle_touch(released, now);

        let press = (event.phase == TouchPhase::Up).then(|| self.resolve_press(tab, now));
        let action = self.bar_ripple.hide_ripple(now);
        BarTouch {
            tab: Some(tab),
            press,
            bar_ripple: Some(BarRippleEdge::Hide(action)),
        }
    }

    fn resolve_press(&mut self, tab: usize, now: HostTime) -> TabPress {
        let outcome = if tab == self.active_tab {
            PressOutcome::ScrollToTop
        } else if !self.tabs[tab].enabled {
            PressOutcome::Disabled
        } else {
            self.activate(tab, now);
            PressOutcome::Activated
        };
        TabPress { tab, outcome }
    }

    /// Makes `tab` the active tab, retargeting the activation timelines and,
    /// when the target background actually changes, the cross-fade.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    pub fn set_active_tab(&mut self, tab: usize, now: HostTime) {
        assert!(
            tab < self.tabs.len(),
            "tab index {tab} out of range (tab count {})",
            self.tabs.len()
        );
        if tab != self.active_tab {
            self.activate(tab, now);
        }
    }

    fn activate(&mut self, tab: usize, now: HostTime) {
        let duration = Duration::from_millis(ACTIVATION_MS, self.timebase);
        let previous = self.active_tab;
        self.activation[previous] = Timeline::new(now, duration, 1.0, 0.0, Easing::Linear);
        self.activation[tab] = Timeline::new(now, duration, 0.0, 1.0, Easing::Linear);
        self.active_tab = tab;

        let target = self.tabs[tab].background_color.unwrap_or(self.style.background);
        if target != self.next_background {
            self.next_background = target;
            self.background_fade = Timeline::new(
                now,
                Duration::from_millis(BACKGROUND_FADE_MS, self.timebase),
                0.0,
                1.0,
                Easing::Linear,
            )
            .with_delay(Duration::from_millis(BACKGROUND_FADE_DELAY_MS, self.timebase));
        }
    }

    /// Whether a press on `tab` shows the shared ripple.
    ///
    /// Crowded bars always show it; small bars only when the pressed tab's
    /// background differs from the current cross-fade target, so the reveal
    /// has something to reveal.
    fn should_show_bar_ripple(&self, tab: usize) -> bool {
        let tab_background = self.tabs[tab]
            .background_color
            .unwrap_or(self.style.background);
        self.is_crowded() || tab_background != self.next_background
    }

    /// Shared-ripple colors for a press on `tab`: the tab's own feedback
    /// colors, else its background at fixed alphas, else the bar defaults.
    fn derived_feedback_colors(&self, tab: usize) -> (Rgba, Rgba) {
        let descriptor = &self.tabs[tab];
        let mask = descriptor
            .mask_color
            .or_else(|| {
                descriptor
                    .background_color
                    .map(|c| c.with_alpha(MASK_FROM_BACKGROUND_ALPHA))
            })
            .or(self.style.bar_mask_color())
            .unwrap_or(RippleStyle::DEFAULT_MASK_COLOR);
        let ripple = descriptor
            .ripple_color
            .or_else(|| {
                descriptor
                    .background_color
                    .map(|c| c.with_alpha(RIPPLE_FROM_BACKGROUND_ALPHA))
            })
            .or(self.style.bar_ripple_color())
            .unwrap_or(RippleStyle::DEFAULT_RIPPLE_COLOR);
        (mask, ripple)
    }

    // -- frame driver -------------------------------------------------------

    /// Synchronizes feedback geometry with the animated tab frames and
    /// completes any timelines that have run their course.
    pub fn advance(&mut self, now: HostTime) -> BarAdvance {
        self.layout_buttons(now);
        for button in &mut self.buttons {
            button.advance(now);
        }
        BarAdvance {
            bar_ripple: self.bar_ripple.advance(now),
        }
    }

    // -- sampling -----------------------------------------------------------

    /// Samples the background and cross-fade state at `now`.
    #[must_use]
    pub fn sample_background(&self, now: HostTime) -> BarBackground {
        BarBackground {
            base: self.style.background,
            next: self.next_background,
            fade_opacity: self.background_fade.sample(now),
        }
    }

    /// Samples every tab's visual state at `now`.
    #[must_use]
    pub fn sample_tabs(&self, now: HostTime) -> Vec<TabVisual> {
        let hide = self.style.display_labels.hides_labels();
        let show_all = self.style.display_labels.shows_all_labels(self.tabs.len());
        let padding_target =
            TAB_PADDING_SHOWN - (self.style.active_font_size - self.style.inactive_font_size) / 2.0;
        let frames = self.tab_frames(now);

        self.tabs
            .iter()
            .enumerate()
            .map(|(i, descriptor)| {
                let progress = self.activation[i].sample(now);
                let tint = if i == self.active_tab {
                    descriptor.active_color.unwrap_or(self.style.active_color)
                } else {
                    self.style.inactive_color
                };
                let label = (!hide).then(|| {
                    let font_rest = if show_all {
                        self.style.inactive_font_size
                    } else {
                        COLLAPSED_FONT_SIZE
                    };
                    LabelVisual {
                        font_size: font_rest + (self.style.active_font_size - font_rest) * progress,
                        opacity: if show_all { 1.0 } else { 0.5 + 0.5 * progress },
                    }
                });
                let padding_bottom = if hide {
                    progress
                } else {
                    let rest = if show_all {
                        TAB_PADDING_SHOWN
                    } else {
                        TAB_PADDING_COLLAPSED
                    };
                    rest + (padding_target - rest) * progress
                };
                TabVisual {
                    frame: frames[i],
                    tint,
                    label,
                    padding_bottom,
                }
            })
            .collect()
    }
}

fn button_options(style: &BarStyle, tabs: &[TabDescriptor], index: usize) -> ButtonOptions {
    if tabs.len() > 3 {
        ButtonOptions {
            mask_color: CROWDED_FEEDBACK_COLOR,
            ripple_color: CROWDED_FEEDBACK_COLOR,
            corner_percent: Some(CROWDED_CORNER_PERCENT),
            ripple_duration_ms: CROWDED_TAB_RIPPLE_MS,
            location: RippleLocation::Center,
            center_radius_clamp: style.center_radius_clamp,
            enabled: true,
        }
    } else {
        let tab = &tabs[index];
        ButtonOptions {
            mask_color: tab
                .mask_color
                .or(style.bar_mask_color())
                .unwrap_or(RippleStyle::DEFAULT_MASK_COLOR),
            ripple_color: tab
                .ripple_color
                .or(style.bar_ripple_color())
                .unwrap_or(RippleStyle::DEFAULT_RIPPLE_COLOR),
            corner_percent: Some(style.tab_corner_percent),
            ripple_duration_ms: TAB_RIPPLE_MS,
            location: RippleLocation::Center,
            center_radius_clamp: style.center_radius_clamp,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use capillary_core::feedback::FeedbackPhase;
    use capillary_core::geometry::CornerRadius;

    use super::*;

    const MS: Timebase = Timebase::new(1_000_000, 1);

    fn at(ms: u64) -> HostTime {
        HostTime(ms)
    }

    fn plain_tabs(count: usize) -> Vec<TabDescriptor> {
        (0..count).map(|_| TabDescriptor::new("tab")).collect()
    }

    fn make_bar(style: BarStyle, tabs: Vec<TabDescriptor>, width: f64) -> TabBar {
        let mut bar = TabBar::new(style, tabs, 0, MS);
        bar.set_container_width(width, at(0));
        bar
    }

    // -- width distribution --

    #[test]
    fn small_bars_share_the_row_evenly() {
        let widths = tab_widths(360.0, 3, DisplayLabels::Default);
        assert_eq!(widths, TabWidths { active: 120.0, inactive: 120.0 });
    }

    #[test]
    fn even_widths_cap_at_the_band_maximum() {
        let widths = tab_widths(600.0, 3, DisplayLabels::Default);
        assert_eq!(widths, TabWidths { active: 168.0, inactive: 168.0 });
    }

    #[test]
    fn crowded_widths_clamp_to_their_bands() {
        // 400 / 5 = 80 clamps up to 96; 96 / 1.75 clamps up to 56.
        let narrow = tab_widths(400.0, 5, DisplayLabels::Default);
        assert_eq!(narrow, TabWidths { active: 96.0, inactive: 56.0 });

        // 1000 / 5 = 200 clamps down to 168; 168 / 1.75 = 96 exactly.
        let wide = tab_widths(1000.0, 5, DisplayLabels::Default);
        assert_eq!(wide, TabWidths { active: 168.0, inactive: 96.0 });

        let mid = tab_widths(525.0, 5, DisplayLabels::Default);
        assert_eq!(mid, TabWidths { active: 105.0, inactive: 60.0 });
    }

    #[test]
    fn pinned_labels_force_even_distribution() {
        let widths = tab_widths(500.0, 5, DisplayLabels::Always);
        assert_eq!(widths, TabWidths { active: 100.0, inactive: 100.0 });
    }

    // -- justify --

    #[test]
    fn row_is_centered_only_while_it_fits() {
        assert_eq!(max_row_width(3), 504.0);
        let roomy = make_bar(BarStyle::ios(), plain_tabs(3), 600.0);
        assert_eq!(roomy.justify(), Justify::Center);

        let tight = make_bar(BarStyle::ios(), plain_tabs(3), 400.0);
        assert_eq!(tight.justify(), Justify::SpaceAround);

        assert_eq!(max_row_width(4), 456.0);
        let crowded = make_bar(BarStyle::ios(), plain_tabs(4), 500.0);
        assert_eq!(crowded.justify(), Justify::Center);
    }

    #[test]
    fn centered_frames_pack_adjacent() {
        let bar = make_bar(BarStyle::ios(), plain_tabs(3), 600.0);
        let frames = bar.tab_frames(at(0));
        assert_eq!(frames[0], Rect::new(48.0, 0.0, 216.0, 56.0));
        assert_eq!(frames[1], Rect::new(216.0, 0.0, 384.0, 56.0));
        assert_eq!(frames[2], Rect::new(384.0, 0.0, 552.0, 56.0));
    }

    #[test]
    fn space_around_frames_share_the_free_space() {
        // Two 168-wide tabs in 360: 24 free, 12 around each tab.
        let bar = make_bar(BarStyle::ios(), plain_tabs(2), 360.0);
        assert_eq!(bar.justify(), Justify::SpaceAround);
        let frames = bar.tab_frames(at(0));
        assert_eq!(frames[0], Rect::new(6.0, 0.0, 174.0, 56.0));
        assert_eq!(frames[1], Rect::new(186.0, 0.0, 354.0, 56.0));
    }

    // -- activation --

    #[test]
    fn switching_tabs_animates_both_widths() {
        // 480 / 5 = 96 exactly; inactive also lands on its band edge.
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(5), 480.0);
        assert_eq!(bar.widths(), TabWidths { active: 96.0, inactive: 56.0 });

        bar.set_active_tab(1, at(1_000));
        let frames = bar.tab_frames(at(1_075));
        let halfway = (96.0 + 56.0) / 2.0;
        assert_eq!(frames[0].width(), halfway, "outgoing tab shrinking");
        assert_eq!(frames[1].width(), halfway, "incoming tab growing");

        let settled = bar.tab_frames(at(1_150));
        assert_eq!(settled[0].width(), 56.0);
        assert_eq!(settled[1].width(), 96.0);
    }

    #[test]
    fn label_metrics_with_all_labels_shown() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.set_active_tab(1, at(0));

        let tabs = bar.sample_tabs(at(75));
        let incoming = tabs[1].label.unwrap();
        assert_eq!(incoming.font_size, 13.0, "halfway from 12 to 14");
        assert_eq!(incoming.opacity, 1.0, "all labels stay fully visible");
        assert_eq!(tabs[1].padding_bottom, 6.5, "halfway from 7 to 6");

        let settled = bar.sample_tabs(at(150));
        assert_eq!(settled[1].label.unwrap().font_size, 14.0);
        assert_eq!(settled[1].padding_bottom, 6.0);
        assert_eq!(settled[0].label.unwrap().font_size, 12.0);
    }

    #[test]
    fn label_metrics_when_only_the_active_label_shows() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(5), 480.0);
        bar.set_active_tab(2, at(0));

        let tabs = bar.sample_tabs(at(150));
        let active = tabs[2].label.unwrap();
        assert_eq!(active.font_size, 14.0);
        assert_eq!(active.opacity, 1.0);
        assert_eq!(tabs[2].padding_bottom, 6.0);

        let inactive = tabs[0].label.unwrap();
        assert_eq!(inactive.font_size, 0.25, "inactive label collapses");
        assert_eq!(inactive.opacity, 0.5);
        assert_eq!(tabs[0].padding_bottom, 15.0);
    }

    #[test]
    fn hidden_labels_sample_to_none() {
        let style = BarStyle {
            display_labels: DisplayLabels::Never,
            ..BarStyle::ios()
        };
        let bar = make_bar(style, plain_tabs(3), 360.0);
        let tabs = bar.sample_tabs(at(0));
        assert!(tabs[0].label.is_none());
        assert!(tabs[1].label.is_none());
    }

    #[test]
    fn active_tab_tint_prefers_the_tab_override() {
        let accent = Rgba::from_rgb8(233, 30, 99, 1.0);
        let mut tabs = plain_tabs(3);
        tabs[0].active_color = Some(accent);
        let bar = make_bar(BarStyle::ios(), tabs, 360.0);

        let sampled = bar.sample_tabs(at(0));
        assert_eq!(sampled[0].tint, accent);
        assert_eq!(sampled[1].tint, BarStyle::ios().inactive_color);
    }

    // -- press resolution --

    #[test]
    fn press_on_inactive_tab_activates_it() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.handle_touch(TouchEvent::down(200.0, 28.0), at(0));
        let result = bar.handle_touch(TouchEvent::up(200.0, 28.0), at(50));

        assert_eq!(
            result.press,
            Some(TabPress { tab: 1, outcome: PressOutcome::Activated })
        );
        assert_eq!(bar.active_tab(), 1);
    }

    #[test]
    fn press_on_active_tab_scrolls_to_top() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.handle_touch(TouchEvent::down(60.0, 28.0), at(0));
        let result = bar.handle_touch(TouchEvent::up(60.0, 28.0), at(50));

        assert_eq!(
            result.press,
            Some(TabPress { tab: 0, outcome: PressOutcome::ScrollToTop })
        );
        assert_eq!(bar.active_tab(), 0, "active tab unchanged");
    }

    #[test]
    fn press_on_disabled_tab_changes_nothing() {
        let mut tabs = plain_tabs(3);
        tabs[2].enabled = false;
        let mut bar = make_bar(BarStyle::ios(), tabs, 360.0);

        bar.handle_touch(TouchEvent::down(300.0, 28.0), at(0));
        let result = bar.handle_touch(TouchEvent::up(300.0, 28.0), at(50));

        assert_eq!(
            result.press,
            Some(TabPress { tab: 2, outcome: PressOutcome::Disabled })
        );
        assert_eq!(bar.active_tab(), 0);
    }

    #[test]
    fn cancel_never_resolves_a_press() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.handle_touch(TouchEvent::down(200.0, 28.0), at(0));
        let result = bar.handle_touch(TouchEvent::cancel(200.0, 28.0), at(50));

        assert_eq!(result.tab, Some(1));
        assert_eq!(result.press, None);
        assert_eq!(bar.active_tab(), 0);
    }

    #[test]
    fn touch_outside_the_row_is_ignored() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 600.0);
        // Centered row starts at x = 48; x = 10 is in the margin.
        let result = bar.handle_touch(TouchEvent::down(10.0, 28.0), at(0));
        assert_eq!(result, BarTouch::default());

        let below = bar.handle_touch(TouchEvent::down(100.0, 80.0), at(0));
        assert_eq!(below, BarTouch::default());
    }

    #[test]
    fn second_down_replaces_the_capture() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.handle_touch(TouchEvent::down(60.0, 28.0), at(0));
        bar.handle_touch(TouchEvent::down(200.0, 28.0), at(20));

        assert_eq!(
            bar.buttons()[0].feedback().phase(),
            FeedbackPhase::Expanding,
            "old tab's feedback is winding down behind its expand"
        );
        assert!(bar.buttons()[0].feedback().pending_contract().is_some());
        assert_eq!(bar.buttons()[1].feedback().phase(), FeedbackPhase::Expanding);
    }

    // -- cross-fade --

    #[test]
    fn switching_to_a_colored_tab_restarts_the_fade() {
        let red = Rgba::from_rgb8(244, 67, 54, 1.0);
        let mut tabs = plain_tabs(3);
        tabs[1].background_color = Some(red);
        let mut bar = make_bar(BarStyle::ios(), tabs, 360.0);

        bar.handle_touch(TouchEvent::down(200.0, 28.0), at(1_000));
        bar.handle_touch(TouchEvent::up(200.0, 28.0), at(1_050));

        let background = bar.sample_background(at(1_100));
        assert_eq!(background.next, red);
        assert_eq!(background.fade_opacity, 0.0, "fade still in its delay");
        assert_eq!(bar.sample_background(at(1_130)).fade_opacity, 0.2);
        assert_eq!(bar.sample_background(at(1_150)).fade_opacity, 1.0);
    }

    #[test]
    fn switching_between_same_background_tabs_leaves_the_fade_alone() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        bar.handle_touch(TouchEvent::down(200.0, 28.0), at(1_000));
        bar.handle_touch(TouchEvent::up(200.0, 28.0), at(1_050));

        let background = bar.sample_background(at(1_060));
        assert_eq!(background.next, BarStyle::ios().background);
        assert_eq!(background.fade_opacity, 1.0, "no retarget, no restart");
    }

    #[test]
    fn resolved_background_blends_base_towards_next() {
        let base = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let next = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let midway = BarBackground {
            base,
            next,
            fade_opacity: 0.5,
        };
        assert_eq!(midway.resolved(), Rgba::new(0.5, 0.0, 0.0, 1.0));
        let done = BarBackground {
            fade_opacity: 1.0,
            ..midway
        };
        assert_eq!(done.resolved(), next);
    }

    // -- shared ripple --

    #[test]
    fn crowded_bars_always_show_the_shared_ripple() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(4), 456.0);
        let result = bar.handle_touch(TouchEvent::down(30.0, 28.0), at(0));
        assert!(matches!(
            result.bar_ripple,
            Some(BarRippleEdge::Shown { .. })
        ));
        assert_eq!(bar.bar_ripple().phase(), FeedbackPhase::Expanding);
    }

    #[test]
    fn small_bars_show_the_shared_ripple_only_for_background_changes() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(3), 360.0);
        let plain = bar.handle_touch(TouchEvent::down(200.0, 28.0), at(0));
        assert_eq!(plain.bar_ripple, None, "same background, nothing to reveal");

        let teal = Rgba::from_rgb8(0, 150, 136, 1.0);
        let mut tabs = plain_tabs(3);
        tabs[2].background_color = Some(teal);
        let mut colored = make_bar(BarStyle::ios(), tabs, 360.0);
        let result = colored.handle_touch(TouchEvent::down(300.0, 28.0), at(0));
        assert!(matches!(
            result.bar_ripple,
            Some(BarRippleEdge::Shown { .. })
        ));
    }

    #[test]
    fn release_requests_the_shared_ripple_hide() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(4), 456.0);
        bar.handle_touch(TouchEvent::down(30.0, 28.0), at(0));
        let result = bar.handle_touch(TouchEvent::up(30.0, 28.0), at(20));

        assert_eq!(
            result.bar_ripple,
            Some(BarRippleEdge::Hide(HideAction::Deferred)),
            "release during the 100 ms expand parks the fade"
        );
    }

    #[test]
    fn shared_ripple_colors_derive_from_the_tab_background() {
        let blue = Rgba::from_rgb8(33, 150, 243, 1.0);
        let mut tabs = plain_tabs(3);
        tabs[1].background_color = Some(blue);
        let bar = make_bar(BarStyle::ios(), tabs, 360.0);

        let (mask, ripple) = bar.derived_feedback_colors(1);
        assert_eq!(mask, blue.with_alpha(0.2));
        assert_eq!(ripple, blue.with_alpha(0.75));
    }

    #[test]
    fn explicit_tab_feedback_colors_win_over_derivation() {
        let custom = Rgba::from_rgb8(255, 235, 59, 0.4);
        let mut tabs = plain_tabs(3);
        tabs[1].background_color = Some(Rgba::from_rgb8(33, 150, 243, 1.0));
        tabs[1].mask_color = Some(custom);
        let bar = make_bar(BarStyle::ios(), tabs, 360.0);

        let (mask, _) = bar.derived_feedback_colors(1);
        assert_eq!(mask, custom);
    }

    #[test]
    fn bar_level_colors_cross_fall_back() {
        let red = Rgba::from_rgb8(244, 67, 54, 0.3);
        let style = BarStyle {
            ripple_color: Some(red),
            ..BarStyle::ios()
        };
        let bar = make_bar(style, plain_tabs(3), 360.0);

        let (mask, ripple) = bar.derived_feedback_colors(0);
        assert_eq!(mask, red, "mask falls back to the bar ripple color");
        assert_eq!(ripple, red);
    }

    // -- button styling --

    #[test]
    fn small_bar_buttons_use_the_flavor_corner_percent() {
        let bar = make_bar(BarStyle::android(), plain_tabs(3), 360.0);
        let style = bar.buttons()[0].feedback().style();
        assert_eq!(style.corner_radius, CornerRadius::Percent(100.0));
        assert_eq!(style.ripple_duration_ms, 100);
        assert_eq!(style.mask_duration_ms, 100);
        assert!(style.center_radius_clamp);
        assert_eq!(style.location, RippleLocation::Center);
    }

    #[test]
    fn crowded_bar_buttons_use_the_faint_fixed_style() {
        let bar = make_bar(BarStyle::ios(), plain_tabs(5), 480.0);
        let style = bar.buttons()[0].feedback().style();
        assert_eq!(style.mask_color, CROWDED_FEEDBACK_COLOR);
        assert_eq!(style.ripple_color, CROWDED_FEEDBACK_COLOR);
        assert_eq!(style.corner_radius, CornerRadius::Percent(50.0));
        assert_eq!(style.ripple_duration_ms, 50);
    }

    #[test]
    fn advance_keeps_button_geometry_in_sync() {
        let mut bar = make_bar(BarStyle::ios(), plain_tabs(5), 480.0);
        bar.set_active_tab(1, at(0));
        bar.advance(at(150));

        let frames = bar.tab_frames(at(150));
        assert_eq!(bar.buttons()[1].feedback().measure(), frames[1]);
        assert_eq!(bar.buttons()[0].feedback().measure(), frames[0]);
    }

    #[test]
    fn single_tab_bar_is_allowed() {
        let bar = TabBar::new(BarStyle::ios(), vec![TabDescriptor::new("only")], 0, MS);
        assert_eq!(bar.tab_count(), 1);
    }

    #[test]
    #[should_panic(expected = "tab index 3 out of range")]
    fn out_of_range_initial_tab_panics() {
        let _ = TabBar::new(BarStyle::ios(), plain_tabs(3), 3, MS);
    }
}
