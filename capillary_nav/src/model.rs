// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-level widget model with incremental change tracking.
//!
//! [`NavModel`] composes the tab bar and the pager, samples them into flat
//! [`NavFrame`] snapshots, and diffs consecutive snapshots into per-channel
//! dirty marks. Each [`evaluate`](NavModel::evaluate) call drains the
//! channels into a [`NavChanges`], which a host [`Presenter`] consumes to
//! update only the native views that actually moved.
//!
//! # Node indexing
//!
//! Host layers are addressed by flat `u32` node indices: four fixed bar
//! nodes, three per tab (the tab itself plus its feedback mask and circle),
//! and one page node at the end. The constants and helpers in this module
//! ([`BAR_BACKGROUND`], [`tab_node`], [`page_node`], ...) define the
//! mapping; presenters use them to translate change lists into view updates.
//!
//! Discrete outcomes that have no continuous channel (the visible page
//! switching, a scroll-to-top request) are reported as [`NavEvent`]s from
//! the input path instead.

use alloc::vec::Vec;

use capillary_core::feedback::{CycleEdges, FeedbackFrame};
use capillary_core::time::{HostTime, Timebase};
use capillary_core::touch::TouchEvent;
use capillary_core::trace::PressOutcome;
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::bar::{BarBackground, BarStyle, BarTouch, TabBar, TabPress, TabVisual};
use crate::dirty;
use crate::pager::{PageVisual, Pager};
use crate::tabs::TabDescriptor;

// -- Node indices ---------------------------------------------------------

/// Node index of the bar's base background layer.
pub const BAR_BACKGROUND: u32 = 0;

/// Node index of the background cross-fade overlay.
pub const BACKGROUND_FADE: u32 = 1;

/// Node index of the shared bar ripple's mask layer.
pub const BAR_RIPPLE_MASK: u32 = 2;

/// Node index of the shared bar ripple's circle layer.
pub const BAR_RIPPLE_CIRCLE: u32 = 3;

const TAB_NODE_BASE: u32 = 4;
const NODES_PER_TAB: u32 = 3;

#[expect(
    clippy::cast_possible_truncation,
    reason = "tab counts are tiny; indices never approach u32::MAX"
)]
const fn to_u32(index: usize) -> u32 {
    index as u32
}

/// Node index of a tab's own layer (frame, tint, label, shadow).
#[inline]
#[must_use]
pub const fn tab_node(tab: usize) -> u32 {
    TAB_NODE_BASE + NODES_PER_TAB * to_u32(tab)
}

/// Node index of a tab's feedback mask layer.
#[inline]
#[must_use]
pub const fn tab_mask_node(tab: usize) -> u32 {
    tab_node(tab) + 1
}

/// Node index of a tab's feedback circle layer.
#[inline]
#[must_use]
pub const fn tab_circle_node(tab: usize) -> u32 {
    tab_node(tab) + 2
}

/// Node index of the page layer, which follows the per-tab nodes.
#[inline]
#[must_use]
pub const fn page_node(tab_count: usize) -> u32 {
    TAB_NODE_BASE + NODES_PER_TAB * to_u32(tab_count)
}

// -- Model types ----------------------------------------------------------

/// Construction parameters for a [`NavModel`].
#[derive(Clone, Debug)]
pub struct NavConfig {
    /// Bar-level styling.
    pub style: BarStyle,
    /// Tab descriptors; the page count equals the tab count.
    pub tabs: Vec<TabDescriptor>,
    /// Initially active tab and visible page.
    pub initial_tab: usize,
    /// Whether page switches fade the incoming page in.
    pub animated_switch: bool,
}

/// A discrete outcome the host must act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The visible page changed.
    PageChanged {
        /// Previously visible page.
        from: usize,
        /// Newly visible page.
        to: usize,
    },
    /// The active page was re-selected; its content should scroll to top.
    ScrollToTop {
        /// The re-selected page.
        page: usize,
    },
}

/// Everything one touch event did to the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavResponse {
    /// What the bar did with the event (routed tab, press, ripple edge).
    pub touch: BarTouch,
    /// A discrete outcome for the host, if the event resolved one.
    pub event: Option<NavEvent>,
}

/// The set of changes produced by a single [`NavModel::evaluate`] call.
///
/// Each list contains the node indices that changed in the corresponding
/// channel. Hosts translate indices to views via the node constants and
/// helpers ([`BAR_BACKGROUND`], [`tab_node`], ...) and read the current
/// values from [`NavModel::frame`].
#[derive(Clone, Debug, Default)]
pub struct NavChanges {
    /// Nodes whose frame rect, corner radius, or circle scale changed.
    pub geometry: Vec<u32>,
    /// Nodes whose opacity changed.
    pub opacity: Vec<u32>,
    /// Nodes whose fill or tint color changed.
    pub color: Vec<u32>,
    /// Tab nodes whose label metrics changed.
    pub label: Vec<u32>,
    /// Tab nodes whose shadow offset changed.
    pub shadow: Vec<u32>,
    /// Edges the shared bar ripple crossed during this evaluation.
    pub bar_ripple: CycleEdges,
}

impl NavChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.opacity.clear();
        self.color.clear();
        self.label.clear();
        self.shadow.clear();
        self.bar_ripple = CycleEdges::default();
    }

    /// Whether this evaluation changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
            && self.opacity.is_empty()
            && self.color.is_empty()
            && self.label.is_empty()
            && self.shadow.is_empty()
            && self.bar_ripple.is_empty()
    }
}

/// A fully sampled visual snapshot of the widget at one instant.
///
/// Evaluation keeps the previous snapshot and diffs against it; presenters
/// read current values from the latest one via [`NavModel::frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct NavFrame {
    /// Container width the bar was laid out against.
    pub container_width: f64,
    /// Background and cross-fade state.
    pub background: BarBackground,
    /// The shared bar ripple's overlay values.
    pub bar_feedback: FeedbackFrame,
    /// Per-tab visual state.
    pub tabs: Vec<TabVisual>,
    /// Per-tab feedback overlay values, indexed like `tabs`.
    pub tab_feedback: Vec<FeedbackFrame>,
    /// The visible page and its fade opacity.
    pub page: PageVisual,
}

/// Applies evaluated changes to a host-native view tree.
///
/// Both platform view hierarchies and test doubles implement this, enabling
/// generic frame loops:
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     let changes = model.evaluate(now);
///     presenter.apply(&model, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`NavChanges`] to the backing views, reading
    /// current values from `model` as needed.
    fn apply(&mut self, model: &NavModel, changes: &NavChanges);
}

// -- Model ----------------------------------------------------------------

/// The top-level widget model: tab bar, pager, and change tracking.
#[derive(Debug)]
pub struct NavModel {
    bar: TabBar,
    pager: Pager,
    dirty: DirtyTracker<u32>,
    last: Option<NavFrame>,
}

impl NavModel {
    /// Creates a model from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.tabs` is empty or `config.initial_tab` is out of
    /// range.
    #[must_use]
    pub fn new(config: NavConfig, timebase: Timebase) -> Self {
        let page_count = config.tabs.len();
        let bar = TabBar::new(config.style, config.tabs, config.initial_tab, timebase);
        let pager = Pager::new(
            page_count,
            config.initial_tab,
            config.animated_switch,
            timebase,
        );
        Self {
            bar,
            pager,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            last: None,
        }
    }

    /// The tab bar.
    #[inline]
    #[must_use]
    pub fn bar(&self) -> &TabBar {
        &self.bar
    }

    /// The pager.
    #[inline]
    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Index of the active tab.
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.bar.active_tab()
    }

    /// Index of the visible page.
    #[inline]
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Total number of host nodes this model addresses.
    #[must_use]
    pub fn node_count(&self) -> u32 {
        page_node(self.bar.tab_count()) + 1
    }

    /// The most recently evaluated snapshot, if any evaluation has run.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> Option<&NavFrame> {
        self.last.as_ref()
    }

    /// Adopts a new container width from the host.
    pub fn set_layout(&mut self, width: f64, now: HostTime) {
        self.bar.set_container_width(width, now);
    }

    /// Routes a touch event through the bar and resolves any press.
    ///
    /// An activating press switches the pager to the pressed tab's page; a
    /// press on the already-active tab requests a scroll to top; a press on
    /// a disabled tab resolves to no event. Feedback animations run in all
    /// three cases.
    pub fn handle_touch(&mut self, event: TouchEvent, now: HostTime) -> NavResponse {
        let touch = self.bar.handle_touch(event, now);
        let event = touch.press.and_then(|press| self.resolve_press(press, now));
        NavResponse { touch, event }
    }

    fn resolve_press(&mut self, press: TabPress, now: HostTime) -> Option<NavEvent> {
        match press.outcome {
            PressOutcome::Activated => {
                let from = self.pager.current_page();
                self.pager.go_to_page(press.tab, now);
                Some(NavEvent::PageChanged {
                    from,
                    to: press.tab,
                })
            }
            PressOutcome::ScrollToTop => Some(NavEvent::ScrollToTop { page: press.tab }),
            PressOutcome::Disabled => None,
        }
    }

    /// Switches to `page` programmatically, driving both the bar's
    /// activation animations and the pager fade.
    ///
    /// Returns `None` when `page` is already visible.
    ///
    /// # Panics
    ///
    /// Panics if `page` is out of range.
    pub fn go_to_page(&mut self, page: usize, now: HostTime) -> Option<NavEvent> {
        let from = self.pager.current_page();
        if page == from {
            return None;
        }
        self.bar.set_active_tab(page, now);
        self.pager.go_to_page(page, now);
        Some(NavEvent::PageChanged { from, to: page })
    }

    // -- evaluation ---------------------------------------------------------

    /// Evaluates the model at `now`, returning the set of changes since the
    /// previous evaluation.
    ///
    /// The first evaluation reports every node on every channel it uses, so
    /// presenters can build their initial tree from it.
    pub fn evaluate(&mut self, now: HostTime) -> NavChanges {
        let mut changes = NavChanges::default();
        self.evaluate_into(now, &mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocating the change lists.
    pub fn evaluate_into(&mut self, now: HostTime, changes: &mut NavChanges) {
        changes.clear();

        let advance = self.bar.advance(now);
        let frame = self.sample_frame(now);
        match self.last.take() {
            None => self.mark_all(),
            Some(previous) => self.mark_diff(&previous, &frame),
        }
        self.last = Some(frame);

        changes
            .geometry
            .extend(self.dirty.drain(dirty::GEOMETRY).deterministic().run());
        changes
            .opacity
            .extend(self.dirty.drain(dirty::OPACITY).deterministic().run());
        changes
            .color
            .extend(self.dirty.drain(dirty::COLOR).deterministic().run());
        changes
            .label
            .extend(self.dirty.drain(dirty::LABEL).deterministic().run());
        changes
            .shadow
            .extend(self.dirty.drain(dirty::SHADOW).deterministic().run());
        changes.bar_ripple = advance.bar_ripple;
    }

    fn sample_frame(&self, now: HostTime) -> NavFrame {
        NavFrame {
            container_width: self.bar.container_width(),
            background: self.bar.sample_background(now),
            bar_feedback: self.bar.bar_ripple().sample(now),
            tabs: self.bar.sample_tabs(now),
            tab_feedback: self
                .bar
                .buttons()
                .iter()
                .map(|button| button.sample(now))
                .collect(),
            page: self.pager.sample(now),
        }
    }

    fn mark_all(&mut self) {
        self.dirty.mark(BAR_BACKGROUND, dirty::GEOMETRY);
        self.dirty.mark(BAR_BACKGROUND, dirty::COLOR);
        self.dirty.mark(BACKGROUND_FADE, dirty::GEOMETRY);
        self.dirty.mark(BACKGROUND_FADE, dirty::COLOR);
        self.dirty.mark(BACKGROUND_FADE, dirty::OPACITY);
        self.mark_overlay_all(BAR_RIPPLE_MASK, BAR_RIPPLE_CIRCLE);
        for tab in 0..self.bar.tab_count() {
            let node = tab_node(tab);
            self.dirty.mark(node, dirty::GEOMETRY);
            self.dirty.mark(node, dirty::COLOR);
            self.dirty.mark(node, dirty::LABEL);
            self.dirty.mark(node, dirty::SHADOW);
            self.mark_overlay_all(tab_mask_node(tab), tab_circle_node(tab));
        }
        self.dirty
            .mark(page_node(self.bar.tab_count()), dirty::OPACITY);
    }

    fn mark_overlay_all(&mut self, mask: u32, circle: u32) {
        self.dirty.mark(mask, dirty::GEOMETRY);
        self.dirty.mark(mask, dirty::COLOR);
        self.dirty.mark(mask, dirty::OPACITY);
        self.dirty.mark(circle, dirty::GEOMETRY);
        self.dirty.mark(circle, dirty::COLOR);
        self.dirty.mark(circle, dirty::OPACITY);
    }

    fn mark_diff(&mut self, old: &NavFrame, new: &NavFrame) {
        if new.container_width != old.container_width {
            self.dirty.mark(BAR_BACKGROUND, dirty::GEOMETRY);
            self.dirty.mark(BACKGROUND_FADE, dirty::GEOMETRY);
        }
        if new.background.base != old.background.base {
            self.dirty.mark(BAR_BACKGROUND, dirty::COLOR);
        }
        if new.background.next != old.background.next {
            self.dirty.mark(BACKGROUND_FADE, dirty::COLOR);
        }
        if new.background.fade_opacity != old.background.fade_opacity {
            self.dirty.mark(BACKGROUND_FADE, dirty::OPACITY);
        }
        self.mark_overlay_diff(
            BAR_RIPPLE_MASK,
            BAR_RIPPLE_CIRCLE,
            &old.bar_feedback,
            &new.bar_feedback,
        );

        for tab in 0..new.tabs.len() {
            let node = tab_node(tab);
            let (o, n) = (&old.tabs[tab], &new.tabs[tab]);
            if n.frame != o.frame {
                self.dirty.mark(node, dirty::GEOMETRY);
            }
            if n.tint != o.tint {
                self.dirty.mark(node, dirty::COLOR);
            }
            if n.label != o.label || n.padding_bottom != o.padding_bottom {
                self.dirty.mark(node, dirty::LABEL);
            }
            if new.tab_feedback[tab].shadow_offset_y != old.tab_feedback[tab].shadow_offset_y {
                self.dirty.mark(node, dirty::SHADOW);
            }
            self.mark_overlay_diff(
                tab_mask_node(tab),
                tab_circle_node(tab),
                &old.tab_feedback[tab],
                &new.tab_feedback[tab],
            );
        }

        if new.page.opacity != old.page.opacity {
            self.dirty.mark(page_node(new.tabs.len()), dirty::OPACITY);
        }
    }

    fn mark_overlay_diff(
        &mut self,
        mask: u32,
        circle: u32,
        old: &FeedbackFrame,
        new: &FeedbackFrame,
    ) {
        if new.mask_frame != old.mask_frame || new.mask_corner_radius != old.mask_corner_radius {
            self.dirty.mark(mask, dirty::GEOMETRY);
        }
        if new.mask_color != old.mask_color {
            self.dirty.mark(mask, dirty::COLOR);
        }
        if new.circle_frame != old.circle_frame || new.circle_scale != old.circle_scale {
            self.dirty.mark(circle, dirty::GEOMETRY);
        }
        if new.circle_color != old.circle_color {
            self.dirty.mark(circle, dirty::COLOR);
        }
        if new.alpha != old.alpha {
            self.dirty.mark(mask, dirty::OPACITY);
            self.dirty.mark(circle, dirty::OPACITY);
        }
    }
}

#[cfg(test)]
mod tests {
    use capillary_core::color::Rgba;
    use capillary_core::feedback::HideAction;

    use crate::bar::BarRippleEdge;

    use super::*;

    const MS: Timebase = Timebase::new(1_000_000, 1);

    fn at(ms: u64) -> HostTime {
        HostTime(ms)
    }

    fn make_model(tab_count: usize, width: f64) -> NavModel {
        let tabs: Vec<TabDescriptor> = (0..tab_count).map(|_| TabDescriptor::new("tab")).collect();
        let mut model = NavModel::new(
            NavConfig {
                style: BarStyle::ios(),
                tabs,
                initial_tab: 0,
                animated_switch: true,
            },
            MS,
        );
        model.set_layout(width, at(0));
        model
    }

    #[test]
    fn node_indices_are_disjoint_and_dense() {
        assert_eq!(tab_node(0), 4);
        assert_eq!(tab_mask_node(0), 5);
        assert_eq!(tab_circle_node(0), 6);
        assert_eq!(tab_node(1), 7);
        assert_eq!(page_node(3), 13);

        let model = make_model(3, 360.0);
        assert_eq!(model.node_count(), 14);
    }

    #[test]
    fn first_evaluate_reports_every_node() {
        let mut model = make_model(3, 360.0);
        let changes = model.evaluate(at(0));

        assert!(changes.geometry.contains(&BAR_BACKGROUND));
        assert!(changes.geometry.contains(&BAR_RIPPLE_MASK));
        assert!(changes.geometry.contains(&tab_node(2)));
        assert!(changes.color.contains(&BACKGROUND_FADE));
        assert!(changes.opacity.contains(&page_node(3)));
        assert!(changes.label.contains(&tab_node(0)));
        assert!(changes.shadow.contains(&tab_node(1)));
        assert!(model.frame().is_some());
    }

    #[test]
    fn quiescent_evaluate_is_empty() {
        let mut model = make_model(3, 360.0);
        let _ = model.evaluate(at(0));

        let changes = model.evaluate(at(500));
        assert!(changes.is_empty(), "nothing moved, nothing reported");
    }

    #[test]
    fn touch_marks_the_pressed_tab_feedback_nodes() {
        let mut model = make_model(3, 360.0);
        let _ = model.evaluate(at(0));

        let response = model.handle_touch(TouchEvent::down(200.0, 28.0), at(10));
        assert_eq!(response.touch.tab, Some(1));
        assert_eq!(response.event, None, "no press until the finger lifts");

        let changes = model.evaluate(at(10));
        assert!(changes.opacity.contains(&tab_mask_node(1)), "alpha snapped to 1");
        assert!(changes.opacity.contains(&tab_circle_node(1)));
        assert!(
            !changes.opacity.contains(&BAR_RIPPLE_MASK),
            "same-background press leaves the shared ripple idle"
        );
    }

    #[test]
    fn activating_press_switches_the_page() {
        let mut model = make_model(3, 360.0);
        let _ = model.evaluate(at(0));

        model.handle_touch(TouchEvent::down(200.0, 28.0), at(10));
        let response = model.handle_touch(TouchEvent::up(200.0, 28.0), at(60));

        assert_eq!(response.event, Some(NavEvent::PageChanged { from: 0, to: 1 }));
        assert_eq!(model.active_tab(), 1);
        assert_eq!(model.current_page(), 1);

        let changes = model.evaluate(at(60));
        assert!(
            changes.opacity.contains(&page_node(3)),
            "incoming page starts its fade at zero"
        );
    }

    #[test]
    fn active_tab_press_scrolls_to_top() {
        let mut model = make_model(3, 360.0);
        let _ = model.evaluate(at(0));

        model.handle_touch(TouchEvent::down(60.0, 28.0), at(10));
        let response = model.handle_touch(TouchEvent::up(60.0, 28.0), at(60));

        assert_eq!(response.event, Some(NavEvent::ScrollToTop { page: 0 }));
        assert_eq!(model.current_page(), 0, "page does not change");
    }

    #[test]
    fn disabled_tab_press_reports_nothing() {
        let mut tabs: Vec<TabDescriptor> = (0..3).map(|_| TabDescriptor::new("tab")).collect();
        tabs[2].enabled = false;
        let mut model = NavModel::new(
            NavConfig {
                style: BarStyle::ios(),
                tabs,
                initial_tab: 0,
                animated_switch: true,
            },
            MS,
        );
        model.set_layout(360.0, at(0));

        model.handle_touch(TouchEvent::down(300.0, 28.0), at(10));
        let response = model.handle_touch(TouchEvent::up(300.0, 28.0), at(60));

        assert_eq!(response.event, None);
        assert_eq!(model.current_page(), 0);
        assert_eq!(model.active_tab(), 0);
    }

    #[test]
    fn programmatic_switch_drives_bar_and_pager() {
        let mut model = make_model(5, 480.0);
        let _ = model.evaluate(at(0));

        let event = model.go_to_page(2, at(100));
        assert_eq!(event, Some(NavEvent::PageChanged { from: 0, to: 2 }));
        assert_eq!(model.active_tab(), 2);
        assert_eq!(model.current_page(), 2);

        // Halfway through the activation both affected tabs are resizing.
        let changes = model.evaluate(at(175));
        assert!(changes.geometry.contains(&tab_node(0)), "outgoing tab shrinking");
        assert!(changes.geometry.contains(&tab_node(2)), "incoming tab growing");
        assert!(changes.label.contains(&tab_node(2)));
        assert!(changes.opacity.contains(&page_node(5)), "page fade running");
    }

    #[test]
    fn switching_to_the_current_page_is_a_no_op() {
        let mut model = make_model(3, 360.0);
        assert_eq!(model.go_to_page(0, at(10)), None);
    }

    #[test]
    fn crowded_press_runs_the_shared_ripple_cycle() {
        let mut model = make_model(5, 480.0);
        let _ = model.evaluate(at(0));

        let down = model.handle_touch(TouchEvent::down(240.0, 28.0), at(0));
        assert!(matches!(
            down.touch.bar_ripple,
            Some(BarRippleEdge::Shown { .. })
        ));

        let changes = model.evaluate(at(0));
        assert!(changes.opacity.contains(&BAR_RIPPLE_MASK));
        assert!(changes.opacity.contains(&BAR_RIPPLE_CIRCLE));

        let up = model.handle_touch(TouchEvent::up(240.0, 28.0), at(20));
        assert_eq!(
            up.touch.bar_ripple,
            Some(BarRippleEdge::Hide(HideAction::Deferred))
        );

        // The expand completes at 100 ms and releases the parked fade.
        let changes = model.evaluate(at(100));
        assert!(changes.bar_ripple.expand_finished);
        assert!(changes.bar_ripple.contract_started);
        assert!(!changes.bar_ripple.settled);

        // The 200 ms fade settles at 300 ms.
        let changes = model.evaluate(at(300));
        assert!(changes.bar_ripple.settled);

        let changes = model.evaluate(at(400));
        assert!(changes.is_empty(), "cycle over, model quiescent");
    }

    #[test]
    fn resize_marks_background_and_tab_geometry() {
        let mut model = make_model(3, 360.0);
        let _ = model.evaluate(at(0));

        model.set_layout(420.0, at(50));
        let changes = model.evaluate(at(50));

        assert!(changes.geometry.contains(&BAR_BACKGROUND));
        assert!(changes.geometry.contains(&BACKGROUND_FADE));
        assert!(changes.geometry.contains(&tab_node(0)));
        assert!(changes.geometry.contains(&tab_node(2)));
    }

    #[test]
    fn colored_tab_press_retargets_the_fade_overlay() {
        let red = Rgba::from_rgb8(244, 67, 54, 1.0);
        let mut tabs: Vec<TabDescriptor> = (0..3).map(|_| TabDescriptor::new("tab")).collect();
        tabs[1].background_color = Some(red);
        let mut model = NavModel::new(
            NavConfig {
                style: BarStyle::ios(),
                tabs,
                initial_tab: 0,
                animated_switch: true,
            },
            MS,
        );
        model.set_layout(360.0, at(0));
        let _ = model.evaluate(at(0));

        model.handle_touch(TouchEvent::down(200.0, 28.0), at(1_000));
        model.handle_touch(TouchEvent::up(200.0, 28.0), at(1_050));

        let changes = model.evaluate(at(1_050));
        assert!(
            changes.color.contains(&BACKGROUND_FADE),
            "overlay retargeted to the red background"
        );
        assert!(
            changes.opacity.contains(&BACKGROUND_FADE),
            "fade restarted from zero"
        );

        // 75 ms delay then 25 ms fade: opacity moves between these samples.
        let mid = model.evaluate(at(1_130));
        assert!(mid.opacity.contains(&BACKGROUND_FADE));
        let done = model.evaluate(at(1_150));
        assert!(done.opacity.contains(&BACKGROUND_FADE));
        let after = model.evaluate(at(1_200));
        assert!(!after.opacity.contains(&BACKGROUND_FADE), "fade settled");
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut model = make_model(3, 360.0);
        let mut changes = NavChanges::default();

        model.evaluate_into(at(0), &mut changes);
        assert!(!changes.is_empty());

        model.evaluate_into(at(500), &mut changes);
        assert!(changes.is_empty(), "buffer cleared, not accumulating");
    }
}
