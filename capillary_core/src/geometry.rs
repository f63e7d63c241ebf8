// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple and mask geometry.
//!
//! A ripple is a circle that expands from a hotspot until it covers its
//! bounding box. [`RippleGeometry::covering`] computes the covering radius as
//! the distance from the hotspot to the farthest corner, so the fully
//! expanded circle always reaches every corner of the box. The mask layer is
//! a rounded rectangle whose corner radius is either a fixed value or a
//! percentage of the box's short side ([`CornerRadius`]).
//!
//! Inputs are not validated: a hotspot outside the box degrades to a larger
//! covering circle, and negative sizes degrade arithmetically. Callers are
//! expected to pass coordinates local to the box.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, RoundedRect, Size};

/// Where a ripple expands from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RippleLocation {
    /// Expand from the reported touch coordinate.
    #[default]
    TapLocation,
    /// Expand from the center of the box regardless of the touch coordinate.
    Center,
}

impl RippleLocation {
    /// Resolves the hotspot for a touch at `touch` in a box of `size`.
    #[inline]
    #[must_use]
    pub fn resolve(self, size: Size, touch: Point) -> Point {
        match self {
            Self::TapLocation => touch,
            Self::Center => Point::new(size.width / 2.0, size.height / 2.0),
        }
    }
}

/// Corner rounding for the mask layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerRadius {
    /// A fixed radius in local units.
    Fixed(f64),
    /// A percentage of `min(width, height)`.
    Percent(f64),
}

impl CornerRadius {
    /// Resolves to a concrete radius for a box of `size`.
    #[inline]
    #[must_use]
    pub fn resolve(self, size: Size) -> f64 {
        match self {
            Self::Fixed(radius) => radius,
            Self::Percent(pct) => size.width.min(size.height) * pct / 100.0,
        }
    }

    /// Whether this is a percentage-based radius greater than zero.
    ///
    /// The center-hotspot radius clamp only applies to percentage radii.
    #[inline]
    #[must_use]
    pub fn is_positive_percent(self) -> bool {
        matches!(self, Self::Percent(pct) if pct > 0.0)
    }
}

/// Resolved mask-layer geometry for one box size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaskGeometry {
    /// Concrete corner radius in local units.
    pub corner_radius: f64,
}

impl MaskGeometry {
    /// Resolves `corner` against a box of `size`.
    #[inline]
    #[must_use]
    pub fn resolve(corner: CornerRadius, size: Size) -> Self {
        Self {
            corner_radius: corner.resolve(size),
        }
    }

    /// The mask's clip shape for a box at `frame`.
    #[inline]
    #[must_use]
    pub fn shape(&self, frame: Rect) -> RoundedRect {
        RoundedRect::from_rect(frame, self.corner_radius)
    }
}

/// Resolved ripple-circle geometry for one hotspot.
///
/// The circle is stored as its radius plus the offset of its bounding
/// square's top-left corner, so the square of side `diameter` is centered on
/// the hotspot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleGeometry {
    /// Radius of the fully expanded circle.
    pub radius: f64,
    /// Left edge of the circle's bounding square, relative to the box.
    pub offset_left: f64,
    /// Top edge of the circle's bounding square, relative to the box.
    pub offset_top: f64,
}

impl RippleGeometry {
    /// Computes the covering circle for a hotspot in a box of `size`.
    ///
    /// The radius is the distance from the hotspot to the farthest corner:
    /// `sqrt(max(hx, w - hx)² + max(hy, h - hy)²)`.
    #[must_use]
    pub fn covering(size: Size, hotspot: Point) -> Self {
        let offset_x = hotspot.x.max(size.width - hotspot.x);
        let offset_y = hotspot.y.max(size.height - hotspot.y);
        let radius = (offset_x * offset_x + offset_y * offset_y).sqrt();
        Self::with_radius(radius, hotspot)
    }

    /// A circle of explicit `radius` centered on `hotspot`.
    ///
    /// Used by the center-hotspot clamp, where the ripple radius is pinned
    /// to the mask's corner radius instead of the covering radius.
    #[inline]
    #[must_use]
    pub fn with_radius(radius: f64, hotspot: Point) -> Self {
        Self {
            radius,
            offset_left: hotspot.x - radius,
            offset_top: hotspot.y - radius,
        }
    }

    /// Diameter of the circle (side of its bounding square).
    #[inline]
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// The circle's bounding square, relative to the box.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.offset_left,
            self.offset_top,
            self.offset_left + self.diameter(),
            self.offset_top + self.diameter(),
        )
    }

    /// The hotspot the circle is centered on.
    #[inline]
    #[must_use]
    pub fn hotspot(&self) -> Point {
        Point::new(self.offset_left + self.radius, self.offset_top + self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_distance(hotspot: Point, corner: Point) -> f64 {
        let dx = corner.x - hotspot.x;
        let dy = corner.y - hotspot.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn covering_radius_reaches_farthest_corner() {
        let size = Size::new(320.0, 56.0);
        let hotspot = Point::new(40.0, 12.0);
        let geometry = RippleGeometry::covering(size, hotspot);

        let corners = [
            Point::new(0.0, 0.0),
            Point::new(size.width, 0.0),
            Point::new(0.0, size.height),
            Point::new(size.width, size.height),
        ];
        let farthest = corners
            .iter()
            .map(|c| corner_distance(hotspot, *c))
            .fold(0.0_f64, f64::max);

        assert!(
            (geometry.radius - farthest).abs() < 1e-9,
            "radius equals farthest corner distance"
        );
        for corner in corners {
            assert!(
                corner_distance(hotspot, corner) <= geometry.radius + 1e-9,
                "expanded circle covers every corner"
            );
        }
    }

    #[test]
    fn covering_example_200_by_100() {
        // 200×100 box, tap at (10, 10): offsets (190, 90), radius √44200.
        let geometry = RippleGeometry::covering(Size::new(200.0, 100.0), Point::new(10.0, 10.0));
        assert!((geometry.radius - 44_200.0_f64.sqrt()).abs() < 1e-9);
        assert!((geometry.radius - 210.238).abs() < 1e-3);
        assert!((geometry.offset_left - (10.0 - geometry.radius)).abs() < 1e-9);
        assert!((geometry.offset_top - (10.0 - geometry.radius)).abs() < 1e-9);
    }

    #[test]
    fn bounding_square_centered_on_hotspot() {
        let hotspot = Point::new(25.0, 30.0);
        let geometry = RippleGeometry::covering(Size::new(100.0, 60.0), hotspot);
        let bounds = geometry.bounds();
        assert!((bounds.width() - geometry.diameter()).abs() < 1e-9);
        assert!((bounds.height() - geometry.diameter()).abs() < 1e-9);
        let center = geometry.hotspot();
        assert!((center.x - hotspot.x).abs() < 1e-9);
        assert!((center.y - hotspot.y).abs() < 1e-9);
    }

    #[test]
    fn center_location_ignores_touch_point() {
        let size = Size::new(80.0, 56.0);
        let at_center = RippleLocation::Center.resolve(size, Point::new(3.0, 51.0));
        assert_eq!(at_center, Point::new(40.0, 28.0));

        let a = RippleGeometry::covering(size, RippleLocation::Center.resolve(size, Point::new(3.0, 51.0)));
        let b = RippleGeometry::covering(size, RippleLocation::Center.resolve(size, Point::new(79.0, 1.0)));
        assert_eq!(a, b, "center mode is independent of the touch point");
    }

    #[test]
    fn percent_corner_radius_uses_short_side() {
        // 50% of a 100×100 box resolves to 50.
        let square = MaskGeometry::resolve(CornerRadius::Percent(50.0), Size::new(100.0, 100.0));
        assert!((square.corner_radius - 50.0).abs() < 1e-9);

        // The short side wins on a non-square box.
        let wide = MaskGeometry::resolve(CornerRadius::Percent(50.0), Size::new(200.0, 56.0));
        assert!((wide.corner_radius - 28.0).abs() < 1e-9);
    }

    #[test]
    fn fixed_corner_radius_ignores_size() {
        let geometry = MaskGeometry::resolve(CornerRadius::Fixed(2.0), Size::new(431.0, 56.0));
        assert!((geometry.corner_radius - 2.0).abs() < 1e-9);
    }

    #[test]
    fn positive_percent_detection() {
        assert!(CornerRadius::Percent(50.0).is_positive_percent());
        assert!(!CornerRadius::Percent(0.0).is_positive_percent());
        assert!(!CornerRadius::Fixed(8.0).is_positive_percent());
    }
}
