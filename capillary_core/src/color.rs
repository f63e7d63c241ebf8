// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal straight-alpha RGBA color.
//!
//! This type covers the subset of color handling the widget kit actually
//! needs (storing configured colors, alpha overrides for derived feedback
//! colors) without pulling in a color-space crate. Channels are `f64` in
//! `[0, 1]`; no gamma or color-space conversion is performed.

use core::fmt;

/// A straight-alpha RGBA color with `f64` channels in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from four `[0, 1]` channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit RGB channels and a `[0, 1]` alpha.
    ///
    /// Matches the `rgba(r, g, b, a)` notation most style systems quote
    /// feedback colors in.
    #[inline]
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a,
        }
    }

    /// Returns this color with the alpha channel replaced.
    ///
    /// Used to derive feedback colors from a tab's background (the bar takes
    /// the background at low alpha for the mask and higher alpha for the
    /// ripple circle).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Linearly interpolates each channel towards `other`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`. Channels are blended
    /// independently; straight alpha means a fade through
    /// [`TRANSPARENT`](Self::TRANSPARENT) darkens as it goes.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
