// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::limits::ScaleLimits;

/// Pan/zoom state of a content layer inside a viewport.
///
/// `x` and `y` are the view-space position (in pixels) of the content origin
/// and `scale` is a uniform zoom factor. A content point `c` appears on
/// screen at `(x + c.x * scale, y + c.y * scale)`.
///
/// Values are plain data: they are produced by the viewport controller and
/// copied freely into render surfaces, drag sessions, and storage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Horizontal pan offset in view pixels.
    pub x: f64,
    /// Vertical pan offset in view pixels.
    pub y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Transform {
    /// The untransformed state `{0, 0, 1}`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Returns the pan offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite()
    }

    /// Pans by a wheel delta.
    ///
    /// Content moves opposite to the scroll direction: `x' = x - dx`,
    /// `y' = y - dy`. Scale is unchanged.
    #[must_use]
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            scale: self.scale,
        }
    }

    /// Moves the content by `offset`, so that it follows a dragged pointer.
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            scale: self.scale,
        }
    }

    /// Zooms around `cursor` (in view coordinates).
    ///
    /// The new scale is `limits.clamp(scale * (1 + scale_delta_factor))` and
    /// the offset is recomputed so that the content point under `cursor`
    /// stays under `cursor`. When the scale saturates at a limit the offset
    /// is still recomputed, which leaves it unchanged if the scale did not
    /// move.
    ///
    /// Non-finite inputs leave the transform as is.
    #[must_use]
    pub fn zoomed_about(self, cursor: Point, scale_delta_factor: f64, limits: ScaleLimits) -> Self {
        if !cursor.is_finite()
            || !scale_delta_factor.is_finite()
            || !self.is_finite()
            || self.scale <= 0.0
        {
            return self;
        }
        let scale = limits.clamp(self.scale * (1.0 + scale_delta_factor));
        let content = self.view_to_content(cursor);
        Self {
            x: cursor.x - content.x * scale,
            y: cursor.y - content.y * scale,
            scale,
        }
    }

    /// Returns a copy with `scale` clamped into `limits`.
    ///
    /// The offset is left alone; this is used to sanitize stored state, not
    /// to zoom.
    #[must_use]
    pub fn clamped(self, limits: ScaleLimits) -> Self {
        Self {
            scale: limits.clamp(self.scale),
            ..self
        }
    }

    /// Converts a view-space point into content space.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        Point::new((pt.x - self.x) / self.scale, (pt.y - self.y) / self.scale)
    }

    /// Converts a content-space point into view space.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        Point::new(pt.x * self.scale + self.x, pt.y * self.scale + self.y)
    }

    /// Content-to-view affine: translate by the offset, then scale.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Compares component-wise within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
