// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas/SVG back-end.

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point};
use vista_view::Transform;

use crate::surface::RenderSurface;

/// [`RenderSurface`] that keeps the content-to-view affine for a canvas or
/// SVG renderer.
///
/// A renderer reads [`AffineSurface::affine`] when it paints, and can compare
/// [`AffineSurface::revision`] against the revision it last painted to skip
/// redundant frames.
#[derive(Clone, Debug)]
pub struct AffineSurface {
    transform: Transform,
    affine: Affine,
    revision: u64,
    attached: bool,
}

impl AffineSurface {
    /// Creates an attached surface at the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Transform::IDENTITY,
            affine: Affine::IDENTITY,
            revision: 0,
            attached: true,
        }
    }

    /// Marks the surface as attached or not (for example while its canvas is
    /// unmounted).
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Current content-to-view affine.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.affine
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Bumped every time the transform changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Maps a content-space point to view space.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.affine * pt
    }

    /// SVG `transform` attribute value for the content group.
    #[must_use]
    pub fn svg_transform(&self) -> String {
        let [a, b, c, d, e, f] = self.affine.as_coeffs();
        format!("matrix({a} {b} {c} {d} {e} {f})")
    }
}

impl Default for AffineSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for AffineSurface {
    fn apply_transform(&mut self, transform: Transform) {
        if !self.attached || transform == self.transform {
            return;
        }
        self.transform = transform;
        self.affine = transform.to_affine();
        self.revision += 1;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
