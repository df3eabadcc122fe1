// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vista_view::Transform;

/// A back-end that visually mirrors the live transform.
///
/// [`RenderSurface::apply_transform`] is the immediate update path: it is
/// called synchronously on every transform change, before any reactive
/// re-render, and should only touch the transform of the content layer.
/// Implementations should avoid allocating there.
///
/// The same viewport controller drives every back-end, so gesture math is
/// never duplicated per renderer.
pub trait RenderSurface {
    /// Reflects `transform` on the content layer.
    fn apply_transform(&mut self, transform: Transform);

    /// Returns `false` when the underlying render target is missing or
    /// unmounted. Controllers skip gesture work while detached.
    fn is_attached(&self) -> bool {
        true
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn apply_transform(&mut self, transform: Transform) {
        (**self).apply_transform(transform);
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}
