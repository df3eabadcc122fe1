// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use vista_view::Transform;

/// Receiver of gesture intents.
///
/// The routers in this crate never mutate a [`Transform`] themselves; they
/// only submit intents through this trait. The implementor owns the live
/// transform and decides how to reflect and persist each change.
///
/// All methods take the event time in milliseconds so implementors can feed
/// debounce timers without reading a clock.
pub trait GestureTarget {
    /// Current transform.
    fn transform(&self) -> Transform;

    /// Replaces the transform outright (used by drag panning).
    fn set_transform(&mut self, transform: Transform, now: u64);

    /// Wheel pan: content moves opposite to `(dx, dy)`.
    fn apply_pan(&mut self, dx: f64, dy: f64, now: u64);

    /// Zooms by `scale_delta_factor` keeping the content under `cursor` fixed.
    ///
    /// `cursor` is relative to the viewport origin.
    fn apply_zoom(&mut self, cursor: Point, scale_delta_factor: f64, now: u64);

    /// Position of the viewport's top-left corner in the coordinate space of
    /// incoming pointer positions.
    fn view_origin(&self) -> Point {
        Point::ZERO
    }

    /// Returns `false` when there is no render target to act on.
    ///
    /// Gesture handlers skip the event entirely in that case.
    fn is_attached(&self) -> bool {
        true
    }
}
