// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel routing: classify each wheel event into exactly one intent.
//!
//! The decision table is evaluated in order and the first match wins:
//!
//! | modifiers      | intent          | parameters                                   |
//! |----------------|-----------------|----------------------------------------------|
//! | Ctrl or Meta   | zoom to point   | cursor relative to the view origin, `-dy * zoom_speed` |
//! | Shift          | horizontal pan  | `dx` if `|dx| > |dy|`, else `dy`              |
//! | otherwise      | vertical pan    | `dy`                                         |
//!
//! The Shift rule accommodates mice that report shift+wheel as a vertical
//! delta.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vista_gesture::wheel::{WheelDelta, WheelInput, WheelIntent, classify};
//! use vista_gesture::Modifiers;
//!
//! let input = WheelInput::new(
//!     Point::new(130.0, 140.0),
//!     WheelDelta::Pixels(Vec2::new(0.0, -50.0)),
//!     Modifiers::CTRL,
//!     0,
//! );
//! let intent = classify(input.modifiers, input.position, Vec2::new(0.0, -50.0), Point::new(30.0, 40.0), 0.01);
//! assert_eq!(
//!     intent,
//!     WheelIntent::ZoomToPoint { cursor: Point::new(100.0, 100.0), scale_delta_factor: 0.5 }
//! );
//! ```

use kurbo::{Point, Size, Vec2};

use crate::modifiers::Modifiers;
use crate::scrolling::ScrollingFlag;
use crate::target::GestureTarget;

/// Scale change per pixel of vertical wheel delta while zooming.
pub const ZOOM_SPEED: f64 = 0.01;

/// Pixels per line for line-mode wheel deltas.
pub const DEFAULT_LINE_HEIGHT: f64 = 16.0;

/// Raw wheel delta, tagged with its unit (the DOM `deltaMode`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Delta in pixels.
    Pixels(Vec2),
    /// Delta in lines of text.
    Lines(Vec2),
    /// Delta in pages (one page is one viewport extent).
    Pages(Vec2),
}

impl WheelDelta {
    /// Resolves the delta into pixels.
    #[must_use]
    pub fn to_pixels(self, line_height: f64, page_size: Size) -> Vec2 {
        match self {
            Self::Pixels(v) => v,
            Self::Lines(v) => v * line_height,
            Self::Pages(v) => Vec2::new(v.x * page_size.width, v.y * page_size.height),
        }
    }
}

/// A wheel event as seen by the router.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position, in the same space as [`GestureTarget::view_origin`].
    pub position: Point,
    /// Scroll amount.
    pub delta: WheelDelta,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
    /// Event time in milliseconds.
    pub time_ms: u64,
}

impl WheelInput {
    /// Creates a wheel input.
    #[must_use]
    pub fn new(position: Point, delta: WheelDelta, modifiers: Modifiers, time_ms: u64) -> Self {
        Self {
            position,
            delta,
            modifiers,
            time_ms,
        }
    }
}

/// What a wheel event asks the viewport to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelIntent {
    /// Zoom keeping the content under `cursor` fixed.
    ZoomToPoint {
        /// Cursor relative to the view origin.
        cursor: Point,
        /// Relative scale change; the new scale is `scale * (1 + factor)`.
        scale_delta_factor: f64,
    },
    /// Pan horizontally by the given wheel delta.
    PanX(f64),
    /// Pan vertically by the given wheel delta.
    PanY(f64),
}

/// Classifies a wheel event whose delta is already resolved to pixels.
#[must_use]
pub fn classify(
    modifiers: Modifiers,
    position: Point,
    delta: Vec2,
    view_origin: Point,
    zoom_speed: f64,
) -> WheelIntent {
    if modifiers.zoom() {
        WheelIntent::ZoomToPoint {
            cursor: (position - view_origin).to_point(),
            scale_delta_factor: -delta.y * zoom_speed,
        }
    } else if modifiers.shift() {
        let dx = if delta.x.abs() > delta.y.abs() {
            delta.x
        } else {
            delta.y
        };
        WheelIntent::PanX(dx)
    } else {
        WheelIntent::PanY(delta.y)
    }
}

/// Routes wheel events into a [`GestureTarget`] and tracks the scrolling flag.
#[derive(Clone, Debug)]
pub struct WheelRouter {
    zoom_speed: f64,
    line_height: f64,
    page_size: Size,
    scrolling: ScrollingFlag,
}

impl WheelRouter {
    /// Creates a router with the given zoom speed and scrolling reset delay.
    #[must_use]
    pub fn new(zoom_speed: f64, scrolling_reset_delay: u64) -> Self {
        Self {
            zoom_speed,
            line_height: DEFAULT_LINE_HEIGHT,
            page_size: Size::ZERO,
            scrolling: ScrollingFlag::new(scrolling_reset_delay),
        }
    }

    /// Sets the pixel height used for line-mode deltas.
    pub fn set_line_height(&mut self, line_height: f64) {
        self.line_height = line_height;
    }

    /// Sets the viewport extent used for page-mode deltas.
    pub fn set_page_size(&mut self, page_size: Size) {
        self.page_size = page_size;
    }

    /// Handles one wheel event.
    ///
    /// Returns the applied intent when the event was consumed; the host must
    /// then suppress native scrolling (`preventDefault`). Returns `None`, and
    /// leaves all state untouched, when the target is detached or the delta
    /// is not finite.
    pub fn handle<T: GestureTarget>(
        &mut self,
        input: &WheelInput,
        target: &mut T,
    ) -> Option<WheelIntent> {
        if !target.is_attached() {
            return None;
        }
        let delta = input.delta.to_pixels(self.line_height, self.page_size);
        if !delta.is_finite() || !input.position.is_finite() {
            return None;
        }
        let intent = classify(
            input.modifiers,
            input.position,
            delta,
            target.view_origin(),
            self.zoom_speed,
        );
        self.scrolling.raise(input.time_ms);
        match intent {
            WheelIntent::ZoomToPoint {
                cursor,
                scale_delta_factor,
            } => target.apply_zoom(cursor, scale_delta_factor, input.time_ms),
            WheelIntent::PanX(dx) => target.apply_pan(dx, 0.0, input.time_ms),
            WheelIntent::PanY(dy) => target.apply_pan(0.0, dy, input.time_ms),
        }
        Some(intent)
    }

    /// Lowers the scrolling flag if its quiet period elapsed.
    ///
    /// Returns `true` if the flag dropped during this call.
    pub fn poll(&mut self, now: u64) -> bool {
        self.scrolling.poll(now)
    }

    /// Returns `true` while wheel scrolling is in progress.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling.is_scrolling()
    }

    /// Scrolling flag state, for hosts that schedule its reset.
    #[must_use]
    pub fn scrolling(&self) -> &ScrollingFlag {
        &self.scrolling
    }

    /// Lowers the scrolling flag immediately.
    pub fn clear_scrolling(&mut self) {
        self.scrolling.clear();
    }
}

impl Default for WheelRouter {
    fn default() -> Self {
        Self::new(ZOOM_SPEED, ScrollingFlag::DEFAULT_RESET_DELAY)
    }
}
