// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag panning: turn a press-move-release sequence into continuous pan.
//!
//! ## Usage
//!
//! 1) Call [`DragController::on_pointer_down`] on press. A session only opens
//!    when the press lands on the viewport background, never on card chrome.
//! 2) Call [`DragController::on_pointer_move`] for every move. The transform
//!    offset is recomputed from the session origin, so the result depends
//!    only on the total pointer motion and not on how many move events
//!    arrived. The scale is left as the target has it.
//! 3) Close the session with [`DragController::on_pointer_up`]. Because a
//!    release outside the window may never be delivered, also forward window
//!    `mouseleave` and `blur` to [`DragController::on_window_leave`] and
//!    [`DragController::on_window_blur`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vista_gesture::drag::GestureSession;
//! use vista_view::Transform;
//!
//! let session = GestureSession::new(Point::new(10.0, 20.0), Transform::new(5.0, 5.0, 0.5));
//! let t = session.transform_at(Point::new(15.0, 25.0));
//! assert_eq!(t, Transform::new(10.0, 10.0, 0.5));
//! ```

use kurbo::{Point, Vec2};
use vista_view::Transform;

use crate::target::GestureTarget;

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HitTarget {
    /// Empty viewport background; presses here start a drag.
    #[default]
    Background,
    /// Interactive card chrome (buttons, menus, editable text).
    Chrome,
}

/// A pointer event as seen by the drag controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position in view space.
    pub position: Point,
    /// What the pointer is over.
    pub target: HitTarget,
    /// Event time in milliseconds.
    pub time_ms: u64,
}

impl PointerInput {
    /// Creates a pointer input.
    #[must_use]
    pub fn new(position: Point, target: HitTarget, time_ms: u64) -> Self {
        Self {
            position,
            target,
            time_ms,
        }
    }
}

/// Transient state of an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Pointer position at press.
    pub origin_pointer: Point,
    /// Transform at press.
    pub origin_transform: Transform,
}

impl GestureSession {
    /// Opens a session at `origin_pointer` over `origin_transform`.
    #[must_use]
    pub fn new(origin_pointer: Point, origin_transform: Transform) -> Self {
        Self {
            origin_pointer,
            origin_transform,
        }
    }

    /// Pointer offset from the press position.
    #[must_use]
    pub fn total_offset(&self, pointer: Point) -> Vec2 {
        pointer - self.origin_pointer
    }

    /// Transform for the pointer at `pointer`: content follows the pointer.
    #[must_use]
    pub fn transform_at(&self, pointer: Point) -> Transform {
        self.origin_transform.translated(self.total_offset(pointer))
    }
}

/// Drag panning state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    session: Option<GestureSession>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a press. Returns `true` if a session was opened.
    ///
    /// A press while a session is already open restarts it from the new
    /// position.
    pub fn on_pointer_down<T: GestureTarget>(&mut self, input: &PointerInput, target: &T) -> bool {
        if input.target != HitTarget::Background
            || !target.is_attached()
            || !input.position.is_finite()
        {
            return false;
        }
        self.session = Some(GestureSession::new(input.position, target.transform()));
        true
    }

    /// Handles a move. Returns `true` if the target transform was updated.
    ///
    /// Only the offset is driven by the drag. The scale is the target's
    /// current one, so a zoom applied while the session is open survives.
    pub fn on_pointer_move<T: GestureTarget>(&mut self, input: &PointerInput, target: &mut T) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if !target.is_attached() || !input.position.is_finite() {
            return false;
        }
        let next = Transform {
            scale: target.transform().scale,
            ..session.transform_at(input.position)
        };
        target.set_transform(next, input.time_ms);
        true
    }

    /// Handles a release. Returns the session that was closed, if any.
    pub fn on_pointer_up(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Drops any open session without a release, for example on unmount or
    /// when the viewport switches entity.
    pub fn cancel(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// The pointer left the window; closes any open session.
    pub fn on_window_leave(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// The window lost focus; closes any open session.
    pub fn on_window_blur(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }
}
