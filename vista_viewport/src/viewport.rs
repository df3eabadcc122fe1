// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use tracing::debug;
use vista_gesture::drag::{DragController, PointerInput};
use vista_gesture::wheel::{WheelInput, WheelIntent, WheelRouter};
use vista_persist::KeyValueStore;
use vista_surface::RenderSurface;
use vista_view::Transform;

use crate::config::ViewportConfig;
use crate::controller::ViewportController;

/// What a call to [`Viewport::poll`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Number of view state records written.
    pub saves_written: usize,
    /// `true` if the scrolling flag dropped during this poll.
    pub scrolling_ended: bool,
}

/// A complete viewport: controller plus wheel and drag routing.
///
/// Hosts forward DOM-level events to the `on_*` methods and call
/// [`Viewport::poll`] when [`Viewport::next_deadline`] passes (or simply on
/// every animation frame).
///
/// Wheel zoom and drag pan are not arbitrated: if a wheel event arrives
/// while a drag is open, it is applied, and the next pointer move then
/// recomputes the offset from the drag origin at the current scale. The last
/// call wins.
#[derive(Debug)]
pub struct Viewport<S, K> {
    controller: ViewportController<S, K>,
    wheel: WheelRouter,
    drag: DragController,
}

impl<S: RenderSurface, K: KeyValueStore> Viewport<S, K> {
    /// Creates a viewport over `surface`, persisting into `store`.
    pub fn new(config: ViewportConfig, surface: S, store: K) -> Self {
        let mut wheel = WheelRouter::new(config.zoom_speed, config.scrolling_reset_ms);
        wheel.set_line_height(config.line_height);
        Self {
            controller: ViewportController::new(config, surface, store),
            wheel,
            drag: DragController::new(),
        }
    }

    /// Binds to `entity_id` and restores its transform.
    ///
    /// Any open drag is dropped since its origin belongs to the old state.
    pub fn initialize(&mut self, entity_id: &str) -> Transform {
        self.drag.cancel();
        self.controller.initialize(entity_id)
    }

    /// Handles a wheel event.
    ///
    /// Returns the applied intent if the event was consumed; the host must
    /// then call `preventDefault` on it.
    pub fn on_wheel(&mut self, input: &WheelInput) -> Option<WheelIntent> {
        self.wheel.handle(input, &mut self.controller)
    }

    /// Handles a pointer press. Returns `true` if a drag started.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> bool {
        self.drag.on_pointer_down(input, &self.controller)
    }

    /// Handles a pointer move. Returns `true` if the transform changed.
    pub fn on_pointer_move(&mut self, input: &PointerInput) -> bool {
        self.drag.on_pointer_move(input, &mut self.controller)
    }

    /// Handles a pointer release. Returns `true` if a drag ended.
    pub fn on_pointer_up(&mut self) -> bool {
        self.drag.on_pointer_up().is_some()
    }

    /// The pointer left the window. Returns `true` if a drag ended.
    pub fn on_window_leave(&mut self) -> bool {
        self.drag.on_window_leave().is_some()
    }

    /// The window lost focus. Returns `true` if a drag ended.
    pub fn on_window_blur(&mut self) -> bool {
        self.drag.on_window_blur().is_some()
    }

    /// Fires due timers: debounced saves and the scrolling flag reset.
    pub fn poll(&mut self, now: u64) -> PollOutcome {
        PollOutcome {
            saves_written: self.controller.poll(now),
            scrolling_ended: self.wheel.poll(now),
        }
    }

    /// Earliest time at which [`Viewport::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (
            self.controller.next_deadline(),
            self.wheel.scrolling().next_deadline(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }

    /// Returns `true` while wheel scrolling is in progress.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.wheel.is_scrolling()
    }

    /// Returns `true` while a drag is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Sets where the viewport's top-left corner sits in pointer coordinates
    /// and its size (used for page-mode wheel deltas).
    pub fn set_view_rect(&mut self, origin: Point, size: Size) {
        self.controller.set_view_origin(origin);
        self.wheel.set_page_size(size);
    }

    /// The controller.
    #[must_use]
    pub fn controller(&self) -> &ViewportController<S, K> {
        &self.controller
    }

    /// The controller, mutably.
    pub fn controller_mut(&mut self) -> &mut ViewportController<S, K> {
        &mut self.controller
    }

    /// Tears down transient gesture state and flushes pending saves.
    ///
    /// Returns the number of records written.
    pub fn unmount(&mut self) -> usize {
        if self.drag.cancel().is_some() {
            debug!("drag dropped on unmount");
        }
        self.wheel.clear_scrolling();
        self.controller.unmount()
    }
}
