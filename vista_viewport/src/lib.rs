// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_viewport --heading-base-level=0

//! Vista Viewport: the pan/zoom engine behind a board of entity cards.
//!
//! [`ViewportController`] is the single owner of the live
//! [`Transform`](vista_view::Transform). Gestures only submit intents to it
//! (through [`vista_gesture::GestureTarget`]); it applies each one in arrival
//! order, restyles the render surface synchronously, and schedules a
//! debounced save of the settled state.
//!
//! [`Viewport`] bundles the controller with the wheel router and the drag
//! controller, which is what a host usually wires its event listeners to.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vista_gesture::Modifiers;
//! use vista_gesture::wheel::{WheelDelta, WheelInput};
//! use vista_persist::MemoryStore;
//! use vista_surface::AffineSurface;
//! use vista_view::Transform;
//! use vista_viewport::{Viewport, ViewportConfig};
//!
//! let store = MemoryStore::new();
//! let mut viewport = Viewport::new(ViewportConfig::default(), AffineSurface::new(), store.clone());
//! assert_eq!(viewport.initialize("study-1"), Transform::IDENTITY);
//!
//! // Ctrl + wheel down at (100, 100): zoom out to half size around the cursor.
//! let wheel = WheelInput::new(
//!     Point::new(100.0, 100.0),
//!     WheelDelta::Pixels(Vec2::new(0.0, 50.0)),
//!     Modifiers::CTRL,
//!     1_000,
//! );
//! assert!(viewport.on_wheel(&wheel).is_some());
//! assert_eq!(viewport.transform(), Transform::new(50.0, 50.0, 0.5));
//! assert!(viewport.is_scrolling());
//!
//! // The surface already shows it; the store gets it once input is quiet.
//! assert_eq!(viewport.controller().surface().transform(), Transform::new(50.0, 50.0, 0.5));
//! assert!(store.is_empty());
//! let outcome = viewport.poll(1_500);
//! assert_eq!(outcome.saves_written, 1);
//! assert!(outcome.scrolling_ended);
//! ```
//!
//! Everything is single-threaded and driven by the host: event handlers and
//! [`Viewport::poll`] take the current time in milliseconds, and there are no
//! background threads.

mod config;
mod controller;
mod viewport;

pub use config::{ConfigError, ViewportConfig};
pub use controller::ViewportController;
pub use viewport::{PollOutcome, Viewport};
