// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_view --heading-base-level=0

//! Vista View: the pan/zoom transform of a card board viewport.
//!
//! This crate provides the small, headless value types that describe where
//! a content layer sits inside a viewport:
//! - [`Transform`]: the `{x, y, scale}` triple (pan offset in view pixels and
//!   a uniform zoom factor).
//! - [`ScaleLimits`]: the closed zoom range a transform is kept inside.
//!
//! It does **not** own any input handling, timers, or rendering. Callers are
//! expected to:
//! - Route wheel and pointer input into pan/zoom intents at a higher layer
//!   (see `vista_gesture`).
//! - Mirror the transform onto a render surface (see `vista_surface`).
//!
//! ## Zoom to point
//!
//! ```rust
//! use kurbo::Point;
//! use vista_view::{ScaleLimits, Transform};
//!
//! let limits = ScaleLimits::default();
//! let cursor = Point::new(100.0, 100.0);
//!
//! let before = Transform::IDENTITY;
//! let under_cursor = before.view_to_content(cursor);
//!
//! // Scroll "down" with ctrl held: shrink the content by half.
//! let after = before.zoomed_about(cursor, -0.5, limits);
//! assert_eq!(after, Transform::new(50.0, 50.0, 0.5));
//!
//! // The content point that was under the cursor still is.
//! let still_under = after.view_to_content(cursor);
//! assert!((still_under.x - under_cursor.x).abs() < 1e-9);
//! assert!((still_under.y - under_cursor.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation.
//! - Panning is free: `x` and `y` are never clamped to content bounds.
//! - Wheel panning subtracts the delta ([`Transform::panned`]) while drag
//!   panning adds the pointer offset ([`Transform::translated`]). The two
//!   conventions are distinct on purpose and callers pick one per input kind.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod transform;

pub use limits::ScaleLimits;
pub use transform::Transform;
