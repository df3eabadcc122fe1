// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_gesture --heading-base-level=0

//! Vista Gesture: wheel and drag state machines for a pan/zoom viewport.
//!
//! This crate turns raw input into viewport intents:
//!
//! - [`wheel`]: classify wheel events into zoom-to-point, horizontal pan, or
//!   vertical pan, and raise the [`ScrollingFlag`].
//! - [`drag`]: translate a press-move-release sequence over the background
//!   into continuous pan.
//!
//! Neither router owns the transform. Both submit intents to a
//! [`GestureTarget`], which is implemented by the viewport controller in
//! `vista_viewport` (and by test doubles).
//!
//! Two sign conventions coexist on purpose: wheel panning moves content
//! *against* the scroll delta, while drag panning moves content *with* the
//! pointer.
//!
//! There is no arbitration between wheel and drag: if both are active, each
//! submits its intent as events arrive and the last call wins.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

pub mod drag;
mod modifiers;
mod scrolling;
mod target;
pub mod wheel;

pub use modifiers::Modifiers;
pub use scrolling::ScrollingFlag;
pub use target::GestureTarget;
