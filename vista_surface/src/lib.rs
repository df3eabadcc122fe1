// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_surface --heading-base-level=0

//! Vista Surface: render surfaces for a pan/zoom viewport.
//!
//! A [`RenderSurface`] visually mirrors the live
//! [`Transform`](vista_view::Transform). One viewport controller drives any
//! back-end through this trait:
//!
//! - [`CssTransformSurface`]: sets `transform: translate(x, y) scale(s)` and
//!   the `--viewport-scale` custom property on a content element. On `wasm32`
//!   the `DomSurface` alias targets a `web_sys::HtmlElement`; elsewhere
//!   [`StyleMap`] records the writes.
//! - [`AffineSurface`]: keeps a `kurbo::Affine` for canvas or SVG renderers.
//!
//! [`ScaleBroadcast`] shares the current scale with descendant content that
//! is not styled through CSS, so fixed-size chrome can stay constant on
//! screen:
//!
//! ```rust
//! use vista_surface::{ScaleBroadcast, inverse_scaled};
//!
//! let mut broadcast = ScaleBroadcast::new();
//! broadcast.publish(0.5);
//! assert_eq!(broadcast.chrome_size(16.0), 32.0);
//! assert_eq!(inverse_scaled(16.0, 0.5), 32.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod affine;
mod broadcast;
mod css;
#[cfg(target_arch = "wasm32")]
mod dom;
mod surface;

pub use affine::AffineSurface;
pub use broadcast::{ScaleBroadcast, SubscriptionId, inverse_scaled};
pub use css::{CssTransformSurface, SCALE_PROPERTY, StyleMap, StyleTarget, TRANSFORM_ORIGIN};
#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
pub use surface::RenderSurface;
