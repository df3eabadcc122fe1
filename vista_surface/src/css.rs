// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-transform back-end.
//!
//! The content layer is a single element whose CSS `transform` is
//! `translate(x, y) scale(s)` with `transform-origin: 0 0`. The scale is also
//! published as the `--viewport-scale` custom property so descendant chrome
//! can inverse-scale itself in CSS (`calc(24px / var(--viewport-scale))`).

use alloc::string::{String, ToString};
use core::fmt::Write;

use hashbrown::HashMap;
use vista_view::Transform;

use crate::surface::RenderSurface;

/// Custom property carrying the current scale.
pub const SCALE_PROPERTY: &str = "--viewport-scale";

/// Transform origin of the content layer: the top-left of content space.
pub const TRANSFORM_ORIGIN: &str = "0 0";

/// Something with inline style properties.
pub trait StyleTarget {
    /// Sets one inline style property.
    ///
    /// Failures (for example on an element that left the document) are
    /// ignored by implementations.
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// Headless [`StyleTarget`] that records the last value of each property.
#[derive(Clone, Debug, Default)]
pub struct StyleMap {
    properties: HashMap<String, String>,
    writes: usize,
}

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Total number of property writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleTarget for StyleMap {
    fn set_style_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        if let Some(existing) = self.properties.get_mut(name) {
            existing.clear();
            existing.push_str(value);
        } else {
            self.properties.insert(name.to_string(), value.to_string());
        }
    }
}

/// [`RenderSurface`] that writes CSS transforms onto a [`StyleTarget`].
///
/// The formatted strings live in buffers owned by the surface and are reused
/// on every update.
#[derive(Clone, Debug)]
pub struct CssTransformSurface<T> {
    target: Option<T>,
    transform_css: String,
    scale_css: String,
    last: Option<Transform>,
}

impl<T: StyleTarget> CssTransformSurface<T> {
    /// Creates a surface with no element attached.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            target: None,
            transform_css: String::new(),
            scale_css: String::new(),
            last: None,
        }
    }

    /// Creates a surface attached to `target`.
    #[must_use]
    pub fn new(target: T) -> Self {
        let mut surface = Self::detached();
        surface.attach(target);
        surface
    }

    /// Attaches `target`, returning the previously attached one.
    ///
    /// The new element gets the transform origin and, if a transform was
    /// already applied, the current transform.
    pub fn attach(&mut self, mut target: T) -> Option<T> {
        target.set_style_property("transform-origin", TRANSFORM_ORIGIN);
        let previous = self.target.replace(target);
        if let Some(last) = self.last {
            self.apply_transform(last);
        }
        previous
    }

    /// Detaches and returns the current target.
    pub fn detach(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Attached target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// The last CSS `transform` value written.
    #[must_use]
    pub fn css_transform(&self) -> &str {
        &self.transform_css
    }

    /// The last transform applied, if any.
    #[must_use]
    pub fn last_transform(&self) -> Option<Transform> {
        self.last
    }
}

impl<T: StyleTarget> RenderSurface for CssTransformSurface<T> {
    fn apply_transform(&mut self, transform: Transform) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        self.last = Some(transform);

        self.transform_css.clear();
        // Writing into a `String` cannot fail.
        let _ = write!(
            self.transform_css,
            "translate({}px, {}px) scale({})",
            transform.x, transform.y, transform.scale
        );
        self.scale_css.clear();
        let _ = write!(self.scale_css, "{}", transform.scale);

        target.set_style_property("transform", &self.transform_css);
        target.set_style_property(SCALE_PROPERTY, &self.scale_css);
    }

    fn is_attached(&self) -> bool {
        self.target.is_some()
    }
}
