// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `web_sys` glue for the DOM-transform back-end.

use web_sys::HtmlElement;

use crate::css::{CssTransformSurface, StyleTarget};

impl StyleTarget for HtmlElement {
    fn set_style_property(&mut self, name: &str, value: &str) {
        // A rejected write leaves the previous style in place.
        let _ = self.style().set_property(name, value);
    }
}

/// DOM-transform surface over an HTML element.
pub type DomSurface = CssTransformSurface<HtmlElement>;
