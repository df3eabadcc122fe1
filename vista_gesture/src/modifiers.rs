// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Keyboard modifiers held while an input event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if the modifiers request a zoom (Ctrl or Meta).
    ///
    /// Trackpad pinch gestures arrive from browsers as ctrl-wheel events, so
    /// they take this path too.
    #[must_use]
    pub fn zoom(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }

    /// Returns `true` if Shift is held.
    #[must_use]
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }
}
