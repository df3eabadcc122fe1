// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory "scroll in progress" flag.
//!
//! Card content reads this flag to suppress hover effects while the wheel is
//! moving the board underneath the pointer. The flag is raised by every
//! handled wheel event and lowered once no wheel event has arrived for the
//! reset delay.

use vista_timing::Debouncer;

/// Scrolling flag with a debounced reset.
#[derive(Clone, Debug)]
pub struct ScrollingFlag {
    active: bool,
    reset_delay: u64,
    reset: Debouncer<(), ()>,
}

impl ScrollingFlag {
    /// Default quiet period before the flag drops, in milliseconds.
    pub const DEFAULT_RESET_DELAY: u64 = 150;

    /// Creates a lowered flag that resets `reset_delay` ms after the last raise.
    #[must_use]
    pub fn new(reset_delay: u64) -> Self {
        Self {
            active: false,
            reset_delay,
            reset: Debouncer::new(),
        }
    }

    /// Raises the flag and re-arms the reset timer.
    pub fn raise(&mut self, now: u64) {
        self.active = true;
        self.reset.schedule((), (), now, self.reset_delay);
    }

    /// Fires the reset timer if it is due.
    ///
    /// Returns `true` if the flag was lowered by this call.
    pub fn poll(&mut self, now: u64) -> bool {
        if self.reset.poll(now).is_empty() {
            return false;
        }
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Lowers the flag immediately and cancels the reset timer.
    pub fn clear(&mut self) {
        self.reset.cancel(&());
        self.active = false;
    }

    /// Returns `true` while wheel scrolling is in progress.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.active
    }

    /// When the flag will drop, if it is raised.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.reset.next_deadline()
    }
}

impl Default for ScrollingFlag {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESET_DELAY)
    }
}
