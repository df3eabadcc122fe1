// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale broadcast: share the current zoom with descendant content.
//!
//! Fixed-size chrome (buttons, outlines, borders) lives inside the scaled
//! content layer but should keep a constant on-screen size. It does so by
//! dividing its base size by the current scale, see [`inverse_scaled`].

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Size that renders as `base` on screen when drawn inside content scaled by
/// `scale`.
///
/// Degenerate scales (zero, negative, or non-finite) return `base`.
#[must_use]
pub fn inverse_scaled(base: f64, scale: f64) -> f64 {
    if scale > 0.0 && scale.is_finite() {
        base / scale
    } else {
        base
    }
}

/// Handle returned by [`ScaleBroadcast::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(f64)>;

/// Current scale plus the listeners interested in it.
pub struct ScaleBroadcast {
    scale: f64,
    next_id: u64,
    subscribers: SmallVec<[(SubscriptionId, Subscriber); 4]>,
}

impl ScaleBroadcast {
    /// Creates a broadcast at scale `1.0` with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            next_id: 0,
            subscribers: SmallVec::new(),
        }
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// On-screen-constant size for chrome with the given base size.
    #[must_use]
    pub fn chrome_size(&self, base: f64) -> f64 {
        inverse_scaled(base, self.scale)
    }

    /// Registers `listener`, which is called with every new scale.
    ///
    /// The listener is not called with the current scale; read
    /// [`ScaleBroadcast::scale`] for that.
    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.subscribers.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        self.subscribers.remove(index);
        true
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Publishes `scale`, notifying listeners only if it changed.
    ///
    /// Returns `true` if listeners were notified.
    pub fn publish(&mut self, scale: f64) -> bool {
        if (self.scale - scale).abs() < f64::EPSILON {
            return false;
        }
        self.scale = scale;
        for (_, listener) in &mut self.subscribers {
            listener(scale);
        }
        true
    }
}

impl Default for ScaleBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScaleBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleBroadcast")
            .field("scale", &self.scale)
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
