// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_persist --heading-base-level=0

//! Vista Persist: durable per-entity view state.
//!
//! Each entity (for example a study shown as a board of cards) keeps one
//! [`Transform`](vista_view::Transform) record in a [`KeyValueStore`] under
//! the key `"view-state-{entity_id}"`. The value is the JSON object
//! `{"x": number, "y": number, "scale": number}`. Writes are last-write-wins
//! and no history is kept.
//!
//! [`ViewStateGateway`] debounces writes: gesture-driven updates arrive at
//! input rate, but only the last transform in each quiet window reaches the
//! store.
//!
//! ```rust
//! use vista_persist::{MemoryStore, ViewStateGateway};
//! use vista_view::Transform;
//!
//! let store = MemoryStore::new();
//! let mut gateway = ViewStateGateway::new(store.clone());
//!
//! for (i, now) in [0_u64, 100, 200, 300].into_iter().enumerate() {
//!     gateway.schedule_save("study-1", Transform::new(i as f64, 0.0, 1.0), now);
//! }
//! assert_eq!(gateway.poll(799), 0);
//! assert_eq!(gateway.poll(800), 1);
//!
//! // A fresh gateway over the same store sees the last value.
//! let reader = ViewStateGateway::new(store);
//! assert_eq!(reader.load("study-1"), Some(Transform::new(3.0, 0.0, 1.0)));
//! ```
//!
//! On `wasm32`, `WebStorage` wraps `window.localStorage`.

mod gateway;
mod store;
#[cfg(target_arch = "wasm32")]
mod web;

pub use gateway::{
    DEFAULT_KEY_PREFIX, DEFAULT_SAVE_DELAY, PersistError, ViewStateGateway, storage_key,
};
pub use store::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use web::{WebStorage, WebStorageError};
