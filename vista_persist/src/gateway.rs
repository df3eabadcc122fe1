// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error;

use tracing::{debug, trace, warn};
use vista_timing::Debouncer;
use vista_view::Transform;

use crate::store::KeyValueStore;

/// Key prefix for persisted view state; the entity id follows it.
pub const DEFAULT_KEY_PREFIX: &str = "view-state-";

/// Quiet period before a scheduled save is written, in milliseconds.
pub const DEFAULT_SAVE_DELAY: u64 = 500;

/// Storage key of the view state for `entity_id`.
#[must_use]
pub fn storage_key(prefix: &str, entity_id: &str) -> String {
    format!("{prefix}{entity_id}")
}

/// Failure to write view state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The transform could not be serialized.
    #[error("failed to encode view state for `{entity_id}`")]
    Encode {
        /// Entity whose state was being written.
        entity_id: String,
        /// Serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The backing store rejected the write.
    #[error("failed to write view state under `{key}`")]
    Store {
        /// Storage key that was written.
        key: String,
        /// Store error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Loads and saves one [`Transform`] per entity id, with debounced writes.
///
/// Reads never fail: missing, unreadable, or malformed records all come back
/// as `None` (malformed ones with a warning) and the caller falls back to
/// [`Transform::IDENTITY`]. Debounced writes that fail are logged and
/// dropped; they are not retried.
#[derive(Debug)]
pub struct ViewStateGateway<S> {
    store: S,
    key_prefix: String,
    save_delay: u64,
    pending: Debouncer<String, Transform>,
}

impl<S: KeyValueStore> ViewStateGateway<S> {
    /// Creates a gateway with the default key prefix and save delay.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_options(store, DEFAULT_KEY_PREFIX, DEFAULT_SAVE_DELAY)
    }

    /// Creates a gateway with an explicit key prefix and save delay.
    #[must_use]
    pub fn with_options(store: S, key_prefix: impl Into<String>, save_delay: u64) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            save_delay,
            pending: Debouncer::new(),
        }
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Storage key used for `entity_id`.
    #[must_use]
    pub fn key_for(&self, entity_id: &str) -> String {
        storage_key(&self.key_prefix, entity_id)
    }

    /// Reads the stored transform for `entity_id`.
    pub fn load(&self, entity_id: &str) -> Option<Transform> {
        let key = self.key_for(entity_id);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, key = %key, "failed to read persisted view state");
                return None;
            }
        };
        match serde_json::from_str::<Transform>(&raw) {
            Ok(transform) if transform.is_finite() => Some(transform),
            Ok(transform) => {
                warn!(?transform, key = %key, "ignoring non-finite persisted view state");
                None
            }
            Err(error) => {
                warn!(%error, key = %key, "failed to parse persisted view state");
                None
            }
        }
    }

    /// Schedules `transform` to be written for `entity_id`.
    ///
    /// Any save still pending for the same entity is replaced, and the write
    /// happens `save_delay` ms after the most recent call.
    pub fn schedule_save(&mut self, entity_id: &str, transform: Transform, now: u64) {
        trace!(entity_id, ?transform, now, "view state save scheduled");
        self.pending
            .schedule(entity_id.to_owned(), transform, now, self.save_delay);
    }

    /// Writes every save whose delay has elapsed. Returns the number written.
    pub fn poll(&mut self, now: u64) -> usize {
        let due = self.pending.poll(now);
        self.write_all(due)
    }

    /// Writes every pending save immediately. Returns the number written.
    pub fn flush(&mut self) -> usize {
        let all = self.pending.drain();
        if !all.is_empty() {
            debug!(count = all.len(), "flushing pending view state");
        }
        self.write_all(all)
    }

    /// Writes the pending save for `entity_id` immediately, if there is one.
    ///
    /// Returns `true` if a record was written.
    pub fn flush_entity(&mut self, entity_id: &str) -> bool {
        let Some(transform) = self.pending.cancel(&entity_id.to_owned()) else {
            return false;
        };
        self.write_logged(entity_id, transform)
    }

    /// Drops the pending save for `entity_id` without writing it.
    pub fn cancel(&mut self, entity_id: &str) -> bool {
        self.pending.cancel(&entity_id.to_owned()).is_some()
    }

    /// Writes `transform` for `entity_id` now, bypassing the debounce.
    ///
    /// A pending save for the entity is canceled first so it cannot later
    /// overwrite this one with an older value.
    pub fn save_now(&mut self, entity_id: &str, transform: Transform) -> Result<(), PersistError> {
        self.pending.cancel(&entity_id.to_owned());
        let json = serde_json::to_string(&transform).map_err(|source| PersistError::Encode {
            entity_id: entity_id.to_owned(),
            source,
        })?;
        let key = self.key_for(entity_id);
        self.store
            .set(&key, &json)
            .map_err(|source| PersistError::Store {
                key,
                source: Box::new(source),
            })
    }

    /// Returns `true` if a save is pending for `entity_id`.
    #[must_use]
    pub fn has_pending(&self, entity_id: &str) -> bool {
        self.pending.is_pending(&entity_id.to_owned())
    }

    /// When the next pending save is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.next_deadline()
    }

    fn write_all(&mut self, saves: Vec<(String, Transform)>) -> usize {
        saves
            .into_iter()
            .filter(|(entity_id, transform)| self.write_logged(entity_id, *transform))
            .count()
    }

    fn write_logged(&mut self, entity_id: &str, transform: Transform) -> bool {
        match self.save_now(entity_id, transform) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, entity_id, "dropping view state write");
                false
            }
        }
    }
}
