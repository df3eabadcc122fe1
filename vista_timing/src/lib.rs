// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_timing --heading-base-level=0

//! Vista Timing: host-agnostic debounce primitives.
//!
//! A [`Debouncer`] holds at most one pending task per key. Scheduling a task
//! under a key that already has one pending replaces it and re-arms the
//! deadline, so a burst of schedules collapses into a single task that fires
//! `delay` after the *last* schedule.
//!
//! The queue never reads a clock and never spawns anything. Hosts pass the
//! current time (milliseconds on any monotonic timeline) into
//! [`Debouncer::schedule`] and [`Debouncer::poll`], and can use
//! [`Debouncer::next_deadline`] to arm a single platform timer
//! (`setTimeout`, an event-loop wakeup, and so on).
//!
//! ```rust
//! use vista_timing::Debouncer;
//!
//! let mut saves: Debouncer<&str, u32> = Debouncer::new();
//!
//! saves.schedule("study-1", 1, 0, 500);
//! saves.schedule("study-1", 2, 200, 500);
//! saves.schedule("study-1", 3, 400, 500);
//!
//! // Nothing is due 500ms after the first schedule...
//! assert!(saves.poll(500).is_empty());
//! // ...only 500ms after the last one, and only the latest task.
//! assert_eq!(saves.poll(900), vec![("study-1", 3)]);
//! assert!(saves.is_empty());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod debounce;

pub use debounce::Debouncer;
