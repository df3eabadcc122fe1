// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a wired viewport.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use vista_gesture::Modifiers;
use vista_gesture::drag::{HitTarget, PointerInput};
use vista_gesture::wheel::{WheelDelta, WheelInput, WheelIntent};
use vista_persist::{KeyValueStore, MemoryStore, storage_key};
use vista_surface::{AffineSurface, CssTransformSurface, SCALE_PROPERTY, StyleMap};
use vista_view::Transform;
use vista_viewport::{PollOutcome, Viewport, ViewportConfig};

type TestViewport = Viewport<AffineSurface, MemoryStore>;

fn viewport(store: &MemoryStore, entity: &str) -> TestViewport {
    let mut viewport = Viewport::new(ViewportConfig::default(), AffineSurface::new(), store.clone());
    viewport.initialize(entity);
    viewport
}

fn wheel_at(x: f64, y: f64, dy: f64, modifiers: Modifiers, time_ms: u64) -> WheelInput {
    WheelInput::new(
        Point::new(x, y),
        WheelDelta::Pixels(Vec2::new(0.0, dy)),
        modifiers,
        time_ms,
    )
}

fn press(x: f64, y: f64, time_ms: u64) -> PointerInput {
    PointerInput::new(Point::new(x, y), HitTarget::Background, time_ms)
}

#[test]
fn zoom_in_at_max_then_out_keeps_cursor_anchor() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    // Already at the ceiling: zooming in changes nothing.
    vp.on_wheel(&wheel_at(100.0, 100.0, -50.0, Modifiers::CTRL, 0));
    assert_eq!(vp.transform(), Transform::IDENTITY);

    vp.on_wheel(&wheel_at(100.0, 100.0, 50.0, Modifiers::CTRL, 10));
    assert_eq!(vp.transform(), Transform::new(50.0, 50.0, 0.5));
}

#[test]
fn meta_wheel_zooms_like_ctrl() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    let intent = vp.on_wheel(&wheel_at(0.0, 0.0, 20.0, Modifiers::META, 0));
    assert!(matches!(intent, Some(WheelIntent::ZoomToPoint { .. })));
    assert!((vp.transform().scale - 0.8).abs() < 1e-12);
}

#[test]
fn scale_is_clamped_on_both_ends() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    for t in 0..20 {
        vp.on_wheel(&wheel_at(40.0, 40.0, 90.0, Modifiers::CTRL, t));
    }
    assert_eq!(vp.transform().scale, 0.3);
    for t in 20..40 {
        vp.on_wheel(&wheel_at(40.0, 40.0, -90.0, Modifiers::CTRL, t));
    }
    assert_eq!(vp.transform().scale, 1.0);
}

#[test]
fn plain_and_shift_wheel_pan_one_axis() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    vp.on_wheel(&wheel_at(10.0, 10.0, 25.0, Modifiers::empty(), 0));
    assert_eq!(vp.transform(), Transform::new(0.0, -25.0, 1.0));

    vp.on_wheel(&wheel_at(10.0, 10.0, 25.0, Modifiers::SHIFT, 1));
    assert_eq!(vp.transform(), Transform::new(-25.0, -25.0, 1.0));
}

#[test]
fn line_mode_deltas_use_configured_line_height() {
    let store = MemoryStore::new();
    let config = ViewportConfig {
        line_height: 20.0,
        ..ViewportConfig::default()
    };
    let mut vp = Viewport::new(config, AffineSurface::new(), store.clone());
    vp.initialize("board");
    let input = WheelInput::new(
        Point::ZERO,
        WheelDelta::Lines(Vec2::new(0.0, 3.0)),
        Modifiers::empty(),
        0,
    );
    vp.on_wheel(&input);
    assert_eq!(vp.transform(), Transform::new(0.0, -60.0, 1.0));
}

#[test]
fn zoom_cursor_is_relative_to_view_rect() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    vp.set_view_rect(Point::new(200.0, 100.0), Size::new(800.0, 600.0));

    vp.on_wheel(&wheel_at(300.0, 200.0, 50.0, Modifiers::CTRL, 0));
    assert_eq!(vp.transform(), Transform::new(50.0, 50.0, 0.5));
}

#[test]
fn drag_pans_linearly_from_its_origin() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    vp.controller_mut()
        .set_transform(Transform::new(5.0, 6.0, 0.5), 0);

    assert!(vp.on_pointer_down(&press(100.0, 100.0, 1)));
    assert!(vp.on_pointer_move(&press(130.0, 90.0, 2)));
    assert!(vp.on_pointer_move(&press(150.0, 140.0, 3)));
    assert_eq!(vp.transform(), Transform::new(55.0, 46.0, 0.5));
    assert!(vp.on_pointer_up());
    assert!(!vp.is_dragging());

    // Moves after release do nothing.
    assert!(!vp.on_pointer_move(&press(0.0, 0.0, 4)));
    assert_eq!(vp.transform(), Transform::new(55.0, 46.0, 0.5));
}

#[test]
fn pressing_chrome_does_not_start_a_drag() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    let on_card = PointerInput::new(Point::new(10.0, 10.0), HitTarget::Chrome, 0);
    assert!(!vp.on_pointer_down(&on_card));
    assert!(!vp.is_dragging());
}

#[test]
fn leaving_or_blurring_the_window_ends_a_drag() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    vp.on_pointer_down(&press(0.0, 0.0, 0));
    assert!(vp.on_window_leave());
    assert!(!vp.is_dragging());

    vp.on_pointer_down(&press(0.0, 0.0, 1));
    assert!(vp.on_window_blur());
    assert!(!vp.is_dragging());
    assert!(!vp.on_window_blur());
}

#[test]
fn switching_entity_drops_an_open_drag() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "a");
    vp.on_pointer_down(&press(0.0, 0.0, 0));
    assert!(vp.is_dragging());

    vp.initialize("b");
    assert!(!vp.is_dragging());
    assert!(!vp.on_pointer_move(&press(30.0, 30.0, 1)));
    assert_eq!(vp.transform(), Transform::IDENTITY);
}

#[test]
fn wheel_during_drag_is_overridden_by_next_move() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    vp.on_pointer_down(&press(0.0, 0.0, 0));
    vp.on_wheel(&wheel_at(0.0, 0.0, 40.0, Modifiers::empty(), 1));
    assert_eq!(vp.transform(), Transform::new(0.0, -40.0, 1.0));

    vp.on_pointer_move(&press(10.0, 10.0, 2));
    assert_eq!(vp.transform(), Transform::new(10.0, 10.0, 1.0));
}

#[test]
fn zoom_during_drag_keeps_its_scale_on_the_next_move() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    vp.on_pointer_down(&press(0.0, 0.0, 0));
    vp.on_wheel(&wheel_at(100.0, 100.0, 50.0, Modifiers::CTRL, 1));
    assert_eq!(vp.transform(), Transform::new(50.0, 50.0, 0.5));

    assert!(vp.on_pointer_move(&press(10.0, 10.0, 2)));
    assert_eq!(vp.transform(), Transform::new(10.0, 10.0, 0.5));
    assert_eq!(
        vp.controller().surface().transform().scale,
        0.5,
        "the surface keeps the zoomed scale"
    );
}

#[test]
fn reversed_limits_from_json_still_clamp() {
    let config: ViewportConfig =
        serde_json::from_str(r#"{"scale_limits":{"min":1.0,"max":0.3}}"#).unwrap();
    let store = MemoryStore::new();
    let mut vp = Viewport::new(config, AffineSurface::new(), store.clone());
    vp.initialize("board");

    vp.on_wheel(&wheel_at(100.0, 100.0, 50.0, Modifiers::CTRL, 0));
    assert_eq!(vp.transform(), Transform::new(50.0, 50.0, 0.5));
    for t in 1..10 {
        vp.on_wheel(&wheel_at(100.0, 100.0, 90.0, Modifiers::CTRL, t));
    }
    assert_eq!(vp.transform().scale, 0.3, "saturates at the lower bound");
}

#[test]
fn a_burst_of_updates_writes_once_with_the_last_value() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    let key = storage_key("view-state-", "board");

    for t in 0..10_u32 {
        vp.on_wheel(&wheel_at(0.0, 0.0, 10.0, Modifiers::empty(), u64::from(t) * 100));
    }
    // Last event at 900; nothing is due before 1400.
    assert_eq!(vp.poll(1_399).saves_written, 0);
    assert_eq!(store.get(&key).unwrap(), None);

    assert_eq!(vp.poll(1_400).saves_written, 1);
    assert_eq!(
        store.get(&key).unwrap().as_deref(),
        Some(r#"{"x":0.0,"y":-100.0,"scale":1.0}"#)
    );
    assert_eq!(vp.poll(5_000).saves_written, 0);
}

#[test]
fn state_survives_a_remount() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    vp.on_wheel(&wheel_at(100.0, 100.0, 50.0, Modifiers::CTRL, 0));
    vp.poll(600);

    let mut fresh = Viewport::new(ViewportConfig::default(), AffineSurface::new(), store.clone());
    assert_eq!(fresh.initialize("board"), Transform::new(50.0, 50.0, 0.5));
    assert_eq!(
        fresh.controller().surface().transform(),
        Transform::new(50.0, 50.0, 0.5)
    );
}

#[test]
fn unmount_flushes_pending_saves() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    vp.on_wheel(&wheel_at(0.0, 0.0, 10.0, Modifiers::empty(), 0));
    vp.on_pointer_down(&press(0.0, 0.0, 1));

    assert_eq!(vp.unmount(), 1);
    assert!(!vp.is_dragging());
    assert!(!vp.is_scrolling());
    assert_eq!(store.len(), 1);
}

#[test]
fn corrupt_state_falls_back_to_identity() {
    let store = MemoryStore::new();
    store
        .set(&storage_key("view-state-", "board"), "{not-json")
        .unwrap();
    let mut vp = Viewport::new(ViewportConfig::default(), AffineSurface::new(), store.clone());
    assert_eq!(vp.initialize("board"), Transform::IDENTITY);
}

#[test]
fn initial_load_does_not_write_back() {
    let store = MemoryStore::new();
    store
        .set(
            &storage_key("view-state-", "board"),
            r#"{"x":1.0,"y":2.0,"scale":0.5}"#,
        )
        .unwrap();
    let mut vp = Viewport::new(ViewportConfig::default(), AffineSurface::new(), store.clone());
    vp.initialize("board");
    assert_eq!(vp.next_deadline(), None);
    assert_eq!(vp.poll(10_000), PollOutcome::default());
}

#[test]
fn scrolling_flag_clears_after_quiet_period() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");

    vp.on_wheel(&wheel_at(0.0, 0.0, 5.0, Modifiers::empty(), 1_000));
    assert!(vp.is_scrolling());
    vp.on_wheel(&wheel_at(0.0, 0.0, 5.0, Modifiers::empty(), 1_100));
    assert_eq!(vp.next_deadline(), Some(1_250));

    assert!(!vp.poll(1_200).scrolling_ended);
    assert!(vp.is_scrolling());
    let outcome = vp.poll(1_250);
    assert!(outcome.scrolling_ended);
    assert_eq!(outcome.saves_written, 0);
    assert!(!vp.is_scrolling());
    assert_eq!(vp.next_deadline(), Some(1_600));
}

#[test]
fn scale_subscribers_hear_zoom_but_not_pan() {
    let store = MemoryStore::new();
    let mut vp = viewport(&store, "board");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    vp.controller_mut()
        .scale_broadcast_mut()
        .subscribe(move |scale| sink.borrow_mut().push(scale));

    vp.on_wheel(&wheel_at(0.0, 0.0, 10.0, Modifiers::empty(), 0));
    vp.on_wheel(&wheel_at(0.0, 0.0, 50.0, Modifiers::CTRL, 1));
    assert_eq!(*seen.borrow(), vec![0.5]);
    assert_eq!(vp.controller().scale_broadcast().chrome_size(12.0), 24.0);
}

#[test]
fn css_surface_is_restyled_synchronously() {
    let store = MemoryStore::new();
    let surface = CssTransformSurface::new(StyleMap::new());
    let mut vp = Viewport::new(ViewportConfig::default(), surface, store.clone());
    vp.initialize("board");

    vp.on_wheel(&wheel_at(100.0, 100.0, 50.0, Modifiers::CTRL, 0));
    let surface = vp.controller().surface();
    assert_eq!(surface.css_transform(), "translate(50px, 50px) scale(0.5)");
    let styles = surface.target().unwrap();
    assert_eq!(styles.get("transform"), Some("translate(50px, 50px) scale(0.5)"));
    assert_eq!(styles.get(SCALE_PROPERTY), Some("0.5"));
    assert!(store.is_empty());
}

#[test]
fn detached_surface_skips_gestures() {
    let store = MemoryStore::new();
    let mut vp = Viewport::new(
        ViewportConfig::default(),
        CssTransformSurface::<StyleMap>::detached(),
        store.clone(),
    );
    vp.initialize("board");

    assert_eq!(vp.on_wheel(&wheel_at(0.0, 0.0, 10.0, Modifiers::empty(), 0)), None);
    assert!(!vp.is_scrolling());
    assert!(!vp.on_pointer_down(&press(0.0, 0.0, 1)));
    assert_eq!(vp.transform(), Transform::IDENTITY);
    assert_eq!(vp.next_deadline(), None);
}

proptest! {
    #[test]
    fn wheel_zoom_keeps_content_under_cursor(
        x in -500.0..500.0_f64,
        y in -500.0..500.0_f64,
        scale in 0.3..1.0_f64,
        cx in 0.0..1000.0_f64,
        cy in 0.0..1000.0_f64,
        dy in -30.0..30.0_f64,
    ) {
        let store = MemoryStore::new();
        let mut vp = viewport(&store, "board");
        vp.controller_mut().set_transform(Transform::new(x, y, scale), 0);
        let before = vp.transform().view_to_content(Point::new(cx, cy));

        vp.on_wheel(&wheel_at(cx, cy, dy, Modifiers::CTRL, 1));
        let after = vp.transform();
        prop_assert!((0.3..=1.0).contains(&after.scale));
        let anchor = after.view_to_content(Point::new(cx, cy));
        prop_assert!((anchor - before).hypot() < 1e-6);
    }

    #[test]
    fn drag_offset_is_total_pointer_motion(
        moves in proptest::collection::vec((-300.0..300.0_f64, -300.0..300.0_f64), 1..12),
    ) {
        let store = MemoryStore::new();
        let mut vp = viewport(&store, "board");
        vp.on_pointer_down(&press(0.0, 0.0, 0));
        let mut last = (0.0, 0.0);
        for (time_ms, &(px, py)) in (1_u64..).zip(moves.iter()) {
            vp.on_pointer_move(&press(px, py, time_ms));
            last = (px, py);
        }
        prop_assert_eq!(vp.transform(), Transform::new(last.0, last.1, 1.0));
    }
}
