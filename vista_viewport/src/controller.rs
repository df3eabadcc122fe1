// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tracing::debug;
use vista_gesture::GestureTarget;
use vista_persist::{KeyValueStore, ViewStateGateway};
use vista_surface::{RenderSurface, ScaleBroadcast};
use vista_view::Transform;

use crate::config::ViewportConfig;

/// Owner of the live [`Transform`].
///
/// Every mutation goes through two separate paths:
/// - **immediate**: the render surface is restyled and the scale broadcast
///   is published synchronously, before the call returns;
/// - **durable**: a save of the new transform is scheduled on the
///   [`ViewStateGateway`], which writes it once input goes quiet.
///
/// Mutations are skipped (and return `false`) while the surface is detached.
#[derive(Debug)]
pub struct ViewportController<S, K> {
    config: ViewportConfig,
    entity_id: Option<String>,
    transform: Transform,
    view_origin: Point,
    surface: S,
    gateway: ViewStateGateway<K>,
    broadcast: ScaleBroadcast,
}

impl<S: RenderSurface, K: KeyValueStore> ViewportController<S, K> {
    /// Creates a controller at the identity transform with no entity bound.
    pub fn new(config: ViewportConfig, surface: S, store: K) -> Self {
        let gateway =
            ViewStateGateway::with_options(store, config.key_prefix.clone(), config.save_delay_ms);
        Self {
            config,
            entity_id: None,
            transform: Transform::IDENTITY,
            view_origin: Point::ZERO,
            surface,
            gateway,
            broadcast: ScaleBroadcast::new(),
        }
    }

    /// Binds the controller to `entity_id` and restores its stored transform.
    ///
    /// Missing or unreadable state yields [`Transform::IDENTITY`]; a stored
    /// scale outside the configured limits is clamped. Pending saves of the
    /// previous entity are written first. The restored transform is applied
    /// to the surface but no save is scheduled for it.
    pub fn initialize(&mut self, entity_id: &str) -> Transform {
        self.gateway.flush();
        let restored = self.gateway.load(entity_id);
        let transform = restored.map_or(Transform::IDENTITY, |t| {
            t.clamped(self.config.scale_limits)
        });
        debug!(
            entity_id,
            ?transform,
            restored = restored.is_some(),
            "viewport initialized"
        );
        self.entity_id = Some(entity_id.to_owned());
        self.transform = transform;
        self.apply_immediate();
        transform
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Wheel pan: `x' = x - dx`, `y' = y - dy`.
    pub fn apply_pan(&mut self, dx: f64, dy: f64, now: u64) -> bool {
        self.pan_checked(dx, dy, now)
    }

    /// Zoom to point: scales by `1 + scale_delta_factor` within the limits,
    /// keeping the content under `cursor` fixed.
    pub fn apply_zoom(&mut self, cursor: Point, scale_delta_factor: f64, now: u64) -> bool {
        self.zoom_checked(cursor, scale_delta_factor, now)
    }

    /// Replaces the transform. The scale is clamped into the limits and
    /// non-finite transforms are rejected.
    pub fn set_transform(&mut self, transform: Transform, now: u64) -> bool {
        self.set_checked(transform, now)
    }

    /// Returns to [`Transform::IDENTITY`] and persists it.
    pub fn reset(&mut self, now: u64) -> bool {
        self.mutate(Transform::IDENTITY, now)
    }

    /// Writes saves whose debounce elapsed. Returns the number written.
    pub fn poll(&mut self, now: u64) -> usize {
        self.gateway.poll(now)
    }

    /// When the next pending save is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.gateway.next_deadline()
    }

    /// Writes any pending save now.
    pub fn flush(&mut self) -> usize {
        self.gateway.flush()
    }

    /// Flushes pending saves and unbinds the entity.
    ///
    /// Later mutations still restyle the surface but are not persisted until
    /// [`ViewportController::initialize`] is called again.
    pub fn unmount(&mut self) -> usize {
        let written = self.gateway.flush();
        if let Some(entity_id) = self.entity_id.take() {
            debug!(entity_id = %entity_id, written, "viewport unmounted");
        }
        written
    }

    /// Entity the controller is bound to.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Returns `true` if the render surface is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_attached()
    }

    /// Sets where the viewport's top-left corner sits in pointer coordinates.
    pub fn set_view_origin(&mut self, origin: Point) {
        self.view_origin = origin;
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render surface, mutably (for attaching or detaching its target).
    ///
    /// Attaching does not re-apply the transform; call
    /// [`ViewportController::refresh`] afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Re-applies the current transform to the surface without persisting.
    pub fn refresh(&mut self) {
        self.apply_immediate();
    }

    /// Scale broadcast for descendant content.
    #[must_use]
    pub fn scale_broadcast(&self) -> &ScaleBroadcast {
        &self.broadcast
    }

    /// Scale broadcast, mutably (to subscribe or unsubscribe).
    pub fn scale_broadcast_mut(&mut self) -> &mut ScaleBroadcast {
        &mut self.broadcast
    }

    /// Persistence gateway.
    #[must_use]
    pub fn gateway(&self) -> &ViewStateGateway<K> {
        &self.gateway
    }

    fn pan_checked(&mut self, dx: f64, dy: f64, now: u64) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        self.mutate(self.transform.panned(dx, dy), now)
    }

    fn zoom_checked(&mut self, cursor: Point, scale_delta_factor: f64, now: u64) -> bool {
        let next = self
            .transform
            .zoomed_about(cursor, scale_delta_factor, self.config.scale_limits);
        self.mutate(next, now)
    }

    fn set_checked(&mut self, transform: Transform, now: u64) -> bool {
        if !transform.is_finite() {
            return false;
        }
        self.mutate(transform.clamped(self.config.scale_limits), now)
    }

    fn mutate(&mut self, next: Transform, now: u64) -> bool {
        if !self.surface.is_attached() {
            return false;
        }
        self.transform = next;
        self.apply_immediate();
        self.commit_durable(now);
        true
    }

    /// Immediate path: restyle and publish, nothing else.
    fn apply_immediate(&mut self) {
        self.surface.apply_transform(self.transform);
        self.broadcast.publish(self.transform.scale);
    }

    /// Durable path: schedule a debounced save for the bound entity.
    fn commit_durable(&mut self, now: u64) {
        if let Some(entity_id) = self.entity_id.as_deref() {
            self.gateway.schedule_save(entity_id, self.transform, now);
        }
    }
}

impl<S: RenderSurface, K: KeyValueStore> GestureTarget for ViewportController<S, K> {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform, now: u64) {
        self.set_checked(transform, now);
    }

    fn apply_pan(&mut self, dx: f64, dy: f64, now: u64) {
        self.pan_checked(dx, dy, now);
    }

    fn apply_zoom(&mut self, cursor: Point, scale_delta_factor: f64, now: u64) {
        self.zoom_checked(cursor, scale_delta_factor, now);
    }

    fn view_origin(&self) -> Point {
        self.view_origin
    }

    fn is_attached(&self) -> bool {
        self.surface.is_attached()
    }
}
