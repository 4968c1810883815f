//! Physics world query surface.
//!
//! The controller never resolves collisions itself. It asks a
//! [`PhysicsWorld`] two things: "what does this ray hit?" and "stop / resume
//! collisions between these two layers". [`StaticWorld`] implements both over
//! a flat list of axis-aligned colliders, which is all a side-scroller level
//! made of blocks and platforms needs.

use glam::Vec2;

use super::body::{BoxCollider2D, RigidBody2D};
use super::collision::{Aabb2, aabb_surface_normal, ray_aabb_intersect, resolve_aabb_overlap};
use super::layers::{Layer, LayerMask, LayerMatrix};

/// Handle to a collider registered in a [`StaticWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(pub usize);

/// Result of a successful ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space point where the ray entered the collider
    pub point: Vec2,
    /// Outward surface normal at the hit point
    pub normal: Vec2,
    /// Distance from the ray origin to `point`
    pub distance: f32,
    /// Collider that was hit
    pub collider: ColliderId,
}

/// Ray queries and layer exemptions against the host physics world.
pub trait PhysicsWorld {
    /// Casts a ray and returns the nearest hit on a layer in `mask`, if any.
    ///
    /// `direction` does not need to be normalized; a zero direction never hits.
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32, mask: LayerMask) -> Option<RayHit>;

    /// Enables or disables collisions between colliders on layers `a` and `b`.
    fn set_layer_collision_ignored(&mut self, a: Layer, b: Layer, ignored: bool);

    /// Whether colliders on `a` and `b` currently collide.
    fn layers_collide(&self, a: Layer, b: Layer) -> bool;
}

/// A static collider in a [`StaticWorld`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub bounds: Aabb2,
    pub layer: Layer,
    /// Disabled colliders are invisible to ray casts and contacts
    pub enabled: bool,
}

/// Flat list of static box colliders with a layer collision matrix.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    colliders: Vec<StaticCollider>,
    matrix: LayerMatrix,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a box collider and returns its handle.
    pub fn add_box(&mut self, bounds: Aabb2, layer: Layer) -> ColliderId {
        self.colliders.push(StaticCollider {
            bounds,
            layer,
            enabled: true,
        });
        ColliderId(self.colliders.len() - 1)
    }

    pub fn collider(&self, id: ColliderId) -> Option<&StaticCollider> {
        self.colliders.get(id.0)
    }

    /// Enables or disables a collider. Unknown handles are ignored.
    pub fn set_collider_enabled(&mut self, id: ColliderId, enabled: bool) {
        if let Some(collider) = self.colliders.get_mut(id.0) {
            collider.enabled = enabled;
        }
    }

    pub fn colliders(&self) -> impl Iterator<Item = (ColliderId, &StaticCollider)> {
        self.colliders
            .iter()
            .enumerate()
            .map(|(index, collider)| (ColliderId(index), collider))
    }

    /// Enabled colliders that a body on `layer` collides with.
    pub fn solid_colliders_for(&self, layer: Layer) -> impl Iterator<Item = &StaticCollider> {
        self.colliders
            .iter()
            .filter(move |collider| collider.enabled && self.matrix.collides(layer, collider.layer))
    }

    /// Moves `body` out of every solid collider its box overlaps.
    ///
    /// A minimal stand-in for a host engine's contact solver: no friction,
    /// no restitution. Velocity into a surface is cancelled.
    ///
    /// # Returns
    /// `true` if any overlap was resolved
    pub fn resolve_overlaps(&self, body: &mut RigidBody2D, collider: &BoxCollider2D) -> bool {
        let mut resolved = false;
        for solid in self.solid_colliders_for(body.layer) {
            let result = resolve_aabb_overlap(&collider.bounds(body), body.velocity, &solid.bounds);
            if result.has_collision() {
                body.position += result.push;
                body.velocity += result.velocity_adjustment;
                resolved = true;
            }
        }
        resolved
    }

    pub fn layer_matrix(&self) -> &LayerMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl PhysicsWorld for StaticWorld {
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO || max_distance < 0.0 {
            return None;
        }

        let mut best: Option<RayHit> = None;
        for (id, collider) in self.colliders() {
            if !collider.enabled || !mask.contains(collider.layer) {
                continue;
            }
            let Some(t) = ray_aabb_intersect(origin, dir, collider.bounds.min, collider.bounds.max) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            if best.is_some_and(|hit| hit.distance <= t) {
                continue;
            }

            let point = origin + dir * t;
            let normal = if t == 0.0 {
                -dir
            } else {
                aabb_surface_normal(point, collider.bounds.min, collider.bounds.max)
            };
            best = Some(RayHit {
                point,
                normal,
                distance: t,
                collider: id,
            });
        }
        best
    }

    fn set_layer_collision_ignored(&mut self, a: Layer, b: Layer, ignored: bool) {
        self.matrix.set_ignored(a, b, ignored);
    }

    fn layers_collide(&self, a: Layer, b: Layer) -> bool {
        self.matrix.collides(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::layers::{GROUND_LAYER, PLATFORMS_LAYER, PLAYER_LAYER};

    fn floor_world() -> (StaticWorld, ColliderId) {
        let mut world = StaticWorld::new();
        let floor = world.add_box(
            Aabb2::new(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0)),
            GROUND_LAYER,
        );
        (world, floor)
    }

    #[test]
    fn test_raycast_hits_floor() {
        let (world, floor) = floor_world();
        let hit = world
            .raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 5.0, GROUND_LAYER.mask())
            .unwrap();

        assert_eq!(hit.collider, floor);
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vec2::Y);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let (world, _) = floor_world();
        assert!(
            world
                .raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 1.5, GROUND_LAYER.mask())
                .is_none()
        );
    }

    #[test]
    fn test_raycast_respects_mask() {
        let (world, _) = floor_world();
        assert!(
            world
                .raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 5.0, PLATFORMS_LAYER.mask())
                .is_none()
        );
    }

    #[test]
    fn test_raycast_returns_nearest() {
        let (mut world, _) = floor_world();
        let shelf = world.add_box(
            Aabb2::new(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.2)),
            GROUND_LAYER,
        );
        let hit = world
            .raycast(Vec2::new(0.0, 3.0), Vec2::NEG_Y, 10.0, LayerMask::ALL)
            .unwrap();
        assert_eq!(hit.collider, shelf);
    }

    #[test]
    fn test_disabled_collider_is_skipped() {
        let (mut world, floor) = floor_world();
        world.set_collider_enabled(floor, false);
        assert!(
            world
                .raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 5.0, LayerMask::ALL)
                .is_none()
        );
    }

    #[test]
    fn test_layer_exemption_filters_solid_colliders() {
        let mut world = StaticWorld::new();
        world.add_box(Aabb2::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.2)), PLATFORMS_LAYER);
        assert_eq!(world.solid_colliders_for(PLAYER_LAYER).count(), 1);

        world.set_layer_collision_ignored(PLAYER_LAYER, PLATFORMS_LAYER, true);
        assert_eq!(world.solid_colliders_for(PLAYER_LAYER).count(), 0);
        assert!(!world.layers_collide(PLAYER_LAYER, PLATFORMS_LAYER));
    }

    #[test]
    fn test_resolve_overlaps_lands_body_on_floor() {
        let mut world = StaticWorld::new();
        world.add_box(Aabb2::new(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0)), GROUND_LAYER);
        let collider = BoxCollider2D::new(Vec2::new(1.0, 2.0));
        let mut body = RigidBody2D::new(Vec2::new(0.0, 0.9));
        body.velocity = Vec2::new(1.0, -5.0);

        assert!(world.resolve_overlaps(&mut body, &collider));
        assert!((body.position.y - 1.0).abs() < 1e-4);
        assert_eq!(body.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_resolve_overlaps_skips_exempt_layers() {
        let mut world = StaticWorld::new();
        world.add_box(Aabb2::new(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0)), PLATFORMS_LAYER);
        world.set_layer_collision_ignored(PLAYER_LAYER, PLATFORMS_LAYER, true);
        let collider = BoxCollider2D::new(Vec2::new(1.0, 2.0));
        let mut body = RigidBody2D::new(Vec2::new(0.0, 0.9));

        assert!(!world.resolve_overlaps(&mut body, &collider));
        assert_eq!(body.position, Vec2::new(0.0, 0.9));
    }
}
