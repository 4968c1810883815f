//! Physics module for the side-scroller controller
//!
//! The controller does not simulate collisions itself. It reads ray-cast
//! results from a [`PhysicsWorld`] and writes velocity, rotation, force and
//! collider-shape commands onto a [`RigidBody2D`] / [`BoxCollider2D`] pair
//! that the host engine integrates between frames.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, y up.
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Angles in degrees, counter-clockwise positive
//! - Angular velocity in degrees/s
//!
//! # Submodules
//!
//! - [`types`] - `Vec2` re-export and scalar helpers (move-toward, sign)
//! - [`layers`] - Collision layers, masks and the layer-pair matrix
//! - [`collision`] - 2D AABB, ray-AABB slab test and box push-out
//! - [`body`] - Rigid body and box collider state
//! - [`world`] - The `PhysicsWorld` query trait and `StaticWorld` with its overlap resolver

pub mod body;
pub mod collision;
pub mod layers;
pub mod types;
pub mod world;

// Re-export commonly used types at the physics module level
pub use body::{BoxCollider2D, RigidBody2D};
pub use collision::{Aabb2, CollisionResult, aabb_surface_normal, ray_aabb_intersect, resolve_aabb_overlap};
pub use layers::{
    DEFAULT_LAYER, GROUND_LAYER, Layer, LayerMask, LayerMatrix, PLATFORMS_LAYER, PLAYER_LAYER,
};
pub use types::{Vec2, move_towards, rotate_degrees, sign};
pub use world::{ColliderId, PhysicsWorld, RayHit, StaticCollider, StaticWorld};
