//! Rigid body and box collider state for the controlled character.
//!
//! The host physics engine owns dynamics (collision resolution, friction);
//! this module only holds the state the controller reads and writes each
//! frame. Rotation is stored in degrees, counter-clockwise positive.

use glam::Vec2;

use super::collision::Aabb2;
use super::layers::{Layer, PLAYER_LAYER};
use super::types::rotate_degrees;

/// Linear and angular state of a 2D rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody2D {
    /// World position of the body pivot
    pub position: Vec2,
    /// Linear velocity in units per second
    pub velocity: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Angular velocity in degrees per second
    pub angular_velocity: f32,
    /// Mass in kg, used to turn accumulated force into acceleration
    pub mass: f32,
    /// Multiplier applied to world gravity
    pub gravity_scale: f32,
    /// When set, the host must not integrate rotation
    pub freeze_rotation: bool,
    /// Collision layer of the body's collider
    pub layer: Layer,
    /// Force accumulated since the last physics step
    force: Vec2,
}

impl Default for RigidBody2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            mass: 1.0,
            gravity_scale: 1.0,
            freeze_rotation: false,
            layer: PLAYER_LAYER,
            force: Vec2::ZERO,
        }
    }
}

impl RigidBody2D {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Adds a continuous force, consumed by the next physics step.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Force accumulated since the last step.
    pub fn pending_force(&self) -> Vec2 {
        self.force
    }

    /// Returns and clears the accumulated force.
    pub fn take_force(&mut self) -> Vec2 {
        std::mem::take(&mut self.force)
    }

    /// Reference explicit-Euler step for hosts without their own integrator.
    ///
    /// Consumes the accumulated force, applies `gravity * gravity_scale`, then
    /// advances position and (unless frozen) rotation. No collision handling.
    pub fn integrate(&mut self, dt: f32, gravity: Vec2) {
        if dt <= 0.0 {
            return;
        }
        let force = self.take_force();
        let inv_mass = if self.mass > 0.0 { 1.0 / self.mass } else { 0.0 };
        self.velocity += (force * inv_mass + gravity * self.gravity_scale) * dt;
        self.position += self.velocity * dt;

        if self.freeze_rotation {
            self.angular_velocity = 0.0;
        } else {
            self.rotation += self.angular_velocity * dt;
        }
    }
}

/// Box-shaped collider attached to a [`RigidBody2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider2D {
    /// Full width and height in local space
    pub size: Vec2,
    /// Local offset of the box centre from the body pivot
    pub offset: Vec2,
}

impl BoxCollider2D {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Whether both dimensions are strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0 && self.size.is_finite() && self.offset.is_finite()
    }

    /// World-space bounding box of the collider on `body`.
    ///
    /// A rotated box reports the axis-aligned box enclosing it.
    pub fn bounds(&self, body: &RigidBody2D) -> Aabb2 {
        let center = body.position + rotate_degrees(self.offset, body.rotation);
        let half = self.size * 0.5;
        let (sin, cos) = body.rotation.to_radians().sin_cos();
        let extents = Vec2::new(
            cos.abs() * half.x + sin.abs() * half.y,
            sin.abs() * half.x + cos.abs() * half.y,
        );
        Aabb2 {
            min: center - extents,
            max: center + extents,
        }
    }
}
