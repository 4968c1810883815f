//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the controller, re-exported from the glam library, plus the scalar
//! helpers every behaviour shares.

pub use glam::Vec2;

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
///
/// A negative `max_delta` moves away from the target, matching the usual
/// game-engine definition.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Sign of `value` as -1.0 or +1.0 (zero maps to +1.0).
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Rotates `v` counter-clockwise by `degrees`.
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
