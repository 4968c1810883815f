//! Horizontal Locomotion
//!
//! Moves horizontal velocity linearly toward `input * max_speed` at a rate
//! picked from the body's state:
//!
//! 1. Grounded and reversing direction: `turnaround_deceleration`
//! 2. Grounded: `ground_acceleration` with input, `ground_deceleration` without
//! 3. Airborne: `air_acceleration` with input, `air_deceleration` without
//!
//! The step never overshoots the target. Facing follows the sign of the last
//! non-zero input.

use crate::physics::{RigidBody2D, move_towards, sign};

use super::config::MovementConfig;
use super::wall_cling::WallClingController;

/// Horizontal speed controller and facing tracker.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: MovementConfig,
    /// -1.0 (left) or +1.0 (right)
    facing: f32,
    /// Raw horizontal input from the latest frame
    push_direction: f32,
}

impl LocomotionController {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            config: config.clone(),
            facing: 1.0,
            push_direction: 0.0,
        }
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Overrides facing (wall jumps launch the body the other way).
    pub fn set_facing(&mut self, facing: f32) {
        self.facing = sign(facing);
    }

    pub fn push_direction(&self) -> f32 {
        self.push_direction
    }

    /// Target speed for `horizontal` input.
    pub fn target_speed(&self, horizontal: f32, crouching: bool) -> f32 {
        let multiplier = if crouching { self.config.crouch_speed_multiplier } else { 1.0 };
        horizontal * self.config.max_speed * multiplier
    }

    /// Acceleration rate for the current state.
    pub fn acceleration_rate(&self, horizontal: f32, velocity_x: f32, grounded: bool) -> f32 {
        let reversing = (horizontal > 0.0 && velocity_x < 0.0) || (horizontal < 0.0 && velocity_x > 0.0);
        let has_input = horizontal != 0.0;

        if reversing && grounded {
            self.config.turnaround_deceleration
        } else if grounded {
            if has_input {
                self.config.ground_acceleration
            } else {
                self.config.ground_deceleration
            }
        } else if has_input {
            self.config.air_acceleration
        } else {
            self.config.air_deceleration
        }
    }

    /// Updates horizontal velocity for one frame.
    ///
    /// # Arguments
    /// * `dt` - Frame delta in seconds
    /// * `horizontal` - Horizontal input axis in [-1, 1]
    /// * `grounded` - Whether the body is on the ground this frame
    /// * `crouching` - Whether the crouch speed multiplier applies
    /// * `body` - Body whose `velocity.x` is updated
    /// * `wall` - Wall cling state, when that behaviour is enabled
    ///
    /// While clinging with no wall jump pending, normal movement is skipped
    /// and the input can only buffer a wall jump. After a wall jump, movement
    /// stays off until the wall-jump timer runs out so the launch velocity
    /// carries.
    pub fn update(
        &mut self,
        dt: f32,
        horizontal: f32,
        grounded: bool,
        crouching: bool,
        body: &mut RigidBody2D,
        mut wall: Option<&mut WallClingController>,
    ) {
        self.push_direction = horizontal;

        if let Some(wall) = wall.as_deref_mut() {
            if wall.blocks_locomotion() {
                wall.buffer_input(horizontal);
                return;
            }
            if wall.is_launching() {
                wall.tick_jump_timer(dt);
                return;
            }
        }

        let target = self.target_speed(horizontal, crouching);
        let rate = self.acceleration_rate(horizontal, body.velocity.x, grounded);
        body.velocity.x = move_towards(body.velocity.x, target, rate * dt);

        if horizontal != 0.0 {
            self.set_facing(horizontal);
        }

        if let Some(wall) = wall {
            wall.tick_jump_timer(dt);
        }
    }
}
