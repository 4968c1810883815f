//! Body rotation policies, applied on the fixed physics step.

use crate::physics::{RigidBody2D, move_towards};

use super::config::RotationPolicy;

/// Changes smaller than this are not treated as a clamp.
const CLAMP_TOLERANCE: f32 = 0.001;

/// Inputs the clamped policy needs to tell "pushing against something".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationContext {
    /// Raw horizontal input from the latest frame
    pub push_direction: f32,
    pub grounded: bool,
    pub clinging: bool,
}

impl RotationContext {
    /// Pushing: input held, barely moving, and braced on ground or a wall.
    pub fn is_pushing(&self, velocity_x: f32) -> bool {
        self.push_direction.abs() > 0.1 && velocity_x.abs() < 0.5 && (self.grounded || self.clinging)
    }
}

/// Applies the configured [`RotationPolicy`] to a body.
#[derive(Debug, Clone, Copy)]
pub struct RotationController {
    policy: RotationPolicy,
}

impl RotationController {
    pub fn new(policy: RotationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// Sets the body's rotation freeze flag for the policy.
    ///
    /// Called once when the controller is built.
    pub fn apply_constraints(&self, body: &mut RigidBody2D) {
        match self.policy {
            RotationPolicy::Locked => {
                body.freeze_rotation = true;
                body.angular_velocity = 0.0;
            }
            RotationPolicy::Free | RotationPolicy::Clamped { .. } => body.freeze_rotation = false,
        }
    }

    /// Runs one fixed step.
    ///
    /// # Arguments
    /// * `fixed_dt` - Physics tick length in seconds
    /// * `body` - Body whose rotation is constrained
    /// * `context` - Push / contact state from the latest frame
    pub fn fixed_update(&self, fixed_dt: f32, body: &mut RigidBody2D, context: &RotationContext) {
        match self.policy {
            RotationPolicy::Free => {}
            RotationPolicy::Locked => body.angular_velocity = 0.0,
            RotationPolicy::Clamped {
                max_rotation_angle,
                return_rotation_speed,
            } => {
                let angle = body.rotation;
                let clamped = angle.clamp(-max_rotation_angle, max_rotation_angle);
                let was_clamped = (angle - clamped).abs() > CLAMP_TOLERANCE;
                if was_clamped {
                    body.rotation = clamped;
                    body.angular_velocity = 0.0;
                }

                if !context.is_pushing(body.velocity.x) {
                    body.rotation = move_towards(body.rotation, 0.0, return_rotation_speed * fixed_dt);
                }
            }
        }
    }
}
