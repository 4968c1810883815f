//! Jump System
//!
//! Edge-triggered launch plus a short hold-thrust window.
//!
//! - Press while grounded: vertical velocity is set to `jump_force`
//! - Hold: continuous upward force for up to `max_jump_hold_time`
//! - Release, or start falling: the jump ends
//! - Press while clinging: wall jump instead, with no hold thrust until the
//!   wall-jump timer runs out

use glam::Vec2;

use crate::input::ButtonState;
use crate::physics::RigidBody2D;

use super::config::JumpConfig;
use super::wall_cling::WallClingController;

/// Scales hold thrust so it is frame-rate independent at the reference tick.
const HOLD_FORCE_SCALE: f32 = 50.0;

/// What a jump update did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpAction {
    None,
    /// Launched from the ground
    Jumped,
    /// Launched off a wall; carries the new facing direction
    WallJumped { facing: f32 },
}

/// Jump launch and hold-thrust state.
#[derive(Debug, Clone)]
pub struct JumpController {
    config: JumpConfig,
    is_jumping: bool,
    /// Seconds of hold thrust applied since launch
    jump_hold_timer: f32,
}

impl JumpController {
    pub fn new(config: &JumpConfig) -> Self {
        Self {
            config: config.clone(),
            is_jumping: false,
            jump_hold_timer: 0.0,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn jump_hold_timer(&self) -> f32 {
        self.jump_hold_timer
    }

    /// Processes the jump button for one frame.
    ///
    /// # Arguments
    /// * `dt` - Frame delta in seconds
    /// * `button` - Jump button edges for this frame
    /// * `grounded` - Whether the body is on the ground this frame
    /// * `body` - Body receiving the launch velocity or hold force
    /// * `wall` - Wall cling state, when that behaviour is enabled
    pub fn update(
        &mut self,
        dt: f32,
        button: ButtonState,
        grounded: bool,
        body: &mut RigidBody2D,
        mut wall: Option<&mut WallClingController>,
    ) -> JumpAction {
        let mut action = JumpAction::None;
        let clinging = wall.as_deref().is_some_and(WallClingController::is_clinging);

        if button.pressed {
            let wall_jump = match wall.as_deref_mut() {
                Some(wall) if clinging => wall.wall_jump(body),
                _ => None,
            };
            if let Some(facing) = wall_jump {
                action = JumpAction::WallJumped { facing };
            } else if grounded && !self.is_jumping {
                body.velocity.y = self.config.jump_force;
                self.is_jumping = true;
                self.jump_hold_timer = 0.0;
                tracing::debug!(velocity_y = body.velocity.y, "jump");
                action = JumpAction::Jumped;
            }
        }

        // No thrust while clinging or while a wall-jump timer is running
        let wall_locked = wall
            .as_deref()
            .is_some_and(|wall| wall.is_clinging() || wall.wall_jump_timer() > 0.0);
        if button.held && self.is_jumping && self.jump_hold_timer < self.config.max_jump_hold_time && !wall_locked {
            let thrust = self.config.jump_force * self.config.jump_hold_multiplier * dt * HOLD_FORCE_SCALE;
            body.add_force(Vec2::Y * thrust);
            self.jump_hold_timer += dt;
        } else if button.released {
            self.is_jumping = false;
        }

        if body.velocity.y < 0.0 {
            self.is_jumping = false;
        }

        action
    }
}
