//! Wall Cling System
//!
//! Attach / slide / detach on wall contact, plus the wall jump and its input
//! buffer.
//!
//! # States
//!
//! - Free: normal airborne or grounded movement
//! - Clinging: stuck to a wall, sliding down at a capped speed
//!
//! A body attaches when it is airborne, not rising, touching a wall and
//! pressing into it, and the per-airborne cling budget is not spent. The
//! budget refills only on landing.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cling = WallClingController::new(&config.wall_cling);
//!
//! // Each frame, right after sensing:
//! cling.observe(&sensor_result);
//! if jump_pressed && cling.is_clinging() {
//!     if let Some(facing) = cling.wall_jump(&mut body) { /* ... */ }
//! }
//! cling.update(dt, input.horizontal, &sensor_result, &mut body);
//! ```

use glam::Vec2;

use crate::physics::RigidBody2D;

use super::config::WallClingConfig;
use super::sensor::SensorResult;

/// Why a cling ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachReason {
    Grounded,
    LostContact,
    BudgetSpent,
    PulledAway,
    WallJump,
}

/// Cling state change produced by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClingEvent {
    Attached,
    Detached(DetachReason),
}

/// Wall cling and wall jump state machine.
#[derive(Debug, Clone)]
pub struct WallClingController {
    wall_slide_speed: f32,
    wall_jump_force: f32,
    wall_jump_horizontal_force: f32,
    wall_cling_time: f32,
    wall_jump_input_buffer: f32,

    is_clinging: bool,
    /// Seconds spent clinging since last grounded
    cling_timer: f32,
    /// Countdown after a wall jump or a buffered away-press
    wall_jump_timer: f32,
    /// Away-from-wall input buffered while clinging
    wall_jump_input_pressed: bool,
    touching_left: bool,
    touching_right: bool,
}

impl WallClingController {
    pub fn new(config: &WallClingConfig) -> Self {
        Self {
            wall_slide_speed: config.wall_slide_speed,
            wall_jump_force: config.wall_jump_force,
            wall_jump_horizontal_force: config.wall_jump_horizontal_force,
            wall_cling_time: config.wall_cling_time,
            wall_jump_input_buffer: config.wall_jump_input_buffer,
            is_clinging: false,
            cling_timer: 0.0,
            wall_jump_timer: 0.0,
            wall_jump_input_pressed: false,
            touching_left: false,
            touching_right: false,
        }
    }

    pub fn is_clinging(&self) -> bool {
        self.is_clinging
    }

    pub fn cling_timer(&self) -> f32 {
        self.cling_timer
    }

    pub fn wall_jump_timer(&self) -> f32 {
        self.wall_jump_timer
    }

    pub fn wall_jump_input_pressed(&self) -> bool {
        self.wall_jump_input_pressed
    }

    pub fn is_touching_wall(&self) -> bool {
        self.touching_left || self.touching_right
    }

    /// Whether normal horizontal locomotion is suspended this frame.
    pub fn blocks_locomotion(&self) -> bool {
        self.is_clinging && self.wall_jump_timer <= 0.0
    }

    /// Detached with the wall-jump timer still running.
    ///
    /// Locomotion leaves the launch velocity alone and jump hold thrust stays
    /// off until the timer runs out.
    pub fn is_launching(&self) -> bool {
        !self.is_clinging && self.wall_jump_timer > 0.0
    }

    /// Refreshes wall contact from this frame's sensor result.
    ///
    /// Must run before locomotion and jump so the buffered input and the
    /// wall-jump direction see the current contacts.
    pub fn observe(&mut self, sensor: &SensorResult) {
        self.touching_left = sensor.touching_wall_left;
        self.touching_right = sensor.touching_wall_right;
    }

    /// Buffers a wall jump when `horizontal` points away from the touched wall.
    ///
    /// Called by locomotion while it is suspended.
    pub fn buffer_input(&mut self, horizontal: f32) {
        let away = (horizontal < 0.0 && self.touching_right) || (horizontal > 0.0 && self.touching_left);
        if away {
            self.wall_jump_input_pressed = true;
            self.wall_jump_timer = self.wall_jump_input_buffer;
        }
    }

    /// Counts the wall-jump timer down by `dt`.
    pub fn tick_jump_timer(&mut self, dt: f32) {
        if self.wall_jump_timer > 0.0 {
            self.wall_jump_timer -= dt;
        }
    }

    /// Runs one frame of the cling state machine.
    ///
    /// # Arguments
    /// * `dt` - Frame delta in seconds
    /// * `horizontal` - Horizontal input axis
    /// * `sensor` - This frame's contacts
    /// * `body` - Body whose velocity is zeroed on attach and eased while sliding
    ///
    /// # Returns
    /// The state change this frame, if any
    pub fn update(
        &mut self,
        dt: f32,
        horizontal: f32,
        sensor: &SensorResult,
        body: &mut RigidBody2D,
    ) -> Option<ClingEvent> {
        self.observe(sensor);
        let was_clinging = self.is_clinging;
        let mut reason = None;

        let can_cling = !sensor.is_grounded && body.velocity.y <= 0.0 && self.is_touching_wall();
        if can_cling && !self.is_clinging && self.cling_timer < self.wall_cling_time {
            let into_wall = (self.touching_left && horizontal < 0.0) || (self.touching_right && horizontal > 0.0);
            if into_wall {
                self.is_clinging = true;
                body.velocity = Vec2::ZERO;
            }
        }

        if self.is_clinging {
            self.cling_timer += dt;

            // Ease toward the slide speed rather than snapping to it
            let slide = self.wall_slide_speed;
            let vy = if body.velocity.y > -slide {
                (body.velocity.y - slide * dt * 10.0).max(-slide)
            } else {
                body.velocity.y
            };
            body.velocity = Vec2::new(0.0, vy);

            if sensor.is_grounded {
                reason = Some(DetachReason::Grounded);
            } else if !self.is_touching_wall() {
                reason = Some(DetachReason::LostContact);
            } else if self.cling_timer >= self.wall_cling_time {
                reason = Some(DetachReason::BudgetSpent);
            } else {
                let away =
                    (self.touching_left && horizontal > 0.0) || (self.touching_right && horizontal < 0.0);
                if away && !self.wall_jump_input_pressed {
                    reason = Some(DetachReason::PulledAway);
                }
            }
            if reason.is_some() {
                self.stop_clinging();
            }
        }

        if sensor.is_grounded {
            self.cling_timer = 0.0;
        }

        match (was_clinging, self.is_clinging) {
            (false, true) => {
                tracing::debug!(left = self.touching_left, right = self.touching_right, "wall cling attached");
                Some(ClingEvent::Attached)
            }
            (true, false) => {
                let reason = reason.unwrap_or(DetachReason::LostContact);
                tracing::debug!(?reason, cling_timer = self.cling_timer, "wall cling detached");
                Some(ClingEvent::Detached(reason))
            }
            _ => None,
        }
    }

    /// Launches the body away from the touched wall.
    ///
    /// Refused when no wall is touched this frame; the cling then ends with
    /// [`DetachReason::LostContact`] on the next [`update`](Self::update).
    ///
    /// # Returns
    /// The new facing direction (+1 away from a left wall, -1 from a right
    /// wall), or `None` when refused
    pub fn wall_jump(&mut self, body: &mut RigidBody2D) -> Option<f32> {
        if !self.is_touching_wall() {
            tracing::debug!("wall jump refused, no wall contact");
            return None;
        }
        self.stop_clinging();

        let (direction, facing) = if self.touching_left {
            (Vec2::new(1.0, 1.0).normalize(), 1.0)
        } else {
            (Vec2::new(-1.0, 1.0).normalize(), -1.0)
        };
        body.velocity = Vec2::new(
            direction.x * self.wall_jump_horizontal_force,
            direction.y * self.wall_jump_force,
        );
        self.wall_jump_timer = self.wall_jump_input_buffer;

        tracing::debug!(velocity = ?body.velocity, "wall jump");
        Some(facing)
    }

    fn stop_clinging(&mut self) {
        self.is_clinging = false;
        self.wall_jump_input_pressed = false;
    }
}
