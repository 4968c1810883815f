//! Side-Scroll Controller
//!
//! Owns the character's body and collider and runs every behaviour in a
//! fixed order each frame:
//!
//! 1. Sense ground and walls
//! 2. Horizontal locomotion
//! 3. Jump (or wall jump)
//! 4. Crouch
//! 5. Wall cling (when enabled)
//! 6. Edge smoothing (when enabled and not clinging)
//!
//! Rotation runs separately on the fixed physics step.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sidescroll_engine::player::{ControllerConfig, SideScrollController};
//!
//! let mut controller = SideScrollController::builder()
//!     .config(ControllerConfig::wall_runner())
//!     .body(RigidBody2D::new(spawn))
//!     .collider(BoxCollider2D::new(Vec2::new(0.8, 1.8)))
//!     .build()?;
//!
//! // Each rendered frame:
//! controller.update(dt, &input, &mut world);
//! // Each physics tick:
//! controller.fixed_update(fixed_dt);
//! ```

use glam::Vec2;
use thiserror::Error;

use crate::input::InputFrame;
use crate::physics::{BoxCollider2D, PhysicsWorld, RigidBody2D};

use super::config::{ConfigError, ControllerConfig, RotationPolicy};
use super::crouch::{CrouchController, CrouchTransition};
use super::edge_smoothing::EdgeSmoothingController;
use super::jump::{JumpAction, JumpController};
use super::locomotion::LocomotionController;
use super::rotation::{RotationContext, RotationController};
use super::sensor::{GroundWallSensor, SensorResult};
use super::wall_cling::{ClingEvent, WallClingController};

/// Errors raised while building a [`SideScrollController`].
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("controller needs a rigid body")]
    MissingBody,

    #[error("controller needs a box collider")]
    MissingCollider,

    #[error("collider size {0} must be positive and finite on both axes")]
    DegenerateCollider(Vec2),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Everything one [`SideScrollController::update`] decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame delta actually integrated, after clamping
    pub dt: f32,
    pub sensor: SensorResult,
    pub jump: JumpAction,
    pub crouch: Option<CrouchTransition>,
    pub cling: Option<ClingEvent>,
    /// Ledge height smoothed over this frame
    pub step_height: Option<f32>,
}

/// Builder for [`SideScrollController`].
#[derive(Debug, Clone, Default)]
pub struct SideScrollControllerBuilder {
    config: ControllerConfig,
    body: Option<RigidBody2D>,
    collider: Option<BoxCollider2D>,
}

impl SideScrollControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn body(mut self, body: RigidBody2D) -> Self {
        self.body = Some(body);
        self
    }

    pub fn collider(mut self, collider: BoxCollider2D) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Validates the parts and assembles the controller.
    pub fn build(self) -> Result<SideScrollController, ControllerError> {
        let mut body = self.body.ok_or(ControllerError::MissingBody)?;
        let collider = self.collider.ok_or(ControllerError::MissingCollider)?;
        if !collider.is_valid() {
            return Err(ControllerError::DegenerateCollider(collider.size));
        }
        let config = self.config;
        config.validate()?;

        let rotation = RotationController::new(config.rotation.policy);
        rotation.apply_constraints(&mut body);

        let crouch = config
            .crouch
            .enabled
            .then(|| CrouchController::new(&collider, &config));
        let wall_cling = config
            .wall_cling
            .enabled
            .then(|| WallClingController::new(&config.wall_cling));
        let edge_smoothing = config
            .edge_smoothing
            .enabled
            .then(|| EdgeSmoothingController::new(&config));

        tracing::debug!(
            crouch = crouch.is_some(),
            wall_cling = wall_cling.is_some(),
            edge_smoothing = edge_smoothing.is_some(),
            rotation = ?config.rotation.policy,
            "side-scroll controller built"
        );

        Ok(SideScrollController {
            sensor: GroundWallSensor::new(&config),
            contacts: SensorResult::default(),
            locomotion: LocomotionController::new(&config.movement),
            jump: JumpController::new(&config.jump),
            crouch,
            wall_cling,
            edge_smoothing,
            rotation,
            body,
            collider,
            config,
        })
    }
}

/// 2D platformer character controller.
#[derive(Debug, Clone)]
pub struct SideScrollController {
    config: ControllerConfig,
    body: RigidBody2D,
    collider: BoxCollider2D,

    sensor: GroundWallSensor,
    /// Latest sensor result, kept for the fixed step and queries
    contacts: SensorResult,

    locomotion: LocomotionController,
    jump: JumpController,
    crouch: Option<CrouchController>,
    wall_cling: Option<WallClingController>,
    edge_smoothing: Option<EdgeSmoothingController>,
    rotation: RotationController,
}

impl SideScrollController {
    pub fn builder() -> SideScrollControllerBuilder {
        SideScrollControllerBuilder::new()
    }

    /// Runs one rendered frame.
    ///
    /// # Arguments
    /// * `dt` - Frame delta in seconds; clamped to `timing.max_frame_delta`
    /// * `input` - This frame's axes and jump button
    /// * `world` - World to probe and to toggle layer exemptions in
    pub fn update<W: PhysicsWorld>(&mut self, dt: f32, input: &InputFrame, world: &mut W) -> FrameReport {
        let dt = if dt.is_finite() { dt.clamp(0.0, self.config.timing.max_frame_delta) } else { 0.0 };

        let sensor = self.sensor.sense(&self.body, &self.collider, world);
        self.contacts = sensor;
        if let Some(wall) = self.wall_cling.as_mut() {
            wall.observe(&sensor);
        }
        let grounded = sensor.is_grounded;
        let crouching = self.is_crouching();

        self.locomotion.update(
            dt,
            input.horizontal,
            grounded,
            crouching,
            &mut self.body,
            self.wall_cling.as_mut(),
        );

        let jump = self
            .jump
            .update(dt, input.jump, grounded, &mut self.body, self.wall_cling.as_mut());
        if let JumpAction::WallJumped { facing } = jump {
            self.locomotion.set_facing(facing);
        }

        let crouch = match self.crouch.as_mut() {
            Some(crouch) => crouch.update(input.vertical, &self.body, &mut self.collider, world),
            None => None,
        };

        let cling = match self.wall_cling.as_mut() {
            Some(wall) => wall.update(dt, input.horizontal, &sensor, &mut self.body),
            None => None,
        };

        let clinging = self.is_wall_clinging();
        let step_height = match self.edge_smoothing.as_ref() {
            Some(edge) if !clinging => {
                edge.update(&mut self.body, &self.collider, self.locomotion.facing(), grounded, world)
            }
            _ => None,
        };

        FrameReport {
            dt,
            sensor,
            jump,
            crouch,
            cling,
            step_height,
        }
    }

    /// Runs one fixed physics tick (rotation policy).
    pub fn fixed_update(&mut self, fixed_dt: f32) {
        let context = RotationContext {
            push_direction: self.locomotion.push_direction(),
            grounded: self.contacts.is_grounded,
            clinging: self.is_wall_clinging(),
        };
        self.rotation.fixed_update(fixed_dt.max(0.0), &mut self.body, &context);
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body(&self) -> &RigidBody2D {
        &self.body
    }

    /// Mutable body access for the host physics step.
    pub fn body_mut(&mut self) -> &mut RigidBody2D {
        &mut self.body
    }

    pub fn collider(&self) -> &BoxCollider2D {
        &self.collider
    }

    /// Contacts sensed by the latest update.
    pub fn contacts(&self) -> SensorResult {
        self.contacts
    }

    pub fn is_grounded(&self) -> bool {
        self.contacts.is_grounded
    }

    /// Lowest point of the ground probe, used by one-way platforms.
    pub fn ground_check_point(&self) -> Vec2 {
        self.sensor.ground_check_point(&self.body, &self.collider)
    }

    pub fn facing(&self) -> f32 {
        self.locomotion.facing()
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }

    pub fn is_crouching(&self) -> bool {
        self.crouch.as_ref().is_some_and(CrouchController::is_crouching)
    }

    pub fn is_wall_clinging(&self) -> bool {
        self.wall_cling.as_ref().is_some_and(WallClingController::is_clinging)
    }

    pub fn is_touching_wall(&self) -> bool {
        self.contacts.is_touching_wall()
    }

    /// Seconds spent clinging since last grounded (0 when cling is disabled).
    pub fn wall_cling_timer(&self) -> f32 {
        self.wall_cling.as_ref().map_or(0.0, WallClingController::cling_timer)
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        self.rotation.policy()
    }

    pub fn wall_cling(&self) -> Option<&WallClingController> {
        self.wall_cling.as_ref()
    }
}
