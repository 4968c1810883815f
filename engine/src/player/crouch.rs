//! Player Crouch System
//!
//! Swaps the collider between a standing and a crouched shape from the
//! vertical input axis.
//!
//! # Stances
//!
//! - Standing: collider at its authored size and offset
//! - Crouching: same width, half height, feet kept where they were
//!
//! Crouching also exempts the player layer from colliding with the platforms
//! layer, so holding down drops the body through one-way platforms.
//! Standing up is blocked if there is ground geometry above the player.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sidescroll_engine::player::CrouchController;
//!
//! let mut crouch = CrouchController::new(&collider, &config);
//!
//! // Each frame:
//! crouch.update(input.vertical, &body, &mut collider, &mut world);
//! let crouching = crouch.is_crouching();
//! ```

use glam::Vec2;

use crate::input::frame::CROUCH_AXIS_THRESHOLD;
use crate::physics::{BoxCollider2D, Layer, LayerMask, PhysicsWorld, RigidBody2D};

use super::config::ControllerConfig;

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Standing upright at the authored collider size
    #[default]
    Standing,
    /// Crouched at half height
    Crouching,
}

/// Stance change attempted by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrouchTransition {
    Crouched,
    Stood,
    /// Wanted to stand, but the clearance probe hit something
    StandBlocked,
}

/// Manages the collider shape and platform exemption for crouching.
#[derive(Debug, Clone)]
pub struct CrouchController {
    /// Current stance state
    stance: Stance,

    standing_size: Vec2,
    standing_offset: Vec2,
    crouch_size: Vec2,
    crouch_offset: Vec2,

    /// Layers that block standing up
    ground_mask: LayerMask,
    /// Extra probe length past the height regained on standing
    clearance_margin: f32,
    player_layer: Layer,
    platforms_layer: Layer,
}

impl CrouchController {
    /// Create a crouch controller for `collider` in standing stance.
    ///
    /// The collider's current size and offset become the standing shape.
    pub fn new(collider: &BoxCollider2D, config: &ControllerConfig) -> Self {
        let standing_size = collider.size;
        let standing_offset = collider.offset;
        let crouch_size = Vec2::new(standing_size.x, standing_size.y * 0.5);
        // Lower the centre by the height lost so the bottom edge stays put
        let crouch_offset = Vec2::new(
            standing_offset.x,
            standing_offset.y - (standing_size.y - crouch_size.y) * 0.5,
        );

        Self {
            stance: Stance::Standing,
            standing_size,
            standing_offset,
            crouch_size,
            crouch_offset,
            ground_mask: config.ground.ground_mask,
            clearance_margin: config.crouch.clearance_margin,
            player_layer: config.layers.player,
            platforms_layer: config.layers.platforms,
        }
    }

    /// Get the current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_crouching(&self) -> bool {
        self.stance == Stance::Crouching
    }

    pub fn standing_size(&self) -> Vec2 {
        self.standing_size
    }

    pub fn crouch_size(&self) -> Vec2 {
        self.crouch_size
    }

    pub fn crouch_offset(&self) -> Vec2 {
        self.crouch_offset
    }

    /// Check if the player can stand up from the crouched collider.
    ///
    /// Probes upward from the top of `collider` for the height regained on
    /// standing plus the clearance margin.
    ///
    /// # Returns
    /// `true` if nothing on the ground mask is in the way
    pub fn can_stand<W: PhysicsWorld>(&self, body: &RigidBody2D, collider: &BoxCollider2D, world: &W) -> bool {
        let bounds = collider.bounds(body);
        let origin = Vec2::new(bounds.center().x, bounds.max.y);
        let distance = (self.standing_size.y - self.crouch_size.y) + self.clearance_margin;
        world.raycast(origin, Vec2::Y, distance, self.ground_mask).is_none()
    }

    /// Update the crouch controller.
    ///
    /// # Arguments
    /// * `vertical` - Vertical input axis; below -0.1 requests a crouch
    /// * `body` - Body the collider is attached to
    /// * `collider` - Collider that is resized
    /// * `world` - World for the clearance probe and the layer exemption
    ///
    /// # Returns
    /// The stance change attempted this frame, if any
    pub fn update<W: PhysicsWorld>(
        &mut self,
        vertical: f32,
        body: &RigidBody2D,
        collider: &mut BoxCollider2D,
        world: &mut W,
    ) -> Option<CrouchTransition> {
        let wants_crouch = vertical < CROUCH_AXIS_THRESHOLD;

        match self.stance {
            Stance::Standing if wants_crouch => {
                self.crouch(collider, world);
                Some(CrouchTransition::Crouched)
            }
            Stance::Crouching if !wants_crouch => {
                if self.can_stand(body, collider, world) {
                    self.stand(collider, world);
                    Some(CrouchTransition::Stood)
                } else {
                    // Stay crouched; collider untouched
                    tracing::trace!("stand up blocked by overhead geometry");
                    Some(CrouchTransition::StandBlocked)
                }
            }
            _ => None,
        }
    }

    fn crouch<W: PhysicsWorld>(&mut self, collider: &mut BoxCollider2D, world: &mut W) {
        self.stance = Stance::Crouching;
        collider.size = self.crouch_size;
        collider.offset = self.crouch_offset;
        world.set_layer_collision_ignored(self.player_layer, self.platforms_layer, true);
        tracing::debug!(size = ?collider.size, "crouched");
    }

    fn stand<W: PhysicsWorld>(&mut self, collider: &mut BoxCollider2D, world: &mut W) {
        self.stance = Stance::Standing;
        collider.size = self.standing_size;
        collider.offset = self.standing_offset;
        world.set_layer_collision_ignored(self.player_layer, self.platforms_layer, false);
        tracing::debug!(size = ?collider.size, "stood up");
    }
}
