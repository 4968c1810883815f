//! Ground and wall sensing.
//!
//! Runs first every frame. Everything else in the frame reads the
//! [`SensorResult`] it produces and nothing keeps it past that frame.

use glam::Vec2;

use crate::physics::{BoxCollider2D, LayerMask, PhysicsWorld, RigidBody2D};

use super::config::ControllerConfig;

/// Contact classification for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorResult {
    pub is_grounded: bool,
    pub touching_wall_left: bool,
    pub touching_wall_right: bool,
}

impl SensorResult {
    pub fn is_touching_wall(&self) -> bool {
        self.touching_wall_left || self.touching_wall_right
    }
}

/// Casts the ground probe and, when enabled, the two wall probes.
#[derive(Debug, Clone)]
pub struct GroundWallSensor {
    ground_mask: LayerMask,
    ground_check_buffer: f32,
    /// `None` when wall sensing is off
    walls: Option<WallProbe>,
}

#[derive(Debug, Clone, Copy)]
struct WallProbe {
    mask: LayerMask,
    distance: f32,
}

impl GroundWallSensor {
    pub fn new(config: &ControllerConfig) -> Self {
        let walls = config.wall_cling.enabled.then(|| WallProbe {
            mask: config.wall_mask(),
            distance: config.wall_cling.wall_check_distance,
        });
        Self {
            ground_mask: config.ground.ground_mask,
            ground_check_buffer: config.ground.ground_check_buffer,
            walls,
        }
    }

    /// Probes the world around `collider` on `body`.
    ///
    /// The ground ray starts at the collider centre and reaches
    /// `ground_check_buffer` past its bottom edge. Wall rays start on the
    /// left and right edges at mid height.
    pub fn sense<W: PhysicsWorld>(&self, body: &RigidBody2D, collider: &BoxCollider2D, world: &W) -> SensorResult {
        let bounds = collider.bounds(body);
        let center = bounds.center();

        let ground_distance = bounds.extents().y + self.ground_check_buffer;
        let is_grounded = world
            .raycast(center, Vec2::NEG_Y, ground_distance, self.ground_mask)
            .is_some();

        let (touching_wall_left, touching_wall_right) = match self.walls {
            Some(probe) => {
                let left = Vec2::new(bounds.min.x, center.y);
                let right = Vec2::new(bounds.max.x, center.y);
                (
                    world.raycast(left, Vec2::NEG_X, probe.distance, probe.mask).is_some(),
                    world.raycast(right, Vec2::X, probe.distance, probe.mask).is_some(),
                )
            }
            None => (false, false),
        };

        let result = SensorResult {
            is_grounded,
            touching_wall_left,
            touching_wall_right,
        };
        tracing::trace!(?result, "sensed contacts");
        result
    }

    /// Lowest point the ground probe reaches.
    ///
    /// One-way platforms compare this against their centre line.
    pub fn ground_check_point(&self, body: &RigidBody2D, collider: &BoxCollider2D) -> Vec2 {
        let bounds = collider.bounds(body);
        let center = bounds.center();
        Vec2::new(center.x, center.y - (bounds.extents().y + self.ground_check_buffer))
    }

    pub fn senses_walls(&self) -> bool {
        self.walls.is_some()
    }
}
