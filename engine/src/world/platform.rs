//! One-way platforms.
//!
//! A platform's collider is enabled only while the player's ground check
//! point is at or above the platform's centre line and the player is not
//! pressing down. Jumping up from below therefore passes through, and
//! holding down drops through.

use glam::Vec2;

use crate::input::frame::CROUCH_AXIS_THRESHOLD;
use crate::physics::{ColliderId, StaticWorld};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneWayPlatform {
    collider: ColliderId,
    /// Height the ground check point must reach; the platform's centre line
    height: f32,
}

impl OneWayPlatform {
    pub fn new(collider: ColliderId, height: f32) -> Self {
        Self { collider, height }
    }

    pub fn collider(&self) -> ColliderId {
        self.collider
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether the platform should be solid for this frame.
    ///
    /// # Arguments
    /// * `ground_check_point` - Lowest point of the player's ground probe
    /// * `vertical` - Player's vertical input axis
    pub fn should_collide(&self, ground_check_point: Vec2, vertical: f32) -> bool {
        let above = ground_check_point.y >= self.height;
        let pressing_down = vertical < CROUCH_AXIS_THRESHOLD;
        above && !pressing_down
    }

    /// Enables or disables the platform collider for this frame.
    ///
    /// # Returns
    /// Whether the collider is now enabled
    pub fn update(&self, ground_check_point: Vec2, vertical: f32, world: &mut StaticWorld) -> bool {
        let solid = self.should_collide(ground_check_point, vertical);
        tracing::trace!(collider = self.collider.0, solid, "platform collision");
        world.set_collider_enabled(self.collider, solid);
        solid
    }
}
