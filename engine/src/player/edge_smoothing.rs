//! Edge smoothing: nudges the body up over ledges shorter than
//! `edge_smooth_distance` instead of letting it snag on them.

use glam::Vec2;

use crate::physics::{BoxCollider2D, LayerMask, PhysicsWorld, RigidBody2D};

use super::config::ControllerConfig;

/// Below this horizontal speed the body is treated as standing still.
const MIN_SPEED: f32 = 0.1;
/// Upward force per metre of step height.
const STEP_FORCE_SCALE: f32 = 50.0;
/// How far past the forward hit the downward probe starts.
const PROBE_INSET: f32 = 0.01;
/// How far above the collider top the downward probe starts.
const PROBE_LIFT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct EdgeSmoothingController {
    distance: f32,
    ground_mask: LayerMask,
}

impl EdgeSmoothingController {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            distance: config.edge_smoothing.edge_smooth_distance,
            ground_mask: config.ground.ground_mask,
        }
    }

    /// Probes ahead of the body and adds an upward force for a short step.
    ///
    /// # Returns
    /// The step height smoothed over, if any
    pub fn update<W: PhysicsWorld>(
        &self,
        body: &mut RigidBody2D,
        collider: &BoxCollider2D,
        facing: f32,
        grounded: bool,
        world: &W,
    ) -> Option<f32> {
        if !grounded || body.velocity.x.abs() < MIN_SPEED {
            return None;
        }

        let bounds = collider.bounds(body);
        let center = bounds.center();
        let extents = bounds.extents();

        let forward_origin = Vec2::new(center.x + facing * extents.x, bounds.max.y - self.distance);
        let forward = world.raycast(forward_origin, Vec2::new(facing, 0.0), self.distance, self.ground_mask)?;

        let down_origin = Vec2::new(forward.point.x + facing * PROBE_INSET, bounds.max.y + PROBE_LIFT);
        let step = world.raycast(down_origin, Vec2::NEG_Y, self.distance + PROBE_LIFT, self.ground_mask)?;

        let step_height = step.point.y - bounds.min.y;
        if step_height > 0.0 && step_height <= self.distance {
            body.add_force(Vec2::Y * step_height * STEP_FORCE_SCALE);
            tracing::trace!(step_height, "edge smoothing step-up");
            Some(step_height)
        } else {
            None
        }
    }
}
