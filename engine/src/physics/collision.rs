//! Collision detection module
//!
//! Ray-AABB intersection for the 2D side-scroller world. Every collider the
//! controller queries is an axis-aligned box, so one slab test covers ground,
//! wall, ceiling and ledge probes.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use sidescroll_engine::physics::collision::{ray_aabb_intersect, Aabb2};
//! use glam::Vec2;
//!
//! let floor = Aabb2::from_center_size(Vec2::new(0.0, -0.5), Vec2::new(10.0, 1.0));
//! if let Some(t) = ray_aabb_intersect(Vec2::new(0.0, 1.0), Vec2::NEG_Y, floor.min, floor.max) {
//!     println!("floor is {} below", t);
//! }
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Half of the size, matching the usual "extents" naming.
    pub fn extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Strict overlap test; touching edges do not count.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point. A ray that starts
///   inside the box reports `0.0`.
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(ray_origin: Vec2, ray_dir: Vec2, aabb_min: Vec2, aabb_max: Vec2) -> Option<f32> {
    // Axis-parallel rays never cross that axis' slab; they hit only if the
    // origin already lies between the two planes.
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..2 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

/// Computes the outward surface normal for a point on an AABB surface.
///
/// Picks the face whose plane the point is closest to in normalized box space.
pub fn aabb_surface_normal(point: Vec2, aabb_min: Vec2, aabb_max: Vec2) -> Vec2 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec2::splat(1e-6));
    let local = point - center;
    let normalized = local / half_extents;

    if normalized.x.abs() >= normalized.y.abs() {
        Vec2::new(normalized.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, normalized.y.signum())
    }
}

/// Result of a box-vs-box overlap check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Position adjustment that moves the body out of the box
    pub push: Vec2,
    /// Velocity adjustment that cancels motion into the box
    pub velocity_adjustment: Vec2,
}

impl CollisionResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_collision(&self) -> bool {
        self.push != Vec2::ZERO
    }
}

/// Pushes `body` out of `solid` along the axis of least penetration.
///
/// # Arguments
/// * `body` - Bounds of the moving box
/// * `velocity` - Velocity of the moving box
/// * `solid` - Static box to push out of
///
/// # Returns
/// `CollisionResult` with the push and the velocity change; empty when the
/// boxes only touch or do not overlap
pub fn resolve_aabb_overlap(body: &Aabb2, velocity: Vec2, solid: &Aabb2) -> CollisionResult {
    if !body.overlaps(solid) {
        return CollisionResult::none();
    }

    let nearest = |a: f32, b: f32| if a.abs() < b.abs() { a } else { b };
    let push_x = nearest(solid.min.x - body.max.x, solid.max.x - body.min.x);
    let push_y = nearest(solid.min.y - body.max.y, solid.max.y - body.min.y);

    let push = if push_x.abs() < push_y.abs() {
        Vec2::new(push_x, 0.0)
    } else {
        Vec2::new(0.0, push_y)
    };

    let push_dir = push.normalize_or_zero();
    let vel_dot = velocity.dot(push_dir);
    let velocity_adjustment = if vel_dot < 0.0 { -push_dir * vel_dot } else { Vec2::ZERO };

    CollisionResult {
        push,
        velocity_adjustment,
    }
}
