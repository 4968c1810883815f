//! Level blocks and the collision layer each kind lives on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::{Aabb2, GROUND_LAYER, Layer, PLATFORMS_LAYER};

/// Kind of static block a level is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Solid ground
    Normal,
    /// Solid ground that hurts on contact
    Damaging,
    /// One-way platform the player can jump up through and drop down through
    Platform,
}

impl BlockKind {
    /// Collision layer blocks of this kind are placed on.
    pub fn layer(self) -> Layer {
        match self {
            BlockKind::Normal | BlockKind::Damaging => GROUND_LAYER,
            BlockKind::Platform => PLATFORMS_LAYER,
        }
    }

    pub fn is_damaging(self) -> bool {
        self == BlockKind::Damaging
    }
}

/// A block placed in a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub bounds: Aabb2,
}

impl Block {
    pub fn new(kind: BlockKind, bounds: Aabb2) -> Self {
        Self { kind, bounds }
    }

    /// Block of `size` centred on `center`.
    pub fn centered(kind: BlockKind, center: Vec2, size: Vec2) -> Self {
        Self::new(kind, Aabb2::from_center_size(center, size))
    }

    /// Height of the walkable top surface.
    pub fn top(&self) -> f32 {
        self.bounds.max.y
    }
}
