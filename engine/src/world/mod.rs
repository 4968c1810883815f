//! World Module
//!
//! Level geometry for the side-scroller: blocks placed into a
//! [`StaticWorld`] on the layer their kind dictates, and the one-way
//! platforms among them.
//!
//! ## Layers
//! Normal and damaging blocks are ground; platforms live on their own layer
//! so crouching can exempt the player from them.

pub mod blocks;
pub mod platform;

pub use blocks::{Block, BlockKind};
pub use platform::OneWayPlatform;

use glam::Vec2;

use crate::physics::{ColliderId, LayerMask, PhysicsWorld, StaticWorld};

/// A level: the collision world plus what each collider was built from.
#[derive(Debug, Clone, Default)]
pub struct Level {
    world: StaticWorld,
    blocks: Vec<(ColliderId, Block)>,
    platforms: Vec<OneWayPlatform>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block and returns its collider handle.
    pub fn spawn(&mut self, block: Block) -> ColliderId {
        let id = self.world.add_box(block.bounds, block.kind.layer());
        if block.kind == BlockKind::Platform {
            self.platforms.push(OneWayPlatform::new(id, block.bounds.center().y));
        }
        self.blocks.push((id, block));
        id
    }

    pub fn world(&self) -> &StaticWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut StaticWorld {
        &mut self.world
    }

    pub fn blocks(&self) -> impl Iterator<Item = &(ColliderId, Block)> {
        self.blocks.iter()
    }

    pub fn platforms(&self) -> &[OneWayPlatform] {
        &self.platforms
    }

    /// Kind of the block behind `id`.
    pub fn block_kind(&self, id: ColliderId) -> Option<BlockKind> {
        self.blocks
            .iter()
            .find(|(block_id, _)| *block_id == id)
            .map(|(_, block)| block.kind)
    }

    /// Kind of the nearest enabled block straight below `origin`.
    pub fn block_below(&self, origin: Vec2, max_distance: f32) -> Option<BlockKind> {
        let hit = self.world.raycast(origin, Vec2::NEG_Y, max_distance, LayerMask::ALL)?;
        self.block_kind(hit.collider)
    }

    /// Runs every one-way platform's collision rule for this frame.
    pub fn update_platforms(&mut self, ground_check_point: Vec2, vertical: f32) {
        for platform in &self.platforms {
            platform.update(ground_check_point, vertical, &mut self.world);
        }
    }
}
