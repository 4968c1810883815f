//! Collision layers and layer masks.
//!
//! Every collider lives on exactly one [`Layer`] (0..32). Ray queries filter
//! colliders with a [`LayerMask`], and the [`LayerMatrix`] records which layer
//! pairs are exempt from colliding with each other.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Number of distinct collision layers.
pub const MAX_LAYERS: usize = 32;

const_assert!(MAX_LAYERS <= u32::BITS as usize);

/// Default layer for colliders that were not assigned one.
pub const DEFAULT_LAYER: Layer = Layer(0);
/// Layer for solid level geometry.
pub const GROUND_LAYER: Layer = Layer(6);
/// Layer for one-way platforms the player can drop through.
pub const PLATFORMS_LAYER: Layer = Layer(7);
/// Layer the controlled character lives on.
pub const PLAYER_LAYER: Layer = Layer(8);

/// A single collision layer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer(pub u8);

impl Layer {
    /// Returns the layer index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the index fits inside the layer table.
    pub fn is_valid(self) -> bool {
        self.index() < MAX_LAYERS
    }

    /// Mask containing only this layer.
    pub fn mask(self) -> LayerMask {
        LayerMask::from_layer(self)
    }
}

/// Bit set of layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer`. Out-of-range layers produce an empty mask.
    pub fn from_layer(layer: Layer) -> Self {
        if layer.is_valid() {
            LayerMask(1 << layer.0)
        } else {
            LayerMask::NONE
        }
    }

    /// Mask containing every layer in `layers`.
    pub fn from_layers(layers: &[Layer]) -> Self {
        layers
            .iter()
            .fold(LayerMask::NONE, |mask, layer| mask.with(*layer))
    }

    /// Returns this mask with `layer` added.
    pub fn with(self, layer: Layer) -> Self {
        LayerMask(self.0 | Self::from_layer(layer).0)
    }

    pub fn contains(self, layer: Layer) -> bool {
        layer.is_valid() && self.0 & (1 << layer.0) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Symmetric table of layer pairs that ignore each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerMatrix {
    ignored: [u32; MAX_LAYERS],
}

impl Default for LayerMatrix {
    fn default() -> Self {
        Self {
            ignored: [0; MAX_LAYERS],
        }
    }
}

impl LayerMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the collision exemption between `a` and `b`.
    ///
    /// Invalid layers are ignored.
    pub fn set_ignored(&mut self, a: Layer, b: Layer, ignored: bool) {
        if !a.is_valid() || !b.is_valid() {
            return;
        }
        if ignored {
            self.ignored[a.index()] |= 1 << b.0;
            self.ignored[b.index()] |= 1 << a.0;
        } else {
            self.ignored[a.index()] &= !(1 << b.0);
            self.ignored[b.index()] &= !(1 << a.0);
        }
    }

    /// Whether colliders on `a` and `b` collide.
    pub fn collides(&self, a: Layer, b: Layer) -> bool {
        if !a.is_valid() || !b.is_valid() {
            return false;
        }
        self.ignored[a.index()] & (1 << b.0) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_layers() {
        let mask = LayerMask::from_layers(&[GROUND_LAYER, PLATFORMS_LAYER]);
        assert!(mask.contains(GROUND_LAYER));
        assert!(mask.contains(PLATFORMS_LAYER));
        assert!(!mask.contains(PLAYER_LAYER));
    }

    #[test]
    fn test_invalid_layer_mask_is_empty() {
        assert!(Layer(40).mask().is_empty());
        assert!(!LayerMask::ALL.contains(Layer(40)));
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let mut matrix = LayerMatrix::new();
        assert!(matrix.collides(PLAYER_LAYER, PLATFORMS_LAYER));

        matrix.set_ignored(PLAYER_LAYER, PLATFORMS_LAYER, true);
        assert!(!matrix.collides(PLAYER_LAYER, PLATFORMS_LAYER));
        assert!(!matrix.collides(PLATFORMS_LAYER, PLAYER_LAYER));
        assert!(matrix.collides(PLAYER_LAYER, GROUND_LAYER));

        matrix.set_ignored(PLATFORMS_LAYER, PLAYER_LAYER, false);
        assert!(matrix.collides(PLAYER_LAYER, PLATFORMS_LAYER));
    }
}
