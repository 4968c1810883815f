//! Controller Configuration
//!
//! Every tunable the side-scroll controller reads, grouped the way the
//! behaviours consume them. `Default` returns the reference tuning; a JSON
//! document only needs to name the values it overrides.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sidescroll_engine::player::ControllerConfig;
//!
//! let config = ControllerConfig::from_json_str(r#"{ "movement": { "max_speed": 9.0 } }"#)?;
//! assert_eq!(config.jump.jump_force, 12.0);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{GROUND_LAYER, Layer, LayerMask, PLATFORMS_LAYER, PLAYER_LAYER};

/// Errors raised while loading or validating a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value {value} for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("layer {layer} for `{field}` is out of range")]
    LayerOutOfRange { field: &'static str, layer: u8 },

    #[error("player and platforms layers must differ (both {0})")]
    LayerConflict(u8),
}

/// Horizontal locomotion tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Top horizontal speed (m/s)
    pub max_speed: f32,
    /// Grounded acceleration while input is held (m/s²)
    pub ground_acceleration: f32,
    /// Grounded deceleration with no input (m/s²)
    pub ground_deceleration: f32,
    /// Grounded rate when input opposes current velocity (m/s²)
    pub turnaround_deceleration: f32,
    /// Airborne acceleration while input is held (m/s²)
    pub air_acceleration: f32,
    /// Airborne deceleration with no input (m/s²)
    pub air_deceleration: f32,
    /// Top speed multiplier while crouching
    pub crouch_speed_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            ground_acceleration: 25.0,
            ground_deceleration: 30.0,
            turnaround_deceleration: 35.0,
            air_acceleration: 15.0,
            air_deceleration: 10.0,
            crouch_speed_multiplier: 0.6,
        }
    }
}

/// Jump impulse and hold-thrust tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Vertical velocity set on launch (m/s)
    pub jump_force: f32,
    /// Fraction of `jump_force` applied as thrust while the button is held
    pub jump_hold_multiplier: f32,
    /// Longest hold-thrust window after launch (seconds)
    pub max_jump_hold_time: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            jump_hold_multiplier: 0.5,
            max_jump_hold_time: 0.2,
        }
    }
}

/// Ground probe tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Layers that count as ground (also used for ceilings and ledges)
    pub ground_mask: LayerMask,
    /// Extra ray length below the collider's bottom edge (m)
    pub ground_check_buffer: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            ground_mask: LayerMask::from_layers(&[GROUND_LAYER, PLATFORMS_LAYER]),
            ground_check_buffer: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchConfig {
    pub enabled: bool,
    /// Extra length added to the overhead clearance probe (m)
    pub clearance_margin: f32,
}

impl Default for CrouchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clearance_margin: 0.1,
        }
    }
}

/// How the body's rotation is constrained.
///
/// Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RotationPolicy {
    /// No constraint; the physics engine rotates the body freely
    #[default]
    Free,
    /// Rotation frozen and angular velocity held at zero
    Locked,
    /// Angle clamped every fixed step and eased back toward upright
    Clamped {
        /// Largest allowed tilt either way (degrees)
        max_rotation_angle: f32,
        /// Return-to-upright speed (degrees/s)
        return_rotation_speed: f32,
    },
}

impl RotationPolicy {
    /// Clamped policy with the reference tuning (20°, 180°/s).
    pub fn clamped() -> Self {
        RotationPolicy::Clamped {
            max_rotation_angle: 20.0,
            return_rotation_speed: 180.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub policy: RotationPolicy,
}

/// Wall sensing, cling and wall-jump tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallClingConfig {
    pub enabled: bool,
    /// Layers that count as walls; falls back to the ground mask when unset or empty
    pub wall_mask: Option<LayerMask>,
    /// Length of the side probes past the collider edge (m)
    pub wall_check_distance: f32,
    /// Terminal slide speed while clinging (m/s)
    pub wall_slide_speed: f32,
    /// Vertical launch speed of a wall jump (m/s)
    pub wall_jump_force: f32,
    /// Horizontal launch speed of a wall jump (m/s)
    pub wall_jump_horizontal_force: f32,
    /// Cling budget per airborne stretch (seconds)
    pub wall_cling_time: f32,
    /// Window after a wall jump during which input is buffered (seconds)
    pub wall_jump_input_buffer: f32,
}

impl Default for WallClingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            wall_mask: None,
            wall_check_distance: 0.6,
            wall_slide_speed: 2.0,
            wall_jump_force: 8.0,
            wall_jump_horizontal_force: 6.0,
            wall_cling_time: 2.0,
            wall_jump_input_buffer: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSmoothingConfig {
    pub enabled: bool,
    /// Tallest ledge that gets smoothed over, also the probe length (m)
    pub edge_smooth_distance: f32,
}

impl Default for EdgeSmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_smooth_distance: 0.1,
        }
    }
}

/// Layers whose collision exemption crouching toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub player: Layer,
    pub platforms: Layer,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            player: PLAYER_LAYER,
            platforms: PLATFORMS_LAYER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Largest frame delta the controller integrates in one update (seconds)
    pub max_frame_delta: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { max_frame_delta: 0.1 }
    }
}

/// Complete controller configuration. Immutable once a controller is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub ground: GroundConfig,
    pub crouch: CrouchConfig,
    pub rotation: RotationConfig,
    pub wall_cling: WallClingConfig,
    pub edge_smoothing: EdgeSmoothingConfig,
    pub layers: LayerConfig,
    pub timing: TimingConfig,
}

impl ControllerConfig {
    /// Wall-jumping setup: cling enabled and a clamped tilt.
    pub fn wall_runner() -> Self {
        Self {
            rotation: RotationConfig {
                policy: RotationPolicy::clamped(),
            },
            wall_cling: WallClingConfig {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Parses and validates a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded controller config");
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective wall mask (the ground mask when none or an empty one was set).
    pub fn wall_mask(&self) -> LayerMask {
        self.wall_cling
            .wall_mask
            .filter(|mask| !mask.is_empty())
            .unwrap_or(self.ground.ground_mask)
    }

    /// Checks every numeric tunable and layer assignment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        positive("movement.max_speed", m.max_speed)?;
        non_negative("movement.ground_acceleration", m.ground_acceleration)?;
        non_negative("movement.ground_deceleration", m.ground_deceleration)?;
        non_negative("movement.turnaround_deceleration", m.turnaround_deceleration)?;
        non_negative("movement.air_acceleration", m.air_acceleration)?;
        non_negative("movement.air_deceleration", m.air_deceleration)?;
        non_negative("movement.crouch_speed_multiplier", m.crouch_speed_multiplier)?;

        let j = &self.jump;
        non_negative("jump.jump_force", j.jump_force)?;
        non_negative("jump.jump_hold_multiplier", j.jump_hold_multiplier)?;
        non_negative("jump.max_jump_hold_time", j.max_jump_hold_time)?;

        non_negative("ground.ground_check_buffer", self.ground.ground_check_buffer)?;
        non_negative("crouch.clearance_margin", self.crouch.clearance_margin)?;

        if let RotationPolicy::Clamped {
            max_rotation_angle,
            return_rotation_speed,
        } = self.rotation.policy
        {
            non_negative("rotation.max_rotation_angle", max_rotation_angle)?;
            non_negative("rotation.return_rotation_speed", return_rotation_speed)?;
        }

        let w = &self.wall_cling;
        non_negative("wall_cling.wall_check_distance", w.wall_check_distance)?;
        non_negative("wall_cling.wall_slide_speed", w.wall_slide_speed)?;
        non_negative("wall_cling.wall_jump_force", w.wall_jump_force)?;
        non_negative("wall_cling.wall_jump_horizontal_force", w.wall_jump_horizontal_force)?;
        non_negative("wall_cling.wall_cling_time", w.wall_cling_time)?;
        non_negative("wall_cling.wall_jump_input_buffer", w.wall_jump_input_buffer)?;

        non_negative(
            "edge_smoothing.edge_smooth_distance",
            self.edge_smoothing.edge_smooth_distance,
        )?;
        positive("timing.max_frame_delta", self.timing.max_frame_delta)?;

        valid_layer("layers.player", self.layers.player)?;
        valid_layer("layers.platforms", self.layers.platforms)?;
        if self.layers.player == self.layers.platforms {
            return Err(ConfigError::LayerConflict(self.layers.player.0));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

fn valid_layer(field: &'static str, layer: Layer) -> Result<(), ConfigError> {
    if layer.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::LayerOutOfRange { field, layer: layer.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = ControllerConfig::default();
        assert_eq!(config.movement.max_speed, 7.0);
        assert_eq!(config.movement.ground_acceleration, 25.0);
        assert_eq!(config.jump.jump_force, 12.0);
        assert_eq!(config.wall_cling.wall_cling_time, 2.0);
        assert_eq!(config.rotation.policy, RotationPolicy::Free);
        assert!(config.crouch.enabled);
        assert!(!config.wall_cling.enabled);
        assert!(config.edge_smoothing.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ControllerConfig::from_json_str(
            r#"{
                "movement": { "max_speed": 9.0 },
                "rotation": { "policy": { "mode": "clamped", "max_rotation_angle": 15.0, "return_rotation_speed": 90.0 } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.movement.max_speed, 9.0);
        assert_eq!(config.movement.air_acceleration, 15.0);
        assert_eq!(
            config.rotation.policy,
            RotationPolicy::Clamped {
                max_rotation_angle: 15.0,
                return_rotation_speed: 90.0
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControllerConfig::wall_runner();
        let json = config.to_json_string().unwrap();
        assert_eq!(ControllerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_wall_mask_falls_back_to_ground_mask() {
        let mut config = ControllerConfig::default();
        assert_eq!(config.wall_mask(), config.ground.ground_mask);
        assert!(config.wall_mask().contains(GROUND_LAYER));

        config.wall_cling.wall_mask = Some(Layer(3).mask());
        assert_eq!(config.wall_mask(), Layer(3).mask());
    }

    #[test]
    fn test_empty_wall_mask_falls_back_to_ground_mask() {
        let mut config = ControllerConfig::wall_runner();
        config.wall_cling.wall_mask = Some(LayerMask::NONE);
        assert_eq!(config.wall_mask(), config.ground.ground_mask);
        assert!(config.validate().is_ok());

        let config = ControllerConfig::from_json_str(r#"{"wall_cling": {"enabled": true, "wall_mask": 0}}"#).unwrap();
        assert_eq!(config.wall_mask(), config.ground.ground_mask);
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let mut config = ControllerConfig::default();
        config.movement.air_deceleration = -1.0;
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "movement.air_deceleration")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_frame_delta_is_rejected() {
        let result = ControllerConfig::from_json_str(r#"{ "timing": { "max_frame_delta": 0.0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_layer_errors() {
        let mut config = ControllerConfig::default();
        config.layers.platforms = Layer(40);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LayerOutOfRange { layer: 40, .. })
        ));

        config.layers.platforms = config.layers.player;
        assert!(matches!(config.validate(), Err(ConfigError::LayerConflict(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ControllerConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ControllerConfig::from_json_file("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
