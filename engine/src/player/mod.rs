//! Player Module
//!
//! Side-scroller character control, split into one unit per behaviour.
//!
//! # Components
//!
//! - [`SideScrollController`] - Owns the body and collider, runs the behaviours in order
//! - [`GroundWallSensor`] - Ground and wall ray probes
//! - [`LocomotionController`] - Horizontal accel / decel and facing
//! - [`JumpController`] - Launch and hold thrust, defers to wall jump while clinging
//! - [`CrouchController`] - Collider shape swap and platform drop-through
//! - [`WallClingController`] - Cling, slide and wall jump
//! - [`RotationController`] - Free, locked or clamped body rotation
//! - [`EdgeSmoothingController`] - Step-up over short ledges
//! - [`ControllerConfig`] - All tunables, loadable from JSON

pub mod config;
pub mod controller;
pub mod crouch;
pub mod edge_smoothing;
pub mod jump;
pub mod locomotion;
pub mod rotation;
pub mod sensor;
pub mod wall_cling;

pub use config::{
    ConfigError, ControllerConfig, CrouchConfig, EdgeSmoothingConfig, GroundConfig, JumpConfig,
    LayerConfig, MovementConfig, RotationConfig, RotationPolicy, TimingConfig, WallClingConfig,
};
pub use controller::{ControllerError, FrameReport, SideScrollController, SideScrollControllerBuilder};
pub use crouch::{CrouchController, CrouchTransition, Stance};
pub use edge_smoothing::EdgeSmoothingController;
pub use jump::{JumpAction, JumpController};
pub use locomotion::LocomotionController;
pub use rotation::{RotationContext, RotationController};
pub use sensor::{GroundWallSensor, SensorResult};
pub use wall_cling::{ClingEvent, DetachReason, WallClingController};
