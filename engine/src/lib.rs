//! Side-Scroller Engine Library
//!
//! A 2D platformer character controller. The controller reads ray-cast
//! results from a physics world and writes velocity, rotation, force and
//! collider-shape commands onto the body it owns.
//!
//! # Modules
//!
//! - [`physics`] - 2D body, collider, layers, ray casts and the `PhysicsWorld` trait
//! - [`input`] - Per-frame axes and jump button edges
//! - [`player`] - The side-scroll controller and its behaviours
//! - [`world`] - Level blocks and one-way platforms
//! - [`health`] - Health value with change notifications
//!
//! # Example
//!
//! ```ignore
//! use sidescroll_engine::input::{ButtonTracker, InputFrame};
//! use sidescroll_engine::physics::{BoxCollider2D, RigidBody2D, Vec2};
//! use sidescroll_engine::player::{ControllerConfig, SideScrollController};
//! use sidescroll_engine::world::{Block, BlockKind, Level};
//!
//! let mut level = Level::new();
//! level.spawn(Block::centered(BlockKind::Normal, Vec2::new(0.0, -0.5), Vec2::new(40.0, 1.0)));
//!
//! let mut controller = SideScrollController::builder()
//!     .config(ControllerConfig::default())
//!     .body(RigidBody2D::new(Vec2::new(0.0, 1.0)))
//!     .collider(BoxCollider2D::new(Vec2::new(1.0, 2.0)))
//!     .build()?;
//!
//! let mut jump = ButtonTracker::new();
//! loop {
//!     let input = InputFrame::new(stick_x, stick_y, jump.update(jump_down));
//!     level.update_platforms(controller.ground_check_point(), input.vertical);
//!     controller.update(dt, &input, level.world_mut());
//!     controller.fixed_update(fixed_dt);
//!     controller.body_mut().integrate(fixed_dt, Vec2::new(0.0, -9.81));
//! }
//! ```

pub mod health;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Re-export commonly used types at crate level
pub use health::{Health, HealthEvent};
pub use input::{ButtonState, ButtonTracker, InputFrame};
pub use physics::{BoxCollider2D, PhysicsWorld, RigidBody2D, StaticWorld};
pub use player::{ControllerConfig, ControllerError, SideScrollController};
pub use world::{Block, BlockKind, Level};
