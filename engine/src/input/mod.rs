//! Input Module
//!
//! Platform-agnostic input for the side-scroller controller. The host maps
//! its devices onto two analog axes and a jump button; this module only
//! normalizes those values and derives button edges.
//!
//! # Example
//!
//! ```rust,ignore
//! use sidescroll_engine::input::{ButtonTracker, InputFrame};
//!
//! let mut jump = ButtonTracker::new();
//!
//! // Once per rendered frame, from whatever the device layer reports
//! let frame = InputFrame::new(stick_x, stick_y, jump.update(space_down));
//! controller.update(dt, &frame, &mut world);
//! ```

pub mod button;
pub mod frame;

// Re-export commonly used types at module level
pub use button::{ButtonState, ButtonTracker};
pub use frame::InputFrame;
