//! Per-frame input snapshot consumed by the controller.

use super::button::ButtonState;

/// Vertical axis value below which crouch is requested.
pub const CROUCH_AXIS_THRESHOLD: f32 = -0.1;

/// Normalized input for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Horizontal axis in [-1, 1], right positive
    pub horizontal: f32,
    /// Vertical axis in [-1, 1], up positive
    pub vertical: f32,
    /// Jump button edges
    pub jump: ButtonState,
}

impl InputFrame {
    /// Builds a frame, clamping both axes into [-1, 1].
    ///
    /// Non-finite axis values are treated as zero.
    pub fn new(horizontal: f32, vertical: f32, jump: ButtonState) -> Self {
        Self {
            horizontal: clamp_axis(horizontal),
            vertical: clamp_axis(vertical),
            jump,
        }
    }

    /// Horizontal-only input with the jump button idle.
    pub fn horizontal(value: f32) -> Self {
        Self::new(value, 0.0, ButtonState::IDLE)
    }

    /// Whether the vertical axis asks for a crouch / drop-through.
    pub fn is_pressing_down(&self) -> bool {
        self.vertical < CROUCH_AXIS_THRESHOLD
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_clamped() {
        let frame = InputFrame::new(3.0, -2.0, ButtonState::IDLE);
        assert_eq!(frame.horizontal, 1.0);
        assert_eq!(frame.vertical, -1.0);
    }

    #[test]
    fn test_nan_axis_is_zero() {
        let frame = InputFrame::new(f32::NAN, 0.5, ButtonState::IDLE);
        assert_eq!(frame.horizontal, 0.0);
        assert_eq!(frame.vertical, 0.5);
    }

    #[test]
    fn test_pressing_down_threshold() {
        assert!(InputFrame::new(0.0, -0.5, ButtonState::IDLE).is_pressing_down());
        assert!(!InputFrame::new(0.0, -0.1, ButtonState::IDLE).is_pressing_down());
        assert!(!InputFrame::horizontal(1.0).is_pressing_down());
    }
}
