//! Button edge detection.
//!
//! Devices report a button as a level (down / up). The controller needs
//! edges: the frame the button went down, every frame it stays down, and the
//! frame it came back up.

/// Press / hold / release state of a single button for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Is down this frame (true on the press frame too)
    pub held: bool,
    /// Came up this frame
    pub released: bool,
}

impl ButtonState {
    /// A button that is up and did not change this frame.
    pub const IDLE: ButtonState = ButtonState {
        pressed: false,
        held: false,
        released: false,
    };

    /// The frame the button goes down.
    pub fn press() -> Self {
        Self {
            pressed: true,
            held: true,
            released: false,
        }
    }

    /// A frame where the button stays down.
    pub fn hold() -> Self {
        Self {
            pressed: false,
            held: true,
            released: false,
        }
    }

    /// The frame the button comes up.
    pub fn release() -> Self {
        Self {
            pressed: false,
            held: false,
            released: true,
        }
    }
}

/// Derives [`ButtonState`] edges from a stream of raw button levels.
#[derive(Debug, Clone, Default)]
pub struct ButtonTracker {
    /// Level reported on the previous frame
    was_down: bool,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds this frame's raw level and returns the edge state.
    ///
    /// # Arguments
    /// * `down` - Whether the physical button is currently down
    pub fn update(&mut self, down: bool) -> ButtonState {
        let state = ButtonState {
            pressed: down && !self.was_down,
            held: down,
            released: !down && self.was_down,
        };
        self.was_down = down;
        state
    }

    /// Forget the previous level (e.g. after focus loss).
    pub fn reset(&mut self) {
        self.was_down = false;
    }
}
