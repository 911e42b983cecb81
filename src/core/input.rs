use super::controller::{Button, Controller};

/// Button state sampled once at the start of a tick.
///
/// Opposing flags cancel: holding forward and backward together yields a zero
/// axis, whichever was pressed last.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Switch movement mode this tick
    pub toggle_mode: bool,
}

impl InputState {
    pub fn from_controller(controller: &dyn Controller, toggle_mode: bool) -> Self {
        let any = |buttons: [Button; 2]| buttons.iter().any(|&b| controller.is_down(b));

        Self {
            forward: any([Button::ArrowUp, Button::KeyW]),
            backward: any([Button::ArrowDown, Button::KeyS]),
            left: any([Button::ArrowLeft, Button::KeyA]),
            right: any([Button::ArrowRight, Button::KeyD]),
            toggle_mode,
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> f64 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// +1 forward, -1 backward, 0 for neither or both
    pub const fn forward_axis(&self) -> f64 {
        Self::to_direction(self.forward, self.backward)
    }

    /// +1 right, -1 left, 0 for neither or both
    pub const fn strafe_axis(&self) -> f64 {
        Self::to_direction(self.right, self.left)
    }
}
