use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use super::input::InputState;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Mode toggle requested since the last tick
    toggle_latched: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    match event.state {
                        ElementState::Pressed => self.press(button, event.repeat),
                        ElementState::Released => self.release(button),
                    }
                }
            }
        }
    }

    /// Record a key-down edge. Auto-repeats keep the key held but never re-latch the toggle.
    pub fn press(&mut self, button: Button, repeat: bool) {
        if button == Button::KeyP && !repeat {
            self.toggle_latched = true;
        }
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    /// Consume the pending mode toggle, if any
    pub fn take_toggle(&mut self) -> bool {
        std::mem::take(&mut self.toggle_latched)
    }

    /// Snapshot for the next tick. The toggle stays latched until a tick can consume it.
    pub fn input_state(&mut self, consume_toggle: bool) -> InputState {
        let toggle = consume_toggle && self.take_toggle();
        InputState::from_controller(self, toggle)
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit KeyEvent has private fields, so these go through press/release directly

    #[test]
    fn test_new_controller_empty() {
        let mut controller = WinitController::new();
        assert!(!controller.is_down(Button::ArrowUp));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert!(!controller.take_toggle());
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.press(Button::ArrowUp, false);
        controller.press(Button::ArrowUp, true);
        assert!(controller.is_down(Button::ArrowUp));
        assert_eq!(controller.get_down_keys(), &[Button::ArrowUp]);

        controller.release(Button::ArrowUp);
        assert!(!controller.is_down(Button::ArrowUp));
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_toggle_latches_once() {
        let mut controller = WinitController::new();
        controller.press(Button::KeyP, false);
        controller.press(Button::KeyP, true);
        controller.release(Button::KeyP);

        assert!(controller.take_toggle());
        assert!(!controller.take_toggle());
    }

    #[test]
    fn test_toggle_waits_for_a_consuming_tick() {
        let mut controller = WinitController::new();
        controller.press(Button::KeyP, false);
        controller.press(Button::ArrowUp, false);

        let loading = controller.input_state(false);
        assert!(!loading.toggle_mode);
        assert!(loading.forward);

        assert!(controller.input_state(true).toggle_mode);
        assert!(!controller.input_state(true).toggle_mode);
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(
            WinitController::keycode_to_button(KeyCode::ArrowDown),
            Some(Button::ArrowDown)
        );
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyP), Some(Button::KeyP));
        assert_eq!(WinitController::keycode_to_button(KeyCode::Space), None);
    }
}
