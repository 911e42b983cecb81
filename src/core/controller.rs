/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyP,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash_duplicates() {
        let mut set = HashSet::new();
        set.insert(Button::ArrowUp);
        set.insert(Button::ArrowUp);
        set.insert(Button::KeyW);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::ArrowUp), "ArrowUp");
        assert_eq!(format!("{:?}", Button::KeyP), "KeyP");
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::ArrowUp, Button::ArrowLeft],
        };

        assert!(controller.is_down(Button::ArrowUp));
        assert!(controller.is_down(Button::ArrowLeft));
        assert!(!controller.is_down(Button::ArrowDown));
        assert_eq!(controller.get_down_keys().len(), 2);
    }
}
