//! Input state snapshot
//!
//! Polling a keyboard or gamepad is left to the host; it fills an
//! [`InputState`] once per frame and hands it to game code.

use std::collections::HashSet;

/// Key codes the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Keys held down during the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
}

impl InputState {
    /// Create a state with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given keys held
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Whether `key` is held this frame
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether the player asked to quit
    pub fn exit_requested(&self) -> bool {
        self.is_key_down(KeyCode::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::from_keys([KeyCode::Up]);
        input.handle_key_input(KeyCode::Left, true);

        assert!(input.is_key_down(KeyCode::Up));
        assert!(input.is_key_down(KeyCode::Left));
        assert!(!input.exit_requested());

        input.handle_key_input(KeyCode::Up, false);
        input.handle_key_input(KeyCode::Escape, true);
        assert!(!input.is_key_down(KeyCode::Up));
        assert!(input.exit_requested());
    }
}
