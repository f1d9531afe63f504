// crates/arena_host/src/input/poller.rs

use arena_shared::InputState;
use glam::Vec2;

use crate::input::{InputMap, KeyCode};

/// Low-level input collector that tracks active physical keys and the pointer.
/// This keeps raw device state out of App.
#[derive(Default, Debug, Clone)]
pub struct InputPoller {
    active_keys: Vec<KeyCode>,
    pointer: Vec2,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if !self.active_keys.contains(&key) {
                self.active_keys.push(key);
            }
        } else {
            self.active_keys.retain(|&k| k != key);
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Returns true if a given physical key is currently pressed.
    pub fn is_key_active(&self, key: KeyCode) -> bool {
        self.active_keys.contains(&key)
    }

    pub fn release_all(&mut self) {
        self.active_keys.clear();
    }

    /// Folds the raw key state through the InputMap into the snapshot the
    /// combat core reads. Unbound keys are ignored.
    pub fn snapshot(&self, input_map: &InputMap) -> InputState {
        let mut state = InputState { digital_mask: 0, pointer: self.pointer };
        for &key in &self.active_keys {
            if let Some(action_id) = input_map.map_signal_to_intent(key) {
                state.set_active(action_id, true);
            }
        }
        state
    }
}
