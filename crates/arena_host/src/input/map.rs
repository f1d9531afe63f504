// crates/arena_host/src/input/map.rs
use std::collections::HashMap;

use arena_shared::ActionId;

use crate::input::KeyCode;

/// Physical key -> action binding. One key drives at most one action; several
/// keys may drive the same action.
#[derive(Default, Clone, Debug)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, ActionId>,
}

impl InputMap {
    pub fn bind(&mut self, key: KeyCode, action: ActionId) {
        self.key_bindings.insert(key, action);
    }

    /// Drops every key currently bound to `action`.
    pub fn unbind_action(&mut self, action: ActionId) {
        self.key_bindings.retain(|_, bound| *bound != action);
    }

    pub fn map_signal_to_intent(&self, key: KeyCode) -> Option<ActionId> {
        self.key_bindings.get(&key).copied()
    }

    pub fn keys_for(&self, action: ActionId) -> Vec<KeyCode> {
        let mut keys: Vec<KeyCode> = self
            .key_bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }
}
