// crates/arena_host/src/input/config.rs

use std::collections::BTreeMap;

use arena_shared::{canonical_actions, ActionId};
use tracing::debug;

use crate::error::Result;
use crate::input::{ActionRegistry, InputMap, KeyCode};

/// Centralized defaults for input configuration.
/// This keeps App::new small and makes it easy to tweak or mod.
pub struct InputDefaults;

impl InputDefaults {
    /// Registers the canonical actions and their default key bindings.
    ///
    /// IMPORTANT: actions are registered in `canonical_actions::NAMES` order so
    /// their numeric IDs match the constants the combat core reads.
    pub fn setup(registry: &mut ActionRegistry, input_map: &mut InputMap) {
        for (index, name) in canonical_actions::NAMES.iter().enumerate() {
            let id = registry.register(name);
            // Debug-only to avoid panics in Release.
            debug_assert_eq!(id as usize, index);
        }

        for (key, action) in Self::default_bindings() {
            input_map.bind(key, action);
        }
    }

    pub fn default_bindings() -> [(KeyCode, ActionId); 8] {
        use canonical_actions::*;
        [
            (KeyCode::KeyW, MOVE_UP),
            (KeyCode::KeyS, MOVE_DOWN),
            (KeyCode::KeyA, MOVE_LEFT),
            (KeyCode::KeyD, MOVE_RIGHT),
            (KeyCode::ShiftLeft, RUN),
            (KeyCode::MouseLeft, ATTACK),
            (KeyCode::MouseRight, BLOCK),
            (KeyCode::Escape, QUIT),
        ]
    }

    /// Applies `[bindings]` from the tuning file: each listed action loses its
    /// default keys and gets exactly the keys given.
    pub fn apply_overrides(
        overrides: &BTreeMap<String, Vec<String>>,
        registry: &ActionRegistry,
        input_map: &mut InputMap,
    ) -> Result<()> {
        for (action_name, key_names) in overrides {
            let action = registry.resolve(action_name)?;
            let keys = key_names
                .iter()
                .map(|name| name.parse::<KeyCode>())
                .collect::<Result<Vec<_>>>()?;

            input_map.unbind_action(action);
            for key in keys {
                input_map.bind(key, action);
            }
            debug!(action = %action_name, keys = ?key_names, "rebound action");
        }
        Ok(())
    }
}
