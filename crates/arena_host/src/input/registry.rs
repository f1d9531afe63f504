// crates/arena_host/src/input/registry.rs
use std::collections::HashMap;

use arena_shared::ActionId;

use crate::error::{HostError, Result};

/// Interns action names into dense numeric ids.
#[derive(Default, Clone, Debug)]
pub struct ActionRegistry {
    name_to_id: HashMap<String, ActionId>,
    next_id: ActionId,
}

impl ActionRegistry {
    pub fn register(&mut self, name: &str) -> ActionId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.next_id;
        self.name_to_id.insert(name.to_string(), id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn get_id(&self, name: &str) -> Option<ActionId> {
        self.name_to_id.get(name).copied()
    }

    /// Like `get_id`, for names coming from config files.
    pub fn resolve(&self, name: &str) -> Result<ActionId> {
        self.get_id(name).ok_or_else(|| HostError::UnknownAction(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent() {
        let mut registry = ActionRegistry::default();
        let a = registry.register("Attack");
        let b = registry.register("Block");
        assert_eq!((a, b), (0, 1));
        assert_eq!(registry.register("Attack"), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn resolve_reports_unknown_names() {
        let registry = ActionRegistry::default();
        assert!(matches!(registry.resolve("Dodge"), Err(HostError::UnknownAction(_))));
    }
}
