// crates/arena_shared/src/input_types.rs
//! Compact input types handed from the host to the combat core once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable Integer ID for Actions
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// Actions the combat core reads. The host registers these first so the
/// numeric IDs line up with the registry.
pub mod canonical_actions {
    use super::ActionId;

    pub const MOVE_UP: ActionId = 0;
    pub const MOVE_DOWN: ActionId = 1;
    pub const MOVE_LEFT: ActionId = 2;
    pub const MOVE_RIGHT: ActionId = 3;
    pub const RUN: ActionId = 4;
    pub const ATTACK: ActionId = 5;
    pub const BLOCK: ActionId = 6;
    pub const QUIT: ActionId = 7;

    /// Registration order; index == id.
    pub const NAMES: [&str; 8] = [
        "MoveUp",
        "MoveDown",
        "MoveLeft",
        "MoveRight",
        "Run",
        "Attack",
        "Block",
        "Quit",
    ];
}

/// One polled snapshot of the input devices.
///
/// `pointer` is in screen coordinates; the camera keeps the player centred,
/// so the combat core compares it against the screen centre to pick a facing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Bitmask for up to 64 digital actions.
    pub digital_mask: u64,
    pub pointer: Vec2,
}

impl InputState {
    /// Safe check; returns false for out-of-range ids (including ACTION_NOT_FOUND).
    pub fn is_active(&self, action_id: ActionId) -> bool {
        if (action_id as usize) >= 64 {
            return false;
        }
        (self.digital_mask & (1u64 << action_id)) != 0
    }

    pub fn set_active(&mut self, action_id: ActionId, active: bool) {
        if (action_id as usize) >= 64 {
            return;
        }
        if active {
            self.digital_mask |= 1u64 << action_id;
        } else {
            self.digital_mask &= !(1u64 << action_id);
        }
    }

    /// Builder used by scripted input and tests.
    pub fn with(mut self, action_id: ActionId) -> Self {
        self.set_active(action_id, true);
        self
    }

    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    /// Raw movement axes from the four movement keys (not normalized).
    /// +x is right, +y is down (screen space).
    pub fn movement_axes(&self) -> Vec2 {
        use canonical_actions::*;
        let mut axes = Vec2::ZERO;
        if self.is_active(MOVE_UP) { axes.y -= 1.0; }
        if self.is_active(MOVE_DOWN) { axes.y += 1.0; }
        if self.is_active(MOVE_LEFT) { axes.x -= 1.0; }
        if self.is_active(MOVE_RIGHT) { axes.x += 1.0; }
        axes
    }
}
