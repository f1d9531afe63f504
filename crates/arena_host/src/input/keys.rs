// crates/arena_host/src/input/keys.rs
use std::fmt;
use std::str::FromStr;

use crate::error::HostError;

/// Physical inputs a binding can name. Mouse buttons are keys too, so the
/// map and the poller do not need a second path for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyJ,
    KeyK,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ShiftLeft,
    Space,
    Enter,
    Escape,
    MouseLeft,
    MouseRight,
}

impl KeyCode {
    pub const ALL: [KeyCode; 16] = [
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ShiftLeft,
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::MouseLeft,
        KeyCode::MouseRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyCode::KeyW => "W",
            KeyCode::KeyA => "A",
            KeyCode::KeyS => "S",
            KeyCode::KeyD => "D",
            KeyCode::KeyJ => "J",
            KeyCode::KeyK => "K",
            KeyCode::ArrowUp => "Up",
            KeyCode::ArrowDown => "Down",
            KeyCode::ArrowLeft => "Left",
            KeyCode::ArrowRight => "Right",
            KeyCode::ShiftLeft => "LeftShift",
            KeyCode::Space => "Space",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::MouseLeft => "MouseLeft",
            KeyCode::MouseRight => "MouseRight",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyCode {
    type Err = HostError;

    /// Case-insensitive match on the names used in bindings and scripts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HostError::UnknownKey(s.to_string()))
    }
}
