// crates/arena_host/src/script.rs
//! Scripted input: a TOML list of timed key presses replayed into the poller.
//!
//! ```toml
//! duration_ms = 4000
//!
//! [[events]]
//! at_ms = 0
//! key = "D"
//! pressed = true
//! pointer = [1000.0, 360.0]
//! ```

use std::fs;
use std::path::Path;

use arena_shared::Millis;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};
use crate::input::{InputPoller, KeyCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    /// The run stops once the host clock passes this.
    pub duration_ms: Millis,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub at_ms: Millis,
    pub key: String,
    #[serde(default = "default_pressed")]
    pub pressed: bool,
    #[serde(default)]
    pub pointer: Option<Vec2>,
}

fn default_pressed() -> bool {
    true
}

impl InputScript {
    pub fn from_toml_str(text: &str, what: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| HostError::Toml { what: what.to_string(), source })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| HostError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Resolves key names up front so a typo fails before the match starts.
    pub fn compile(&self) -> Result<ScriptPlayer> {
        let mut events = self
            .events
            .iter()
            .map(|e| -> Result<CompiledEvent> {
                Ok(CompiledEvent {
                    at_ms: e.at_ms,
                    key: e.key.parse()?,
                    pressed: e.pressed,
                    pointer: e.pointer,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        // Stable, so same-time events keep file order.
        events.sort_by_key(|e| e.at_ms);
        Ok(ScriptPlayer { events, cursor: 0, duration_ms: self.duration_ms })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CompiledEvent {
    at_ms: Millis,
    key: KeyCode,
    pressed: bool,
    pointer: Option<Vec2>,
}

/// Replays a compiled script against a monotonically increasing clock.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    events: Vec<CompiledEvent>,
    cursor: usize,
    duration_ms: Millis,
}

impl ScriptPlayer {
    /// Applies every event due at or before `now`; returns how many fired.
    pub fn apply_until(&mut self, now: Millis, poller: &mut InputPoller) -> usize {
        let start = self.cursor;
        while let Some(event) = self.events.get(self.cursor) {
            if event.at_ms > now {
                break;
            }
            poller.set_key(event.key, event.pressed);
            if let Some(pointer) = event.pointer {
                poller.set_pointer(pointer);
            }
            self.cursor += 1;
        }
        self.cursor - start
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.duration_ms
    }

    pub fn duration_ms(&self) -> Millis {
        self.duration_ms
    }

    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}
