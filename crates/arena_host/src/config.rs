// crates/arena_host/src/config.rs
//! The tuning file: combat tuning at the top level, plus `[host]` and
//! `[bindings]` tables for the runner.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use arena_combat::CombatConfig;
use arena_shared::{Millis, Rect, StaticWalls};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    #[serde(flatten)]
    pub combat: CombatConfig,
    pub host: HostConfig,
    /// Action name -> key names. A listed action keeps only these keys.
    pub bindings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Simulation ticks per second.
    pub sim_hz: u32,
    pub max_steps_per_frame: u32,
    /// Length of one host frame when replaying a script.
    pub frame_ms: Millis,
    /// Stop the run as soon as the match has a winner.
    pub stop_on_outcome: bool,
    /// Forward cues to the audio worker thread; otherwise they are dropped.
    pub audio: bool,
    pub walls: Vec<WallConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    pub center: Vec2,
    pub size: Vec2,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            sim_hz: 60,
            max_steps_per_frame: 5,
            frame_ms: 16,
            stop_on_outcome: true,
            audio: true,
            // The chapel's centre pillar.
            walls: vec![WallConfig {
                center: Vec2::new(640.0, 1568.0),
                size: Vec2::new(64.0, 128.0),
            }],
        }
    }
}

impl HostConfig {
    pub fn static_walls(&self) -> StaticWalls {
        StaticWalls::new(self.walls.iter().map(|w| Rect::from_center(w.center, w.size)).collect())
    }
}

impl TuningFile {
    pub fn from_toml_str(text: &str, what: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| HostError::Toml { what: what.to_string(), source })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| HostError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }
}
