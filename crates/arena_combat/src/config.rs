// crates/arena_combat/src/config.rs
//! Tuning constants for a match. Every field has a default, so a tuning file
//! only needs to list what it changes.

use arena_shared::{ArenaBounds, Millis};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Hard cap on the stamina bar; `player.max_stamina` may lower it, not raise it.
pub const MAX_STAMINA: u8 = 4;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub player: PlayerTuning,
    pub boss: BossTuning,
    pub arena: ArenaTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: u32,
    pub max_stamina: u8,
    /// Pixels per tick.
    pub walk_speed: f32,
    pub run_speed: f32,
    pub hit_duration: Millis,
    pub death_duration: Millis,
    pub attack_duration: Millis,
    /// One stamina unit comes back every `stamina_duration` while below max.
    pub stamina_duration: Millis,
    pub body_size: Vec2,
    pub spawn: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 7,
            max_stamina: MAX_STAMINA,
            walk_speed: 4.0,
            run_speed: 7.0,
            hit_duration: 400,
            death_duration: 1500,
            attack_duration: 600,
            stamina_duration: 1000,
            body_size: Vec2::new(60.0, 100.0),
            spawn: Vec2::new(640.0, 2000.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_health: u32,
    /// Pixels per tick.
    pub speed: f32,
    pub hit_duration: Millis,
    pub death_duration: Millis,
    pub attack_range: f32,
    pub chase_range: f32,
    /// Max |dy| between boss and player for an attack to start.
    pub vertical_tolerance: f32,
    /// The boss runs to a point this far from the player, on its own side.
    pub chase_offset: f32,
    /// Attack frames (inclusive) during which the strike can land.
    pub damage_window: [usize; 2],
    pub attack_size: Vec2,
    /// Left edge of the strike box relative to the boss centre.
    pub attack_offset_left: f32,
    pub attack_offset_right: f32,
    pub body_size: Vec2,
    pub spawn: Vec2,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: 20,
            speed: 3.0,
            hit_duration: 300,
            death_duration: 2000,
            attack_range: 200.0,
            chase_range: 400.0,
            vertical_tolerance: 50.0,
            chase_offset: 100.0,
            damage_window: [10, 12],
            attack_size: Vec2::new(180.0, 260.0),
            attack_offset_left: -180.0,
            attack_offset_right: 30.0,
            body_size: Vec2::new(120.0, 200.0),
            spawn: Vec2::new(640.0, 1300.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
    /// Width of the viewport. The camera centres the player, so the pointer is
    /// compared against half of this to decide which way the player faces.
    pub screen_width: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self { width: 1280.0, height: 2400.0, screen_width: 1280.0 }
    }
}

impl ArenaTuning {
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds::new(self.width, self.height)
    }
}

impl CombatConfig {
    pub fn validate(&self) -> Result<()> {
        let p = &self.player;
        let b = &self.boss;
        if p.max_health == 0 || b.max_health == 0 {
            return Err(ArenaError::InvalidConfig("max_health must be positive".into()));
        }
        if p.max_stamina > MAX_STAMINA {
            return Err(ArenaError::InvalidConfig(format!(
                "player.max_stamina ({}) exceeds {MAX_STAMINA}",
                p.max_stamina
            )));
        }
        if p.attack_duration == 0 {
            return Err(ArenaError::InvalidConfig("player.attack_duration must be positive".into()));
        }
        if p.stamina_duration == 0 {
            return Err(ArenaError::InvalidConfig(
                "player.stamina_duration must be positive".into(),
            ));
        }
        let speeds = [
            ("player.walk_speed", p.walk_speed),
            ("player.run_speed", p.run_speed),
            ("boss.speed", b.speed),
        ];
        for (name, speed) in speeds {
            if speed.is_nan() || speed <= 0.0 {
                return Err(ArenaError::InvalidConfig(format!("{name} must be positive")));
            }
        }
        if b.attack_range > b.chase_range {
            return Err(ArenaError::InvalidConfig(format!(
                "boss.attack_range ({}) exceeds boss.chase_range ({})",
                b.attack_range, b.chase_range
            )));
        }
        if b.damage_window[0] > b.damage_window[1] {
            return Err(ArenaError::InvalidConfig("boss.damage_window is reversed".into()));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ArenaError::InvalidConfig("arena must have a positive size".into()));
        }
        Ok(())
    }
}
