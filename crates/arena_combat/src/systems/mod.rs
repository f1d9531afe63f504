// crates/arena_combat/src/systems/mod.rs
pub mod boss;
pub mod player;

use arena_shared::{ArenaBounds, CollisionOracle, Millis, Rect};
use glam::Vec2;
use serde::Serialize;

use crate::config::CombatConfig;
use crate::cues::CueOutbox;
use crate::events::MatchEvent;

// --- SHARED SETTINGS ---
/// Diagonal movement scale, 1/sqrt(2) to four places.
pub const DIAGONAL_FACTOR: f32 = 0.7071;

/// Everything a state machine may touch besides the two combatants.
/// `now` is read once per tick and reused for every comparison.
pub struct TickContext<'a> {
    pub now: Millis,
    pub config: &'a CombatConfig,
    pub walls: &'a dyn CollisionOracle,
    pub cues: &'a mut CueOutbox,
    pub events: &'a mut Vec<MatchEvent>,
}

/// Sub-phase of the Death state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeathPhase {
    /// Still showing the hit pose.
    Staggered,
    /// Death pose playing.
    Falling,
    /// Done; the match can end.
    Finished,
}

impl DeathPhase {
    pub fn at(elapsed: Millis, hit_duration: Millis, death_duration: Millis) -> Self {
        if elapsed >= hit_duration + death_duration {
            DeathPhase::Finished
        } else if elapsed >= hit_duration {
            DeathPhase::Falling
        } else {
            DeathPhase::Staggered
        }
    }
}

/// Moves one axis at a time and reverts an axis whose step lands in a wall,
/// so a blocked diagonal still slides along the other axis. The result is
/// clamped to the arena.
pub fn move_with_collision(
    position: Vec2,
    delta: Vec2,
    body_size: Vec2,
    walls: &dyn CollisionOracle,
    bounds: &ArenaBounds,
) -> Vec2 {
    let mut pos = position;

    pos.x += delta.x;
    if walls.collides(&Rect::from_center(pos, body_size)) {
        pos.x = position.x;
    }

    pos.y += delta.y;
    if walls.collides(&Rect::from_center(pos, body_size)) {
        pos.y = position.y;
    }

    bounds.clamp(pos)
}
