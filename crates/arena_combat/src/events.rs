// crates/arena_combat/src/events.rs
//! Things that happened during a tick, for logging and UI feedback.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Actor {
    Player,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// The boss fell.
    Victory,
    /// The player fell.
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    Damaged { target: Actor, health: u32 },
    /// Boss strike absorbed by the player's guard.
    Blocked,
    /// Player swing ended without touching the boss after its miss cue sounded.
    Missed,
    Died { actor: Actor },
    MatchEnded { outcome: MatchOutcome },
}
