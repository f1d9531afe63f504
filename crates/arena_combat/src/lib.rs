// crates/arena_combat/src/lib.rs
//! Player-vs-boss combat core: two state machines, their animation players and
//! the cue bookkeeping, advanced one tick at a time by [`Arena::step`].

pub mod animation;
pub mod config;
pub mod cues;
pub mod error;
pub mod events;
pub mod sequences;
mod state;
pub mod systems;

pub use animation::{AnimationLibrary, AnimationPlayer, FrameId, Sequence, SequenceId};
pub use config::{ArenaTuning, BossTuning, CombatConfig, PlayerTuning, MAX_STAMINA};
pub use error::{ArenaError, Result};
pub use events::{Actor, MatchEvent, MatchOutcome};
pub use state::{Arena, CombatantView, StepReport};
pub use systems::boss::{Boss, BossState};
pub use systems::player::{Player, PlayerState};
pub use systems::DeathPhase;
