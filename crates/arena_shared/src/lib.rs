// crates/arena_shared/src/lib.rs

pub mod components;
pub mod geometry;
pub mod host_api;
pub mod input_types;

pub use components::{Facing, Millis};
pub use geometry::{ArenaBounds, CollisionOracle, Rect, StaticWalls};
pub use host_api::{AudioSink, Channel, Cue, CueCommand, MutedAudio};
pub use input_types::{canonical_actions, ActionId, InputState, ACTION_NOT_FOUND};
