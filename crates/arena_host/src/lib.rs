// crates/arena_host/src/lib.rs
//! Headless host for the combat core: fixed-timestep loop, key bindings,
//! scripted input and the audio worker.

pub mod app;
pub mod audio;
pub mod config;
pub mod engine_loop;
pub mod error;
pub mod input;
pub mod script;

// Re-export App so the CLI crate can find it easily
pub use app::{App, RunSummary};
pub use audio::{AudioStats, AudioWorker, Mixer};
pub use config::{HostConfig, TuningFile, WallConfig};
pub use engine_loop::EngineLoop;
pub use error::{HostError, Result};
pub use script::{InputScript, ScriptPlayer};
