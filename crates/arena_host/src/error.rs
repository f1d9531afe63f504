// crates/arena_host/src/error.rs
use std::path::PathBuf;

use arena_combat::ArenaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Toml {
        what: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Combat(#[from] ArenaError),

    #[error("unknown key name: {0}")]
    UnknownKey(String),

    #[error("unknown action name: {0}")]
    UnknownAction(String),

    #[error("audio worker panicked")]
    AudioWorker,
}

pub type Result<T> = std::result::Result<T, HostError>;
