// crates/arena_combat/src/error.rs
use thiserror::Error;

use crate::animation::SequenceId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    /// A state asked for a sequence the library does not have. Fatal: the
    /// animation table and the asset set disagree.
    #[error("unknown animation sequence: {0}")]
    UnknownAnimation(SequenceId),

    #[error("invalid combat config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
