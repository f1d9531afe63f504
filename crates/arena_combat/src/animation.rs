// crates/arena_combat/src/animation.rs
//! Frame sequences and the per-entity player that walks through them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use arena_shared::Millis;
use serde::Serialize;

use crate::error::{ArenaError, Result};

/// Identifier of a frame sequence as the asset layer names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SequenceId(pub &'static str);

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Opaque handle to one frame image, resolved by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FrameId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub frames: Vec<FrameId>,
    pub frame_duration: Millis,
    pub looping: bool,
}

impl Sequence {
    pub fn total_duration(&self) -> Millis {
        self.frame_duration * self.frames.len() as Millis
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame index for a point in time, clamped to the last frame.
    pub fn index_at(&self, elapsed: Millis) -> usize {
        if self.frames.is_empty() || self.frame_duration == 0 {
            return 0;
        }
        ((elapsed / self.frame_duration) as usize).min(self.frames.len() - 1)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnimationLibrary {
    sequences: HashMap<SequenceId, Sequence>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SequenceId, sequence: Sequence) {
        self.sequences.insert(id, sequence);
    }

    pub fn get(&self, id: SequenceId) -> Result<&Sequence> {
        self.sequences.get(&id).ok_or(ArenaError::UnknownAnimation(id))
    }

    pub fn contains(&self, id: SequenceId) -> bool {
        self.sequences.contains_key(&id)
    }

    /// Fails on the first id the library cannot serve.
    pub fn require<'a>(&self, ids: impl IntoIterator<Item = &'a SequenceId>) -> Result<()> {
        for id in ids {
            self.get(*id)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Plays one sequence at a time out of a shared library.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    library: Arc<AnimationLibrary>,
    current: SequenceId,
    elapsed: Millis,
    frame_index: usize,
}

impl AnimationPlayer {
    pub fn new(library: Arc<AnimationLibrary>, initial: SequenceId) -> Result<Self> {
        library.get(initial)?;
        Ok(Self { library, current: initial, elapsed: 0, frame_index: 0 })
    }

    /// Switches sequence. Re-asserting the current one is a no-op so states
    /// that set their animation every tick do not restart it.
    pub fn set_animation(&mut self, id: SequenceId) -> Result<()> {
        if id == self.current {
            return Ok(());
        }
        self.library.get(id)?;
        self.current = id;
        self.elapsed = 0;
        self.frame_index = 0;
        Ok(())
    }

    pub fn advance(&mut self, dt: Millis) {
        let Ok(sequence) = self.library.get(self.current) else {
            return;
        };
        let total = sequence.total_duration();
        if total == 0 {
            self.elapsed = 0;
            self.frame_index = 0;
            return;
        }

        self.elapsed += dt;
        if sequence.looping {
            self.elapsed %= total;
        } else {
            self.elapsed = self.elapsed.min(total);
        }
        self.frame_index = sequence.index_at(self.elapsed);
    }

    /// `None` when the sequence has no frames (missing asset): draw nothing.
    pub fn current_frame(&self) -> Option<FrameId> {
        self.library
            .get(self.current)
            .ok()
            .and_then(|sequence| sequence.frames.get(self.frame_index).copied())
    }

    pub fn is_finished(&self) -> bool {
        match self.library.get(self.current) {
            Ok(sequence) => !sequence.looping && self.elapsed >= sequence.total_duration(),
            Err(_) => true,
        }
    }

    pub fn current(&self) -> SequenceId {
        self.current
    }

    pub fn elapsed(&self) -> Millis {
        self.elapsed
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }
}
