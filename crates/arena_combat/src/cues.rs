// crates/arena_combat/src/cues.rs
//! Edge-triggered audio bookkeeping. The state machines decide *when* a cue
//! should sound; these types make sure it sounds once per edge.

use arena_shared::{Channel, Cue, CueCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
    Steady,
}

/// Remembers the previous value of a condition and reports transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, condition: bool) -> Edge {
        let edge = match (self.previous, condition) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::Steady,
        };
        self.previous = condition;
        edge
    }

    /// "Just became true".
    pub fn rose(&mut self, condition: bool) -> bool {
        self.update(condition) == Edge::Rising
    }

    pub fn is_high(&self) -> bool {
        self.previous
    }
}

/// A flag that lets exactly one `fire` through until it is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    /// Re-arms the flag; returns whether it had fired.
    pub fn reset(&mut self) -> bool {
        std::mem::replace(&mut self.fired, false)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Cue commands produced during one tick, drained by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CueOutbox {
    commands: Vec<CueCommand>,
}

impl CueOutbox {
    pub fn play(&mut self, cue: Cue, channel: Channel) {
        self.commands.push(CueCommand::Play { cue, channel, looping: false });
    }

    pub fn play_loop(&mut self, cue: Cue, channel: Channel) {
        self.commands.push(CueCommand::Play { cue, channel, looping: true });
    }

    pub fn stop(&mut self, channel: Channel) {
        self.commands.push(CueCommand::Stop { channel });
    }

    pub fn commands(&self) -> &[CueCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> Vec<CueCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// A looping cue that starts when its condition rises and stops when it falls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopCue {
    cue: Cue,
    channel: Channel,
    trigger: EdgeTrigger,
}

impl LoopCue {
    pub fn new(cue: Cue, channel: Channel) -> Self {
        Self { cue, channel, trigger: EdgeTrigger::default() }
    }

    pub fn sync(&mut self, active: bool, outbox: &mut CueOutbox) {
        match self.trigger.update(active) {
            Edge::Rising => outbox.play_loop(self.cue, self.channel),
            Edge::Falling => outbox.stop(self.channel),
            Edge::Steady => {}
        }
    }

    pub fn is_playing(&self) -> bool {
        self.trigger.is_high()
    }
}
