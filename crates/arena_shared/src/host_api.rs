// crates/arena_shared/src/host_api.rs
//! Services the host provides to the combat core.

use serde::{Deserialize, Serialize};

// ==================================================================================
// 1. CUES
// ==================================================================================

/// Sound cues the combat core can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Player swing that connected with nothing.
    Miss,
    /// Player swing that connected with the boss.
    Impact,
    /// Boss strike absorbed by the player's guard.
    Block,
    PlayerRun,
    PlayerHurt,
    PlayerDeath,
    BossGrowl,
    BossRun,
    BossHurt,
    BossDeath,
}

impl Cue {
    /// Asset name the audio layer resolves.
    pub fn asset_name(self) -> &'static str {
        match self {
            Cue::Miss => "sfx/miss",
            Cue::Impact => "sfx/impact",
            Cue::Block => "sfx/block",
            Cue::PlayerRun => "sfx/player_run",
            Cue::PlayerHurt => "sfx/player_hurt",
            Cue::PlayerDeath => "sfx/player_death",
            Cue::BossGrowl => "sfx/demon_growl",
            Cue::BossRun => "sfx/demon_run",
            Cue::BossHurt => "sfx/demon_hurt",
            Cue::BossDeath => "sfx/demon_death",
        }
    }
}

/// Mixer channels. A new `Play` on a channel replaces what it was playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    PlayerAction,
    PlayerFeet,
    BossVoice,
    BossFeet,
    Impact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueCommand {
    Play { cue: Cue, channel: Channel, looping: bool },
    Stop { channel: Channel },
}

// ==================================================================================
// 2. AUDIO SINK
// ==================================================================================

/// Fire-and-forget audio output. Implementations must not block the tick,
/// and a missing sound is silently skipped.
pub trait AudioSink {
    fn play(&mut self, cue: Cue, channel: Channel, looping: bool);
    fn stop(&mut self, channel: Channel);

    fn apply(&mut self, command: CueCommand) {
        match command {
            CueCommand::Play { cue, channel, looping } => self.play(cue, channel, looping),
            CueCommand::Stop { channel } => self.stop(channel),
        }
    }
}

/// Discards everything; used when audio is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutedAudio;

impl AudioSink for MutedAudio {
    fn play(&mut self, _cue: Cue, _channel: Channel, _looping: bool) {}
    fn stop(&mut self, _channel: Channel) {}
}
