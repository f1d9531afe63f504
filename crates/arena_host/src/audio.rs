// crates/arena_host/src/audio.rs
//! Cue playback. The simulation thread only ever sends; the mixer runs on its
//! own thread behind a crossbeam channel.

use std::collections::HashMap;
use std::thread::{self, JoinHandle};

use arena_shared::{AudioSink, Channel, Cue, CueCommand};
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use crate::error::{HostError, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioStats {
    pub played: usize,
    pub stopped: usize,
    /// Loops still running when the mixer shut down.
    pub looping_at_exit: usize,
}

/// Channel bookkeeping without a device. Stands in for the excluded audio
/// layer: it logs what would be played and keeps per-channel state.
#[derive(Debug, Default)]
pub struct Mixer {
    channels: HashMap<Channel, (Cue, bool)>,
    stats: AudioStats,
}

impl Mixer {
    pub fn playing(&self, channel: Channel) -> Option<Cue> {
        self.channels.get(&channel).map(|(cue, _)| *cue)
    }

    pub fn stats(&self) -> AudioStats {
        AudioStats {
            looping_at_exit: self.channels.values().filter(|(_, looping)| *looping).count(),
            ..self.stats
        }
    }
}

impl AudioSink for Mixer {
    fn play(&mut self, cue: Cue, channel: Channel, looping: bool) {
        debug!(asset = cue.asset_name(), ?channel, looping, "play");
        self.channels.insert(channel, (cue, looping));
        self.stats.played += 1;
    }

    fn stop(&mut self, channel: Channel) {
        if let Some((cue, _)) = self.channels.remove(&channel) {
            debug!(asset = cue.asset_name(), ?channel, "stop");
            self.stats.stopped += 1;
        }
    }
}

/// Fire-and-forget sink backed by a mixer thread.
pub struct AudioWorker {
    sender: Option<Sender<CueCommand>>,
    handle: Option<JoinHandle<AudioStats>>,
}

impl AudioWorker {
    pub fn spawn() -> Self {
        let (sender, receiver) = unbounded();
        let handle = thread::spawn(move || run_mixer(receiver));
        Self { sender: Some(sender), handle: Some(handle) }
    }

    /// Closes the mailbox, waits for the mixer to drain it and returns what
    /// it did.
    pub fn finish(mut self) -> Result<AudioStats> {
        self.sender.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| HostError::AudioWorker),
            None => Ok(AudioStats::default()),
        }
    }

    fn send(&self, command: CueCommand) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(command).is_err() {
            warn!(?command, "audio worker is gone; cue dropped");
        }
    }
}

impl AudioSink for AudioWorker {
    fn play(&mut self, cue: Cue, channel: Channel, looping: bool) {
        self.send(CueCommand::Play { cue, channel, looping });
    }

    fn stop(&mut self, channel: Channel) {
        self.send(CueCommand::Stop { channel });
    }
}

impl Drop for AudioWorker {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_mixer(receiver: Receiver<CueCommand>) -> AudioStats {
    let mut mixer = Mixer::default();
    for command in receiver.iter() {
        mixer.apply(command);
    }
    mixer.stats()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_replaces_and_stops_per_channel() {
        let mut mixer = Mixer::default();
        mixer.play(Cue::PlayerHurt, Channel::PlayerAction, false);
        mixer.play(Cue::Miss, Channel::PlayerAction, false);
        mixer.play(Cue::BossRun, Channel::BossFeet, true);
        mixer.stop(Channel::Impact);

        assert_eq!(mixer.playing(Channel::PlayerAction), Some(Cue::Miss));
        assert_eq!(mixer.stats(), AudioStats { played: 3, stopped: 0, looping_at_exit: 1 });

        mixer.stop(Channel::BossFeet);
        assert_eq!(mixer.playing(Channel::BossFeet), None);
        assert_eq!(mixer.stats().looping_at_exit, 0);
    }

    #[test]
    fn worker_drains_everything_before_finishing() {
        let mut worker = AudioWorker::spawn();
        worker.play(Cue::PlayerRun, Channel::PlayerFeet, true);
        worker.play(Cue::Impact, Channel::Impact, false);
        worker.stop(Channel::PlayerFeet);

        let stats = worker.finish().unwrap();
        assert_eq!(stats, AudioStats { played: 2, stopped: 1, looping_at_exit: 0 });
    }
}
