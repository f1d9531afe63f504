// crates/arena_host/src/app.rs

use arena_combat::{sequences, Arena, CombatantView, MatchEvent, MatchOutcome};
use arena_shared::{canonical_actions, AudioSink, Millis, StaticWalls};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{HostConfig, TuningFile};
use crate::engine_loop::EngineLoop;
use crate::error::Result;
use crate::input::{ActionRegistry, InputDefaults, InputMap, InputPoller};
use crate::script::InputScript;

/// Headless host: owns the arena, the input pipeline and the loop clock.
pub struct App {
    registry: ActionRegistry,
    input_map: InputMap,
    poller: InputPoller,
    engine: EngineLoop,
    arena: Arena,
    walls: StaticWalls,
    host: HostConfig,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub outcome: Option<MatchOutcome>,
    /// Host clock when the run stopped.
    pub elapsed_ms: Millis,
    pub ticks: u64,
    pub quit_requested: bool,
    pub events: usize,
    pub player: CombatantView,
    pub boss: CombatantView,
}

impl App {
    pub fn new(tuning: TuningFile) -> Result<Self> {
        let mut registry = ActionRegistry::default();
        let mut input_map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut input_map);
        InputDefaults::apply_overrides(&tuning.bindings, &registry, &mut input_map)?;

        let arena = Arena::new(tuning.combat, sequences::standard_library())?;
        let host = tuning.host;
        info!(
            sim_hz = host.sim_hz,
            frame_ms = host.frame_ms,
            walls = host.walls.len(),
            actions = registry.len(),
            "host ready"
        );

        Ok(Self {
            engine: EngineLoop::new(host.sim_hz, host.max_steps_per_frame),
            walls: host.static_walls(),
            registry,
            input_map,
            poller: InputPoller::new(),
            arena,
            host,
        })
    }

    /// Replays `script` frame by frame until it runs out, Quit is pressed, or
    /// (with `stop_on_outcome`) the match is decided.
    pub fn run_script(
        &mut self,
        script: &InputScript,
        audio: &mut dyn AudioSink,
    ) -> Result<RunSummary> {
        let mut player = script.compile()?;
        let frame_ms = self.host.frame_ms.max(1);
        let mut clock: Millis = 0;
        let mut events = 0;
        let mut quit_requested = false;

        while !player.is_finished(clock) {
            player.apply_until(clock, &mut self.poller);
            let input = self.poller.snapshot(&self.input_map);
            if input.is_active(canonical_actions::QUIT) {
                info!(clock, "quit requested");
                quit_requested = true;
                break;
            }

            self.engine.update_simulation(
                frame_ms as f32 / 1000.0,
                &mut self.arena,
                &input,
                &self.walls,
            )?;
            events += self.flush(audio);

            if self.host.stop_on_outcome && self.arena.outcome().is_some() {
                break;
            }
            clock += frame_ms;
        }

        Ok(RunSummary {
            outcome: self.arena.outcome(),
            elapsed_ms: clock,
            ticks: self.arena.ticks(),
            quit_requested,
            events,
            player: self.arena.player_view(),
            boss: self.arena.boss_view(),
        })
    }

    /// Forwards this frame's cues to the sink and logs its events.
    fn flush(&mut self, audio: &mut dyn AudioSink) -> usize {
        for command in self.arena.drain_cues() {
            audio.apply(command);
        }
        let events = self.arena.drain_events();
        for event in &events {
            log_event(event);
        }
        events.len()
    }

    /// Starts a fresh match on the current simulation clock.
    pub fn restart(&mut self, audio: &mut dyn AudioSink) -> Result<()> {
        self.arena.restart(self.engine.sim_now())?;
        self.poller.release_all();
        self.flush(audio);
        Ok(())
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn host_config(&self) -> &HostConfig {
        &self.host
    }
}

fn log_event(event: &MatchEvent) {
    match *event {
        MatchEvent::Damaged { target, health } => info!(?target, health, "damaged"),
        MatchEvent::Blocked => debug!("strike blocked"),
        MatchEvent::Missed => debug!("swing missed"),
        MatchEvent::Died { actor } => info!(?actor, "died"),
        MatchEvent::MatchEnded { outcome } => info!(?outcome, "match ended"),
    }
}
