// crates/arena_combat/src/state.rs

use std::sync::Arc;

use arena_shared::{Channel, CollisionOracle, CueCommand, Facing, InputState, Millis};
use glam::Vec2;
use serde::Serialize;
use tracing::info;

use crate::animation::{AnimationLibrary, AnimationPlayer, FrameId, SequenceId};
use crate::config::CombatConfig;
use crate::cues::CueOutbox;
use crate::error::Result;
use crate::events::{MatchEvent, MatchOutcome};
use crate::sequences;
use crate::systems::boss::{Boss, BossState};
use crate::systems::player::{Player, PlayerState};
use crate::systems::{DeathPhase, TickContext};

/// One match: the two combatants plus everything the host drains per frame.
#[derive(Debug)]
pub struct Arena {
    config: CombatConfig,
    library: Arc<AnimationLibrary>,
    player: Player,
    boss: Boss,
    cues: CueOutbox,
    events: Vec<MatchEvent>,
    outcome: Option<MatchOutcome>,
    last_now: Option<Millis>,
    ticks: u64,
}

/// What a single `Arena::step` produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub tick: u64,
    pub events: Vec<MatchEvent>,
    pub outcome: Option<MatchOutcome>,
}

/// Read-only snapshot of a combatant for rendering and UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombatantView {
    pub position: Vec2,
    pub facing: Facing,
    pub health: u32,
    /// `None` for the boss.
    pub stamina: Option<u8>,
    pub state: &'static str,
    pub frame: Option<FrameId>,
}

fn spawn_combatants(
    config: &CombatConfig,
    library: &Arc<AnimationLibrary>,
    now: Millis,
) -> Result<(Player, Boss)> {
    let player_anim = AnimationPlayer::new(
        Arc::clone(library),
        sequences::player(Facing::Right, PlayerState::Idle),
    )?;
    let boss_anim =
        AnimationPlayer::new(Arc::clone(library), sequences::boss(Facing::Left, BossState::Idle))?;
    Ok((
        Player::spawn(&config.player, player_anim, now),
        Boss::spawn(&config.boss, boss_anim, now),
    ))
}

impl Arena {
    /// Validates the tuning and checks that the library can serve every
    /// sequence either state machine may request.
    pub fn new(config: CombatConfig, library: Arc<AnimationLibrary>) -> Result<Self> {
        config.validate()?;
        let required: Vec<SequenceId> = sequences::all().collect();
        library.require(&required)?;

        let (player, boss) = spawn_combatants(&config, &library, 0)?;
        info!(
            player_health = player.health,
            boss_health = boss.health,
            sequences = library.len(),
            "arena ready"
        );
        Ok(Self {
            config,
            library,
            player,
            boss,
            cues: CueOutbox::default(),
            events: Vec::new(),
            outcome: None,
            last_now: None,
            ticks: 0,
        })
    }

    /// Advances the match to `now`. The player acts first, so a swing that
    /// lands this tick puts the boss in Hit before it can strike back.
    pub fn step(
        &mut self,
        input: &InputState,
        now: Millis,
        walls: &dyn CollisionOracle,
    ) -> Result<StepReport> {
        let dt = self.last_now.map_or(0, |last| now.saturating_sub(last));
        self.last_now = Some(now);
        let first_event = self.events.len();

        {
            let mut ctx = TickContext {
                now,
                config: &self.config,
                walls,
                cues: &mut self.cues,
                events: &mut self.events,
            };
            self.player.step(input, &mut self.boss, &mut ctx);
            self.boss.step(&mut self.player, &mut ctx)?;
        }

        self.player.sync_animation()?;
        self.boss.sync_animation()?;
        self.player.animation.advance(dt);
        self.boss.animation.advance(dt);

        self.decide_outcome();
        self.ticks += 1;

        Ok(StepReport {
            tick: self.ticks,
            events: self.events[first_event..].to_vec(),
            outcome: self.outcome,
        })
    }

    fn decide_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let outcome = if self.player.death_phase == Some(DeathPhase::Finished) {
            MatchOutcome::Defeat
        } else if self.boss.death_phase == Some(DeathPhase::Finished) {
            MatchOutcome::Victory
        } else {
            return;
        };
        info!(?outcome, tick = self.ticks, "match decided");
        self.outcome = Some(outcome);
        self.events.push(MatchEvent::MatchEnded { outcome });
    }

    /// Puts both combatants back at their spawn points with full health.
    pub fn restart(&mut self, now: Millis) -> Result<()> {
        let (player, boss) = spawn_combatants(&self.config, &self.library, now)?;
        self.player = player;
        self.boss = boss;
        self.cues.clear();
        self.cues.stop(Channel::PlayerFeet);
        self.cues.stop(Channel::BossFeet);
        self.events.clear();
        self.outcome = None;
        self.last_now = None;
        info!(now, "match restarted");
        Ok(())
    }

    pub fn drain_cues(&mut self) -> Vec<CueCommand> {
        self.cues.drain()
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    /// Direct access for scenario setup.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn boss_mut(&mut self) -> &mut Boss {
        &mut self.boss
    }

    pub fn player_view(&self) -> CombatantView {
        let p = &self.player;
        CombatantView {
            position: p.position,
            facing: p.facing,
            health: p.health,
            stamina: Some(p.stamina),
            state: p.state.label(),
            frame: p.animation.current_frame(),
        }
    }

    pub fn boss_view(&self) -> CombatantView {
        let b = &self.boss;
        CombatantView {
            position: b.position,
            facing: b.facing,
            health: b.health,
            stamina: None,
            state: b.state.label(),
            frame: b.animation.current_frame(),
        }
    }
}
