// crates/arena_combat/src/systems/boss.rs
//! Distance-driven boss ("demon") state machine.
//!
//! The boss chases the player once inside `chase_range`, strikes when inside
//! `attack_range` and roughly level with the player, and can only hurt the
//! player during a fixed window of attack frames.

use arena_shared::{Channel, Cue, Facing, Millis, Rect};
use glam::Vec2;
use serde::Serialize;
use tracing::debug;

use super::player::{Player, PlayerState};
use super::{move_with_collision, DeathPhase, TickContext};
use crate::animation::AnimationPlayer;
use crate::config::BossTuning;
use crate::cues::{LoopCue, OneShot};
use crate::error::Result;
use crate::events::{Actor, MatchEvent};
use crate::sequences;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BossState {
    Idle,
    Run,
    Attack,
    Hit,
    Death,
}

impl BossState {
    pub const ALL: [BossState; 5] =
        [BossState::Idle, BossState::Run, BossState::Attack, BossState::Hit, BossState::Death];

    pub fn label(self) -> &'static str {
        match self {
            BossState::Idle => "idle",
            BossState::Run => "run",
            BossState::Attack => "attack",
            BossState::Hit => "hit",
            BossState::Death => "death",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub state: BossState,
    pub facing: Facing,
    pub position: Vec2,
    pub health: u32,
    pub body_size: Vec2,

    pub state_entry_time: Millis,
    pub hit_time: Millis,
    pub attack_time: Millis,
    pub death_start_time: Millis,

    pub hitting: bool,
    pub death_phase: Option<DeathPhase>,
    pub animation: AnimationPlayer,

    run_cue: LoopCue,
    growl: OneShot,
}

impl Boss {
    pub fn spawn(tuning: &BossTuning, animation: AnimationPlayer, now: Millis) -> Self {
        Self {
            state: BossState::Idle,
            facing: Facing::Left,
            position: tuning.spawn,
            health: tuning.max_health,
            body_size: tuning.body_size,
            state_entry_time: now,
            hit_time: now,
            attack_time: now,
            death_start_time: now,
            hitting: false,
            death_phase: None,
            animation,
            run_cue: LoopCue::new(Cue::BossRun, Channel::BossFeet),
            growl: OneShot::default(),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, self.body_size)
    }

    /// Strike box in front of the boss. The offsets are asymmetric because
    /// the demon sheet is not centred on its anchor.
    pub fn attack_rect(&self, tuning: &BossTuning) -> Rect {
        let offset = match self.facing {
            Facing::Left => tuning.attack_offset_left,
            Facing::Right => tuning.attack_offset_right,
        };
        Rect::new(
            self.position.x + offset,
            self.position.y - tuning.attack_size.y / 2.0,
            tuning.attack_size.x,
            tuning.attack_size.y,
        )
    }

    pub fn is_vulnerable(&self) -> bool {
        self.health > 0 && !matches!(self.state, BossState::Hit | BossState::Death)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0 || self.state == BossState::Death
    }

    pub fn is_run_cue_playing(&self) -> bool {
        self.run_cue.is_playing()
    }

    pub fn pose(&self) -> BossState {
        match (self.state, self.death_phase) {
            (BossState::Death, Some(DeathPhase::Staggered)) => BossState::Hit,
            (state, _) => state,
        }
    }

    pub fn sync_animation(&mut self) -> Result<()> {
        self.animation.set_animation(sequences::boss(self.facing, self.pose()))
    }

    pub(crate) fn set_state(&mut self, next: BossState, now: Millis) {
        if next != self.state {
            debug!(from = self.state.label(), to = next.label(), now, "boss state");
            self.state = next;
            self.state_entry_time = now;
        }
    }

    /// Applied by the player when a swing lands.
    pub fn take_hit(&mut self, ctx: &mut TickContext) {
        self.health = self.health.saturating_sub(1);
        self.set_state(BossState::Hit, ctx.now);
        self.hit_time = ctx.now;
        ctx.cues.play(Cue::BossHurt, Channel::BossVoice);
        ctx.events.push(MatchEvent::Damaged { target: Actor::Boss, health: self.health });
    }

    /// One tick, after the player has stepped.
    pub fn step(&mut self, player: &mut Player, ctx: &mut TickContext) -> Result<()> {
        let now = ctx.now;
        let config = ctx.config;

        if self.health == 0 {
            self.growl.reset();
            self.step_death(ctx);
        } else if self.state == BossState::Hit {
            self.growl.reset();
            if self.animation.is_finished()
                && now.saturating_sub(self.hit_time) > config.boss.hit_duration
            {
                self.set_state(BossState::Idle, now);
            }
        } else {
            self.face(player.position);
            if self.state == BossState::Attack {
                self.step_attack(player, ctx)?;
            } else {
                self.select_behavior(player, ctx);
            }
        }

        self.run_cue.sync(self.state == BossState::Run, ctx.cues);
        Ok(())
    }

    fn step_death(&mut self, ctx: &mut TickContext) {
        let now = ctx.now;
        let config = ctx.config;

        if self.death_phase.is_none() {
            self.set_state(BossState::Death, now);
            self.death_start_time = now;
            self.hitting = false;
            ctx.cues.play(Cue::BossDeath, Channel::BossVoice);
            ctx.events.push(MatchEvent::Died { actor: Actor::Boss });
        }
        self.state = BossState::Death;
        self.death_phase = Some(DeathPhase::at(
            now.saturating_sub(self.death_start_time),
            config.boss.hit_duration,
            config.boss.death_duration,
        ));
    }

    /// Faces the player.
    fn face(&mut self, target: Vec2) {
        let dx = target.x - self.position.x;
        self.facing = if dx > 0.0 { Facing::Right } else { Facing::Left };
    }

    fn step_attack(&mut self, player: &mut Player, ctx: &mut TickContext) -> Result<()> {
        let now = ctx.now;
        let config = ctx.config;
        let tuning = &config.boss;

        if self.animation.is_finished() {
            self.set_state(BossState::Idle, now);
            self.hitting = false;
            return Ok(());
        }

        let (frame_count, total) = {
            let sequence = self
                .animation
                .library()
                .get(sequences::boss(self.facing, BossState::Attack))?;
            (sequence.frame_count(), sequence.total_duration().max(1))
        };
        let progress = now.saturating_sub(self.attack_time) as f32 / total as f32;
        let frame_index = (progress * frame_count as f32).floor() as usize;

        let [first, last] = tuning.damage_window;
        if (first..=last).contains(&frame_index) {
            if !self.hitting
                && !player.is_dead()
                && self.attack_rect(tuning).overlaps(&player.hitbox())
            {
                self.hitting = true;
                if player.state == PlayerState::Block && player.facing == self.facing.opposite() {
                    debug!(now, "boss strike blocked");
                    ctx.cues.play(Cue::Block, Channel::Impact);
                    ctx.events.push(MatchEvent::Blocked);
                } else {
                    player.take_hit(ctx);
                }
            }
        } else if frame_index > last {
            self.hitting = false;
        }
        Ok(())
    }

    fn select_behavior(&mut self, player: &Player, ctx: &mut TickContext) {
        let now = ctx.now;
        let config = ctx.config;
        let tuning = &config.boss;

        let offset = player.position - self.position;
        let distance = offset.length();
        let player_down = player.is_dead();
        // Never reached while attacking, so the growl re-arms for the next entry.
        let growled = self.growl.reset();

        if !player_down
            && distance <= tuning.attack_range
            && offset.y.abs() <= tuning.vertical_tolerance
        {
            self.set_state(BossState::Attack, now);
            self.attack_time = now;
            self.hitting = false;
            if self.growl.fire() {
                ctx.cues.play(Cue::BossGrowl, Channel::BossVoice);
            }
        } else if !player_down && distance <= tuning.chase_range {
            self.set_state(BossState::Run, now);
            let target = player.position - Vec2::new(self.facing.sign() * tuning.chase_offset, 0.0);
            let step = (target - self.position).clamp_length_max(tuning.speed);
            self.position = move_with_collision(
                self.position,
                step,
                self.body_size,
                ctx.walls,
                &config.arena.bounds(),
            );
        } else {
            self.set_state(BossState::Idle, now);
            if growled {
                ctx.cues.stop(Channel::BossVoice);
            }
        }
    }
}
