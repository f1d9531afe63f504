// crates/arena_combat/src/systems/player.rs
//! Input-driven player combat state machine.

use arena_shared::{canonical_actions, Channel, Cue, Facing, InputState, Millis, Rect};
use glam::Vec2;
use serde::Serialize;
use tracing::debug;

use super::boss::Boss;
use super::{move_with_collision, DeathPhase, TickContext, DIAGONAL_FACTOR};
use crate::animation::AnimationPlayer;
use crate::config::PlayerTuning;
use crate::cues::{LoopCue, OneShot};
use crate::error::Result;
use crate::events::{Actor, MatchEvent};
use crate::sequences;

/// Attack progress (fraction of `attack_duration`) from which holding attack
/// chains into the next swing.
const CHAIN_WINDOW_START: f32 = 0.7;
/// Attack progress range in which a swing can connect.
const HIT_WINDOW_START: f32 = 0.3;
const HIT_WINDOW_END: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerState {
    Idle,
    Walk,
    Run,
    Attack1,
    Attack2,
    Attack3,
    Block,
    Hit,
    Death,
}

impl PlayerState {
    pub const ALL: [PlayerState; 9] = [
        PlayerState::Idle,
        PlayerState::Walk,
        PlayerState::Run,
        PlayerState::Attack1,
        PlayerState::Attack2,
        PlayerState::Attack3,
        PlayerState::Block,
        PlayerState::Hit,
        PlayerState::Death,
    ];

    pub fn is_attacking(self) -> bool {
        matches!(self, PlayerState::Attack1 | PlayerState::Attack2 | PlayerState::Attack3)
    }

    pub fn next_in_chain(self) -> Option<Self> {
        match self {
            PlayerState::Attack1 => Some(PlayerState::Attack2),
            PlayerState::Attack2 => Some(PlayerState::Attack3),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerState::Idle => "idle",
            PlayerState::Walk => "walk",
            PlayerState::Run => "run",
            PlayerState::Attack1 => "attack1",
            PlayerState::Attack2 => "attack2",
            PlayerState::Attack3 => "attack3",
            PlayerState::Block => "block",
            PlayerState::Hit => "hit",
            PlayerState::Death => "death",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub state: PlayerState,
    pub facing: Facing,
    pub position: Vec2,
    pub health: u32,
    pub stamina: u8,
    pub max_stamina: u8,
    pub body_size: Vec2,

    pub state_entry_time: Millis,
    pub hit_time: Millis,
    pub attack_time: Millis,
    pub block_time: Millis,
    pub death_start_time: Millis,
    pub stamina_time: Millis,

    /// Hit-guard: the current swing already connected.
    pub hitting: bool,
    /// `Some` once Death has been entered.
    pub death_phase: Option<DeathPhase>,
    pub animation: AnimationPlayer,

    running_cue: LoopCue,
    miss_cue: OneShot,
}

impl Player {
    pub fn spawn(tuning: &PlayerTuning, animation: AnimationPlayer, now: Millis) -> Self {
        Self {
            state: PlayerState::Idle,
            facing: Facing::Right,
            position: tuning.spawn,
            health: tuning.max_health,
            stamina: tuning.max_stamina,
            max_stamina: tuning.max_stamina,
            body_size: tuning.body_size,
            state_entry_time: now,
            hit_time: now,
            attack_time: now,
            block_time: now,
            death_start_time: now,
            stamina_time: now,
            hitting: false,
            death_phase: None,
            animation,
            running_cue: LoopCue::new(Cue::PlayerRun, Channel::PlayerFeet),
            miss_cue: OneShot::default(),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, self.body_size)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0 || self.state == PlayerState::Death
    }

    pub fn is_running_cue_playing(&self) -> bool {
        self.running_cue.is_playing()
    }

    /// Pose to draw; the first phase of Death reuses the hit pose.
    pub fn pose(&self) -> PlayerState {
        match (self.state, self.death_phase) {
            (PlayerState::Death, Some(DeathPhase::Staggered)) => PlayerState::Hit,
            (state, _) => state,
        }
    }

    pub fn sync_animation(&mut self) -> Result<()> {
        self.animation.set_animation(sequences::player(self.facing, self.pose()))
    }

    pub(crate) fn set_state(&mut self, next: PlayerState, now: Millis) {
        if next != self.state {
            debug!(from = self.state.label(), to = next.label(), now, "player state");
            self.state = next;
            self.state_entry_time = now;
        }
    }

    /// Applied by the boss when a strike lands.
    pub fn take_hit(&mut self, ctx: &mut TickContext) {
        self.health = self.health.saturating_sub(1);
        self.set_state(PlayerState::Hit, ctx.now);
        self.hit_time = ctx.now;
        ctx.cues.play(Cue::PlayerHurt, Channel::PlayerAction);
        ctx.events.push(MatchEvent::Damaged { target: Actor::Player, health: self.health });
    }

    /// One tick. Branches are evaluated in priority order and the first match
    /// wins; stamina regeneration runs regardless.
    pub fn step(&mut self, input: &InputState, boss: &mut Boss, ctx: &mut TickContext) {
        let now = ctx.now;
        let config = ctx.config;

        if self.health == 0 {
            self.step_death(ctx);
        } else if self.state == PlayerState::Hit {
            if self.animation.is_finished()
                && now.saturating_sub(self.hit_time) > config.player.hit_duration
            {
                self.set_state(PlayerState::Idle, now);
            }
        } else {
            self.face_pointer(input.pointer, config.arena.screen_width);
            match self.state {
                state if state.is_attacking() => self.step_attack(input, boss, ctx),
                PlayerState::Block => self.step_block(input, now),
                _ => {
                    if !self.try_start_action(input, now) {
                        self.step_movement(input, ctx);
                    }
                }
            }
        }

        self.running_cue.sync(self.state == PlayerState::Run, ctx.cues);
        self.regenerate_stamina(now, config.player.stamina_duration);
    }

    fn step_death(&mut self, ctx: &mut TickContext) {
        let now = ctx.now;
        let config = ctx.config;
        let tuning = &config.player;

        if self.death_phase.is_none() {
            self.set_state(PlayerState::Death, now);
            self.death_start_time = now;
            self.hitting = false;
            ctx.cues.play(Cue::PlayerDeath, Channel::PlayerAction);
            ctx.events.push(MatchEvent::Died { actor: Actor::Player });
        }
        self.state = PlayerState::Death;
        self.death_phase = Some(DeathPhase::at(
            now.saturating_sub(self.death_start_time),
            tuning.hit_duration,
            tuning.death_duration,
        ));
    }

    fn face_pointer(&mut self, pointer: Vec2, screen_width: f32) {
        self.facing = if pointer.x >= screen_width / 2.0 { Facing::Right } else { Facing::Left };
    }

    fn step_attack(&mut self, input: &InputState, boss: &mut Boss, ctx: &mut TickContext) {
        let now = ctx.now;
        let attack_duration = ctx.config.player.attack_duration.max(1);
        let progress = now.saturating_sub(self.attack_time) as f32 / attack_duration as f32;

        let primary = input.is_active(canonical_actions::ATTACK);
        let secondary = input.is_active(canonical_actions::BLOCK);
        if primary
            && !secondary
            && (CHAIN_WINDOW_START..1.0).contains(&progress)
            && self.stamina > 0
        {
            if let Some(next) = self.state.next_in_chain() {
                self.end_swing(ctx);
                self.begin_swing(next, now);
                return;
            }
        }

        if progress >= 1.0 {
            self.end_swing(ctx);
            self.set_state(PlayerState::Idle, now);
            return;
        }

        if (HIT_WINDOW_START..=HIT_WINDOW_END).contains(&progress)
            && !self.hitting
            && boss.is_vulnerable()
        {
            if self.hitbox().overlaps(&boss.hitbox()) {
                self.hitting = true;
                ctx.cues.play(Cue::Impact, Channel::Impact);
                boss.take_hit(ctx);
            } else if self.miss_cue.fire() {
                ctx.cues.play(Cue::Miss, Channel::PlayerAction);
            }
        }
    }

    /// The miss cue sounds as soon as the window opens on empty air, but the
    /// swing only counts as missed if it never connected before ending.
    fn end_swing(&mut self, ctx: &mut TickContext) {
        if self.miss_cue.has_fired() && !self.hitting {
            ctx.events.push(MatchEvent::Missed);
        }
    }

    fn step_block(&mut self, input: &InputState, now: Millis) {
        if !input.is_active(canonical_actions::BLOCK) || self.animation.is_finished() {
            self.set_state(PlayerState::Idle, now);
        }
    }

    fn try_start_action(&mut self, input: &InputState, now: Millis) -> bool {
        if self.stamina == 0 {
            return false;
        }
        if input.is_active(canonical_actions::ATTACK) {
            self.begin_swing(PlayerState::Attack1, now);
            true
        } else if input.is_active(canonical_actions::BLOCK) {
            self.set_state(PlayerState::Block, now);
            self.spend_stamina(now);
            self.block_time = now;
            true
        } else {
            false
        }
    }

    fn begin_swing(&mut self, swing: PlayerState, now: Millis) {
        self.set_state(swing, now);
        self.spend_stamina(now);
        self.attack_time = now;
        self.hitting = false;
        self.miss_cue.reset();
    }

    fn spend_stamina(&mut self, now: Millis) {
        self.stamina = self.stamina.saturating_sub(1);
        self.stamina_time = now;
    }

    fn step_movement(&mut self, input: &InputState, ctx: &mut TickContext) {
        let config = ctx.config;
        let tuning = &config.player;
        let mut axes = input.movement_axes();
        if axes == Vec2::ZERO {
            self.set_state(PlayerState::Idle, ctx.now);
            return;
        }
        if axes.x != 0.0 && axes.y != 0.0 {
            axes *= DIAGONAL_FACTOR;
        }

        let running = input.is_active(canonical_actions::RUN);
        let speed = if running { tuning.run_speed } else { tuning.walk_speed };
        self.position = move_with_collision(
            self.position,
            axes * speed,
            self.body_size,
            ctx.walls,
            &config.arena.bounds(),
        );
        self.set_state(if running { PlayerState::Run } else { PlayerState::Walk }, ctx.now);
    }

    fn regenerate_stamina(&mut self, now: Millis, stamina_duration: Millis) {
        if self.stamina < self.max_stamina
            && now.saturating_sub(self.stamina_time) > stamina_duration
        {
            self.stamina += 1;
            self.stamina_time = now;
        }
    }
}
