//! End-to-end combat scenarios driven through `Arena::step` with the stock
//! tuning and animation table.

use arena_combat::{
    sequences, Actor, Arena, BossState, CombatConfig, DeathPhase, MatchEvent, MatchOutcome,
    PlayerState,
};
use arena_shared::{canonical_actions::*, Channel, Cue, CueCommand, InputState, Rect, StaticWalls};
use glam::Vec2;

const POINTER_RIGHT: Vec2 = Vec2::new(1000.0, 360.0);
const POINTER_LEFT: Vec2 = Vec2::new(100.0, 360.0);

fn arena() -> Arena {
    Arena::new(CombatConfig::default(), sequences::standard_library()).unwrap()
}

fn idle() -> InputState {
    InputState::default().with_pointer(POINTER_RIGHT)
}

fn damage_to(events: &[MatchEvent], actor: Actor) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, MatchEvent::Damaged { target, .. } if *target == actor))
        .count()
}

#[test]
fn attack_chain_reaches_third_swing_with_two_stamina_left() {
    let mut arena = arena();
    {
        let p = arena.player_mut();
        p.state = PlayerState::Attack1;
        p.stamina = 4;
        p.attack_time = 0;
    }
    let held = idle().with(ATTACK);

    let mut seen = vec![PlayerState::Attack1];
    for now in (20..=1000).step_by(20) {
        arena.step(&held, now, &()).unwrap();
        let state = arena.player().state;
        if seen.last() != Some(&state) {
            seen.push(state);
        }
    }

    assert_eq!(seen, vec![PlayerState::Attack1, PlayerState::Attack2, PlayerState::Attack3]);
    assert_eq!(arena.player().stamina, 2);
    assert_eq!(arena.player().attack_time, 840);
}

#[test]
fn holding_block_prevents_chaining() {
    let mut arena = arena();
    {
        let p = arena.player_mut();
        p.state = PlayerState::Attack1;
        p.attack_time = 0;
    }
    let both = idle().with(ATTACK).with(BLOCK);
    for now in (20..=580).step_by(20) {
        arena.step(&both, now, &()).unwrap();
        assert_eq!(arena.player().state, PlayerState::Attack1);
    }
    arena.step(&both, 600, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Idle);
}

#[test]
fn one_swing_lands_at_most_once() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(690.0, 2000.0);

    let mut events = Vec::new();
    arena.step(&idle().with(ATTACK), 0, &()).unwrap();
    for now in (20..=580).step_by(20) {
        let report = arena.step(&idle(), now, &()).unwrap();
        events.extend(report.events);
        // Keep the boss vulnerable for the whole swing.
        arena.boss_mut().state = BossState::Idle;
    }

    assert_eq!(arena.boss().health, 19);
    assert_eq!(damage_to(&events, Actor::Boss), 1);
    assert!(arena.player().hitting);
}

#[test]
fn swing_into_empty_air_plays_miss_once() {
    let mut arena = arena();
    arena.step(&idle().with(ATTACK), 0, &()).unwrap();
    arena.drain_cues();

    let mut misses = 0;
    let mut events = Vec::new();
    for now in (20..=600).step_by(20) {
        events.extend(arena.step(&idle(), now, &()).unwrap().events);
        misses += arena
            .drain_cues()
            .iter()
            .filter(|c| matches!(c, CueCommand::Play { cue: Cue::Miss, .. }))
            .count();
    }
    assert_eq!(misses, 1);
    assert_eq!(arena.boss().health, 20);
    assert_eq!(arena.player().state, PlayerState::Idle);
    assert_eq!(events, vec![MatchEvent::Missed]);
}

#[test]
fn swing_that_connects_late_is_not_reported_as_missed() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.step(&idle().with(ATTACK), 0, &()).unwrap();

    let mut events = Vec::new();
    for now in (20..=600).step_by(20) {
        if now == 300 {
            arena.boss_mut().position = Vec2::new(690.0, 2000.0);
        }
        events.extend(arena.step(&idle(), now, &()).unwrap().events);
    }

    assert_eq!(damage_to(&events, Actor::Boss), 1);
    assert!(!events.contains(&MatchEvent::Missed));
    assert_eq!(arena.player().state, PlayerState::Idle);
}

#[test]
fn hit_landing_in_chain_window_counts_once_across_the_chain() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    {
        let p = arena.player_mut();
        p.state = PlayerState::Attack1;
        p.attack_time = 0;
    }
    for now in (20..=420).step_by(20) {
        arena.step(&idle(), now, &()).unwrap();
    }

    // 440ms of a 600ms swing: past the chain threshold, still inside the hit window.
    arena.boss_mut().position = Vec2::new(690.0, 2000.0);
    let mut events = arena.step(&idle(), 440, &()).unwrap().events;
    assert!(arena.player().hitting);

    let held = idle().with(ATTACK);
    for now in (460..=620).step_by(20) {
        arena.boss_mut().state = BossState::Idle;
        events.extend(arena.step(&held, now, &()).unwrap().events);
    }

    assert_eq!(arena.player().state, PlayerState::Attack2);
    assert_eq!(arena.player().attack_time, 460);
    assert_eq!(damage_to(&events, Actor::Boss), 1);
    assert_eq!(arena.boss().health, 19);
}

#[test]
fn boss_picks_behavior_by_distance() {
    for (distance, expected) in
        [(150.0, BossState::Attack), (300.0, BossState::Run), (500.0, BossState::Idle)]
    {
        let mut arena = arena();
        let player_pos = Vec2::new(640.0, 2000.0);
        arena.player_mut().position = player_pos;
        arena.boss_mut().position = player_pos - Vec2::new(distance, 0.0);

        arena.step(&idle(), 16, &()).unwrap();
        assert_eq!(arena.boss().state, expected, "distance {distance}");
    }
}

#[test]
fn boss_does_not_attack_when_vertically_misaligned() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(640.0, 1880.0);

    arena.step(&idle(), 16, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Run);
}

#[test]
fn boss_run_loop_starts_and_stops() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(340.0, 2000.0);

    arena.step(&idle(), 16, &()).unwrap();
    assert!(arena.boss().is_run_cue_playing());
    assert!(arena.boss().position.x > 340.0);
    assert!(arena.drain_cues().contains(&CueCommand::Play {
        cue: Cue::BossRun,
        channel: Channel::BossFeet,
        looping: true,
    }));

    arena.boss_mut().position = Vec2::new(640.0, 200.0);
    arena.step(&idle(), 32, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Idle);
    assert!(arena.drain_cues().contains(&CueCommand::Stop { channel: Channel::BossFeet }));
}

fn growls_in(cues: &[CueCommand]) -> usize {
    cues.iter()
        .filter(|c| {
            matches!(c, CueCommand::Play { cue: Cue::BossGrowl, channel: Channel::BossVoice, .. })
        })
        .count()
}

#[test]
fn boss_growls_on_every_back_to_back_attack() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(540.0, 2000.0);

    let mut entries = 0;
    let mut growls = 0;
    let mut previous = arena.boss().state;
    for now in (16..=5000).step_by(16) {
        arena.step(&idle(), now, &()).unwrap();
        arena.player_mut().health = 7;
        let state = arena.boss().state;
        if state == BossState::Attack && previous != BossState::Attack {
            entries += 1;
        }
        previous = state;
        growls += growls_in(&arena.drain_cues());
    }

    assert!(entries >= 3, "only {entries} attacks");
    assert_eq!(growls, entries);
}

#[test]
fn boss_growls_again_after_chasing() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(540.0, 2000.0);

    let mut now = 16;
    arena.step(&idle(), now, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Attack);
    let mut growls = growls_in(&arena.drain_cues());

    while arena.boss().state == BossState::Attack && now < 3000 {
        now += 16;
        arena.step(&idle(), now, &()).unwrap();
        arena.player_mut().health = 7;
        growls += growls_in(&arena.drain_cues());
    }
    assert_eq!(arena.boss().state, BossState::Idle);

    arena.player_mut().position = Vec2::new(840.0, 2000.0);
    now += 16;
    arena.step(&idle(), now, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Run);
    growls += growls_in(&arena.drain_cues());

    let boss_x = arena.boss().position.x;
    arena.player_mut().position = Vec2::new(boss_x + 100.0, 2000.0);
    now += 16;
    arena.step(&idle(), now, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Attack);
    growls += growls_in(&arena.drain_cues());

    assert_eq!(growls, 2);
}

#[test]
fn boss_growls_once_per_attack_entry() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.boss_mut().position = Vec2::new(540.0, 2000.0);

    arena.step(&idle(), 16, &()).unwrap();
    arena.step(&idle(), 32, &()).unwrap();
    assert_eq!(growls_in(&arena.drain_cues()), 1);
}

fn boss_mid_strike(arena: &mut Arena) {
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    arena.player_mut().state = PlayerState::Block;
    let boss = arena.boss_mut();
    boss.position = Vec2::new(540.0, 2000.0);
    boss.state = BossState::Attack;
    boss.attack_time = 0;
}

#[test]
fn block_facing_the_boss_absorbs_the_strike() {
    let mut arena = arena();
    boss_mid_strike(&mut arena);

    // 850ms into a 15 x 80ms attack is frame 10.
    let input = InputState::default().with(BLOCK).with_pointer(POINTER_LEFT);
    let report = arena.step(&input, 850, &()).unwrap();

    assert_eq!(arena.player().health, 7);
    assert_eq!(arena.player().state, PlayerState::Block);
    assert!(arena.boss().hitting);
    assert!(report.events.contains(&MatchEvent::Blocked));
    assert!(arena
        .drain_cues()
        .contains(&CueCommand::Play { cue: Cue::Block, channel: Channel::Impact, looping: false }));
}

#[test]
fn block_facing_away_still_takes_damage() {
    let mut arena = arena();
    boss_mid_strike(&mut arena);

    let input = InputState::default().with(BLOCK).with_pointer(POINTER_RIGHT);
    arena.step(&input, 850, &()).unwrap();

    assert_eq!(arena.player().health, 6);
    assert_eq!(arena.player().state, PlayerState::Hit);
    assert_eq!(arena.player().hit_time, 850);
}

#[test]
fn boss_strike_outside_damage_window_does_nothing() {
    let mut arena = arena();
    boss_mid_strike(&mut arena);
    arena.player_mut().state = PlayerState::Idle;

    // Frame 3.
    arena.step(&idle(), 300, &()).unwrap();
    assert_eq!(arena.player().health, 7);
    assert!(!arena.boss().hitting);
}

#[test]
fn boss_hit_guard_clears_after_the_damage_window() {
    let mut arena = arena();
    boss_mid_strike(&mut arena);
    arena.player_mut().state = PlayerState::Idle;

    // Frames 10, 11, 12: one landing, then the guard holds.
    for now in [850, 900, 1000] {
        arena.step(&idle(), now, &()).unwrap();
        assert!(arena.boss().hitting, "at {now}");
        assert_eq!(arena.player().health, 6, "at {now}");
    }

    // Frame 13.
    arena.step(&idle(), 1050, &()).unwrap();
    assert_eq!(arena.boss().state, BossState::Attack);
    assert!(!arena.boss().hitting);
    assert_eq!(arena.player().health, 6);
}

#[test]
fn player_facing_is_frozen_while_hit() {
    let mut arena = arena();
    {
        let p = arena.player_mut();
        p.state = PlayerState::Hit;
        p.hit_time = 0;
    }
    let look_left = InputState::default().with(MOVE_LEFT).with_pointer(POINTER_LEFT);
    for now in (0..=400).step_by(50) {
        arena.step(&look_left, now, &()).unwrap();
        assert_eq!(arena.player().state, PlayerState::Hit, "at {now}");
        assert_eq!(arena.player().facing, arena_shared::Facing::Right, "at {now}");
    }

    arena.step(&look_left, 450, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Idle);
    arena.step(&look_left, 466, &()).unwrap();
    assert_eq!(arena.player().facing, arena_shared::Facing::Left);
}

#[test]
fn diagonal_into_wall_slides_along_it() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    // Player box spans x 610..670; the wall starts just past it.
    let walls = StaticWalls::new(vec![Rect::new(672.0, 1800.0, 40.0, 400.0)]);

    let input = idle().with(MOVE_UP).with(MOVE_RIGHT);
    arena.step(&input, 16, &walls).unwrap();

    let pos = arena.player().position;
    assert_eq!(pos.x, 640.0);
    assert!(pos.y < 2000.0);
    assert_eq!(arena.player().state, PlayerState::Walk);
}

#[test]
fn running_loop_follows_run_state() {
    let mut arena = arena();
    let run = idle().with(MOVE_LEFT).with(RUN);

    arena.step(&run, 16, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Run);
    assert!(arena.player().is_running_cue_playing());
    assert_eq!(arena.player().position.x, 633.0);

    arena.step(&idle(), 32, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Idle);
    let cues = arena.drain_cues();
    assert_eq!(
        cues,
        vec![
            CueCommand::Play { cue: Cue::PlayerRun, channel: Channel::PlayerFeet, looping: true },
            CueCommand::Stop { channel: Channel::PlayerFeet },
        ]
    );
}

#[test]
fn stamina_regenerates_one_unit_per_interval() {
    let mut arena = arena();
    {
        let p = arena.player_mut();
        p.stamina = 0;
        p.stamina_time = 0;
    }

    arena.step(&idle(), 1000, &()).unwrap();
    assert_eq!(arena.player().stamina, 0);
    arena.step(&idle(), 1001, &()).unwrap();
    assert_eq!(arena.player().stamina, 1);
    arena.step(&idle(), 2001, &()).unwrap();
    assert_eq!(arena.player().stamina, 1);
    arena.step(&idle(), 2002, &()).unwrap();
    assert_eq!(arena.player().stamina, 2);
}

#[test]
fn stamina_never_exceeds_max() {
    let mut arena = arena();
    for now in (0..10_000).step_by(500) {
        arena.step(&idle(), now, &()).unwrap();
        assert_eq!(arena.player().stamina, 4);
    }
}

#[test]
fn no_stamina_means_no_attack() {
    let mut arena = arena();
    arena.player_mut().stamina = 0;
    arena.step(&idle().with(ATTACK), 16, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Idle);
}

#[test]
fn hit_recovers_after_animation_and_duration() {
    let mut arena = arena();
    {
        let p = arena.player_mut();
        p.state = PlayerState::Hit;
        p.hit_time = 0;
    }
    arena.step(&idle(), 0, &()).unwrap();
    for now in (50..=400).step_by(50) {
        arena.step(&idle().with(ATTACK), now, &()).unwrap();
        assert_eq!(arena.player().state, PlayerState::Hit, "at {now}");
    }
    arena.step(&idle(), 450, &()).unwrap();
    assert_eq!(arena.player().state, PlayerState::Idle);
}

#[test]
fn player_death_is_absorbing_and_ends_in_defeat() {
    let mut arena = arena();
    arena.player_mut().health = 0;
    let start = arena.player().position;

    let report = arena.step(&idle(), 100, &()).unwrap();
    assert_eq!(report.events, vec![MatchEvent::Died { actor: Actor::Player }]);
    assert_eq!(arena.player().state, PlayerState::Death);
    assert_eq!(arena.player().death_phase, Some(DeathPhase::Staggered));
    assert_eq!(
        arena.player().animation.current(),
        sequences::player(arena.player().facing, PlayerState::Hit)
    );

    let busy = InputState::default().with(ATTACK).with(MOVE_UP).with_pointer(POINTER_LEFT);
    let mut ended = 0;
    for now in (120..=2100).step_by(20) {
        let report = arena.step(&busy, now, &()).unwrap();
        ended += report
            .events
            .iter()
            .filter(|e| matches!(e, MatchEvent::MatchEnded { .. }))
            .count();
        assert_eq!(arena.player().state, PlayerState::Death);
        assert_eq!(arena.player().position, start);
        assert_eq!(arena.player().facing, arena_shared::Facing::Right);
    }

    assert_eq!(arena.player().death_phase, Some(DeathPhase::Finished));
    assert_eq!(arena.outcome(), Some(MatchOutcome::Defeat));
    assert_eq!(ended, 1);
}

#[test]
fn killing_the_boss_ends_in_victory() {
    let mut arena = arena();
    arena.player_mut().position = Vec2::new(640.0, 2000.0);
    {
        let boss = arena.boss_mut();
        boss.position = Vec2::new(690.0, 2000.0);
        boss.health = 1;
    }

    arena.step(&idle().with(ATTACK), 0, &()).unwrap();
    let mut died_at = None;
    for now in (20..=3000).step_by(20) {
        let report = arena.step(&idle(), now, &()).unwrap();
        if report.events.contains(&MatchEvent::Died { actor: Actor::Boss }) {
            died_at = Some(now);
        }
    }

    assert_eq!(died_at, Some(180));
    assert_eq!(arena.boss().state, BossState::Death);
    assert_eq!(arena.boss().health, 0);
    assert_eq!(arena.outcome(), Some(MatchOutcome::Victory));
    assert_eq!(arena.player().health, 7);
}
