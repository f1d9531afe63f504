// crates/arena_combat/src/sequences.rs
//! Which sequence each (facing, state) pair plays, and the stock frame table.

use std::sync::Arc;

use arena_shared::{Facing, Millis};

use crate::animation::{AnimationLibrary, FrameId, Sequence, SequenceId};
use crate::systems::boss::BossState;
use crate::systems::player::PlayerState;

pub fn player(facing: Facing, state: PlayerState) -> SequenceId {
    use PlayerState::*;
    let id = match (state, facing) {
        (Idle, Facing::Left) => "player/idle_left",
        (Idle, Facing::Right) => "player/idle_right",
        (Walk, Facing::Left) => "player/walk_left",
        (Walk, Facing::Right) => "player/walk_right",
        (Run, Facing::Left) => "player/run_left",
        (Run, Facing::Right) => "player/run_right",
        (Attack1, Facing::Left) => "player/attack1_left",
        (Attack1, Facing::Right) => "player/attack1_right",
        (Attack2, Facing::Left) => "player/attack2_left",
        (Attack2, Facing::Right) => "player/attack2_right",
        (Attack3, Facing::Left) => "player/attack3_left",
        (Attack3, Facing::Right) => "player/attack3_right",
        (Block, Facing::Left) => "player/block_left",
        (Block, Facing::Right) => "player/block_right",
        (Hit, Facing::Left) => "player/hit_left",
        (Hit, Facing::Right) => "player/hit_right",
        (Death, Facing::Left) => "player/death_left",
        (Death, Facing::Right) => "player/death_right",
    };
    SequenceId(id)
}

pub fn boss(facing: Facing, state: BossState) -> SequenceId {
    use BossState::*;
    let id = match (state, facing) {
        (Idle, Facing::Left) => "boss/idle_left",
        (Idle, Facing::Right) => "boss/idle_right",
        (Run, Facing::Left) => "boss/run_left",
        (Run, Facing::Right) => "boss/run_right",
        (Attack, Facing::Left) => "boss/attack_left",
        (Attack, Facing::Right) => "boss/attack_right",
        (Hit, Facing::Left) => "boss/hit_left",
        (Hit, Facing::Right) => "boss/hit_right",
        (Death, Facing::Left) => "boss/death_left",
        (Death, Facing::Right) => "boss/death_right",
    };
    SequenceId(id)
}

/// Every sequence either state machine can ask for.
pub fn all() -> impl Iterator<Item = SequenceId> {
    let facings = [Facing::Left, Facing::Right];
    let players = PlayerState::ALL
        .into_iter()
        .flat_map(move |state| facings.into_iter().map(move |facing| player(facing, state)));
    let bosses = BossState::ALL
        .into_iter()
        .flat_map(move |state| facings.into_iter().map(move |facing| boss(facing, state)));
    players.chain(bosses)
}

/// (state, frame count, frame duration, looping) for the stock sprite sheets.
const PLAYER_FRAMES: [(PlayerState, u32, Millis, bool); 9] = [
    (PlayerState::Idle, 6, 100, true),
    (PlayerState::Walk, 8, 90, true),
    (PlayerState::Run, 8, 70, true),
    (PlayerState::Attack1, 6, 100, false),
    (PlayerState::Attack2, 6, 100, false),
    (PlayerState::Attack3, 6, 100, false),
    (PlayerState::Block, 4, 100, false),
    (PlayerState::Hit, 4, 100, false),
    (PlayerState::Death, 8, 150, false),
];

const BOSS_FRAMES: [(BossState, u32, Millis, bool); 5] = [
    (BossState::Idle, 6, 120, true),
    (BossState::Run, 8, 90, true),
    (BossState::Attack, 15, 80, false),
    (BossState::Hit, 3, 100, false),
    (BossState::Death, 10, 150, false),
];

/// Library matching the stock assets. Frame ids are handed out sequentially
/// in table order, left facing first.
pub fn standard_library() -> Arc<AnimationLibrary> {
    let mut library = AnimationLibrary::new();
    let mut next_frame = 0u32;
    let mut add = |id: SequenceId, count: u32, frame_duration: Millis, looping: bool| {
        let frames = (next_frame..next_frame + count).map(FrameId).collect();
        next_frame += count;
        library.insert(id, Sequence { frames, frame_duration, looping });
    };

    for (state, count, duration, looping) in PLAYER_FRAMES {
        for facing in [Facing::Left, Facing::Right] {
            add(player(facing, state), count, duration, looping);
        }
    }
    for (state, count, duration, looping) in BOSS_FRAMES {
        for facing in [Facing::Left, Facing::Right] {
            add(boss(facing, state), count, duration, looping);
        }
    }
    Arc::new(library)
}
