// crates/arena_host/src/engine_loop.rs

use arena_combat::{Arena, StepReport};
use arena_shared::{CollisionOracle, InputState, Millis};

/// Longest frame the loop will account for. Anything beyond (a breakpoint,
/// a stalled host) is dropped instead of simulated.
const MAX_FRAME_DT: f32 = 0.25;

/// Encapsulates fixed-timestep simulation bookkeeping (time, accumulator, limits).
///
/// Simulation time is derived from the number of steps taken, so the clock
/// handed to the arena never drifts from the tick rate.
#[derive(Debug, Clone)]
pub struct EngineLoop {
    sim_accumulator: f32,
    sim_dt: f32,
    sim_hz: u32,
    max_steps_per_frame: u32,
    steps_taken: u64,
}

impl EngineLoop {
    pub fn new(sim_hz: u32, max_steps_per_frame: u32) -> Self {
        let sim_hz = sim_hz.max(1);
        Self {
            sim_accumulator: 0.0,
            sim_dt: 1.0 / sim_hz as f32,
            sim_hz,
            max_steps_per_frame: max_steps_per_frame.max(1),
            steps_taken: 0,
        }
    }

    /// Clamps a raw frame delta (seconds).
    pub fn clamp_frame_dt(frame_dt: f32) -> f32 {
        frame_dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Simulation clock for the next step.
    pub fn sim_now(&self) -> Millis {
        self.steps_taken * 1000 / self.sim_hz as u64
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Runs fixed-timestep simulation steps until the accumulator is caught up
    /// or we hit max_steps_per_frame. If the backlog still remains at the cap,
    /// we drop it, to avoid "chasing" an infinite backlog under heavy load.
    pub fn update_simulation(
        &mut self,
        frame_dt: f32,
        arena: &mut Arena,
        input: &InputState,
        walls: &dyn CollisionOracle,
    ) -> arena_combat::Result<Vec<StepReport>> {
        self.sim_accumulator += Self::clamp_frame_dt(frame_dt);

        let mut reports = Vec::new();
        let mut steps = 0;
        while self.sim_accumulator >= self.sim_dt && steps < self.max_steps_per_frame {
            reports.push(arena.step(input, self.sim_now(), walls)?);
            self.steps_taken += 1;
            self.sim_accumulator -= self.sim_dt;
            steps += 1;
        }

        // Prevent unbounded backlog if we're constantly saturated.
        if steps == self.max_steps_per_frame && self.sim_accumulator >= self.sim_dt {
            self.sim_accumulator = 0.0;
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_combat::{sequences, CombatConfig};

    fn arena() -> Arena {
        Arena::new(CombatConfig::default(), sequences::standard_library()).unwrap()
    }

    #[test]
    fn steps_follow_the_accumulator() {
        let mut engine = EngineLoop::new(50, 5);
        let mut arena = arena();
        let input = InputState::default();

        assert_eq!(engine.update_simulation(0.01, &mut arena, &input, &()).unwrap().len(), 0);
        assert_eq!(engine.update_simulation(0.011, &mut arena, &input, &()).unwrap().len(), 1);
        assert_eq!(engine.update_simulation(0.045, &mut arena, &input, &()).unwrap().len(), 2);
        assert_eq!(engine.steps_taken(), 3);
        assert_eq!(engine.sim_now(), 60);
        assert_eq!(arena.ticks(), 3);
    }

    #[test]
    fn backlog_beyond_the_cap_is_dropped() {
        let mut engine = EngineLoop::new(60, 5);
        let mut arena = arena();
        let input = InputState::default();

        // 0.25s would be 15 steps; only 5 run and the rest is discarded.
        assert_eq!(engine.update_simulation(10.0, &mut arena, &input, &()).unwrap().len(), 5);
        assert_eq!(engine.update_simulation(0.0, &mut arena, &input, &()).unwrap().len(), 0);
        assert_eq!(engine.sim_now(), 83);
    }

    #[test]
    fn clock_is_derived_from_step_count() {
        let mut engine = EngineLoop::new(60, 5);
        let mut arena = arena();
        let input = InputState::default();
        for _ in 0..60 {
            engine.update_simulation(1.0 / 60.0, &mut arena, &input, &()).unwrap();
        }
        let steps = engine.steps_taken();
        assert!((59..=60).contains(&steps));
        assert_eq!(engine.sim_now(), steps * 1000 / 60);
    }
}
