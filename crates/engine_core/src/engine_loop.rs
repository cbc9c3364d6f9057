// crates/engine_core/src/engine_loop.rs

use engine_shared::GameLogic;
use tracing::warn;

use crate::physics;
use crate::scene::Scene;

/// Encapsulates fixed-timestep simulation bookkeeping (accumulator, limits).
/// The caller feeds it frame deltas; it runs game logic and physics in
/// `sim_dt` sized steps.
pub struct EngineLoop {
    sim_accumulator: f32,
    sim_dt: f32,
    max_steps_per_frame: u32,
    steps_run: u64,
}

impl EngineLoop {
    pub fn new(sim_dt: f32) -> Self {
        Self {
            sim_accumulator: 0.0,
            sim_dt,
            max_steps_per_frame: 5,
            steps_run: 0,
        }
    }

    pub fn sim_dt(&self) -> f32 {
        self.sim_dt
    }

    pub fn steps_run(&self) -> u64 {
        self.steps_run
    }

    /// Runs fixed-timestep simulation steps until the accumulator is caught up
    /// or we hit max_steps_per_frame. If the backlog still remains at the cap,
    /// we drop it, to avoid "chasing" an infinite backlog under heavy load.
    /// Returns the number of steps taken.
    pub fn update_simulation(
        &mut self,
        frame_dt: f32,
        scene: &mut Scene,
        logic: &mut dyn GameLogic<Scene>,
    ) -> u32 {
        // Clamp to 0.25s to avoid giant spikes after stalls.
        self.sim_accumulator += frame_dt.clamp(0.0, 0.25);

        let mut steps = 0;
        while self.sim_accumulator >= self.sim_dt && steps < self.max_steps_per_frame {
            logic.update(scene, self.sim_dt);
            physics::integrate_velocities(&mut scene.world, self.sim_dt);
            self.sim_accumulator -= self.sim_dt;
            steps += 1;
        }
        self.steps_run += u64::from(steps);

        // Prevent unbounded backlog if we're constantly saturated.
        if steps == self.max_steps_per_frame && self.sim_accumulator >= self.sim_dt {
            warn!(backlog = self.sim_accumulator, "simulation saturated, dropping backlog");
            self.sim_accumulator = 0.0;
        }
        steps
    }
}
