// crates/obstacle_spawner/src/timer.rs
//! When to spawn.

use tracing::debug;

use crate::rng::SpawnRng;
use crate::state::SpawnerState;

/// What the timer decided when it fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEvent {
    pub size: f32,
    pub spawn_down: bool,
}

#[derive(Clone, Debug)]
pub struct SpawnTimer {
    mean: f32,
    std: f32,
    size_min: f32,
    size_max: f32,
    state: SpawnerState,
}

impl SpawnTimer {
    /// Builds a timer with a freshly sampled first interval.
    pub fn new(mean: f32, std: f32, size_min: f32, size_max: f32, rng: &mut SpawnRng) -> Self {
        let mut timer = Self {
            mean,
            std,
            size_min,
            size_max,
            state: SpawnerState { elapsed: 0.0, next_spawn_in: mean },
        };
        timer.reset(rng);
        timer
    }

    pub fn reset(&mut self, rng: &mut SpawnRng) {
        self.state = SpawnerState {
            elapsed: 0.0,
            next_spawn_in: rng.random_normal(self.mean, self.std),
        };
    }

    /// Advances the clock by `dt` and fires at most once.
    ///
    /// The consumed interval is subtracted rather than zeroing the
    /// accumulator, so overshoot carries into the next interval.
    pub fn tick(&mut self, dt: f32, rng: &mut SpawnRng) -> Option<SpawnEvent> {
        self.state.elapsed += dt;
        if self.state.elapsed < self.state.next_spawn_in {
            return None;
        }

        self.state.elapsed -= self.state.next_spawn_in;
        self.state.next_spawn_in = rng.random_normal(self.mean, self.std);

        let event = SpawnEvent {
            size: rng.range(self.size_min, self.size_max),
            spawn_down: rng.random_bool(),
        };
        debug!(
            size = event.size,
            spawn_down = event.spawn_down,
            next_in = self.state.next_spawn_in,
            "spawn timer fired"
        );
        Some(event)
    }

    pub fn state(&self) -> SpawnerState {
        self.state
    }

    pub fn restore(&mut self, state: SpawnerState) {
        self.state = state;
    }
}
