// crates/obstacle_spawner/src/spawner.rs

use engine_shared::{GameLogic, ObstacleHost};
use glam::{Quat, Vec3};
use tracing::{debug, info, warn};

use crate::config::{SpawnerConfig, SpawnerSettings};
use crate::error::Result;
use crate::placer::{ObstaclePlacer, PlacementRequest};
use crate::registry::{self, SpeedReport};
use crate::rng::SpawnRng;
use crate::state::SpawnerState;
use crate::timer::SpawnTimer;

/// Spawns obstacle clusters under `anchor` on a randomised schedule.
pub struct ObstacleSpawner<H: ObstacleHost> {
    settings: SpawnerSettings,
    timer: SpawnTimer,
    placer: ObstaclePlacer,
    rng: SpawnRng,
    anchor: H::Handle,
}

impl<H: ObstacleHost> ObstacleSpawner<H> {
    /// Validates `config` against `host` and builds a ready-to-run spawner.
    pub fn new(config: &SpawnerConfig, host: &H, anchor: H::Handle, mut rng: SpawnRng) -> Result<Self> {
        let settings = config.resolve(host)?;
        let timer = SpawnTimer::new(
            settings.mean_frequency,
            settings.std_frequency,
            settings.size_min,
            settings.size_max,
            &mut rng,
        );

        Ok(Self {
            placer: ObstaclePlacer::new(settings.offset),
            settings,
            timer,
            rng,
            anchor,
        })
    }

    pub fn settings(&self) -> &SpawnerSettings {
        &self.settings
    }

    pub fn anchor(&self) -> H::Handle {
        self.anchor
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// A disabled spawner keeps its timer frozen.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    pub fn initialize(&mut self) {
        self.reset_spawn();
    }

    /// Advances the spawn clock and spawns at the anchor when it fires.
    /// Returns the obstacles created this frame.
    pub fn update(&mut self, host: &mut H, dt: f32) -> Vec<H::Handle> {
        if !self.settings.enabled {
            return Vec::new();
        }
        let Some(event) = self.timer.tick(dt, &mut self.rng) else {
            return Vec::new();
        };
        let Some(origin) = host.position(self.anchor) else {
            warn!(anchor = ?self.anchor, "spawner anchor is gone, dropping spawn");
            return Vec::new();
        };
        self.spawn_obstacle(host, origin, event.size, event.spawn_down, 0)
    }

    /// Plans a cluster for one obstacle of `size` at `position` and creates it.
    pub fn spawn_obstacle(
        &mut self,
        host: &mut H,
        position: Vec3,
        size: f32,
        spawn_down: bool,
        depth: u32,
    ) -> Vec<H::Handle> {
        let plan = self.placer.plan(
            PlacementRequest { origin: position, size, spawn_down, depth },
            &mut self.rng,
        );
        debug!(count = plan.len(), size, spawn_down, "placing obstacle cluster");

        let mut spawned = Vec::with_capacity(plan.len());
        for placement in plan {
            let Some(obstacle) = host.instantiate(
                self.settings.template,
                placement.position,
                Quat::IDENTITY,
                self.anchor,
            ) else {
                warn!(template = ?self.settings.template, "host refused to instantiate obstacle");
                continue;
            };
            host.set_position(obstacle, placement.position);
            host.set_scale(obstacle, Vec3::splat(placement.size));
            host.set_layer(obstacle, self.settings.layer);
            spawned.push(obstacle);
        }
        spawned
    }

    pub fn clear_obstacles(&self, host: &mut H) -> usize {
        registry::clear_all(host, self.anchor, self.settings.layer)
    }

    pub fn reset_spawn(&mut self) {
        self.timer.reset(&mut self.rng);
        info!(next_spawn_in = self.timer.state().next_spawn_in, "spawn timer reset");
    }

    pub fn modify_obstacle_speed(&self, host: &mut H, multiplier: f32) -> SpeedReport {
        let report = registry::modify_speed(host, self.anchor, self.settings.layer, multiplier);
        info!(multiplier, scaled = report.scaled, skipped = report.skipped, "obstacle speed changed");
        report
    }

    pub fn state(&self) -> SpawnerState {
        self.timer.state()
    }

    pub fn snapshot_state(&self) -> Result<Vec<u8>> {
        self.timer.state().to_bytes()
    }

    /// Resumes from a snapshot taken with `snapshot_state`.
    pub fn restore_state(&mut self, bytes: &[u8]) -> Result<()> {
        let state = SpawnerState::from_bytes(bytes)?;
        self.timer.restore(state);
        Ok(())
    }
}

impl<H: ObstacleHost> GameLogic<H> for ObstacleSpawner<H> {
    fn on_load(&mut self, _host: &mut H) {
        self.initialize();
    }

    fn update(&mut self, host: &mut H, dt: f32) {
        ObstacleSpawner::update(self, host, dt);
    }

    fn on_unload(&mut self, host: &mut H) {
        self.clear_obstacles(host);
    }
}
