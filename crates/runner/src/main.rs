// crates/runner/src/main.rs
//! Headless demo: runs the obstacle spawner in a scene for a fixed amount of
//! simulated time and logs what happened.
//!
//! usage: runner [config.ron] [seconds] [seed]

use std::env;

use anyhow::{Context, Result};
use engine_core::{EngineLoop, Prefab, Scene};
use engine_shared::{GameLogic, ObstacleHost};
use glam::{Vec2, Vec3};
use obstacle_spawner::{ObstacleSpawner, SpawnRng, SpawnerConfig};
use tracing::{error, info};

const FRAME_DT: f32 = 1.0 / 60.0;
const SIM_DT: f32 = 1.0 / 120.0;
const OBSTACLE_SPEED: Vec2 = Vec2::new(-5.0, 0.0);
/// Seconds between interventions, which alternate between doubling obstacle
/// speed and clearing the field.
const SPEED_UP_EVERY: f32 = 10.0;

fn main() {
    tracing_subscriber::fmt().init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => SpawnerConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => SpawnerConfig::default(),
    };
    let seconds: f32 = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("bad duration {s:?}"))?,
        None => 30.0,
    };
    let rng = match args.get(3) {
        Some(s) => SpawnRng::seed_from_u64(s.parse().with_context(|| format!("bad seed {s:?}"))?),
        None => SpawnRng::from_entropy(),
    };

    let mut scene = Scene::new();
    scene
        .layers
        .register(&config.layer)
        .context("layer table is full")?;
    scene.prefabs.register(&config.obstacle, Prefab::with_body(OBSTACLE_SPEED));
    let anchor = scene.spawn_anchor(Vec3::new(12.0, 0.0, 0.0));

    let mut spawner = ObstacleSpawner::new(&config, &scene, anchor, rng)?;
    spawner.on_load(&mut scene);

    let mut engine = EngineLoop::new(SIM_DT);
    let mut clock = 0.0;
    let mut next_speed_up = SPEED_UP_EVERY;
    let mut speed_ups = 0;
    let mut cleared = 0;

    while clock < seconds {
        engine.update_simulation(FRAME_DT, &mut scene, &mut spawner);
        clock += FRAME_DT;

        if clock >= next_speed_up {
            next_speed_up += SPEED_UP_EVERY;
            speed_ups += 1;
            if speed_ups % 2 == 0 {
                cleared += spawner.clear_obstacles(&mut scene);
            } else {
                spawner.modify_obstacle_speed(&mut scene, 2.0);
            }
        }
    }

    let alive = scene.children(anchor).len();
    info!(
        seconds,
        steps = engine.steps_run(),
        alive,
        cleared,
        state = ?spawner.state(),
        "simulation finished"
    );
    spawner.on_unload(&mut scene);
    Ok(())
}
