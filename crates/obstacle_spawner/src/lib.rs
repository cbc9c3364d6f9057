// crates/obstacle_spawner/src/lib.rs
//! Randomised obstacle spawning on top of an `ObstacleHost`.
//!
//! `SpawnTimer` decides when, `ObstaclePlacer` decides where and how many,
//! and `ObstacleSpawner` ties both to a host and an anchor object.

pub mod config;
pub mod error;
pub mod placer;
pub mod registry;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod timer;

#[cfg(test)]
mod test_host;

pub use config::{SpawnerConfig, SpawnerSettings};
pub use error::SpawnerError;
pub use placer::{ObstaclePlacer, Placement, PlacementRequest};
pub use registry::SpeedReport;
pub use rng::SpawnRng;
pub use spawner::ObstacleSpawner;
pub use state::SpawnerState;
pub use timer::{SpawnEvent, SpawnTimer};
