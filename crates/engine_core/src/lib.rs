// crates/engine_core/src/lib.rs
//! Headless engine: scene storage, the `ObstacleHost` implementation, and a
//! fixed-timestep loop that drives gameplay logic.

pub mod engine_loop;
pub mod host;
pub mod layers;
pub mod physics;
pub mod prefab;
pub mod scene;

pub use engine_loop::EngineLoop;
pub use layers::LayerRegistry;
pub use prefab::{Prefab, PrefabLibrary};
pub use scene::{Scene, DEFAULT_LAYER};
