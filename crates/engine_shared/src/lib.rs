// crates/engine_shared/src/lib.rs

pub mod components;
pub mod host_api;
pub mod ids;

pub use components::{CLayer, CParent, CSprite, CTransform, CVelocity};
pub use host_api::{GameLogic, ObstacleHost};
pub use ids::{LayerId, PrefabId, MAX_LAYERS};
