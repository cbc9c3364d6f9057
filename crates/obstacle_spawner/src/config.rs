// crates/obstacle_spawner/src/config.rs
use std::fs;
use std::path::Path;

use engine_shared::{LayerId, ObstacleHost, PrefabId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpawnerError};

/// Spawner configuration as authored (RON on disk).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub enabled: bool,
    /// Mean of the normal distribution the spawn interval is drawn from.
    pub mean_frequency: f32,
    pub std_frequency: f32,
    /// Offset from the spawner to a unit-size obstacle spawned downward.
    pub offset: Vec3,
    pub size_min: f32,
    pub size_max: f32,
    /// Layer name obstacles are tagged with.
    pub layer: String,
    /// Prefab name obstacles are instantiated from.
    pub obstacle: String,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mean_frequency: 2.0,
            std_frequency: 0.5,
            offset: Vec3::new(0.0, -4.0, 0.0),
            size_min: 0.25,
            size_max: 1.0,
            layer: "Obstacles".to_string(),
            obstacle: "obstacle".to_string(),
        }
    }
}

impl SpawnerConfig {
    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    /// Checks the numeric ranges and resolves names against the host.
    pub fn resolve<H: ObstacleHost>(&self, host: &H) -> Result<SpawnerSettings> {
        let invalid = |msg: String| Err(SpawnerError::InvalidConfig(msg));

        if !self.mean_frequency.is_finite() {
            return invalid(format!("mean_frequency must be finite, got {}", self.mean_frequency));
        }
        if !self.std_frequency.is_finite() || self.std_frequency < 0.0 {
            return invalid(format!(
                "std_frequency must be finite and >= 0, got {}",
                self.std_frequency
            ));
        }
        if !self.offset.is_finite() {
            return invalid(format!("offset must be finite, got {}", self.offset));
        }
        if !(self.size_min.is_finite() && self.size_min > 0.0) {
            return invalid(format!("size_min must be > 0, got {}", self.size_min));
        }
        if !self.size_max.is_finite() || self.size_min > self.size_max {
            return invalid(format!(
                "size range is empty: [{}, {}]",
                self.size_min, self.size_max
            ));
        }

        let Some(layer) = host.resolve_layer(&self.layer) else {
            return invalid(format!("unknown layer {:?}", self.layer));
        };
        let Some(template) = host.resolve_prefab(&self.obstacle) else {
            return invalid(format!("unknown obstacle prefab {:?}", self.obstacle));
        };

        Ok(SpawnerSettings {
            enabled: self.enabled,
            mean_frequency: self.mean_frequency,
            std_frequency: self.std_frequency,
            offset: self.offset,
            size_min: self.size_min,
            size_max: self.size_max,
            layer,
            template,
        })
    }
}

/// Validated configuration with names resolved to host ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnerSettings {
    pub enabled: bool,
    pub mean_frequency: f32,
    pub std_frequency: f32,
    pub offset: Vec3,
    pub size_min: f32,
    pub size_max: f32,
    pub layer: LayerId,
    pub template: PrefabId,
}
