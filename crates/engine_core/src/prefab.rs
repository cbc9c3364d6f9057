// crates/engine_core/src/prefab.rs
use std::collections::HashMap;

use engine_shared::{CSprite, CVelocity, PrefabId};
use glam::Vec3;

/// A template the scene can stamp out copies of.
#[derive(Clone, Debug)]
pub struct Prefab {
    pub sprite: CSprite,
    pub scale: Vec3,
    /// Rigid body attached on instantiation. Prefabs without one are static.
    pub body: Option<CVelocity>,
}

impl Prefab {
    pub fn with_body(velocity: glam::Vec2) -> Self {
        Self {
            sprite: CSprite::default(),
            scale: Vec3::ONE,
            body: Some(CVelocity { linear: velocity }),
        }
    }

    pub fn static_body() -> Self {
        Self { sprite: CSprite::default(), scale: Vec3::ONE, body: None }
    }
}

impl Default for Prefab {
    fn default() -> Self {
        Self::static_body()
    }
}

#[derive(Default, Debug)]
pub struct PrefabLibrary {
    prefabs: Vec<Prefab>,
    by_name: HashMap<String, PrefabId>,
}

impl PrefabLibrary {
    /// Registers a prefab under `name`, replacing any previous one with that name.
    pub fn register(&mut self, name: &str, prefab: Prefab) -> PrefabId {
        if let Some(&id) = self.by_name.get(name) {
            self.prefabs[id.0 as usize] = prefab;
            return id;
        }
        let id = PrefabId(self.prefabs.len() as u32);
        self.prefabs.push(prefab);
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: PrefabId) -> Option<&Prefab> {
        self.prefabs.get(id.0 as usize)
    }

    pub fn get_id(&self, name: &str) -> Option<PrefabId> {
        self.by_name.get(name).copied()
    }
}
