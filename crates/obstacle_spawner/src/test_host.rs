// crates/obstacle_spawner/src/test_host.rs
//! In-memory `ObstacleHost` for unit tests.

use engine_shared::{LayerId, ObstacleHost, PrefabId};
use glam::{Quat, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct Object {
    pub parent: Option<u32>,
    pub position: Vec3,
    pub scale: Vec3,
    pub layer: LayerId,
    pub velocity: Option<Vec2>,
}

pub struct TestHost {
    objects: Vec<Option<Object>>,
    // Bodies whose velocity can be read but not written.
    locked_bodies: Vec<u32>,
    pub anchor: u32,
}

impl TestHost {
    pub const DEFAULT_LAYER: LayerId = LayerId(0);
    pub const OBSTACLE_LAYER: LayerId = LayerId(8);
    /// Moving obstacle with a rigid body.
    pub const OBSTACLE_PREFAB: PrefabId = PrefabId(0);
    /// Static obstacle without one.
    pub const WALL_PREFAB: PrefabId = PrefabId(1);
    pub const START_VELOCITY: Vec2 = Vec2::new(-5.0, 1.0);

    pub fn new() -> Self {
        let mut host = Self { objects: Vec::new(), locked_bodies: Vec::new(), anchor: 0 };
        host.anchor = host.add(None, Vec3::ZERO, Self::DEFAULT_LAYER, None);
        host
    }

    pub fn add(
        &mut self,
        parent: Option<u32>,
        position: Vec3,
        layer: LayerId,
        velocity: Option<Vec2>,
    ) -> u32 {
        self.objects.push(Some(Object {
            parent,
            position,
            scale: Vec3::ONE,
            layer,
            velocity,
        }));
        (self.objects.len() - 1) as u32
    }

    pub fn get(&self, handle: u32) -> Option<&Object> {
        self.objects.get(handle as usize)?.as_ref()
    }

    fn get_mut(&mut self, handle: u32) -> Option<&mut Object> {
        self.objects.get_mut(handle as usize)?.as_mut()
    }

    pub fn lock_body(&mut self, handle: u32) {
        self.locked_bodies.push(handle);
    }

    pub fn is_alive(&self, handle: u32) -> bool {
        self.get(handle).is_some()
    }
}

impl ObstacleHost for TestHost {
    type Handle = u32;

    fn resolve_layer(&self, name: &str) -> Option<LayerId> {
        match name {
            "Default" => Some(Self::DEFAULT_LAYER),
            "Obstacles" => Some(Self::OBSTACLE_LAYER),
            _ => None,
        }
    }

    fn resolve_prefab(&self, name: &str) -> Option<PrefabId> {
        match name {
            "obstacle" => Some(Self::OBSTACLE_PREFAB),
            "wall" => Some(Self::WALL_PREFAB),
            _ => None,
        }
    }

    fn instantiate(&mut self, template: PrefabId, position: Vec3, _rotation: Quat, parent: u32) -> Option<u32> {
        let velocity = match template {
            Self::OBSTACLE_PREFAB => Some(Self::START_VELOCITY),
            Self::WALL_PREFAB => None,
            _ => return None,
        };
        if !self.is_alive(parent) {
            return None;
        }
        Some(self.add(Some(parent), position, Self::DEFAULT_LAYER, velocity))
    }

    fn set_position(&mut self, handle: u32, position: Vec3) {
        if let Some(o) = self.get_mut(handle) {
            o.position = position;
        }
    }

    fn set_scale(&mut self, handle: u32, scale: Vec3) {
        if let Some(o) = self.get_mut(handle) {
            o.scale = scale;
        }
    }

    fn set_layer(&mut self, handle: u32, layer: LayerId) {
        if let Some(o) = self.get_mut(handle) {
            o.layer = layer;
        }
    }

    fn destroy(&mut self, handle: u32) {
        for child in self.children(handle) {
            self.destroy(child);
        }
        if let Some(slot) = self.objects.get_mut(handle as usize) {
            *slot = None;
        }
    }

    fn children(&self, anchor: u32) -> Vec<u32> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().filter(|o| o.parent == Some(anchor)).map(|_| i as u32))
            .collect()
    }

    fn layer(&self, handle: u32) -> Option<LayerId> {
        self.get(handle).map(|o| o.layer)
    }

    fn position(&self, handle: u32) -> Option<Vec3> {
        self.get(handle).map(|o| o.position)
    }

    fn velocity(&self, handle: u32) -> Option<Vec2> {
        self.get(handle)?.velocity
    }

    fn set_velocity(&mut self, handle: u32, velocity: Vec2) -> bool {
        if self.locked_bodies.contains(&handle) {
            return false;
        }
        match self.get_mut(handle).and_then(|o| o.velocity.as_mut()) {
            Some(v) => {
                *v = velocity;
                true
            }
            None => false,
        }
    }
}
