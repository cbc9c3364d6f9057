// crates/engine_core/src/host.rs
//! `ObstacleHost` for the headless scene.

use engine_ecs::Entity;
use engine_shared::{CLayer, CParent, CTransform, CVelocity, LayerId, ObstacleHost, PrefabId};
use glam::{Quat, Vec2, Vec3};
use tracing::{debug, warn};

use crate::scene::Scene;

impl ObstacleHost for Scene {
    type Handle = Entity;

    fn resolve_layer(&self, name: &str) -> Option<LayerId> {
        self.layers.get_id(name)
    }

    fn resolve_prefab(&self, name: &str) -> Option<PrefabId> {
        self.prefabs.get_id(name)
    }

    fn instantiate(
        &mut self,
        template: PrefabId,
        position: Vec3,
        rotation: Quat,
        parent: Entity,
    ) -> Option<Entity> {
        let Some(prefab) = self.prefabs.get(template).cloned() else {
            warn!(?template, "instantiate: unknown prefab");
            return None;
        };
        if !self.world.is_alive(parent) {
            warn!(%parent, "instantiate: parent is gone");
            return None;
        }

        let layer = self.default_layer();
        let entity = self.world.spawn();
        self.world.add_component(
            entity,
            CTransform {
                pos: position,
                scale: prefab.scale,
                rotation,
            },
        );
        self.world.add_component(entity, prefab.sprite);
        self.world.add_component(entity, CLayer(layer));
        self.world.add_component(entity, CParent(parent));
        if let Some(body) = prefab.body {
            self.world.add_component(entity, body);
        }

        debug!(%entity, %parent, ?position, "instantiated prefab {}", template.0);
        Some(entity)
    }

    fn set_position(&mut self, handle: Entity, position: Vec3) {
        if let Some(transform) = self.world.get_component_mut::<CTransform>(handle) {
            transform.pos = position;
        }
    }

    fn set_scale(&mut self, handle: Entity, scale: Vec3) {
        if let Some(transform) = self.world.get_component_mut::<CTransform>(handle) {
            transform.scale = scale;
        }
    }

    fn set_layer(&mut self, handle: Entity, layer: LayerId) {
        if self.world.is_alive(handle) {
            self.world.add_component(handle, CLayer(layer));
        }
    }

    fn destroy(&mut self, handle: Entity) {
        self.despawn_recursive(handle);
    }

    fn children(&self, anchor: Entity) -> Vec<Entity> {
        self.children_of(anchor)
    }

    fn layer(&self, handle: Entity) -> Option<LayerId> {
        self.world.get_component::<CLayer>(handle).map(|l| l.0)
    }

    fn position(&self, handle: Entity) -> Option<Vec3> {
        self.world.get_component::<CTransform>(handle).map(|t| t.pos)
    }

    fn velocity(&self, handle: Entity) -> Option<Vec2> {
        self.world.get_component::<CVelocity>(handle).map(|v| v.linear)
    }

    fn set_velocity(&mut self, handle: Entity, velocity: Vec2) -> bool {
        match self.world.get_component_mut::<CVelocity>(handle) {
            Some(body) => {
                body.linear = velocity;
                true
            }
            None => false,
        }
    }
}
